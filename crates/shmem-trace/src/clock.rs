// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Monotonic clock for timestamps and durations.
//!
//! Seconds since a process-local epoch anchored on first use. Immune to
//! wall-clock adjustment; valid for ordering and durations within one
//! process only.

use std::sync::LazyLock;
use std::time::Instant;

static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

pub fn now() -> f64 {
    EPOCH.elapsed().as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_monotonic() {
        let a = now();
        let b = now();
        let c = now();
        assert!(a <= b && b <= c);
        assert!(a >= 0.0);
    }
}
