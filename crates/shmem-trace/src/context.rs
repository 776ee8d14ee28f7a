// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Process identity and host metadata.

use std::sync::atomic::{AtomicI32, Ordering};

/// Rank sentinel before `shmem_init` has resolved the identity.
pub const UNKNOWN_PE: i32 = -1;

static CURRENT_PE: AtomicI32 = AtomicI32::new(UNKNOWN_PE);

/// This process's rank within the job, or [`UNKNOWN_PE`] before init.
pub fn current_pe() -> i32 {
    CURRENT_PE.load(Ordering::Relaxed)
}

pub(crate) fn set_current_pe(pe: i32) {
    CURRENT_PE.store(pe, Ordering::Relaxed);
}

/// Best-effort hostname; `None` on any lookup or encoding failure.
pub(crate) fn hostname() -> Option<String> {
    hostname::get().ok()?.into_string().ok()
}

fn image_anchor() {}

/// Address of a function in this image, recorded at init so offline tooling
/// can rebase raw stack addresses across processes loaded at different
/// addresses.
pub(crate) fn load_anchor_addr() -> usize {
    let anchor: fn() = image_anchor;
    anchor as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_is_nonzero() {
        assert_ne!(load_anchor_addr(), 0);
    }
}
