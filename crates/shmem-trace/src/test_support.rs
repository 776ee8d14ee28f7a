// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Process-global state reset for serial test harnesses. Not part of the
//! interposition surface.

/// Return the sink, the cached identity, and (when built against it) the
/// loopback runtime to their pristine pre-init state.
pub fn reset() {
    crate::sink::reset_for_tests();
    crate::context::set_current_pe(crate::context::UNKNOWN_PE);
    #[cfg(not(feature = "link-real"))]
    shmem_runtime::loopback::reset();
}
