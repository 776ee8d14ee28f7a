// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Init and finalize, special-cased because they establish and tear down
//! the trace sink itself rather than only passing through it.

use tracing::warn;

use crate::clock;
use crate::context;
use crate::event::TraceEvent;
use crate::sink;

#[cfg_attr(feature = "interpose", no_mangle)]
#[allow(clippy::missing_safety_doc)]
pub unsafe extern "C" fn shmem_init() {
    let start = clock::now();
    shmem_runtime::raw::pshmem_init();
    let duration = clock::now() - start;

    let pe = shmem_runtime::raw::pshmem_my_pe();
    if pe < 0 {
        context::set_current_pe(context::UNKNOWN_PE);
        warn!("rank unresolved after init; trace recording stays disabled");
        return;
    }
    context::set_current_pe(pe);

    sink::open_fresh(pe);
    sink::record(&TraceEvent::lifecycle(
        "shmem_init",
        start,
        duration,
        init_metadata(),
    ));
}

#[cfg_attr(feature = "interpose", no_mangle)]
#[allow(clippy::missing_safety_doc)]
pub unsafe extern "C" fn shmem_finalize() {
    let start = clock::now();
    shmem_runtime::raw::pshmem_finalize();
    let duration = clock::now() - start;

    sink::record(&TraceEvent::lifecycle(
        "shmem_finalize",
        start,
        duration,
        None,
    ));
    sink::close();
}

// Host name and image base, so raw stack addresses from different processes
// can be rebased and symbolized offline. Either part may be absent; a
// failure here must never abort initialization.
fn init_metadata() -> Option<String> {
    let mut parts = Vec::new();
    if let Some(host) = context::hostname() {
        parts.push(format!("host={host}"));
    }
    parts.push(format!("base={:#x}", context::load_anchor_addr()));
    Some(parts.join(" "))
}
