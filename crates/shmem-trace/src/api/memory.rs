// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Symmetric-heap allocation wrappers. An allocation records the requested
//! size as bytes received (made addressable to the caller); a free moves
//! nothing.

use shmem_runtime::types::c_void;

use crate::event::Volume;
use crate::wrap::wrap_call;

wrap_call! {
    fn shmem_malloc(size: usize) -> *mut c_void,
    pe: -1, volume: Volume::received(size)
}

wrap_call! {
    fn shmem_free(ptr: *mut c_void),
    pe: -1, volume: Volume::NONE
}
