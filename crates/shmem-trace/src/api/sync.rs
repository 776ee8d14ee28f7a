// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Synchronization and query wrappers. None of these move data; they are
//! traced for their timing alone.

use shmem_runtime::types::c_int;

use crate::event::Volume;
use crate::wrap::wrap_call;

wrap_call! {
    fn shmem_barrier_all(),
    pe: -1, volume: Volume::NONE
}

wrap_call! {
    fn shmem_fence(),
    pe: -1, volume: Volume::NONE
}

wrap_call! {
    fn shmem_quiet(),
    pe: -1, volume: Volume::NONE
}

wrap_call! {
    fn shmem_my_pe() -> c_int,
    pe: -1, volume: Volume::NONE
}

wrap_call! {
    fn shmem_n_pes() -> c_int,
    pe: -1, volume: Volume::NONE
}
