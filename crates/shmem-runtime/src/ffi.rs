// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! `extern "C"` prototypes of a real OpenSHMEM library's profiling (PSHMEM)
//! interface, expanded from the shared signature matrix. Active only with the
//! `link-real` feature; the final link must supply the library.

use crate::prims::*;
use crate::types::*;

crate::standard_rma_types!(rma_prims, decl);
crate::extended_amo_types!(extended_amo_prims, decl);
crate::standard_amo_types!(standard_amo_prims, decl);
crate::bitwise_amo_types!(bitwise_amo_prims, decl);
crate::to_all_bitwise_types!(to_all_bitwise_prims, decl);
crate::to_all_minmax_types!(to_all_minmax_prims, decl);
crate::to_all_arith_types!(to_all_arith_prims, decl);
crate::reduce_bitwise_types!(reduce_bitwise_prims, decl);
crate::reduce_minmax_types!(reduce_minmax_prims, decl);
crate::reduce_arith_types!(reduce_arith_prims, decl);

extern "C" {
    pub fn pshmem_init();
    pub fn pshmem_finalize();
    pub fn pshmem_barrier_all();
    pub fn pshmem_fence();
    pub fn pshmem_quiet();
    pub fn pshmem_my_pe() -> c_int;
    pub fn pshmem_n_pes() -> c_int;
    pub fn pshmem_broadcast64(
        dest: *mut c_void,
        source: *const c_void,
        nelems: usize,
        pe_root: c_int,
        pe_start: c_int,
        log_pe_stride: c_int,
        pe_size: c_int,
        p_sync: *mut c_long,
    ) -> c_int;
    pub fn pshmem_malloc(size: usize) -> *mut c_void;
    pub fn pshmem_free(ptr: *mut c_void);
}
