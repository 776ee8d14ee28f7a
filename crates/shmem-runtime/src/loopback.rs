// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Single-image loopback runtime.
//!
//! Provides every `pshmem_*` primitive over local process memory so the
//! interception layer can be linked and exercised without an OpenSHMEM
//! installation. Data-movement primitives copy between the caller's own
//! buffers, atomics perform the read-modify-write in place, and collectives
//! degenerate to the identity a one-image job implies. The simulated
//! identity defaults to PE 0 of 1 and can be adjusted before `pshmem_init`
//! so a harness can exercise root and non-root collective paths.

#![allow(clippy::missing_safety_doc)]

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use crate::prims::*;
use crate::types::*;

static CONFIGURED_PE: AtomicI32 = AtomicI32::new(0);
static CONFIGURED_NPES: AtomicI32 = AtomicI32::new(1);
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Set the identity the next `pshmem_init` will adopt. Harness knob; has no
/// counterpart in a real runtime.
pub fn configure(pe: c_int, npes: c_int) {
    CONFIGURED_PE.store(pe, Ordering::Relaxed);
    CONFIGURED_NPES.store(npes, Ordering::Relaxed);
}

/// Restore the pristine pre-init state (PE 0 of 1, uninitialized).
pub fn reset() {
    configure(0, 1);
    INITIALIZED.store(false, Ordering::Relaxed);
}

crate::standard_rma_types!(rma_prims, body);
crate::extended_amo_types!(extended_amo_prims, body);
crate::standard_amo_types!(standard_amo_prims, body);
crate::bitwise_amo_types!(bitwise_amo_prims, body);
crate::to_all_bitwise_types!(to_all_bitwise_prims, body);
crate::to_all_minmax_types!(to_all_minmax_prims, body);
crate::to_all_arith_types!(to_all_arith_prims, body);
crate::reduce_bitwise_types!(reduce_bitwise_prims, body);
crate::reduce_minmax_types!(reduce_minmax_prims, body);
crate::reduce_arith_types!(reduce_arith_prims, body);

pub unsafe extern "C" fn pshmem_init() {
    INITIALIZED.store(true, Ordering::Relaxed);
}

pub unsafe extern "C" fn pshmem_finalize() {
    INITIALIZED.store(false, Ordering::Relaxed);
}

pub unsafe extern "C" fn pshmem_barrier_all() {}

pub unsafe extern "C" fn pshmem_fence() {}

pub unsafe extern "C" fn pshmem_quiet() {}

pub unsafe extern "C" fn pshmem_my_pe() -> c_int {
    if INITIALIZED.load(Ordering::Relaxed) {
        CONFIGURED_PE.load(Ordering::Relaxed)
    } else {
        -1
    }
}

pub unsafe extern "C" fn pshmem_n_pes() -> c_int {
    if INITIALIZED.load(Ordering::Relaxed) {
        CONFIGURED_NPES.load(Ordering::Relaxed)
    } else {
        -1
    }
}

pub unsafe extern "C" fn pshmem_broadcast64(
    dest: *mut c_void,
    source: *const c_void,
    nelems: usize,
    _pe_root: c_int,
    _pe_start: c_int,
    _log_pe_stride: c_int,
    _pe_size: c_int,
    _p_sync: *mut c_long,
) -> c_int {
    core::ptr::copy_nonoverlapping(source.cast::<u8>(), dest.cast::<u8>(), nelems * 8);
    0
}

pub unsafe extern "C" fn pshmem_malloc(size: usize) -> *mut c_void {
    libc::malloc(size)
}

pub unsafe extern "C" fn pshmem_free(ptr: *mut c_void) {
    libc::free(ptr);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn put_and_get_copy_elements() {
        let src = [1.5f64, -2.0, 3.25];
        let mut dst = [0.0f64; 3];
        unsafe { pshmem_double_put(dst.as_mut_ptr(), src.as_ptr(), 3, 0) };
        assert_eq!(dst, src);

        let mut fetched = [0.0f64; 3];
        unsafe { pshmem_double_get(fetched.as_mut_ptr(), dst.as_ptr(), 3, 0) };
        assert_eq!(fetched, src);
    }

    #[test]
    fn scalar_p_and_g() {
        let mut cell = 0u32;
        unsafe { pshmem_uint32_p(&mut cell, 77, 0) };
        assert_eq!(cell, 77);
        assert_eq!(unsafe { pshmem_uint32_g(&cell, 0) }, 77);
    }

    #[test]
    fn strided_iput_touches_every_other_element() {
        let src = [1i32, 2, 3];
        let mut dst = [0i32; 6];
        unsafe { pshmem_int32_iput(dst.as_mut_ptr(), src.as_ptr(), 2, 1, 3, 0) };
        assert_eq!(dst, [1, 0, 2, 0, 3, 0]);
    }

    #[test]
    fn fetch_add_returns_prior_value() {
        let mut cell = 40i64;
        let old = unsafe { pshmem_atomic_int64_fetch_add(&mut cell, 2, 0) };
        assert_eq!(old, 40);
        assert_eq!(cell, 42);
    }

    #[test]
    fn compare_swap_only_on_match() {
        let mut cell = 5u64;
        let old = unsafe { pshmem_atomic_uint64_compare_swap(&mut cell, 9, 100, 0) };
        assert_eq!(old, 5);
        assert_eq!(cell, 5);
        let old = unsafe { pshmem_atomic_uint64_compare_swap(&mut cell, 5, 100, 0) };
        assert_eq!(old, 5);
        assert_eq!(cell, 100);
    }

    #[test]
    fn bitwise_fetch_or() {
        let mut cell = 0b0101u32;
        let old = unsafe { pshmem_atomic_uint32_fetch_or(&mut cell, 0b0010, 0) };
        assert_eq!(old, 0b0101);
        assert_eq!(cell, 0b0111);
    }

    #[test]
    fn team_reduce_is_identity_on_one_image() {
        let src = [3i32, 1, 4];
        let mut dst = [0i32; 3];
        let rc = unsafe {
            pshmem_int32_sum_reduce(core::ptr::null_mut(), dst.as_mut_ptr(), src.as_ptr(), 3)
        };
        assert_eq!(rc, 0);
        assert_eq!(dst, src);
    }

    #[test]
    fn malloc_gives_writable_memory() {
        unsafe {
            let p = pshmem_malloc(64);
            assert!(!p.is_null());
            p.cast::<u8>().write_bytes(0xAB, 64);
            pshmem_free(p);
        }
    }

    #[test]
    #[serial]
    fn identity_follows_lifecycle() {
        reset();
        assert_eq!(unsafe { pshmem_my_pe() }, -1);
        unsafe { pshmem_init() };
        assert_eq!(unsafe { pshmem_my_pe() }, 0);
        assert_eq!(unsafe { pshmem_n_pes() }, 1);
        unsafe { pshmem_finalize() };
        assert_eq!(unsafe { pshmem_my_pe() }, -1);
    }

    #[test]
    #[serial]
    fn configure_sets_next_identity() {
        reset();
        configure(2, 4);
        unsafe { pshmem_init() };
        assert_eq!(unsafe { pshmem_my_pe() }, 2);
        assert_eq!(unsafe { pshmem_n_pes() }, 4);
        reset();
    }
}
