// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Per-family signatures of the un-instrumented `pshmem_*` primitives.
//!
//! Each family macro expands in one of two modes: `decl` emits the
//! `extern "C"` prototype against a real library's profiling interface,
//! `body` emits the loopback definition operating on local memory. Both
//! modes share one signature list per family, so the two providers cannot
//! drift apart.

macro_rules! rma_prims {
    (decl, $ct:ty, $st:ident) => {
        ::paste::paste! {
            extern "C" {
                pub fn [<pshmem_ $st _put>](dest: *mut $ct, src: *const $ct, nelems: usize, pe: c_int);
                pub fn [<pshmem_ $st _get>](dest: *mut $ct, src: *const $ct, nelems: usize, pe: c_int);
                pub fn [<pshmem_ $st _put_nbi>](dest: *mut $ct, src: *const $ct, nelems: usize, pe: c_int);
                pub fn [<pshmem_ $st _get_nbi>](dest: *mut $ct, src: *const $ct, nelems: usize, pe: c_int);
                pub fn [<pshmem_ $st _p>](dest: *mut $ct, value: $ct, pe: c_int);
                pub fn [<pshmem_ $st _g>](src: *const $ct, pe: c_int) -> $ct;
                pub fn [<pshmem_ $st _iput>](dest: *mut $ct, src: *const $ct, dst: isize, sst: isize, nelems: usize, pe: c_int);
                pub fn [<pshmem_ $st _iget>](dest: *mut $ct, src: *const $ct, dst: isize, sst: isize, nelems: usize, pe: c_int);
            }
        }
    };
    (body, $ct:ty, $st:ident) => {
        ::paste::paste! {
            pub unsafe extern "C" fn [<pshmem_ $st _put>](dest: *mut $ct, src: *const $ct, nelems: usize, _pe: c_int) {
                core::ptr::copy_nonoverlapping(src, dest, nelems);
            }
            pub unsafe extern "C" fn [<pshmem_ $st _get>](dest: *mut $ct, src: *const $ct, nelems: usize, _pe: c_int) {
                core::ptr::copy_nonoverlapping(src, dest, nelems);
            }
            pub unsafe extern "C" fn [<pshmem_ $st _put_nbi>](dest: *mut $ct, src: *const $ct, nelems: usize, _pe: c_int) {
                core::ptr::copy_nonoverlapping(src, dest, nelems);
            }
            pub unsafe extern "C" fn [<pshmem_ $st _get_nbi>](dest: *mut $ct, src: *const $ct, nelems: usize, _pe: c_int) {
                core::ptr::copy_nonoverlapping(src, dest, nelems);
            }
            pub unsafe extern "C" fn [<pshmem_ $st _p>](dest: *mut $ct, value: $ct, _pe: c_int) {
                dest.write(value);
            }
            pub unsafe extern "C" fn [<pshmem_ $st _g>](src: *const $ct, _pe: c_int) -> $ct {
                src.read()
            }
            pub unsafe extern "C" fn [<pshmem_ $st _iput>](dest: *mut $ct, src: *const $ct, dst: isize, sst: isize, nelems: usize, _pe: c_int) {
                for i in 0..nelems as isize {
                    dest.offset(dst * i).write(src.offset(sst * i).read());
                }
            }
            pub unsafe extern "C" fn [<pshmem_ $st _iget>](dest: *mut $ct, src: *const $ct, dst: isize, sst: isize, nelems: usize, _pe: c_int) {
                for i in 0..nelems as isize {
                    dest.offset(dst * i).write(src.offset(sst * i).read());
                }
            }
        }
    };
}
pub(crate) use rma_prims;

macro_rules! extended_amo_prims {
    (decl, $ct:ty, $st:ident) => {
        ::paste::paste! {
            extern "C" {
                pub fn [<pshmem_atomic_ $st _fetch>](source: *const $ct, pe: c_int) -> $ct;
                pub fn [<pshmem_atomic_ $st _fetch_nbi>](fetch: *mut $ct, source: *const $ct, pe: c_int);
                pub fn [<pshmem_atomic_ $st _set>](dest: *mut $ct, value: $ct, pe: c_int);
                pub fn [<pshmem_atomic_ $st _set_nbi>](dest: *mut $ct, value: $ct, pe: c_int);
                pub fn [<pshmem_atomic_ $st _compare_swap>](dest: *mut $ct, cond: $ct, value: $ct, pe: c_int) -> $ct;
                pub fn [<pshmem_atomic_ $st _compare_swap_nbi>](fetch: *mut $ct, dest: *mut $ct, cond: $ct, value: $ct, pe: c_int);
            }
        }
    };
    (body, $ct:ty, $st:ident) => {
        ::paste::paste! {
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _fetch>](source: *const $ct, _pe: c_int) -> $ct {
                source.read()
            }
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _fetch_nbi>](fetch: *mut $ct, source: *const $ct, _pe: c_int) {
                fetch.write(source.read());
            }
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _set>](dest: *mut $ct, value: $ct, _pe: c_int) {
                dest.write(value);
            }
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _set_nbi>](dest: *mut $ct, value: $ct, _pe: c_int) {
                dest.write(value);
            }
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _compare_swap>](dest: *mut $ct, cond: $ct, value: $ct, _pe: c_int) -> $ct {
                let old = dest.read();
                if old == cond {
                    dest.write(value);
                }
                old
            }
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _compare_swap_nbi>](fetch: *mut $ct, dest: *mut $ct, cond: $ct, value: $ct, _pe: c_int) {
                let old = dest.read();
                if old == cond {
                    dest.write(value);
                }
                fetch.write(old);
            }
        }
    };
}
pub(crate) use extended_amo_prims;

macro_rules! standard_amo_prims {
    (decl, $ct:ty, $st:ident) => {
        ::paste::paste! {
            extern "C" {
                pub fn [<pshmem_atomic_ $st _fetch_inc>](dest: *mut $ct, pe: c_int) -> $ct;
                pub fn [<pshmem_atomic_ $st _fetch_inc_nbi>](fetch: *mut $ct, dest: *mut $ct, pe: c_int);
                pub fn [<pshmem_atomic_ $st _inc>](dest: *mut $ct, pe: c_int);
                pub fn [<pshmem_atomic_ $st _fetch_add>](dest: *mut $ct, value: $ct, pe: c_int) -> $ct;
                pub fn [<pshmem_atomic_ $st _fetch_add_nbi>](fetch: *mut $ct, dest: *mut $ct, value: $ct, pe: c_int);
                pub fn [<pshmem_atomic_ $st _add>](dest: *mut $ct, value: $ct, pe: c_int);
            }
        }
    };
    (body, $ct:ty, $st:ident) => {
        ::paste::paste! {
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _fetch_inc>](dest: *mut $ct, _pe: c_int) -> $ct {
                let old = dest.read();
                dest.write(old.wrapping_add(1));
                old
            }
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _fetch_inc_nbi>](fetch: *mut $ct, dest: *mut $ct, _pe: c_int) {
                let old = dest.read();
                dest.write(old.wrapping_add(1));
                fetch.write(old);
            }
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _inc>](dest: *mut $ct, _pe: c_int) {
                dest.write(dest.read().wrapping_add(1));
            }
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _fetch_add>](dest: *mut $ct, value: $ct, _pe: c_int) -> $ct {
                let old = dest.read();
                dest.write(old.wrapping_add(value));
                old
            }
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _fetch_add_nbi>](fetch: *mut $ct, dest: *mut $ct, value: $ct, _pe: c_int) {
                let old = dest.read();
                dest.write(old.wrapping_add(value));
                fetch.write(old);
            }
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _add>](dest: *mut $ct, value: $ct, _pe: c_int) {
                dest.write(dest.read().wrapping_add(value));
            }
        }
    };
}
pub(crate) use standard_amo_prims;

macro_rules! bitwise_amo_prims {
    (decl, $ct:ty, $st:ident) => {
        ::paste::paste! {
            extern "C" {
                pub fn [<pshmem_atomic_ $st _fetch_and>](dest: *mut $ct, value: $ct, pe: c_int) -> $ct;
                pub fn [<pshmem_atomic_ $st _fetch_and_nbi>](fetch: *mut $ct, dest: *mut $ct, value: $ct, pe: c_int);
                pub fn [<pshmem_atomic_ $st _and>](dest: *mut $ct, value: $ct, pe: c_int);
                pub fn [<pshmem_atomic_ $st _fetch_or>](dest: *mut $ct, value: $ct, pe: c_int) -> $ct;
                pub fn [<pshmem_atomic_ $st _fetch_or_nbi>](fetch: *mut $ct, dest: *mut $ct, value: $ct, pe: c_int);
                pub fn [<pshmem_atomic_ $st _or>](dest: *mut $ct, value: $ct, pe: c_int);
                pub fn [<pshmem_atomic_ $st _fetch_xor>](dest: *mut $ct, value: $ct, pe: c_int) -> $ct;
                pub fn [<pshmem_atomic_ $st _fetch_xor_nbi>](fetch: *mut $ct, dest: *mut $ct, value: $ct, pe: c_int);
                pub fn [<pshmem_atomic_ $st _xor>](dest: *mut $ct, value: $ct, pe: c_int);
            }
        }
    };
    (body, $ct:ty, $st:ident) => {
        ::paste::paste! {
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _fetch_and>](dest: *mut $ct, value: $ct, _pe: c_int) -> $ct {
                let old = dest.read();
                dest.write(old & value);
                old
            }
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _fetch_and_nbi>](fetch: *mut $ct, dest: *mut $ct, value: $ct, _pe: c_int) {
                let old = dest.read();
                dest.write(old & value);
                fetch.write(old);
            }
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _and>](dest: *mut $ct, value: $ct, _pe: c_int) {
                dest.write(dest.read() & value);
            }
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _fetch_or>](dest: *mut $ct, value: $ct, _pe: c_int) -> $ct {
                let old = dest.read();
                dest.write(old | value);
                old
            }
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _fetch_or_nbi>](fetch: *mut $ct, dest: *mut $ct, value: $ct, _pe: c_int) {
                let old = dest.read();
                dest.write(old | value);
                fetch.write(old);
            }
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _or>](dest: *mut $ct, value: $ct, _pe: c_int) {
                dest.write(dest.read() | value);
            }
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _fetch_xor>](dest: *mut $ct, value: $ct, _pe: c_int) -> $ct {
                let old = dest.read();
                dest.write(old ^ value);
                old
            }
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _fetch_xor_nbi>](fetch: *mut $ct, dest: *mut $ct, value: $ct, _pe: c_int) {
                let old = dest.read();
                dest.write(old ^ value);
                fetch.write(old);
            }
            pub unsafe extern "C" fn [<pshmem_atomic_ $st _xor>](dest: *mut $ct, value: $ct, _pe: c_int) {
                dest.write(dest.read() ^ value);
            }
        }
    };
}
pub(crate) use bitwise_amo_prims;

// A one-image reduction over any active set is the identity: the result on
// every participant is its own contribution.
macro_rules! to_all_bitwise_prims {
    (decl, $ct:ty, $st:ident) => {
        ::paste::paste! {
            extern "C" {
                pub fn [<pshmem_ $st _and_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, pe_start: c_int, log_pe_stride: c_int, pe_size: c_int, p_wrk: *mut $ct, p_sync: *mut c_long);
                pub fn [<pshmem_ $st _or_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, pe_start: c_int, log_pe_stride: c_int, pe_size: c_int, p_wrk: *mut $ct, p_sync: *mut c_long);
                pub fn [<pshmem_ $st _xor_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, pe_start: c_int, log_pe_stride: c_int, pe_size: c_int, p_wrk: *mut $ct, p_sync: *mut c_long);
            }
        }
    };
    (body, $ct:ty, $st:ident) => {
        ::paste::paste! {
            pub unsafe extern "C" fn [<pshmem_ $st _and_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, _pe_start: c_int, _log_pe_stride: c_int, _pe_size: c_int, _p_wrk: *mut $ct, _p_sync: *mut c_long) {
                core::ptr::copy_nonoverlapping(source, dest, nreduce.max(0) as usize);
            }
            pub unsafe extern "C" fn [<pshmem_ $st _or_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, _pe_start: c_int, _log_pe_stride: c_int, _pe_size: c_int, _p_wrk: *mut $ct, _p_sync: *mut c_long) {
                core::ptr::copy_nonoverlapping(source, dest, nreduce.max(0) as usize);
            }
            pub unsafe extern "C" fn [<pshmem_ $st _xor_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, _pe_start: c_int, _log_pe_stride: c_int, _pe_size: c_int, _p_wrk: *mut $ct, _p_sync: *mut c_long) {
                core::ptr::copy_nonoverlapping(source, dest, nreduce.max(0) as usize);
            }
        }
    };
}
pub(crate) use to_all_bitwise_prims;

macro_rules! to_all_minmax_prims {
    (decl, $ct:ty, $st:ident) => {
        ::paste::paste! {
            extern "C" {
                pub fn [<pshmem_ $st _max_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, pe_start: c_int, log_pe_stride: c_int, pe_size: c_int, p_wrk: *mut $ct, p_sync: *mut c_long);
                pub fn [<pshmem_ $st _min_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, pe_start: c_int, log_pe_stride: c_int, pe_size: c_int, p_wrk: *mut $ct, p_sync: *mut c_long);
            }
        }
    };
    (body, $ct:ty, $st:ident) => {
        ::paste::paste! {
            pub unsafe extern "C" fn [<pshmem_ $st _max_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, _pe_start: c_int, _log_pe_stride: c_int, _pe_size: c_int, _p_wrk: *mut $ct, _p_sync: *mut c_long) {
                core::ptr::copy_nonoverlapping(source, dest, nreduce.max(0) as usize);
            }
            pub unsafe extern "C" fn [<pshmem_ $st _min_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, _pe_start: c_int, _log_pe_stride: c_int, _pe_size: c_int, _p_wrk: *mut $ct, _p_sync: *mut c_long) {
                core::ptr::copy_nonoverlapping(source, dest, nreduce.max(0) as usize);
            }
        }
    };
}
pub(crate) use to_all_minmax_prims;

macro_rules! to_all_arith_prims {
    (decl, $ct:ty, $st:ident) => {
        ::paste::paste! {
            extern "C" {
                pub fn [<pshmem_ $st _sum_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, pe_start: c_int, log_pe_stride: c_int, pe_size: c_int, p_wrk: *mut $ct, p_sync: *mut c_long);
                pub fn [<pshmem_ $st _prod_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, pe_start: c_int, log_pe_stride: c_int, pe_size: c_int, p_wrk: *mut $ct, p_sync: *mut c_long);
            }
        }
    };
    (body, $ct:ty, $st:ident) => {
        ::paste::paste! {
            pub unsafe extern "C" fn [<pshmem_ $st _sum_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, _pe_start: c_int, _log_pe_stride: c_int, _pe_size: c_int, _p_wrk: *mut $ct, _p_sync: *mut c_long) {
                core::ptr::copy_nonoverlapping(source, dest, nreduce.max(0) as usize);
            }
            pub unsafe extern "C" fn [<pshmem_ $st _prod_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, _pe_start: c_int, _log_pe_stride: c_int, _pe_size: c_int, _p_wrk: *mut $ct, _p_sync: *mut c_long) {
                core::ptr::copy_nonoverlapping(source, dest, nreduce.max(0) as usize);
            }
        }
    };
}
pub(crate) use to_all_arith_prims;

macro_rules! reduce_bitwise_prims {
    (decl, $ct:ty, $st:ident) => {
        ::paste::paste! {
            extern "C" {
                pub fn [<pshmem_ $st _and_reduce>](team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int;
                pub fn [<pshmem_ $st _or_reduce>](team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int;
                pub fn [<pshmem_ $st _xor_reduce>](team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int;
            }
        }
    };
    (body, $ct:ty, $st:ident) => {
        ::paste::paste! {
            pub unsafe extern "C" fn [<pshmem_ $st _and_reduce>](_team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int {
                core::ptr::copy_nonoverlapping(source, dest, nreduce);
                0
            }
            pub unsafe extern "C" fn [<pshmem_ $st _or_reduce>](_team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int {
                core::ptr::copy_nonoverlapping(source, dest, nreduce);
                0
            }
            pub unsafe extern "C" fn [<pshmem_ $st _xor_reduce>](_team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int {
                core::ptr::copy_nonoverlapping(source, dest, nreduce);
                0
            }
        }
    };
}
pub(crate) use reduce_bitwise_prims;

macro_rules! reduce_minmax_prims {
    (decl, $ct:ty, $st:ident) => {
        ::paste::paste! {
            extern "C" {
                pub fn [<pshmem_ $st _max_reduce>](team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int;
                pub fn [<pshmem_ $st _min_reduce>](team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int;
            }
        }
    };
    (body, $ct:ty, $st:ident) => {
        ::paste::paste! {
            pub unsafe extern "C" fn [<pshmem_ $st _max_reduce>](_team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int {
                core::ptr::copy_nonoverlapping(source, dest, nreduce);
                0
            }
            pub unsafe extern "C" fn [<pshmem_ $st _min_reduce>](_team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int {
                core::ptr::copy_nonoverlapping(source, dest, nreduce);
                0
            }
        }
    };
}
pub(crate) use reduce_minmax_prims;

macro_rules! reduce_arith_prims {
    (decl, $ct:ty, $st:ident) => {
        ::paste::paste! {
            extern "C" {
                pub fn [<pshmem_ $st _sum_reduce>](team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int;
                pub fn [<pshmem_ $st _prod_reduce>](team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int;
            }
        }
    };
    (body, $ct:ty, $st:ident) => {
        ::paste::paste! {
            pub unsafe extern "C" fn [<pshmem_ $st _sum_reduce>](_team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int {
                core::ptr::copy_nonoverlapping(source, dest, nreduce);
                0
            }
            pub unsafe extern "C" fn [<pshmem_ $st _prod_reduce>](_team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int {
                core::ptr::copy_nonoverlapping(source, dest, nreduce);
                0
            }
        }
    };
}
pub(crate) use reduce_arith_prims;
