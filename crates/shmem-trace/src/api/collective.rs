// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Collective wrappers: active-set `*_to_all` reductions, team-scoped
//! `*_reduce`, and the fixed-width broadcast.
//!
//! Rootless reductions count the payload in both directions on every
//! participant; the rooted broadcast attributes it by comparing the current
//! PE against the root.

use core::mem::size_of;

use shmem_runtime::types::{c_int, c_long, c_void, ShmemTeam};

use crate::event::Volume;
use crate::wrap::wrap_call;

macro_rules! to_all_bitwise_family {
    (wrap, $ct:ty, $st:ident) => {
        ::paste::paste! {
            wrap_call! {
                fn [<shmem_ $st _and_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, pe_start: c_int, log_pe_stride: c_int, pe_size: c_int, p_wrk: *mut $ct, p_sync: *mut c_long),
                pe: -1, volume: Volume::both(nreduce.max(0) as usize * size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_ $st _or_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, pe_start: c_int, log_pe_stride: c_int, pe_size: c_int, p_wrk: *mut $ct, p_sync: *mut c_long),
                pe: -1, volume: Volume::both(nreduce.max(0) as usize * size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_ $st _xor_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, pe_start: c_int, log_pe_stride: c_int, pe_size: c_int, p_wrk: *mut $ct, p_sync: *mut c_long),
                pe: -1, volume: Volume::both(nreduce.max(0) as usize * size_of::<$ct>())
            }
        }
    };
    (names, $v:ident, $ct:ty, $st:ident) => {
        ::paste::paste! {
            $v.push((stringify!([<shmem_ $st _and_to_all>]), $crate::registry::Family::ToAllReduce));
            let _ = $crate::api::collective::[<shmem_ $st _and_to_all>];
            $v.push((stringify!([<shmem_ $st _or_to_all>]), $crate::registry::Family::ToAllReduce));
            let _ = $crate::api::collective::[<shmem_ $st _or_to_all>];
            $v.push((stringify!([<shmem_ $st _xor_to_all>]), $crate::registry::Family::ToAllReduce));
            let _ = $crate::api::collective::[<shmem_ $st _xor_to_all>];
        }
    };
}
pub(crate) use to_all_bitwise_family;

macro_rules! to_all_minmax_family {
    (wrap, $ct:ty, $st:ident) => {
        ::paste::paste! {
            wrap_call! {
                fn [<shmem_ $st _max_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, pe_start: c_int, log_pe_stride: c_int, pe_size: c_int, p_wrk: *mut $ct, p_sync: *mut c_long),
                pe: -1, volume: Volume::both(nreduce.max(0) as usize * size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_ $st _min_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, pe_start: c_int, log_pe_stride: c_int, pe_size: c_int, p_wrk: *mut $ct, p_sync: *mut c_long),
                pe: -1, volume: Volume::both(nreduce.max(0) as usize * size_of::<$ct>())
            }
        }
    };
    (names, $v:ident, $ct:ty, $st:ident) => {
        ::paste::paste! {
            $v.push((stringify!([<shmem_ $st _max_to_all>]), $crate::registry::Family::ToAllReduce));
            let _ = $crate::api::collective::[<shmem_ $st _max_to_all>];
            $v.push((stringify!([<shmem_ $st _min_to_all>]), $crate::registry::Family::ToAllReduce));
            let _ = $crate::api::collective::[<shmem_ $st _min_to_all>];
        }
    };
}
pub(crate) use to_all_minmax_family;

macro_rules! to_all_arith_family {
    (wrap, $ct:ty, $st:ident) => {
        ::paste::paste! {
            wrap_call! {
                fn [<shmem_ $st _sum_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, pe_start: c_int, log_pe_stride: c_int, pe_size: c_int, p_wrk: *mut $ct, p_sync: *mut c_long),
                pe: -1, volume: Volume::both(nreduce.max(0) as usize * size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_ $st _prod_to_all>](dest: *mut $ct, source: *const $ct, nreduce: c_int, pe_start: c_int, log_pe_stride: c_int, pe_size: c_int, p_wrk: *mut $ct, p_sync: *mut c_long),
                pe: -1, volume: Volume::both(nreduce.max(0) as usize * size_of::<$ct>())
            }
        }
    };
    (names, $v:ident, $ct:ty, $st:ident) => {
        ::paste::paste! {
            $v.push((stringify!([<shmem_ $st _sum_to_all>]), $crate::registry::Family::ToAllReduce));
            let _ = $crate::api::collective::[<shmem_ $st _sum_to_all>];
            $v.push((stringify!([<shmem_ $st _prod_to_all>]), $crate::registry::Family::ToAllReduce));
            let _ = $crate::api::collective::[<shmem_ $st _prod_to_all>];
        }
    };
}
pub(crate) use to_all_arith_family;

macro_rules! reduce_bitwise_family {
    (wrap, $ct:ty, $st:ident) => {
        ::paste::paste! {
            wrap_call! {
                fn [<shmem_ $st _and_reduce>](team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int,
                pe: -1, volume: Volume::both(nreduce * size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_ $st _or_reduce>](team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int,
                pe: -1, volume: Volume::both(nreduce * size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_ $st _xor_reduce>](team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int,
                pe: -1, volume: Volume::both(nreduce * size_of::<$ct>())
            }
        }
    };
    (names, $v:ident, $ct:ty, $st:ident) => {
        ::paste::paste! {
            $v.push((stringify!([<shmem_ $st _and_reduce>]), $crate::registry::Family::TeamReduce));
            let _ = $crate::api::collective::[<shmem_ $st _and_reduce>];
            $v.push((stringify!([<shmem_ $st _or_reduce>]), $crate::registry::Family::TeamReduce));
            let _ = $crate::api::collective::[<shmem_ $st _or_reduce>];
            $v.push((stringify!([<shmem_ $st _xor_reduce>]), $crate::registry::Family::TeamReduce));
            let _ = $crate::api::collective::[<shmem_ $st _xor_reduce>];
        }
    };
}
pub(crate) use reduce_bitwise_family;

macro_rules! reduce_minmax_family {
    (wrap, $ct:ty, $st:ident) => {
        ::paste::paste! {
            wrap_call! {
                fn [<shmem_ $st _max_reduce>](team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int,
                pe: -1, volume: Volume::both(nreduce * size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_ $st _min_reduce>](team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int,
                pe: -1, volume: Volume::both(nreduce * size_of::<$ct>())
            }
        }
    };
    (names, $v:ident, $ct:ty, $st:ident) => {
        ::paste::paste! {
            $v.push((stringify!([<shmem_ $st _max_reduce>]), $crate::registry::Family::TeamReduce));
            let _ = $crate::api::collective::[<shmem_ $st _max_reduce>];
            $v.push((stringify!([<shmem_ $st _min_reduce>]), $crate::registry::Family::TeamReduce));
            let _ = $crate::api::collective::[<shmem_ $st _min_reduce>];
        }
    };
}
pub(crate) use reduce_minmax_family;

macro_rules! reduce_arith_family {
    (wrap, $ct:ty, $st:ident) => {
        ::paste::paste! {
            wrap_call! {
                fn [<shmem_ $st _sum_reduce>](team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int,
                pe: -1, volume: Volume::both(nreduce * size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_ $st _prod_reduce>](team: ShmemTeam, dest: *mut $ct, source: *const $ct, nreduce: usize) -> c_int,
                pe: -1, volume: Volume::both(nreduce * size_of::<$ct>())
            }
        }
    };
    (names, $v:ident, $ct:ty, $st:ident) => {
        ::paste::paste! {
            $v.push((stringify!([<shmem_ $st _sum_reduce>]), $crate::registry::Family::TeamReduce));
            let _ = $crate::api::collective::[<shmem_ $st _sum_reduce>];
            $v.push((stringify!([<shmem_ $st _prod_reduce>]), $crate::registry::Family::TeamReduce));
            let _ = $crate::api::collective::[<shmem_ $st _prod_reduce>];
        }
    };
}
pub(crate) use reduce_arith_family;

shmem_runtime::to_all_bitwise_types!(to_all_bitwise_family, wrap);
shmem_runtime::to_all_minmax_types!(to_all_minmax_family, wrap);
shmem_runtime::to_all_arith_types!(to_all_arith_family, wrap);
shmem_runtime::reduce_bitwise_types!(reduce_bitwise_family, wrap);
shmem_runtime::reduce_minmax_types!(reduce_minmax_family, wrap);
shmem_runtime::reduce_arith_types!(reduce_arith_family, wrap);

wrap_call! {
    fn shmem_broadcast64(dest: *mut c_void, source: *const c_void, nelems: usize, pe_root: c_int, pe_start: c_int, log_pe_stride: c_int, pe_size: c_int, p_sync: *mut c_long) -> c_int,
    pe: pe_root, volume: Volume::rooted(nelems * 8, pe_root)
}
