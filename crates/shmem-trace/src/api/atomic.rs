// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Atomic memory operation wrappers.
//!
//! Direction accounting follows what actually reaches the caller: a plain
//! fetch only receives, a set or non-fetching modify only sends, and every
//! fetching read-modify-write counts one element each way.

use core::mem::size_of;

use shmem_runtime::types::c_int;

use crate::event::Volume;
use crate::wrap::wrap_call;

macro_rules! extended_amo_family {
    (wrap, $ct:ty, $st:ident) => {
        ::paste::paste! {
            wrap_call! {
                fn [<shmem_atomic_ $st _fetch>](source: *const $ct, pe: c_int) -> $ct,
                pe: pe, volume: Volume::received(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_atomic_ $st _fetch_nbi>](fetch: *mut $ct, source: *const $ct, pe: c_int),
                pe: pe, volume: Volume::received(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_atomic_ $st _set>](dest: *mut $ct, value: $ct, pe: c_int),
                pe: pe, volume: Volume::sent(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_atomic_ $st _set_nbi>](dest: *mut $ct, value: $ct, pe: c_int),
                pe: pe, volume: Volume::sent(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_atomic_ $st _compare_swap>](dest: *mut $ct, cond: $ct, value: $ct, pe: c_int) -> $ct,
                pe: pe, volume: Volume::both(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_atomic_ $st _compare_swap_nbi>](fetch: *mut $ct, dest: *mut $ct, cond: $ct, value: $ct, pe: c_int),
                pe: pe, volume: Volume::both(size_of::<$ct>())
            }
        }
    };
    (names, $v:ident, $ct:ty, $st:ident) => {
        ::paste::paste! {
            $v.push((stringify!([<shmem_atomic_ $st _fetch>]), $crate::registry::Family::ExtendedAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _fetch>];
            $v.push((stringify!([<shmem_atomic_ $st _fetch_nbi>]), $crate::registry::Family::ExtendedAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _fetch_nbi>];
            $v.push((stringify!([<shmem_atomic_ $st _set>]), $crate::registry::Family::ExtendedAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _set>];
            $v.push((stringify!([<shmem_atomic_ $st _set_nbi>]), $crate::registry::Family::ExtendedAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _set_nbi>];
            $v.push((stringify!([<shmem_atomic_ $st _compare_swap>]), $crate::registry::Family::ExtendedAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _compare_swap>];
            $v.push((stringify!([<shmem_atomic_ $st _compare_swap_nbi>]), $crate::registry::Family::ExtendedAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _compare_swap_nbi>];
        }
    };
}
pub(crate) use extended_amo_family;

macro_rules! standard_amo_family {
    (wrap, $ct:ty, $st:ident) => {
        ::paste::paste! {
            wrap_call! {
                fn [<shmem_atomic_ $st _fetch_inc>](dest: *mut $ct, pe: c_int) -> $ct,
                pe: pe, volume: Volume::both(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_atomic_ $st _fetch_inc_nbi>](fetch: *mut $ct, dest: *mut $ct, pe: c_int),
                pe: pe, volume: Volume::both(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_atomic_ $st _inc>](dest: *mut $ct, pe: c_int),
                pe: pe, volume: Volume::sent(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_atomic_ $st _fetch_add>](dest: *mut $ct, value: $ct, pe: c_int) -> $ct,
                pe: pe, volume: Volume::both(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_atomic_ $st _fetch_add_nbi>](fetch: *mut $ct, dest: *mut $ct, value: $ct, pe: c_int),
                pe: pe, volume: Volume::both(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_atomic_ $st _add>](dest: *mut $ct, value: $ct, pe: c_int),
                pe: pe, volume: Volume::sent(size_of::<$ct>())
            }
        }
    };
    (names, $v:ident, $ct:ty, $st:ident) => {
        ::paste::paste! {
            $v.push((stringify!([<shmem_atomic_ $st _fetch_inc>]), $crate::registry::Family::StandardAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _fetch_inc>];
            $v.push((stringify!([<shmem_atomic_ $st _fetch_inc_nbi>]), $crate::registry::Family::StandardAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _fetch_inc_nbi>];
            $v.push((stringify!([<shmem_atomic_ $st _inc>]), $crate::registry::Family::StandardAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _inc>];
            $v.push((stringify!([<shmem_atomic_ $st _fetch_add>]), $crate::registry::Family::StandardAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _fetch_add>];
            $v.push((stringify!([<shmem_atomic_ $st _fetch_add_nbi>]), $crate::registry::Family::StandardAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _fetch_add_nbi>];
            $v.push((stringify!([<shmem_atomic_ $st _add>]), $crate::registry::Family::StandardAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _add>];
        }
    };
}
pub(crate) use standard_amo_family;

macro_rules! bitwise_amo_family {
    (wrap, $ct:ty, $st:ident) => {
        ::paste::paste! {
            wrap_call! {
                fn [<shmem_atomic_ $st _fetch_and>](dest: *mut $ct, value: $ct, pe: c_int) -> $ct,
                pe: pe, volume: Volume::both(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_atomic_ $st _fetch_and_nbi>](fetch: *mut $ct, dest: *mut $ct, value: $ct, pe: c_int),
                pe: pe, volume: Volume::both(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_atomic_ $st _and>](dest: *mut $ct, value: $ct, pe: c_int),
                pe: pe, volume: Volume::sent(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_atomic_ $st _fetch_or>](dest: *mut $ct, value: $ct, pe: c_int) -> $ct,
                pe: pe, volume: Volume::both(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_atomic_ $st _fetch_or_nbi>](fetch: *mut $ct, dest: *mut $ct, value: $ct, pe: c_int),
                pe: pe, volume: Volume::both(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_atomic_ $st _or>](dest: *mut $ct, value: $ct, pe: c_int),
                pe: pe, volume: Volume::sent(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_atomic_ $st _fetch_xor>](dest: *mut $ct, value: $ct, pe: c_int) -> $ct,
                pe: pe, volume: Volume::both(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_atomic_ $st _fetch_xor_nbi>](fetch: *mut $ct, dest: *mut $ct, value: $ct, pe: c_int),
                pe: pe, volume: Volume::both(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_atomic_ $st _xor>](dest: *mut $ct, value: $ct, pe: c_int),
                pe: pe, volume: Volume::sent(size_of::<$ct>())
            }
        }
    };
    (names, $v:ident, $ct:ty, $st:ident) => {
        ::paste::paste! {
            $v.push((stringify!([<shmem_atomic_ $st _fetch_and>]), $crate::registry::Family::BitwiseAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _fetch_and>];
            $v.push((stringify!([<shmem_atomic_ $st _fetch_and_nbi>]), $crate::registry::Family::BitwiseAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _fetch_and_nbi>];
            $v.push((stringify!([<shmem_atomic_ $st _and>]), $crate::registry::Family::BitwiseAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _and>];
            $v.push((stringify!([<shmem_atomic_ $st _fetch_or>]), $crate::registry::Family::BitwiseAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _fetch_or>];
            $v.push((stringify!([<shmem_atomic_ $st _fetch_or_nbi>]), $crate::registry::Family::BitwiseAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _fetch_or_nbi>];
            $v.push((stringify!([<shmem_atomic_ $st _or>]), $crate::registry::Family::BitwiseAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _or>];
            $v.push((stringify!([<shmem_atomic_ $st _fetch_xor>]), $crate::registry::Family::BitwiseAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _fetch_xor>];
            $v.push((stringify!([<shmem_atomic_ $st _fetch_xor_nbi>]), $crate::registry::Family::BitwiseAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _fetch_xor_nbi>];
            $v.push((stringify!([<shmem_atomic_ $st _xor>]), $crate::registry::Family::BitwiseAmo));
            let _ = $crate::api::atomic::[<shmem_atomic_ $st _xor>];
        }
    };
}
pub(crate) use bitwise_amo_family;

shmem_runtime::extended_amo_types!(extended_amo_family, wrap);
shmem_runtime::standard_amo_types!(standard_amo_family, wrap);
shmem_runtime::bitwise_amo_types!(bitwise_amo_family, wrap);
