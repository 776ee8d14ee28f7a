// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Remote-memory-access wrappers: contiguous, scalar, and strided put/get in
//! blocking and non-blocking-implicit forms, one set per standard RMA type.

use core::mem::size_of;

use shmem_runtime::types::c_int;

use crate::event::Volume;
use crate::wrap::wrap_call;

macro_rules! rma_family {
    (wrap, $ct:ty, $st:ident) => {
        ::paste::paste! {
            wrap_call! {
                fn [<shmem_ $st _put>](dest: *mut $ct, src: *const $ct, nelems: usize, pe: c_int),
                pe: pe, volume: Volume::sent(nelems * size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_ $st _get>](dest: *mut $ct, src: *const $ct, nelems: usize, pe: c_int),
                pe: pe, volume: Volume::received(nelems * size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_ $st _put_nbi>](dest: *mut $ct, src: *const $ct, nelems: usize, pe: c_int),
                pe: pe, volume: Volume::sent(nelems * size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_ $st _get_nbi>](dest: *mut $ct, src: *const $ct, nelems: usize, pe: c_int),
                pe: pe, volume: Volume::received(nelems * size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_ $st _p>](dest: *mut $ct, value: $ct, pe: c_int),
                pe: pe, volume: Volume::sent(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_ $st _g>](src: *const $ct, pe: c_int) -> $ct,
                pe: pe, volume: Volume::received(size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_ $st _iput>](dest: *mut $ct, src: *const $ct, dst: isize, sst: isize, nelems: usize, pe: c_int),
                pe: pe, volume: Volume::sent(nelems * size_of::<$ct>())
            }
            wrap_call! {
                fn [<shmem_ $st _iget>](dest: *mut $ct, src: *const $ct, dst: isize, sst: isize, nelems: usize, pe: c_int),
                pe: pe, volume: Volume::received(nelems * size_of::<$ct>())
            }
        }
    };
    (names, $v:ident, $ct:ty, $st:ident) => {
        ::paste::paste! {
            $v.push((stringify!([<shmem_ $st _put>]), $crate::registry::Family::Rma));
            let _ = $crate::api::rma::[<shmem_ $st _put>];
            $v.push((stringify!([<shmem_ $st _get>]), $crate::registry::Family::Rma));
            let _ = $crate::api::rma::[<shmem_ $st _get>];
            $v.push((stringify!([<shmem_ $st _put_nbi>]), $crate::registry::Family::Rma));
            let _ = $crate::api::rma::[<shmem_ $st _put_nbi>];
            $v.push((stringify!([<shmem_ $st _get_nbi>]), $crate::registry::Family::Rma));
            let _ = $crate::api::rma::[<shmem_ $st _get_nbi>];
            $v.push((stringify!([<shmem_ $st _p>]), $crate::registry::Family::Rma));
            let _ = $crate::api::rma::[<shmem_ $st _p>];
            $v.push((stringify!([<shmem_ $st _g>]), $crate::registry::Family::Rma));
            let _ = $crate::api::rma::[<shmem_ $st _g>];
            $v.push((stringify!([<shmem_ $st _iput>]), $crate::registry::Family::Rma));
            let _ = $crate::api::rma::[<shmem_ $st _iput>];
            $v.push((stringify!([<shmem_ $st _iget>]), $crate::registry::Family::Rma));
            let _ = $crate::api::rma::[<shmem_ $st _iget>];
        }
    };
}
pub(crate) use rma_family;

shmem_runtime::standard_rma_types!(rma_family, wrap);
