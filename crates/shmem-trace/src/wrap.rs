// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The one wrapper template every generated interception expands from.
//!
//! A wrapper keeps the exact C ABI signature of its `pshmem_*` counterpart,
//! times the forwarded call, derives the byte volume from the call's own
//! arguments, records one event, and hands the primitive's result back
//! unchanged. With the `interpose` feature the symbol is emitted unmangled
//! so the linker or loader can alias it over the wrapped library's name.

macro_rules! wrap_call {
    (fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?,
     pe: $pe:expr, volume: $vol:expr) => {
        ::paste::paste! {
            #[cfg_attr(feature = "interpose", no_mangle)]
            #[allow(clippy::missing_safety_doc)]
            pub unsafe extern "C" fn $name($($arg: $ty),*) $(-> $ret)? {
                let start = $crate::clock::now();
                let ret = ::shmem_runtime::raw::[<p $name>]($($arg),*);
                let duration = $crate::clock::now() - start;
                $crate::sink::record(&$crate::event::TraceEvent::call(
                    stringify!($name),
                    start,
                    duration,
                    $pe,
                    $vol,
                ));
                ret
            }
        }
    };
}
pub(crate) use wrap_call;
