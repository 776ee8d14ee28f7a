// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Type tables of the OpenSHMEM (type x operation) matrix.
//!
//! Each macro applies a callback once per `(rust_type, shmem_name)` row of one
//! table, forwarding any extra leading tokens unchanged. A single family macro
//! can therefore expand in several modes (FFI declaration, loopback body,
//! wrapper, registry entry) while the rows themselves are declared exactly
//! once. The rows mirror the tables of the wrapped library; C `long double`
//! has no stable Rust counterpart and carries no row here.

/// Standard RMA types: every put/get-capable scalar.
#[macro_export]
macro_rules! standard_rma_types {
    ($m:ident $(, $extra:tt)*) => {
        $m!($($extra,)* f32, float);
        $m!($($extra,)* f64, double);
        $m!($($extra,)* $crate::types::c_char, char);
        $m!($($extra,)* $crate::types::c_schar, schar);
        $m!($($extra,)* $crate::types::c_short, short);
        $m!($($extra,)* $crate::types::c_int, int);
        $m!($($extra,)* $crate::types::c_long, long);
        $m!($($extra,)* $crate::types::c_longlong, longlong);
        $m!($($extra,)* $crate::types::c_uchar, uchar);
        $m!($($extra,)* $crate::types::c_ushort, ushort);
        $m!($($extra,)* $crate::types::c_uint, uint);
        $m!($($extra,)* $crate::types::c_ulong, ulong);
        $m!($($extra,)* $crate::types::c_ulonglong, ulonglong);
        $m!($($extra,)* i8, int8);
        $m!($($extra,)* i16, int16);
        $m!($($extra,)* i32, int32);
        $m!($($extra,)* i64, int64);
        $m!($($extra,)* u8, uint8);
        $m!($($extra,)* u16, uint16);
        $m!($($extra,)* u32, uint32);
        $m!($($extra,)* u64, uint64);
        $m!($($extra,)* usize, size);
        $m!($($extra,)* isize, ptrdiff);
    };
}

/// Standard AMO types: integer scalars supporting arithmetic atomics.
#[macro_export]
macro_rules! standard_amo_types {
    ($m:ident $(, $extra:tt)*) => {
        $m!($($extra,)* $crate::types::c_int, int);
        $m!($($extra,)* $crate::types::c_long, long);
        $m!($($extra,)* $crate::types::c_longlong, longlong);
        $m!($($extra,)* $crate::types::c_uint, uint);
        $m!($($extra,)* $crate::types::c_ulong, ulong);
        $m!($($extra,)* $crate::types::c_ulonglong, ulonglong);
        $m!($($extra,)* i32, int32);
        $m!($($extra,)* i64, int64);
        $m!($($extra,)* u32, uint32);
        $m!($($extra,)* u64, uint64);
        $m!($($extra,)* usize, size);
        $m!($($extra,)* isize, ptrdiff);
    };
}

/// Extended AMO types: the standard AMO set plus the floating-point scalars
/// valid for fetch/set/compare-swap.
#[macro_export]
macro_rules! extended_amo_types {
    ($m:ident $(, $extra:tt)*) => {
        $m!($($extra,)* f32, float);
        $m!($($extra,)* f64, double);
        $m!($($extra,)* $crate::types::c_int, int);
        $m!($($extra,)* $crate::types::c_long, long);
        $m!($($extra,)* $crate::types::c_longlong, longlong);
        $m!($($extra,)* $crate::types::c_uint, uint);
        $m!($($extra,)* $crate::types::c_ulong, ulong);
        $m!($($extra,)* $crate::types::c_ulonglong, ulonglong);
        $m!($($extra,)* i32, int32);
        $m!($($extra,)* i64, int64);
        $m!($($extra,)* u32, uint32);
        $m!($($extra,)* u64, uint64);
        $m!($($extra,)* usize, size);
        $m!($($extra,)* isize, ptrdiff);
    };
}

/// Bitwise AMO types.
#[macro_export]
macro_rules! bitwise_amo_types {
    ($m:ident $(, $extra:tt)*) => {
        $m!($($extra,)* $crate::types::c_uint, uint);
        $m!($($extra,)* $crate::types::c_ulong, ulong);
        $m!($($extra,)* $crate::types::c_ulonglong, ulonglong);
        $m!($($extra,)* i32, int32);
        $m!($($extra,)* i64, int64);
        $m!($($extra,)* u32, uint32);
        $m!($($extra,)* u64, uint64);
    };
}

/// Active-set bitwise reduction types (`*_to_all`).
#[macro_export]
macro_rules! to_all_bitwise_types {
    ($m:ident $(, $extra:tt)*) => {
        $m!($($extra,)* $crate::types::c_short, short);
        $m!($($extra,)* $crate::types::c_int, int);
        $m!($($extra,)* $crate::types::c_long, long);
        $m!($($extra,)* $crate::types::c_longlong, longlong);
    };
}

/// Active-set min/max reduction types.
#[macro_export]
macro_rules! to_all_minmax_types {
    ($m:ident $(, $extra:tt)*) => {
        $m!($($extra,)* $crate::types::c_short, short);
        $m!($($extra,)* $crate::types::c_int, int);
        $m!($($extra,)* $crate::types::c_long, long);
        $m!($($extra,)* $crate::types::c_longlong, longlong);
        $m!($($extra,)* f32, float);
        $m!($($extra,)* f64, double);
    };
}

/// Active-set arithmetic reduction types, complex included.
#[macro_export]
macro_rules! to_all_arith_types {
    ($m:ident $(, $extra:tt)*) => {
        $m!($($extra,)* $crate::types::c_short, short);
        $m!($($extra,)* $crate::types::c_int, int);
        $m!($($extra,)* $crate::types::c_long, long);
        $m!($($extra,)* $crate::types::c_longlong, longlong);
        $m!($($extra,)* f32, float);
        $m!($($extra,)* f64, double);
        $m!($($extra,)* $crate::types::Complex64, complexd);
        $m!($($extra,)* $crate::types::Complex32, complexf);
    };
}

/// Team-scoped bitwise reduction types.
#[macro_export]
macro_rules! reduce_bitwise_types {
    ($m:ident $(, $extra:tt)*) => {
        $m!($($extra,)* $crate::types::c_uchar, uchar);
        $m!($($extra,)* $crate::types::c_ushort, ushort);
        $m!($($extra,)* $crate::types::c_uint, uint);
        $m!($($extra,)* $crate::types::c_ulong, ulong);
        $m!($($extra,)* $crate::types::c_ulonglong, ulonglong);
        $m!($($extra,)* i8, int8);
        $m!($($extra,)* i16, int16);
        $m!($($extra,)* i32, int32);
        $m!($($extra,)* i64, int64);
        $m!($($extra,)* u8, uint8);
        $m!($($extra,)* u16, uint16);
        $m!($($extra,)* u32, uint32);
        $m!($($extra,)* u64, uint64);
        $m!($($extra,)* usize, size);
    };
}

/// Team-scoped min/max reduction types.
#[macro_export]
macro_rules! reduce_minmax_types {
    ($m:ident $(, $extra:tt)*) => {
        $m!($($extra,)* $crate::types::c_char, char);
        $m!($($extra,)* $crate::types::c_schar, schar);
        $m!($($extra,)* $crate::types::c_short, short);
        $m!($($extra,)* $crate::types::c_int, int);
        $m!($($extra,)* $crate::types::c_long, long);
        $m!($($extra,)* $crate::types::c_longlong, longlong);
        $m!($($extra,)* isize, ptrdiff);
        $m!($($extra,)* $crate::types::c_uchar, uchar);
        $m!($($extra,)* $crate::types::c_ushort, ushort);
        $m!($($extra,)* $crate::types::c_uint, uint);
        $m!($($extra,)* $crate::types::c_ulong, ulong);
        $m!($($extra,)* $crate::types::c_ulonglong, ulonglong);
        $m!($($extra,)* i8, int8);
        $m!($($extra,)* i16, int16);
        $m!($($extra,)* i32, int32);
        $m!($($extra,)* i64, int64);
        $m!($($extra,)* u8, uint8);
        $m!($($extra,)* u16, uint16);
        $m!($($extra,)* u32, uint32);
        $m!($($extra,)* u64, uint64);
        $m!($($extra,)* usize, size);
        $m!($($extra,)* f32, float);
        $m!($($extra,)* f64, double);
    };
}

/// Team-scoped arithmetic reduction types, complex included.
#[macro_export]
macro_rules! reduce_arith_types {
    ($m:ident $(, $extra:tt)*) => {
        $m!($($extra,)* $crate::types::c_char, char);
        $m!($($extra,)* $crate::types::c_schar, schar);
        $m!($($extra,)* $crate::types::c_short, short);
        $m!($($extra,)* $crate::types::c_int, int);
        $m!($($extra,)* $crate::types::c_long, long);
        $m!($($extra,)* $crate::types::c_longlong, longlong);
        $m!($($extra,)* isize, ptrdiff);
        $m!($($extra,)* $crate::types::c_uchar, uchar);
        $m!($($extra,)* $crate::types::c_ushort, ushort);
        $m!($($extra,)* $crate::types::c_uint, uint);
        $m!($($extra,)* $crate::types::c_ulong, ulong);
        $m!($($extra,)* $crate::types::c_ulonglong, ulonglong);
        $m!($($extra,)* i8, int8);
        $m!($($extra,)* i16, int16);
        $m!($($extra,)* i32, int32);
        $m!($($extra,)* i64, int64);
        $m!($($extra,)* u8, uint8);
        $m!($($extra,)* u16, uint16);
        $m!($($extra,)* u32, uint32);
        $m!($($extra,)* u64, uint64);
        $m!($($extra,)* usize, size);
        $m!($($extra,)* f32, float);
        $m!($($extra,)* f64, double);
        $m!($($extra,)* $crate::types::Complex64, complexd);
        $m!($($extra,)* $crate::types::Complex32, complexf);
    };
}
