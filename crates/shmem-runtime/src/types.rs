// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! C ABI scalar aliases used across the wrapped OpenSHMEM surface.

pub use core::ffi::{
    c_char, c_int, c_long, c_longlong, c_schar, c_short, c_uchar, c_uint, c_ulong, c_ulonglong,
    c_ushort, c_void,
};
pub use num_complex::{Complex32, Complex64};

/// Opaque team handle, matching the underlying library's `shmem_team_t`.
pub type ShmemTeam = *mut c_void;
