// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Un-instrumented OpenSHMEM primitive surface.
//!
//! This crate owns the canonical type tables of the OpenSHMEM
//! (type x operation) matrix and exposes the `pshmem_*` primitives through
//! one of two interchangeable providers, selected at build time:
//!
//! - the default [`loopback`] runtime, a complete single-image
//!   implementation over local memory, suitable for development and tests;
//! - with the `link-real` feature, [`ffi`] prototypes against the profiling
//!   interface of a real OpenSHMEM library supplied at link time.
//!
//! Either way the provider is re-exported as [`raw`], which is the only
//! path the interception layer calls through.

pub mod types;

mod prims;
mod tables;

#[cfg(feature = "link-real")]
pub mod ffi;
#[cfg(not(feature = "link-real"))]
pub mod loopback;

#[cfg(feature = "link-real")]
pub use ffi as raw;
#[cfg(not(feature = "link-real"))]
pub use loopback as raw;
