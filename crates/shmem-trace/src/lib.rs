// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Transparent call interception for OpenSHMEM.
//!
//! Every entry point of the communication API is wrapped by a drop-in
//! replacement that times the real call, derives the bytes moved from the
//! call's own arguments, and appends one record to a per-PE trace file —
//! without changing what the caller observes. The several hundred
//! type-specialized wrappers all expand from a single template crossed with
//! the runtime crate's type tables; see [`registry`] for the enumeration of
//! the generated surface.
//!
//! The layer never surfaces its own failures to the application: before the
//! rank is known events are dropped, a sink that cannot open reports once
//! and stays silent, and results or errors of the wrapped primitives pass
//! through untouched.

pub use shmem_runtime as runtime;

pub mod api;
pub mod clock;
pub mod context;
pub mod event;
pub mod registry;
pub mod sink;
#[doc(hidden)]
pub mod test_support;
mod wrap;

pub use api::atomic::*;
pub use api::collective::*;
pub use api::lifecycle::*;
pub use api::memory::*;
pub use api::rma::*;
pub use api::sync::*;
