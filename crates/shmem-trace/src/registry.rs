// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Enumeration of every generated wrapper.
//!
//! The family macros expand here a second time, in `names` mode, so the
//! registry and the wrappers come from one source and cannot drift. Each
//! entry also references the wrapper item itself, making a missing wrapper
//! a compile error rather than a test failure. Downstream tooling assumes
//! full coverage of the wrapped surface, so an omission is a defect, not a
//! gap.

use derive_more::Display;

/// Operation family a wrapper belongs to.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Family {
    Rma,
    ExtendedAmo,
    StandardAmo,
    BitwiseAmo,
    ToAllReduce,
    TeamReduce,
    Broadcast,
    Sync,
    Memory,
    Lifecycle,
}

/// One `(wrapper name, family)` entry per declared (operation, type) pair.
pub fn wrapper_registry() -> Vec<(&'static str, Family)> {
    use crate::api::atomic::{bitwise_amo_family, extended_amo_family, standard_amo_family};
    use crate::api::collective::{
        reduce_arith_family, reduce_bitwise_family, reduce_minmax_family, to_all_arith_family,
        to_all_bitwise_family, to_all_minmax_family,
    };
    use crate::api::rma::rma_family;

    let mut v: Vec<(&'static str, Family)> = Vec::new();

    shmem_runtime::standard_rma_types!(rma_family, names, v);
    shmem_runtime::extended_amo_types!(extended_amo_family, names, v);
    shmem_runtime::standard_amo_types!(standard_amo_family, names, v);
    shmem_runtime::bitwise_amo_types!(bitwise_amo_family, names, v);
    shmem_runtime::to_all_bitwise_types!(to_all_bitwise_family, names, v);
    shmem_runtime::to_all_minmax_types!(to_all_minmax_family, names, v);
    shmem_runtime::to_all_arith_types!(to_all_arith_family, names, v);
    shmem_runtime::reduce_bitwise_types!(reduce_bitwise_family, names, v);
    shmem_runtime::reduce_minmax_types!(reduce_minmax_family, names, v);
    shmem_runtime::reduce_arith_types!(reduce_arith_family, names, v);

    v.push(("shmem_broadcast64", Family::Broadcast));
    let _ = crate::api::collective::shmem_broadcast64;

    v.push(("shmem_barrier_all", Family::Sync));
    let _ = crate::api::sync::shmem_barrier_all;
    v.push(("shmem_fence", Family::Sync));
    let _ = crate::api::sync::shmem_fence;
    v.push(("shmem_quiet", Family::Sync));
    let _ = crate::api::sync::shmem_quiet;
    v.push(("shmem_my_pe", Family::Sync));
    let _ = crate::api::sync::shmem_my_pe;
    v.push(("shmem_n_pes", Family::Sync));
    let _ = crate::api::sync::shmem_n_pes;

    v.push(("shmem_malloc", Family::Memory));
    let _ = crate::api::memory::shmem_malloc;
    v.push(("shmem_free", Family::Memory));
    let _ = crate::api::memory::shmem_free;

    v.push(("shmem_init", Family::Lifecycle));
    let _ = crate::api::lifecycle::shmem_init;
    v.push(("shmem_finalize", Family::Lifecycle));
    let _ = crate::api::lifecycle::shmem_finalize;

    v
}
