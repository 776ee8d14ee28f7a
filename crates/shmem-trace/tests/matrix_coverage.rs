// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Exhaustiveness of the generated wrapper matrix: one wrapper per declared
//! (operation, type) pair, no duplicates, no gaps.

use std::collections::HashSet;

use shmem_trace::registry::{wrapper_registry, Family};

#[test]
fn every_declared_pair_has_exactly_one_wrapper() {
    let registry = wrapper_registry();
    let count = |family: Family| registry.iter().filter(|(_, f)| *f == family).count();

    // 23 RMA types x {put, get, put_nbi, get_nbi, p, g, iput, iget}
    assert_eq!(count(Family::Rma), 23 * 8);
    // 14 extended AMO types x {fetch, fetch_nbi, set, set_nbi, compare_swap, compare_swap_nbi}
    assert_eq!(count(Family::ExtendedAmo), 14 * 6);
    // 12 standard AMO types x {fetch_inc, fetch_inc_nbi, inc, fetch_add, fetch_add_nbi, add}
    assert_eq!(count(Family::StandardAmo), 12 * 6);
    // 7 bitwise AMO types x {fetch_op, fetch_op_nbi, op} for and/or/xor
    assert_eq!(count(Family::BitwiseAmo), 7 * 9);
    // active-set reductions: 4 bitwise x 3 + 6 minmax x 2 + 8 arith x 2
    assert_eq!(count(Family::ToAllReduce), 4 * 3 + 6 * 2 + 8 * 2);
    // team reductions: 14 bitwise x 3 + 23 minmax x 2 + 25 arith x 2
    assert_eq!(count(Family::TeamReduce), 14 * 3 + 23 * 2 + 25 * 2);
    assert_eq!(count(Family::Broadcast), 1);
    assert_eq!(count(Family::Sync), 5);
    assert_eq!(count(Family::Memory), 2);
    assert_eq!(count(Family::Lifecycle), 2);

    assert_eq!(registry.len(), 591);
}

#[test]
fn wrapper_names_are_unique() {
    let registry = wrapper_registry();
    let unique: HashSet<&str> = registry.iter().map(|(name, _)| *name).collect();
    assert_eq!(unique.len(), registry.len());
}

#[test]
fn known_entries_are_present() {
    let registry = wrapper_registry();
    let has = |name: &str, family: Family| {
        registry
            .iter()
            .any(|(n, f)| *n == name && *f == family)
    };

    assert!(has("shmem_double_put", Family::Rma));
    assert!(has("shmem_ptrdiff_iget", Family::Rma));
    assert!(has("shmem_atomic_float_compare_swap", Family::ExtendedAmo));
    assert!(has("shmem_atomic_size_fetch_inc", Family::StandardAmo));
    assert!(has("shmem_atomic_uint64_fetch_xor_nbi", Family::BitwiseAmo));
    assert!(has("shmem_longlong_sum_to_all", Family::ToAllReduce));
    assert!(has("shmem_complexd_sum_to_all", Family::ToAllReduce));
    assert!(has("shmem_complexf_prod_reduce", Family::TeamReduce));
    assert!(has("shmem_uchar_and_reduce", Family::TeamReduce));
    assert!(has("shmem_broadcast64", Family::Broadcast));
    assert!(has("shmem_barrier_all", Family::Sync));
    assert!(has("shmem_malloc", Family::Memory));
    assert!(has("shmem_init", Family::Lifecycle));
    assert!(has("shmem_finalize", Family::Lifecycle));
}

#[test]
fn every_name_carries_the_interposed_prefix() {
    for (name, _) in wrapper_registry() {
        assert!(name.starts_with("shmem_"), "unexpected name {name}");
    }
}
