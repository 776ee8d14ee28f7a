// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! End-to-end scenarios against the loopback runtime: the wrapped calls
//! behave exactly like the primitives underneath, and the per-PE trace file
//! records what the schema promises.
//!
//! Every test here touches the process-wide sink, identity, and working
//! directory, so they run serially and reset the world first.

use std::fs;
use std::path::Path;

use serial_test::serial;
use shmem_trace::runtime::loopback;
use shmem_trace::test_support;

const HEADER: &str =
    "Time,Function,Duration_Sec,Target_PE,Bytes_Received,Bytes_Sent,Stacktrace,Metadata";

fn enter_scratch() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("failed to create scratch dir");
    std::env::set_current_dir(dir.path()).expect("failed to enter scratch dir");
    test_support::reset();
    dir
}

fn read_rows(path: &str) -> Vec<Vec<String>> {
    let text = fs::read_to_string(path).expect("trace file missing");
    text.lines()
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect()
}

fn find<'a>(rows: &'a [Vec<String>], operation: &str) -> &'a Vec<String> {
    rows.iter()
        .find(|row| row[1] == operation)
        .unwrap_or_else(|| panic!("no {operation} row in trace"))
}

#[test]
#[serial]
fn init_is_the_first_logged_event() {
    let _dir = enter_scratch();
    unsafe {
        shmem_trace::shmem_init();
        let src = [1.5f64, 2.5, 3.5, 4.5, 5.5];
        let mut dst = [0.0f64; 5];
        shmem_trace::shmem_double_put(dst.as_mut_ptr(), src.as_ptr(), 5, 0);
        assert_eq!(dst, src);
        shmem_trace::shmem_finalize();
    }

    let rows = read_rows("pperf.000.csv");
    assert_eq!(rows[0].join(","), HEADER);

    let init = &rows[1];
    assert_eq!(init[1], "shmem_init");
    assert_eq!(init[3], "-1");
    assert_eq!(init[4], "0");
    assert_eq!(init[5], "0");
    assert!(init[7].contains("base=0x"));

    let put = find(&rows, "shmem_double_put");
    assert_eq!(put[3], "0");
    assert_eq!(put[4], "0");
    assert_eq!(put[5], "40");
    assert!(put[6].contains("0x"), "stack snapshot missing");

    let last = rows.last().expect("empty trace");
    assert_eq!(last[1], "shmem_finalize");

    let mut previous = f64::NEG_INFINITY;
    for row in &rows[1..] {
        let start: f64 = row[0].parse().expect("bad start time");
        let duration: f64 = row[2].parse().expect("bad duration");
        assert!(start >= previous, "start times must not decrease");
        assert!(duration >= 0.0, "durations must not be negative");
        previous = start;
    }
}

#[test]
#[serial]
fn get_and_fetch_add_accounting() {
    let _dir = enter_scratch();
    unsafe {
        shmem_trace::shmem_init();

        let src = [7i32, 8, 9];
        let mut dst = [0i32; 3];
        shmem_trace::shmem_int32_get(dst.as_mut_ptr(), src.as_ptr(), 3, 0);
        assert_eq!(dst, src);

        let mut cell = 40i64;
        let old = shmem_trace::shmem_atomic_int64_fetch_add(&mut cell, 2, 0);
        assert_eq!(old, 40);
        assert_eq!(cell, 42);

        shmem_trace::shmem_finalize();
    }

    let rows = read_rows("pperf.000.csv");

    let get = find(&rows, "shmem_int32_get");
    assert_eq!(get[4], "12");
    assert_eq!(get[5], "0");

    let amo = find(&rows, "shmem_atomic_int64_fetch_add");
    assert_eq!(amo[4], "8");
    assert_eq!(amo[5], "8");
}

#[test]
#[serial]
fn broadcast_on_the_root_counts_bytes_sent() {
    let _dir = enter_scratch();
    unsafe {
        shmem_trace::shmem_init();
        let src = [11u64; 100];
        let mut dst = [0u64; 100];
        let rc = shmem_trace::shmem_broadcast64(
            dst.as_mut_ptr().cast(),
            src.as_ptr().cast(),
            100,
            0,
            0,
            0,
            1,
            std::ptr::null_mut(),
        );
        assert_eq!(rc, 0);
        assert_eq!(dst, src);
        shmem_trace::shmem_finalize();
    }

    let rows = read_rows("pperf.000.csv");
    let bcast = find(&rows, "shmem_broadcast64");
    assert_eq!(bcast[3], "0");
    assert_eq!(bcast[4], "0");
    assert_eq!(bcast[5], "800");
}

#[test]
#[serial]
fn broadcast_off_the_root_counts_bytes_received() {
    let _dir = enter_scratch();
    loopback::configure(2, 4);
    unsafe {
        shmem_trace::shmem_init();
        let src = [11u64; 100];
        let mut dst = [0u64; 100];
        shmem_trace::shmem_broadcast64(
            dst.as_mut_ptr().cast(),
            src.as_ptr().cast(),
            100,
            0,
            0,
            0,
            4,
            std::ptr::null_mut(),
        );
        shmem_trace::shmem_finalize();
    }

    let rows = read_rows("pperf.002.csv");
    let bcast = find(&rows, "shmem_broadcast64");
    assert_eq!(bcast[3], "0");
    assert_eq!(bcast[4], "800");
    assert_eq!(bcast[5], "0");
}

#[test]
#[serial]
fn reductions_sync_and_allocation_rows() {
    let _dir = enter_scratch();
    unsafe {
        shmem_trace::shmem_init();

        let src = [1i64, 2, 3, 4];
        let mut dst = [0i64; 4];
        shmem_trace::shmem_long_sum_to_all(
            dst.as_mut_ptr(),
            src.as_ptr(),
            4,
            0,
            0,
            1,
            std::ptr::null_mut(),
            std::ptr::null_mut(),
        );
        assert_eq!(dst, src);

        let mut team_dst = [0i64; 4];
        let rc = shmem_trace::shmem_int64_max_reduce(
            std::ptr::null_mut(),
            team_dst.as_mut_ptr(),
            src.as_ptr(),
            4,
        );
        assert_eq!(rc, 0);
        assert_eq!(team_dst, src);

        shmem_trace::shmem_barrier_all();
        assert_eq!(shmem_trace::shmem_my_pe(), 0);
        assert_eq!(shmem_trace::shmem_n_pes(), 1);

        let block = shmem_trace::shmem_malloc(64);
        assert!(!block.is_null());
        shmem_trace::shmem_free(block);

        shmem_trace::shmem_finalize();
    }

    let rows = read_rows("pperf.000.csv");

    let to_all = find(&rows, "shmem_long_sum_to_all");
    assert_eq!(to_all[3], "-1");
    assert_eq!(to_all[4], "32");
    assert_eq!(to_all[5], "32");

    let reduce = find(&rows, "shmem_int64_max_reduce");
    assert_eq!(reduce[3], "-1");
    assert_eq!(reduce[4], "32");
    assert_eq!(reduce[5], "32");

    let barrier = find(&rows, "shmem_barrier_all");
    assert_eq!(barrier[3], "-1");
    assert_eq!(barrier[4], "0");
    assert_eq!(barrier[5], "0");

    let malloc = find(&rows, "shmem_malloc");
    assert_eq!(malloc[4], "64");
    assert_eq!(malloc[5], "0");

    let free = find(&rows, "shmem_free");
    assert_eq!(free[4], "0");
    assert_eq!(free[5], "0");
}

#[test]
#[serial]
fn events_before_init_are_dropped() {
    let _dir = enter_scratch();
    unsafe {
        let src = [1u8; 4];
        let mut dst = [0u8; 4];
        shmem_trace::shmem_uint8_put(dst.as_mut_ptr(), src.as_ptr(), 4, 0);
        assert_eq!(dst, src);
        assert_eq!(shmem_trace::shmem_my_pe(), -1);
    }
    assert!(
        !Path::new("pperf.000.csv").exists(),
        "nothing may be written before the identity is known"
    );
}

#[test]
#[serial]
fn close_is_idempotent() {
    let _dir = enter_scratch();
    unsafe { shmem_trace::shmem_init() };

    shmem_trace::sink::close();
    let first = fs::read_to_string("pperf.000.csv").expect("trace file missing");
    shmem_trace::sink::close();
    let second = fs::read_to_string("pperf.000.csv").expect("trace file missing");

    assert_eq!(first, second);
    let headers = first.lines().filter(|l| *l == HEADER).count();
    assert_eq!(headers, 1);
}

#[test]
#[serial]
fn late_events_reopen_the_file_in_append_mode() {
    let _dir = enter_scratch();
    unsafe {
        shmem_trace::shmem_init();
        shmem_trace::shmem_finalize();

        let src = [3.0f32; 2];
        let mut dst = [0.0f32; 2];
        shmem_trace::shmem_float_put(dst.as_mut_ptr(), src.as_ptr(), 2, 0);
    }
    shmem_trace::sink::close();

    let rows = read_rows("pperf.000.csv");
    let headers = rows.iter().filter(|r| r.join(",") == HEADER).count();
    assert_eq!(headers, 1, "append re-open must not duplicate the header");
    let last = rows.last().expect("empty trace");
    assert_eq!(last[1], "shmem_float_put");
    assert_eq!(last[5], "8");
}

#[test]
#[serial]
fn sink_failure_leaves_application_behavior_unchanged() {
    let _dir = enter_scratch();
    // Squat on the trace path so the open fails even when running as root.
    fs::create_dir("pperf.000.csv").expect("failed to squat trace path");

    unsafe {
        shmem_trace::shmem_init();

        let src = [9i16, 8, 7];
        let mut dst = [0i16; 3];
        shmem_trace::shmem_short_put(dst.as_mut_ptr(), src.as_ptr(), 3, 0);
        assert_eq!(dst, src, "data movement must survive a dead sink");

        let mut cell = 1u32;
        let old = shmem_trace::shmem_atomic_uint32_fetch_add(&mut cell, 5, 0);
        assert_eq!(old, 1);
        assert_eq!(cell, 6);

        shmem_trace::shmem_finalize();
    }

    assert!(
        Path::new("pperf.000.csv").is_dir(),
        "no trace output may appear once the sink has failed"
    );
}
