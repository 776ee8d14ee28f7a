// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Per-process trace sink.
//!
//! One lazily opened file per PE, `pperf.NNN.csv` in the working directory.
//! The explicit init path truncates and writes the header; the lazy path
//! appends, adding the header only to an empty file. Every failure is
//! reported once through `tracing` and degrades to drop-mode: the wrapped
//! application must behave identically with or without a working sink.
//!
//! A mutex guards the whole open-check-and-write section so concurrent
//! wrapped calls from one process cannot interleave partial records.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tracing::{debug, error};

use crate::context;
use crate::event::{CallStack, TraceEvent, HEADER};

const FILE_PREFIX: &str = "pperf";

pub(crate) fn trace_file_name(pe: i32) -> String {
    format!("{FILE_PREFIX}.{pe:03}.csv")
}

#[derive(Debug, Error)]
enum SinkError {
    #[error("failed to open trace file {path}: {source}")]
    Open { path: String, source: io::Error },
    #[error("failed to write to trace file: {0}")]
    Write(#[from] io::Error),
}

enum State {
    Unopened,
    Open(BufWriter<File>),
    Failed,
}

struct TraceSink {
    state: State,
}

impl TraceSink {
    const fn new() -> Self {
        TraceSink {
            state: State::Unopened,
        }
    }

    fn open_fresh(&mut self, pe: i32) -> Result<(), SinkError> {
        let path = trace_file_name(pe);
        let file = File::create(&path).map_err(|source| SinkError::Open {
            path: path.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{HEADER}")?;
        debug!("opened trace file {path}");
        self.state = State::Open(writer);
        Ok(())
    }

    fn open_append(&mut self, pe: i32) -> Result<(), SinkError> {
        let path = trace_file_name(pe);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| SinkError::Open {
                path: path.clone(),
                source,
            })?;
        let empty = file.metadata().map(|m| m.len() == 0).unwrap_or(false);
        let mut writer = BufWriter::new(file);
        if empty {
            writeln!(writer, "{HEADER}")?;
        }
        debug!("opened trace file {path} for append");
        self.state = State::Open(writer);
        Ok(())
    }
}

static SINK: Mutex<TraceSink> = Mutex::new(TraceSink::new());

fn lock() -> MutexGuard<'static, TraceSink> {
    SINK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Init path: truncate this PE's trace file and write the header.
pub(crate) fn open_fresh(pe: i32) {
    let mut sink = lock();
    if let Err(err) = sink.open_fresh(pe) {
        error!("trace sink disabled: {err}");
        sink.state = State::Failed;
    }
}

/// Append one event, lazily opening the file on the first record after the
/// identity is known. Records before that point are dropped by design, as
/// are all records once the sink has failed.
pub(crate) fn record(event: &TraceEvent) {
    let pe = context::current_pe();
    if pe < 0 {
        return;
    }
    let mut sink = lock();
    if let State::Unopened = sink.state {
        if let Err(err) = sink.open_append(pe) {
            error!("trace sink disabled: {err}");
            sink.state = State::Failed;
            return;
        }
    }
    let State::Open(writer) = &mut sink.state else {
        return;
    };
    let stack = CallStack::capture();
    if let Err(err) = event.render_line(&stack, writer) {
        error!("trace sink disabled: {err}");
        sink.state = State::Failed;
    }
}

/// Flush and release the file handle. Idempotent; a later event lazily
/// re-opens the file in append mode.
pub fn close() {
    let mut sink = lock();
    if let State::Open(writer) = &mut sink.state {
        if let Err(err) = writer.flush() {
            error!("failed to flush trace file: {err}");
        }
        sink.state = State::Unopened;
        debug!("closed trace file");
    }
}

pub(crate) fn reset_for_tests() {
    lock().state = State::Unopened;
}
