// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The trace record: one event per intercepted call.
//!
//! Events render as one comma-delimited line of the split receive/send
//! schema. Timestamps carry nanosecond precision; the bounded call stack is
//! a pipe-joined list of raw return addresses that only offline tooling can
//! symbolize.

use std::io::{self, Write};

use crate::context;

/// Header line naming every field, written once per trace file.
pub(crate) const HEADER: &str =
    "Time,Function,Duration_Sec,Target_PE,Bytes_Received,Bytes_Sent,Stacktrace,Metadata";

/// Upper bound on captured call-stack depth.
pub const MAX_STACK_FRAMES: usize = 10;

/// Raw return-address snapshot of the call site, at most
/// [`MAX_STACK_FRAMES`] deep.
pub struct CallStack {
    frames: [usize; MAX_STACK_FRAMES],
    len: usize,
}

impl CallStack {
    pub fn capture() -> Self {
        let mut frames = [0usize; MAX_STACK_FRAMES];
        let mut len = 0;
        backtrace::trace(|frame| {
            frames[len] = frame.ip() as usize;
            len += 1;
            len < MAX_STACK_FRAMES
        });
        CallStack { frames, len }
    }

    pub fn frames(&self) -> &[usize] {
        &self.frames[..self.len]
    }

    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        CallStack {
            frames: [0; MAX_STACK_FRAMES],
            len: 0,
        }
    }
}

/// Bytes moved by one call, split by direction relative to the calling
/// process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Volume {
    pub received: u64,
    pub sent: u64,
}

impl Volume {
    /// No data movement.
    pub const NONE: Volume = Volume {
        received: 0,
        sent: 0,
    };

    /// Bytes leaving the calling process (puts, non-fetching atomics).
    pub fn sent(bytes: usize) -> Self {
        Volume {
            received: 0,
            sent: bytes as u64,
        }
    }

    /// Bytes arriving at the calling process (gets, atomic fetches).
    pub fn received(bytes: usize) -> Self {
        Volume {
            received: bytes as u64,
            sent: 0,
        }
    }

    /// Bytes moving both ways (fetching read-modify-write atomics, rootless
    /// reductions).
    pub fn both(bytes: usize) -> Self {
        Volume {
            received: bytes as u64,
            sent: bytes as u64,
        }
    }

    /// Rooted collective attribution: the root sends, everyone else
    /// receives.
    pub fn rooted(bytes: usize, root: i32) -> Self {
        if context::current_pe() == root {
            Volume::sent(bytes)
        } else {
            Volume::received(bytes)
        }
    }
}

/// One intercepted call.
pub struct TraceEvent {
    pub start: f64,
    pub operation: &'static str,
    pub duration: f64,
    pub target_pe: i32,
    pub volume: Volume,
    pub metadata: Option<String>,
}

impl TraceEvent {
    pub fn call(
        operation: &'static str,
        start: f64,
        duration: f64,
        target_pe: i32,
        volume: Volume,
    ) -> Self {
        TraceEvent {
            start,
            operation,
            duration,
            target_pe,
            volume,
            metadata: None,
        }
    }

    /// Init/finalize event: never targeted, never moves data.
    pub fn lifecycle(
        operation: &'static str,
        start: f64,
        duration: f64,
        metadata: Option<String>,
    ) -> Self {
        TraceEvent {
            start,
            operation,
            duration,
            target_pe: -1,
            volume: Volume::NONE,
            metadata,
        }
    }

    pub(crate) fn render_line(&self, stack: &CallStack, out: &mut impl Write) -> io::Result<()> {
        write!(
            out,
            "{:.9},{},{:.9},{},{},{},",
            self.start,
            self.operation,
            self.duration,
            self.target_pe,
            self.volume.received,
            self.volume.sent,
        )?;
        for addr in stack.frames() {
            write!(out, "{addr:#x}|")?;
        }
        match &self.metadata {
            Some(meta) => writeln!(out, ",{}", sanitize_metadata(meta)),
            None => writeln!(out, ","),
        }
    }
}

// The trace format owns ',' and the stack field owns '|'; metadata must not
// smuggle either a record or a line break in.
fn sanitize_metadata(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            ',' => ';',
            '\n' | '\r' => ' ',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn render(event: &TraceEvent, stack: &CallStack) -> String {
        let mut buf = Vec::new();
        event.render_line(stack, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn put_volume_is_directional() {
        let v = Volume::sent(5 * 8);
        assert_eq!(v.sent, 40);
        assert_eq!(v.received, 0);
    }

    #[test]
    fn fetching_atomic_volume_counts_both_sides() {
        let v = Volume::both(8);
        assert_eq!(v.sent, 8);
        assert_eq!(v.received, 8);
    }

    #[test]
    fn line_has_eight_fields_and_fixed_precision() {
        let event = TraceEvent::call("shmem_double_put", 1.5, 0.25, 3, Volume::sent(80));
        let line = render(&event, &CallStack::empty());
        let fields: Vec<&str> = line.trim_end().split(',').collect();
        assert_eq!(fields.len(), 8);
        assert_eq!(fields[0], "1.500000000");
        assert_eq!(fields[1], "shmem_double_put");
        assert_eq!(fields[2], "0.250000000");
        assert_eq!(fields[3], "3");
        assert_eq!(fields[4], "0");
        assert_eq!(fields[5], "80");
        assert_eq!(fields[6], "");
        assert_eq!(fields[7], "");
    }

    #[test]
    fn stack_renders_pipe_joined_hex() {
        let event = TraceEvent::call("shmem_quiet", 0.0, 0.0, -1, Volume::NONE);
        let stack = CallStack {
            frames: [0xdead, 0xbeef, 0, 0, 0, 0, 0, 0, 0, 0],
            len: 2,
        };
        let line = render(&event, &stack);
        let fields: Vec<&str> = line.trim_end().split(',').collect();
        assert_eq!(fields[6], "0xdead|0xbeef|");
    }

    #[test]
    fn lifecycle_event_is_untargeted() {
        let event = TraceEvent::lifecycle("shmem_init", 0.0, 0.1, Some("host=nodeA".into()));
        assert_eq!(event.target_pe, -1);
        assert_eq!(event.volume, Volume::NONE);
        let line = render(&event, &CallStack::empty());
        assert!(line.trim_end().ends_with(",host=nodeA"));
    }

    #[test]
    fn capture_respects_frame_bound() {
        let stack = CallStack::capture();
        assert!(stack.frames().len() <= MAX_STACK_FRAMES);
        assert!(!stack.frames().is_empty());
    }

    proptest! {
        #[test]
        fn metadata_never_leaks_delimiters(meta in ".*") {
            let clean = sanitize_metadata(&meta);
            prop_assert!(!clean.contains(','));
            prop_assert!(!clean.contains('\n'));
            prop_assert!(!clean.contains('\r'));
        }

        #[test]
        fn line_always_has_eight_fields(
            start in 0.0f64..1e6,
            duration in 0.0f64..1e3,
            target in -1i32..1024,
            received in proptest::num::u64::ANY,
            sent in proptest::num::u64::ANY,
            meta in "[ -~]*",
        ) {
            let event = TraceEvent {
                start,
                operation: "shmem_int_put",
                duration,
                target_pe: target,
                volume: Volume { received, sent },
                metadata: Some(meta),
            };
            let line = render(&event, &CallStack::empty());
            prop_assert_eq!(line.trim_end().split(',').count(), 8);
        }
    }
}
