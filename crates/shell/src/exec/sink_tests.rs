// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use super::*;

#[test]
fn capture_clones_share_buffer() {
    let capture = CaptureSink::new();
    let mut handed_off = capture.clone();
    assert!(capture.is_empty());

    handed_off.emit("a");
    handed_off.emit("b\n");

    assert_eq!(capture.contents(), "ab\n");
    assert_eq!(capture.chunk_count(), 2);
}

#[test]
fn stream_display() {
    assert_eq!(Stream::Stdout.to_string(), "stdout");
    assert_eq!(Stream::Stderr.to_string(), "stderr");
}

#[derive(Clone, Default)]
struct SharedWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn trace_sink_logs_each_nonblank_line() {
    let output = SharedWriter::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut sink = TraceSink::new("make", Stream::Stderr);
        sink.emit("first\n\n  \nsecond\n");
    });

    let logged = String::from_utf8(output.0.lock().clone()).unwrap();
    let lines: Vec<&str> = logged.lines().collect();
    assert_eq!(lines.len(), 2, "{logged}");
    assert!(lines[0].contains("first"));
    assert!(lines[1].contains("second"));
    assert!(lines.iter().all(|l| l.contains("cmd=make") && l.contains("stream=stderr")));
}
