// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Destinations for streamed child output.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// Which pipe a chunk came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        })
    }
}

/// Receives decoded output as it is read.
///
/// Chunks follow pipe reads, not lines: one write by the child may arrive
/// split across calls, and several writes may arrive in one.
pub trait OutputSink: Send + 'static {
    fn emit(&mut self, chunk: &str);
}

impl<F> OutputSink for F
where
    F: FnMut(&str) + Send + 'static,
{
    fn emit(&mut self, chunk: &str) {
        self(chunk)
    }
}

/// Collects every chunk into a shared buffer.
///
/// Clones share the buffer, so keep one clone and hand the other to the
/// executor.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    chunks: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far, concatenated.
    pub fn contents(&self) -> String {
        self.chunks.lock().concat()
    }

    /// Number of `emit` calls received.
    pub fn chunk_count(&self) -> usize {
        self.chunks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.lock().is_empty()
    }
}

impl OutputSink for CaptureSink {
    fn emit(&mut self, chunk: &str) {
        self.chunks.lock().push(chunk.to_string());
    }
}

/// Forwards chunks to `tracing` at info level, one event per line.
#[derive(Debug, Clone)]
pub struct TraceSink {
    command: String,
    stream: Stream,
}

impl TraceSink {
    pub fn new(command: impl Into<String>, stream: Stream) -> Self {
        Self { command: command.into(), stream }
    }
}

impl OutputSink for TraceSink {
    fn emit(&mut self, chunk: &str) {
        for line in chunk.lines().filter(|l| !l.trim().is_empty()) {
            tracing::info!(cmd = %self.command, stream = %self.stream, "{line}");
        }
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
