// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawning a child and streaming its output.

use std::io;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use std::time::Instant;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::task::JoinHandle;

use super::error::ExecError;
use super::identity::{home_dir, ResolveUser, SystemUsers};
use super::sink::{OutputSink, Stream};

/// A single command invocation.
///
/// ```ignore
/// Executor::new(["make", "install"])
///     .cwd("/src")
///     .user("builder:builder")
///     .run(CaptureSink::new(), TraceSink::new("make", Stream::Stderr))
///     .await?;
/// ```
pub struct Executor {
    argv: Vec<String>,
    cwd: Option<PathBuf>,
    user: Option<String>,
    env: Vec<(String, String)>,
    buffer_size: usize,
    resolver: Arc<dyn ResolveUser>,
}

impl Executor {
    /// `argv[0]` is the program; the rest are its arguments.
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            argv: argv.into_iter().map(Into::into).collect(),
            cwd: None,
            user: None,
            env: Vec::new(),
            buffer_size: crate::env::stream_buffer_size(),
            resolver: Arc::new(SystemUsers),
        }
    }

    /// Working directory for the child. An empty path keeps the caller's.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.cwd = (!dir.as_os_str().is_empty()).then_some(dir);
        self
    }

    /// Run as `user[:group]`. An empty spec keeps the caller's identity.
    pub fn user(mut self, spec: impl Into<String>) -> Self {
        let spec = spec.into();
        self.user = (!spec.is_empty()).then_some(spec);
        self
    }

    /// Set an environment variable on top of the inherited environment.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env.extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Size of each pipe read. Zero is ignored.
    pub fn buffer_size(mut self, bytes: usize) -> Self {
        if bytes > 0 {
            self.buffer_size = bytes;
        }
        self
    }

    /// Replace the default passwd/group lookup.
    pub fn resolver(mut self, resolver: impl ResolveUser + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// Run to completion, streaming stdout and stderr into the sinks.
    ///
    /// Both pipes are drained by their own task from the moment the child
    /// starts, so a chatty child cannot block on a full pipe. Sinks are never
    /// called if the child fails to start.
    pub async fn run<O, E>(self, on_stdout: O, on_stderr: E) -> Result<(), ExecError>
    where
        O: OutputSink,
        E: OutputSink,
    {
        let Some((program, args)) = self.argv.split_first() else {
            return Err(ExecError::EmptyCommand);
        };
        let start = Instant::now();

        let span = tracing::info_span!(
            "shell.exec",
            cmd = %program,
            args = ?args,
            user = self.user.as_deref().unwrap_or(""),
            pgid = tracing::field::Empty,
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );

        let mut process = std::process::Command::new(program);
        process.args(args);
        if let Some(dir) = &self.cwd {
            process.current_dir(dir);
        }
        process.envs(self.env.iter().map(|(k, v)| (k, v)));

        if let Some(user) = &self.user {
            let identity = self
                .resolver
                .resolve(user)
                .map_err(|source| ExecError::ResolveUser { user: user.clone(), source })?;
            process.uid(identity.uid).gid(identity.gid);
            // Set last so it wins over any inherited or explicit HOME.
            process.env("HOME", home_dir(user));
        }

        // Own process group so the whole tree can be signalled together.
        process.process_group(0);
        process.stdin(Stdio::null());
        process.stdout(Stdio::piped());
        process.stderr(Stdio::piped());

        let mut child = tokio::process::Command::from(process).spawn().map_err(|source| {
            ExecError::SpawnFailed { command: program.clone(), source }
        })?;
        if let Some(pid) = child.id() {
            span.record("pgid", pid);
        }
        tracing::debug!(parent: &span, "spawned");

        let buffer_size = self.buffer_size;
        let stdout_task =
            tokio::spawn(drain(child.stdout.take(), on_stdout, Stream::Stdout, buffer_size));
        let stderr_task =
            tokio::spawn(drain(child.stderr.take(), on_stderr, Stream::Stderr, buffer_size));

        let status = match child.wait().await {
            Ok(status) => status,
            Err(source) => {
                // Dropping the readers closes our ends of the pipes.
                stdout_task.abort();
                stderr_task.abort();
                return Err(ExecError::WaitFailed { command: program.clone(), source });
            }
        };

        let (_, stdout_result) = join_drain(stdout_task).await;
        let (stderr_sink, stderr_result) = join_drain(stderr_task).await;

        let exit_code = status.code().unwrap_or(-1);
        span.record("exit_code", exit_code);
        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        span.record("duration_ms", duration_ms);

        if !status.success() {
            if let Some(mut sink) = stderr_sink {
                sink.emit(&format!("Command exited with {exit_code}\n"));
            }
            return Err(ExecError::CommandFailed { command: program.clone(), exit_code });
        }

        stdout_result.map_err(|source| ExecError::Stream {
            command: program.clone(),
            stream: Stream::Stdout,
            source,
        })?;
        stderr_result.map_err(|source| ExecError::Stream {
            command: program.clone(),
            stream: Stream::Stderr,
            source,
        })?;
        Ok(())
    }
}

/// Run `argv` in `working_dir` as `user`, streaming output into the sinks.
///
/// `None` or empty values inherit the caller's directory and identity.
pub async fn exec_command<I, S, O, E>(
    argv: I,
    working_dir: Option<&Path>,
    user: Option<&str>,
    on_stdout: O,
    on_stderr: E,
) -> Result<(), ExecError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    O: OutputSink,
    E: OutputSink,
{
    let mut executor = Executor::new(argv);
    if let Some(dir) = working_dir {
        executor = executor.cwd(dir);
    }
    if let Some(user) = user {
        executor = executor.user(user);
    }
    executor.run(on_stdout, on_stderr).await
}

/// Copy `reader` into `sink` until end of stream, handing the sink back.
///
/// A multi-byte character split across reads is held back until it is
/// complete, so chunks concatenate to exactly what the child wrote. Only
/// invalid bytes, or a truncated character at end of stream, become U+FFFD.
/// A read error is reported once on the sink itself before returning.
async fn drain<R, S>(
    reader: Option<R>,
    mut sink: S,
    stream: Stream,
    buffer_size: usize,
) -> (S, io::Result<()>)
where
    R: AsyncRead + Unpin,
    S: OutputSink,
{
    let Some(mut reader) = reader else {
        return (sink, Ok(()));
    };
    // Room for a carried partial character plus at least one new byte.
    let mut buffer = vec![0u8; buffer_size.max(4)];
    let mut carried = 0;
    loop {
        match reader.read(&mut buffer[carried..]).await {
            Ok(0) => {
                if carried > 0 {
                    sink.emit(&String::from_utf8_lossy(&buffer[..carried]));
                }
                return (sink, Ok(()));
            }
            Ok(n) => {
                let filled = carried + n;
                carried = emit_utf8(&mut sink, &buffer[..filled]);
                buffer.copy_within(filled - carried..filled, 0);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                if carried > 0 {
                    sink.emit(&String::from_utf8_lossy(&buffer[..carried]));
                }
                sink.emit(&format!("Failed to stream {stream} from command: {e}\n"));
                return (sink, Err(e));
            }
        }
    }
}

/// Emit the decodable part of `bytes` as one chunk.
///
/// Returns the length of an incomplete character at the end of `bytes`,
/// which the caller carries into the next read.
fn emit_utf8<S: OutputSink>(sink: &mut S, mut bytes: &[u8]) -> usize {
    let mut text = String::new();
    let carried = loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                text.push_str(valid);
                break 0;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                text.push_str(&String::from_utf8_lossy(valid));
                match e.error_len() {
                    Some(len) => {
                        text.push(char::REPLACEMENT_CHARACTER);
                        bytes = &rest[len..];
                    }
                    None => break rest.len(),
                }
            }
        }
    };
    if !text.is_empty() {
        sink.emit(&text);
    }
    carried
}

async fn join_drain<S>(task: JoinHandle<(S, io::Result<()>)>) -> (Option<S>, io::Result<()>) {
    match task.await {
        Ok((sink, result)) => (Some(sink), result),
        Err(e) => (None, Err(io::Error::other(e))),
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
