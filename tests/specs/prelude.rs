// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for the end-to-end tests.

use std::sync::Once;

pub use kiln_dockerfile::{
    resolve_entrypoint, CmdDirective, Directive, EntrypointDirective, FormError,
};
pub use kiln_shell::{exec_command, CaptureSink, ExecError, Executor};
use tracing_subscriber::EnvFilter;

/// Route logs through the test harness. Set `RUST_LOG=kiln_shell=debug` to see them.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// What a finished run left behind.
pub struct Output {
    pub stdout: String,
    pub stderr: String,
    pub result: Result<(), ExecError>,
}

impl Output {
    pub fn passes(&self) -> &Self {
        assert!(self.result.is_ok(), "{:?}\nstderr: {}", self.result, self.stderr);
        self
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.result.as_ref().err().and_then(ExecError::exit_code)
    }
}

/// Run an executor to completion on a fresh runtime, capturing both streams.
pub fn run(executor: Executor) -> Output {
    init_tracing();
    let stdout = CaptureSink::new();
    let stderr = CaptureSink::new();
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let result = runtime.block_on(executor.run(stdout.clone(), stderr.clone()));
    Output { stdout: stdout.contents(), stderr: stderr.contents(), result }
}

/// Resolve `ENTRYPOINT <args>` and run it.
pub fn run_entrypoint(args: &str) -> Output {
    let argv = resolve_entrypoint(args).unwrap();
    run(Executor::new(argv))
}
