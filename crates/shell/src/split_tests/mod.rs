// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Splitter tests, grouped by mode.

#[macro_use]
mod macros;

mod errors;
mod plain;
mod properties;
mod shell;
mod states;
