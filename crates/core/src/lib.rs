// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fx-core: data model for the fx script-execution engine

pub mod macros;

pub mod error;
pub mod outcome;
pub mod outputs;
pub mod request;

pub use error::FxError;
pub use outcome::{ErrorKind, ExecutionOutcome, ExitInfo, ScriptFailure};
pub use outputs::OutputMap;
pub use request::{ExecutionRequest, ExecutionRequestBuilder, ScriptArgs};
