// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Diagnostic and operational logging goes through the message types in
//! [`messages`]. Each message is a struct with a `Display` implementation
//! and a [`messages::StructuredLog`] implementation that fixes its level
//! and fields, so no log line is a free-floating string.
//!
//! # Usage
//!
//! ```rust
//! use wprime_runner::observability::messages::output::OutputWritten;
//! use wprime_runner::observability::messages::StructuredLog;
//!
//! OutputWritten {
//!     kind: "output",
//!     path: "./outfiles/test/ttbar/2024-01-05/2b1l/2017/mu/A.pkl",
//! }
//! .log();
//! ```

pub mod logging;
pub mod messages;
