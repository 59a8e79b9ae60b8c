// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Every diagnostic the driver emits is a small struct implementing
//! `Display` for the human-readable line and [`StructuredLog`] for the
//! level and fields it is logged with.
//!
//! # Organization
//!
//! * `cluster` - cluster connection and code upload events
//! * `engine` - job execution lifecycle events
//! * `fileset` - manifest loading and resolution events
//! * `output` - artifact and metadata persistence events
//! * `processor` - external processor invocation events
//!
//! # Usage Pattern
//!
//! ```rust
//! use wprime_runner::observability::messages::engine::JobStarted;
//! use wprime_runner::observability::messages::StructuredLog;
//!
//! let msg = JobStarted {
//!     strategy: "futures",
//!     processor: "ttbar",
//!     sample_count: 2,
//!     file_count: 5,
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod cluster;
pub mod engine;
pub mod fileset;
pub mod output;
pub mod processor;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    ///
    /// Only messages that mark the start of a unit of work open a real span.
    fn span(&self, _name: &str) -> Span {
        Span::none()
    }
}
