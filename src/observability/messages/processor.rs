// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for external processor invocations.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Processor process launched for one work item.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct ProcessorLaunched<'a> {
    pub processor: &'a str,
    pub command: &'a str,
    pub file: &'a str,
}

impl Display for ProcessorLaunched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Launching '{} {}' for '{}'",
            self.command, self.processor, self.file
        )
    }
}

impl StructuredLog for ProcessorLaunched<'_> {
    fn log(&self) {
        tracing::debug!(
            processor = self.processor,
            command = self.command,
            file = self.file,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "processor",
            span_name = name,
            processor = self.processor,
            file = self.file,
        )
    }
}

/// Processor process exited unsuccessfully.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ProcessorExited<'a> {
    pub processor: &'a str,
    pub file: &'a str,
    pub status: &'a str,
}

impl Display for ProcessorExited<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' exited with {} on '{}'",
            self.processor, self.status, self.file
        )
    }
}

impl StructuredLog for ProcessorExited<'_> {
    fn log(&self) {
        tracing::error!(
            processor = self.processor,
            file = self.file,
            status = self.status,
            "{}", self
        );
    }
}
