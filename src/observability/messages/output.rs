// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for output persistence.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// A file was written under the output directory.
///
/// # Log Level
/// `info!` - Important operational event
pub struct OutputWritten<'a> {
    pub kind: &'a str,
    pub path: &'a str,
}

impl Display for OutputWritten<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Saving {} to {}", self.kind, self.path)
    }
}

impl StructuredLog for OutputWritten<'_> {
    fn log(&self) {
        tracing::info!(kind = self.kind, path = self.path, "{}", self);
    }
}
