// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for cluster connection and worker bootstrap.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Cluster scheduler answered the health probe.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ClusterConnected<'a> {
    pub address: &'a str,
}

impl Display for ClusterConnected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Connected to cluster at '{}'", self.address)
    }
}

impl StructuredLog for ClusterConnected<'_> {
    fn log(&self) {
        tracing::info!(address = self.address, "{}", self);
    }
}

/// Code snapshot installed on the workers.
///
/// # Log Level
/// `info!` - Important operational event
pub struct CodeUploaded<'a> {
    pub address: &'a str,
    pub file_count: usize,
    pub restart: bool,
}

impl Display for CodeUploaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Uploaded {} files to workers at '{}' (restart={})",
            self.file_count, self.address, self.restart
        )
    }
}

impl StructuredLog for CodeUploaded<'_> {
    fn log(&self) {
        tracing::info!(
            address = self.address,
            file_count = self.file_count,
            restart = self.restart,
            "{}", self
        );
    }
}

/// Code upload failed; the run continues with whatever the workers have.
///
/// # Log Level
/// `warn!` - Potential issue
pub struct CodeUploadFailed<'a> {
    pub address: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for CodeUploadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Code upload to '{}' failed, continuing with installed worker code: {}",
            self.address, self.error
        )
    }
}

impl StructuredLog for CodeUploadFailed<'_> {
    fn log(&self) {
        tracing::warn!(address = self.address, error = %self.error, "{}", self);
    }
}
