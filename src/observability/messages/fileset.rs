// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for fileset manifest events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Manifest read and parsed.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct FilesetLoaded<'a> {
    pub path: &'a str,
    pub sample_count: usize,
    pub file_count: usize,
}

impl Display for FilesetLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded fileset '{}': {} samples, {} files",
            self.path, self.sample_count, self.file_count
        )
    }
}

impl StructuredLog for FilesetLoaded<'_> {
    fn log(&self) {
        tracing::debug!(
            path = self.path,
            sample_count = self.sample_count,
            file_count = self.file_count,
            "{}", self
        );
    }
}

/// Files truncated and rewritten through the redirector.
///
/// # Log Level
/// `info!` - Important operational event
pub struct FilesetResolved<'a> {
    pub redirector: &'a str,
    pub sample_count: usize,
    pub file_count: usize,
}

impl Display for FilesetResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Resolved {} files across {} samples via redirector '{}'",
            self.file_count, self.sample_count, self.redirector
        )
    }
}

impl StructuredLog for FilesetResolved<'_> {
    fn log(&self) {
        tracing::info!(
            redirector = self.redirector,
            sample_count = self.sample_count,
            file_count = self.file_count,
            "{}", self
        );
    }
}

/// More than one sample in the manifest; artifacts are named after the last one.
///
/// # Log Level
/// `warn!` - Potential issue
pub struct MultipleSamplesInFileset<'a> {
    pub sample_count: usize,
    pub output_sample: &'a str,
}

impl Display for MultipleSamplesInFileset<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Fileset has {} samples; output will be named after the last sample '{}'",
            self.sample_count, self.output_sample
        )
    }
}

impl StructuredLog for MultipleSamplesInFileset<'_> {
    fn log(&self) {
        tracing::warn!(
            sample_count = self.sample_count,
            output_sample = self.output_sample,
            "{}", self
        );
    }
}
