// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for job execution lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Executor selection and configuration
//! * Job lifecycle (start, completion, failure)
//! * Per-file progress

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Executor chosen for the run.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use wprime_runner::observability::messages::engine::ExecutorSelected;
///
/// let msg = ExecutorSelected {
///     strategy: "futures",
///     workers: Some(8),
/// };
///
/// tracing::info!("{}", msg);
/// ```
/// `workers` is `None` when the pool size is owned by a remote cluster.
pub struct ExecutorSelected<'a> {
    pub strategy: &'a str,
    pub workers: Option<usize>,
}

impl Display for ExecutorSelected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.workers {
            Some(workers) => write!(
                f,
                "Using {} executor with {} workers",
                self.strategy, workers
            ),
            None => write!(f, "Using {} executor on remote workers", self.strategy),
        }
    }
}

impl StructuredLog for ExecutorSelected<'_> {
    fn log(&self) {
        tracing::info!(strategy = self.strategy, workers = ?self.workers, "{}", self);
    }
}

/// Job started.
///
/// # Log Level
/// `info!` - Important operational event
pub struct JobStarted<'a> {
    pub strategy: &'a str,
    pub processor: &'a str,
    pub sample_count: usize,
    pub file_count: usize,
}

impl Display for JobStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Running processor '{}' with {} executor: {} samples, {} files",
            self.processor, self.strategy, self.sample_count, self.file_count
        )
    }
}

impl StructuredLog for JobStarted<'_> {
    fn log(&self) {
        tracing::info!(
            strategy = self.strategy,
            processor = self.processor,
            sample_count = self.sample_count,
            file_count = self.file_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "job",
            span_name = name,
            strategy = self.strategy,
            processor = self.processor,
            file_count = self.file_count,
        )
    }
}

/// Job finished and all partial results were merged.
///
/// # Log Level
/// `info!` - Important operational event
pub struct JobCompleted<'a> {
    pub strategy: &'a str,
    pub processor: &'a str,
    pub events_before: f64,
    pub events_after: f64,
    pub duration: Duration,
}

impl Display for JobCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' completed with {} executor in {:?}: {} of {} events passed",
            self.processor, self.strategy, self.duration, self.events_after, self.events_before
        )
    }
}

impl StructuredLog for JobCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            strategy = self.strategy,
            processor = self.processor,
            events_before = self.events_before,
            events_after = self.events_after,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }
}

/// Job aborted.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct JobFailed<'a> {
    pub strategy: &'a str,
    pub processor: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for JobFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' failed with {} executor: {}",
            self.processor, self.strategy, self.error
        )
    }
}

impl StructuredLog for JobFailed<'_> {
    fn log(&self) {
        tracing::error!(
            strategy = self.strategy,
            processor = self.processor,
            error = %self.error,
            "{}", self
        );
    }
}

/// One work item merged into the running result.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct WorkItemCompleted<'a> {
    pub file: &'a str,
    pub completed: usize,
    pub total: usize,
}

impl Display for WorkItemCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "[{}/{}] processed '{}'", self.completed, self.total, self.file)
    }
}

impl StructuredLog for WorkItemCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            file = self.file,
            completed = self.completed,
            total = self.total,
            "{}", self
        );
    }
}
