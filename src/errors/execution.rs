// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failure reported by a processor for a single work item.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("failed to launch processor command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("processor I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("processor exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("processor produced malformed output: {0}")]
    MalformedOutput(String),
}

/// Failure talking to a compute cluster.
#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("failed to connect to cluster at '{address}': {reason}")]
    Connect { address: String, reason: String },

    #[error("cluster request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("cluster rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("failed to snapshot working directory: {0}")]
    Snapshot(#[from] std::io::Error),
}

/// Errors that abort a job run. None of them are retried.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("processor '{processor}' failed on '{file}': {source}")]
    Processor {
        processor: String,
        file: String,
        #[source]
        source: ProcessorError,
    },

    #[error("cluster task for '{file}' failed: {source}")]
    Cluster {
        file: String,
        #[source]
        source: ClusterError,
    },

    #[error("worker task aborted: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("worker pool closed: {0}")]
    WorkerPool(#[from] tokio::sync::AcquireError),

    #[error("inconsistent run statistics: events_after ({after}) exceeds events_before ({before})")]
    InconsistentStatistics { before: f64, after: f64 },
}
