// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod execution;
mod fileset;
mod output;

pub use config::ConfigError;
pub use execution::{ClusterError, ExecutionError, ProcessorError};
pub use fileset::FilesetError;
pub use output::OutputError;

/// Top-level error for a driver run. Every variant is fatal.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("fileset error: {0}")]
    Fileset(#[from] FilesetError),

    #[error("cluster bootstrap failed: {0}")]
    Cluster(#[from] ClusterError),

    #[error("job execution failed: {0}")]
    Execution(#[from] ExecutionError),

    #[error("output error: {0}")]
    Output(#[from] OutputError),
}
