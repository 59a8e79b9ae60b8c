// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;

use crate::config::{LeptonFlavor, OutputType};

/// Errors raised while turning invocation arguments into a runnable job.
///
/// Every variant is reported before any job execution begins.
#[derive(Debug)]
pub enum ConfigError {
    /// The `qcd` processor only supports the muon channel with histogram output
    UnsupportedQcdSelection {
        lepton_flavor: LeptonFlavor,
        output_type: OutputType,
    },
    /// No fileset manifest was given
    MissingFileset,
    /// The `dask` executor was selected without a cluster address
    MissingClusterAddress,
    /// `--nfiles` must be -1 or a non-negative count
    InvalidFileLimit { value: i64 },
    /// The `futures` executor needs at least one worker
    InvalidWorkerCount { value: usize },
    /// Chunk size must be positive
    InvalidChunkSize { value: u64 },
    /// No ttbar selection table exists for the channel/flavor pair
    UnknownSelection {
        channel: String,
        lepton_flavor: LeptonFlavor,
    },
    /// A run-configuration file could not be read
    ConfigFileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A run-configuration file could not be parsed
    ConfigFileInvalid { path: PathBuf, reason: String },
    /// The embedded selection tables are malformed
    SelectionTableInvalid { table: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnsupportedQcdSelection {
                lepton_flavor,
                output_type,
            } => write!(
                f,
                "Only muon channel and histograms are available for the qcd processor (got lepton_flavor='{}', output_type='{}')",
                lepton_flavor, output_type
            ),
            ConfigError::MissingFileset => write!(f, "A fileset manifest is required (--fileset)"),
            ConfigError::MissingClusterAddress => {
                write!(f, "The dask executor requires a cluster address (--client)")
            }
            ConfigError::InvalidFileLimit { value } => write!(
                f,
                "Invalid file limit {}: use -1 for all files or a non-negative count",
                value
            ),
            ConfigError::InvalidWorkerCount { value } => {
                write!(f, "Invalid worker count {}: at least one worker is required", value)
            }
            ConfigError::InvalidChunkSize { value } => {
                write!(f, "Invalid chunk size {}: must be positive", value)
            }
            ConfigError::UnknownSelection {
                channel,
                lepton_flavor,
            } => write!(
                f,
                "No ttbar selection defined for channel '{}' with lepton flavor '{}'",
                channel, lepton_flavor
            ),
            ConfigError::ConfigFileUnreadable { path, source } => {
                write!(f, "Failed to read run config '{}': {}", path.display(), source)
            }
            ConfigError::ConfigFileInvalid { path, reason } => {
                write!(f, "Failed to parse run config '{}': {}", path.display(), reason)
            }
            ConfigError::SelectionTableInvalid { table, reason } => {
                write!(f, "Selection table '{}' is malformed: {}", table, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ConfigFileUnreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}
