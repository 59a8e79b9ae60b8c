// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Up-front validation of invocation arguments.
//!
//! All configuration errors are detected here, before the fileset is read
//! or any executor is bootstrapped:
//!
//! 1. **Fileset presence**: a manifest path is mandatory
//! 2. **Numeric ranges**: file limit, chunk size and worker count
//! 3. **Executor requirements**: `dask` needs a cluster address
//! 4. **Processor schema**: builds the per-processor configuration, which
//!    rejects unsupported `qcd` combinations

use std::path::PathBuf;

use crate::config::consts::ALL_FILES;
use crate::config::{ExecutorKind, ProcessorConfig, RunArgs};
use crate::errors::ConfigError;

/// How many files to keep from each sample's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileLimit {
    All,
    AtMost(usize),
}

impl TryFrom<i64> for FileLimit {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            ALL_FILES => Ok(FileLimit::All),
            n if n >= 0 => Ok(FileLimit::AtMost(n as usize)),
            _ => Err(ConfigError::InvalidFileLimit { value }),
        }
    }
}

/// Arguments that passed validation, with derived settings resolved.
#[derive(Debug, Clone)]
pub struct ValidatedRun {
    pub args: RunArgs,
    pub processor_config: ProcessorConfig,
    pub file_limit: FileLimit,
    pub fileset_path: PathBuf,
}

/// Validate invocation arguments and derive the per-processor configuration.
pub fn validate_run_args(args: RunArgs) -> Result<ValidatedRun, ConfigError> {
    let fileset_path = args
        .fileset
        .clone()
        .filter(|path| !path.as_os_str().is_empty())
        .ok_or(ConfigError::MissingFileset)?;

    let file_limit = FileLimit::try_from(args.nfiles)?;

    if args.chunksize == 0 {
        return Err(ConfigError::InvalidChunkSize {
            value: args.chunksize,
        });
    }

    match args.executor {
        ExecutorKind::Futures if args.workers == 0 => {
            return Err(ConfigError::InvalidWorkerCount {
                value: args.workers,
            });
        }
        ExecutorKind::Dask if args.client.as_deref().map_or(true, str::is_empty) => {
            return Err(ConfigError::MissingClusterAddress);
        }
        _ => {}
    }

    let processor_config = ProcessorConfig::from_args(&args)?;

    Ok(ValidatedRun {
        args,
        processor_config,
        file_limit,
        fileset_path,
    })
}
