// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while persisting run artifacts.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode output artifact: {0}")]
    Pickle(#[from] serde_pickle::Error),

    #[error("failed to encode metadata: {0}")]
    Json(#[from] serde_json::Error),
}
