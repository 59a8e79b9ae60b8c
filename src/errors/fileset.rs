// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a fileset manifest.
#[derive(Debug, Error)]
pub enum FilesetError {
    #[error("failed to read fileset '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fileset is not a mapping of sample name to a list of file paths: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("fileset contains no samples")]
    Empty,
}
