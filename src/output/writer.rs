// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::metadata::MetadataRecord;
use crate::observability::messages::output::OutputWritten;
use crate::observability::messages::StructuredLog;
use crate::output::OutputPath;
use crate::errors::OutputError;

/// Files written by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenOutput {
    pub artifact: PathBuf,
    pub metadata: PathBuf,
}

fn create_dir(path: &Path) -> Result<(), OutputError> {
    fs::create_dir_all(path).map_err(|source| OutputError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn write_with<F>(path: &Path, encode: F) -> Result<(), OutputError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), OutputError>,
{
    let write_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer)?;
    writer.flush().map_err(write_error)
}

/// Persist the payload as a pickle artifact and the metadata as JSON.
///
/// Directories are created as needed. Existing files are overwritten in
/// place; nothing is written atomically.
pub fn write_outputs(
    path: &OutputPath,
    payload: &Map<String, Value>,
    metadata: &MetadataRecord,
) -> Result<WrittenOutput, OutputError> {
    create_dir(path.directory())?;
    let artifact = path.artifact();
    write_with(&artifact, |writer| {
        serde_pickle::to_writer(writer, payload, serde_pickle::SerOptions::new())?;
        Ok(())
    })?;
    OutputWritten {
        kind: "output",
        path: &artifact.display().to_string(),
    }
    .log();

    create_dir(&path.metadata_dir())?;
    let metadata_file = path.metadata_file();
    write_with(&metadata_file, |writer| {
        serde_json::to_writer(writer, metadata)?;
        Ok(())
    })?;
    OutputWritten {
        kind: "metadata",
        path: &metadata_file.display().to_string(),
    }
    .log();

    Ok(WrittenOutput {
        artifact,
        metadata: metadata_file,
    })
}
