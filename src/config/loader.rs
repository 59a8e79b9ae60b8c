// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_CHANNEL, DEFAULT_CHUNKSIZE, DEFAULT_NFILES, DEFAULT_OUTPUT_LOCATION,
    DEFAULT_REDIRECTOR, DEFAULT_TAG, DEFAULT_WORKERS, DEFAULT_YEAR,
};
use crate::config::{ExecutorKind, LeptonFlavor, OutputType, ProcessorKind, Syst};
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Complete set of invocation arguments for one driver run.
///
/// This is the merged view of built-in defaults, an optional run-config
/// file and explicit command-line flags. Field names match the CLI flags
/// and are the keys recorded in the run metadata.
///
/// # Example
/// ```yaml
/// processor: ttbar
/// executor: futures
/// workers: 8
/// channel: 2b1l
/// lepton_flavor: ele
/// year: "2018"
/// fileset: filesets/signal.json
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunArgs {
    pub processor: ProcessorKind,
    pub executor: ExecutorKind,
    pub channel: String,
    pub lepton_flavor: LeptonFlavor,
    pub year: String,
    pub yearmod: String,
    pub nfiles: i64,
    pub workers: usize,
    pub redirector: String,
    pub output_location: String,
    pub tag: String,
    /// Never serialized: the manifest path is not part of the run record.
    #[serde(skip_serializing)]
    pub fileset: Option<PathBuf>,
    pub client: Option<String>,
    pub chunksize: u64,
    pub output_type: OutputType,
    pub syst: Syst,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            processor: ProcessorKind::Ttbar,
            executor: ExecutorKind::Iterative,
            channel: DEFAULT_CHANNEL.to_string(),
            lepton_flavor: LeptonFlavor::Mu,
            year: DEFAULT_YEAR.to_string(),
            yearmod: String::new(),
            nfiles: DEFAULT_NFILES,
            workers: DEFAULT_WORKERS,
            redirector: DEFAULT_REDIRECTOR.to_string(),
            output_location: DEFAULT_OUTPUT_LOCATION.to_string(),
            tag: DEFAULT_TAG.to_string(),
            fileset: None,
            client: None,
            chunksize: DEFAULT_CHUNKSIZE,
            output_type: OutputType::Hist,
            syst: Syst::Nominal,
        }
    }
}

impl RunArgs {
    /// The invocation arguments as recorded in run metadata.
    ///
    /// The fileset path is never included, and keys the selected processor
    /// does not understand are dropped.
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        for key in self.processor.excluded_keys() {
            record.shift_remove(*key);
        }
        record
    }
}

/// Load run arguments from a YAML or TOML file.
///
/// The format is chosen by extension: `.toml` is parsed as TOML, anything
/// else as YAML. Keys missing from the file keep their built-in defaults.
pub fn load_run_config<P: AsRef<Path>>(path: P) -> Result<RunArgs, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let is_toml = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    let parsed = if is_toml {
        toml::from_str::<RunArgs>(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<RunArgs>(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|reason| ConfigError::ConfigFileInvalid {
        path: path.to_path_buf(),
        reason,
    })
}
