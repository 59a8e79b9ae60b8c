// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::{DEFAULT_LOG_LEVEL, DEFAULT_PROCESSOR_COMMAND};
use crate::config::{
    load_run_config, ExecutorKind, LeptonFlavor, OutputType, ProcessorKind, RunArgs, Syst,
};
use crate::errors::ConfigError;

/// Command-line surface of the driver.
///
/// Every run flag is optional here; unset flags fall back to the run-config
/// file (when given) and then to built-in defaults.
#[derive(Debug, Parser)]
#[command(
    name = "wprime-runner",
    version,
    about = "Run an analysis processor over a fileset and persist its output and metadata"
)]
pub struct CliArgs {
    /// Processor to be used
    #[arg(long, value_enum)]
    pub processor: Option<ProcessorKind>,

    /// Executor to be used
    #[arg(long, value_enum)]
    pub executor: Option<ExecutorKind>,

    /// Channel to be processed {2b1l, 1b1e1mu, 1b1l}
    #[arg(long)]
    pub channel: Option<String>,

    /// Lepton flavor to be processed
    #[arg(long = "lepton_flavor", value_enum)]
    pub lepton_flavor: Option<LeptonFlavor>,

    /// Data-taking year
    #[arg(long)]
    pub year: Option<String>,

    /// Year modifier {'', APV}
    #[arg(long)]
    pub yearmod: Option<String>,

    /// Files per sample to process (-1 for all)
    #[arg(long, allow_hyphen_values = true)]
    pub nfiles: Option<i64>,

    /// Workers for the futures executor
    #[arg(long)]
    pub workers: Option<usize>,

    /// Redirector used to locate remote datasets
    #[arg(long)]
    pub redirector: Option<String>,

    /// Root directory for outputs
    #[arg(long = "output_location")]
    pub output_location: Option<String>,

    /// Tag of the submitted job
    #[arg(long)]
    pub tag: Option<String>,

    /// JSON fileset manifest
    #[arg(long)]
    pub fileset: Option<PathBuf>,

    /// Cluster address for the dask executor
    #[arg(long)]
    pub client: Option<String>,

    /// Row-group size handed to processors
    #[arg(long)]
    pub chunksize: Option<u64>,

    /// Type of output
    #[arg(long = "output_type", value_enum)]
    pub output_type: Option<OutputType>,

    /// Systematic to apply
    #[arg(long, value_enum)]
    pub syst: Option<Syst>,

    /// YAML or TOML file supplying defaults for any run flag
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Program implementing the processor worker protocol
    #[arg(long = "processor_command", default_value = DEFAULT_PROCESSOR_COMMAND)]
    pub processor_command: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "log_level", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl CliArgs {
    /// Merge flags over the run-config file (if any) over built-in defaults.
    pub fn resolve(&self) -> Result<RunArgs, ConfigError> {
        let base = match &self.config {
            Some(path) => load_run_config(path)?,
            None => RunArgs::default(),
        };
        Ok(self.overlay(base))
    }

    fn overlay(&self, base: RunArgs) -> RunArgs {
        RunArgs {
            processor: self.processor.unwrap_or(base.processor),
            executor: self.executor.unwrap_or(base.executor),
            channel: self.channel.clone().unwrap_or(base.channel),
            lepton_flavor: self.lepton_flavor.unwrap_or(base.lepton_flavor),
            year: self.year.clone().unwrap_or(base.year),
            yearmod: self.yearmod.clone().unwrap_or(base.yearmod),
            nfiles: self.nfiles.unwrap_or(base.nfiles),
            workers: self.workers.unwrap_or(base.workers),
            redirector: self.redirector.clone().unwrap_or(base.redirector),
            output_location: self.output_location.clone().unwrap_or(base.output_location),
            tag: self.tag.clone().unwrap_or(base.tag),
            fileset: self.fileset.clone().or(base.fileset),
            client: self.client.clone().or(base.client),
            chunksize: self.chunksize.unwrap_or(base.chunksize),
            output_type: self.output_type.unwrap_or(base.output_type),
            syst: self.syst.unwrap_or(base.syst),
        }
    }
}
