// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! One run of the driver, from invocation arguments to files on disk.
//!
//! 1. validate arguments and look up selection tables (configuration errors)
//! 2. load and resolve the fileset (fileset errors)
//! 3. build the executor, bootstrapping the cluster for `dask`
//! 4. run the job through the processor and time it
//! 5. assemble metadata and write the artifact and metadata files
//!
//! Any failure ends the run; nothing is written unless the job succeeded.

use chrono::{Local, NaiveDate};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::backends::ProcessorFactory;
use crate::config::consts::DEFAULT_PROCESSOR_COMMAND;
use crate::config::{validate_run_args, RunArgs, ValidatedRun};
use crate::engine::{ExecutorFactory, JobRunner};
use crate::errors::{DriverError, FilesetError};
use crate::fileset::{RawFileset, ResolvedFileset};
use crate::metadata::{selection_entries, MetadataBuilder, MetadataRecord};
use crate::observability::messages::fileset::MultipleSamplesInFileset;
use crate::observability::messages::StructuredLog;
use crate::output::{write_outputs, OutputPath, WrittenOutput};
use crate::traits::{AnalysisProcessor, JobExecutor};

/// Settings of the driver itself that are not part of the run record.
#[derive(Debug, Clone)]
pub struct DriverOptions {
    /// Program implementing the external processor protocol.
    pub processor_command: String,
    /// Directory uploaded to cluster workers.
    pub worktree: PathBuf,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            processor_command: DEFAULT_PROCESSOR_COMMAND.to_string(),
            worktree: PathBuf::from("."),
        }
    }
}

/// A validated run whose fileset has been resolved.
#[derive(Debug, Clone)]
pub struct PreparedRun {
    pub run: ValidatedRun,
    pub selections: Vec<(&'static str, Value)>,
    pub fileset: ResolvedFileset,
    pub output_sample: String,
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub written: WrittenOutput,
    pub metadata: MetadataRecord,
    pub elapsed: Duration,
}

/// Validate `args` and resolve the fileset. Performs no execution.
pub fn prepare(args: RunArgs) -> Result<PreparedRun, DriverError> {
    let run = validate_run_args(args)?;
    let selections = selection_entries(
        run.args.processor,
        &run.args.channel,
        run.args.lepton_flavor,
    )?;

    let fileset = RawFileset::load(&run.fileset_path)?.resolve(run.file_limit, &run.args.redirector);
    let output_sample = fileset
        .output_sample()
        .ok_or(FilesetError::Empty)?
        .to_string();
    if fileset.len() > 1 {
        MultipleSamplesInFileset {
            sample_count: fileset.len(),
            output_sample: &output_sample,
        }
        .log();
    }

    Ok(PreparedRun {
        run,
        selections,
        fileset,
        output_sample,
    })
}

/// Run a prepared job with the given executor and processor, then persist it.
pub async fn execute_prepared(
    prepared: PreparedRun,
    executor: Arc<dyn JobExecutor>,
    processor: Arc<dyn AnalysisProcessor>,
    date: NaiveDate,
) -> Result<RunOutcome, DriverError> {
    let PreparedRun {
        run,
        selections,
        fileset,
        output_sample,
    } = prepared;
    let args = &run.args;

    let timed = JobRunner::new(executor)
        .run(&fileset, processor, args.chunksize)
        .await?;

    let metadata = MetadataBuilder::new()
        .run_statistics(
            timed.elapsed,
            &timed.result.metadata,
            args.processor.reports_cutflow(),
        )
        .selections(selections)
        .input_files(fileset.files(&output_sample).unwrap_or_default())
        .arguments(args.to_record())
        .build();

    let path = OutputPath::new(args, date, &output_sample);
    let written = write_outputs(&path, &timed.result.payload, &metadata)?;

    Ok(RunOutcome {
        written,
        metadata,
        elapsed: timed.elapsed,
    })
}

/// Execute one complete run.
pub async fn execute(args: RunArgs, options: &DriverOptions) -> Result<RunOutcome, DriverError> {
    let prepared = prepare(args)?;
    let executor = ExecutorFactory::from_args(&prepared.run.args, &options.worktree).await?;
    let processor = ProcessorFactory::create_processor(
        prepared.run.processor_config.clone(),
        &options.processor_command,
    );
    execute_prepared(prepared, executor, processor, Local::now().date_naive()).await
}
