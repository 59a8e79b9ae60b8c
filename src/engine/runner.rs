// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::Instrument;

use crate::engine::{JobSpec, RunResult};
use crate::errors::ExecutionError;
use crate::fileset::ResolvedFileset;
use crate::observability::messages::engine::{JobCompleted, JobFailed, JobStarted};
use crate::observability::messages::StructuredLog;
use crate::traits::{AnalysisProcessor, JobExecutor};

/// A merged result and the wall-clock time it took to produce.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedRun {
    pub result: RunResult,
    pub elapsed: Duration,
}

/// Runs a whole job through one executor and times it.
///
/// No retries and no checkpointing: any executor failure is returned as is
/// and the partial state is dropped.
pub struct JobRunner {
    executor: Arc<dyn JobExecutor>,
}

impl JobRunner {
    pub fn new(executor: Arc<dyn JobExecutor>) -> Self {
        Self { executor }
    }

    pub async fn run(
        &self,
        fileset: &ResolvedFileset,
        processor: Arc<dyn AnalysisProcessor>,
        chunksize: u64,
    ) -> Result<TimedRun, ExecutionError> {
        let job = JobSpec::new(chunksize);
        let strategy = self.executor.strategy();
        let name = processor.name();

        let started = JobStarted {
            strategy,
            processor: name,
            sample_count: fileset.len(),
            file_count: fileset.file_count(),
        };
        let span = started.span("run_job");
        span.in_scope(|| started.log());

        let start = Instant::now();
        let outcome = self
            .executor
            .run_job(fileset, &job, processor.clone())
            .instrument(span.clone())
            .await
            .and_then(|result| {
                let stats = &result.metadata;
                if stats.events_after > stats.events_before {
                    return Err(ExecutionError::InconsistentStatistics {
                        before: stats.events_before,
                        after: stats.events_after,
                    });
                }
                Ok(result)
            });
        let elapsed = start.elapsed();
        let _entered = span.enter();

        match outcome {
            Ok(result) => {
                JobCompleted {
                    strategy,
                    processor: name,
                    events_before: result.metadata.events_before,
                    events_after: result.metadata.events_after,
                    duration: elapsed,
                }
                .log();
                Ok(TimedRun { result, elapsed })
            }
            Err(error) => {
                JobFailed {
                    strategy,
                    processor: name,
                    error: &error,
                }
                .log();
                Err(error)
            }
        }
    }
}
