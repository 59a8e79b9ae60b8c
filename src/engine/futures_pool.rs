// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::engine::{JobSpec, RunResult};
use crate::errors::ExecutionError;
use crate::fileset::ResolvedFileset;
use crate::observability::messages::engine::WorkItemCompleted;
use crate::observability::messages::StructuredLog;
use crate::traits::{AnalysisProcessor, JobExecutor};

/// Local worker pool running up to `workers` work items at once.
///
/// Partial results are merged in submission order, so the merged result is
/// the same as the iterative executor's regardless of completion order.
/// The first failure cancels every work item still pending.
#[derive(Debug)]
pub struct FuturesExecutor {
    workers: usize,
}

impl FuturesExecutor {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

type WorkHandle = JoinHandle<Result<RunResult, ExecutionError>>;

fn abort_all(handles: impl IntoIterator<Item = (String, WorkHandle)>) {
    for (_, handle) in handles {
        handle.abort();
    }
}

#[async_trait]
impl JobExecutor for FuturesExecutor {
    async fn run_job(
        &self,
        fileset: &ResolvedFileset,
        job: &JobSpec,
        processor: Arc<dyn AnalysisProcessor>,
    ) -> Result<RunResult, ExecutionError> {
        let items = fileset.work_items(job);
        let total = items.len();
        let semaphore = Arc::new(Semaphore::new(self.workers));
        let mut handles: Vec<(String, WorkHandle)> = Vec::with_capacity(total);

        for item in items {
            let processor_clone = processor.clone();
            let semaphore_clone = semaphore.clone();
            let file = item.file.clone();

            let handle = tokio::spawn(async move {
                let _permit = semaphore_clone.acquire_owned().await?;
                processor_clone
                    .process(&item)
                    .await
                    .map_err(|source| ExecutionError::Processor {
                        processor: processor_clone.name().to_string(),
                        file: item.file.clone(),
                        source,
                    })
            });
            handles.push((file, handle));
        }

        let mut accumulated = RunResult::default();
        let mut pending = handles.into_iter();
        let mut completed = 0;

        while let Some((file, handle)) = pending.next() {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(join_error) => {
                    abort_all(pending);
                    return Err(ExecutionError::Join(join_error));
                }
            };

            match outcome {
                Ok(partial) => {
                    accumulated.merge(partial);
                    completed += 1;
                    WorkItemCompleted {
                        file: &file,
                        completed,
                        total,
                    }
                    .log();
                }
                Err(error) => {
                    abort_all(pending);
                    return Err(error);
                }
            }
        }

        Ok(accumulated)
    }

    fn strategy(&self) -> &'static str {
        "futures"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::{FailingProcessor, StubProcessor};
    use crate::config::FileLimit;
    use crate::engine::IterativeExecutor;
    use crate::fileset::RawFileset;

    fn fileset() -> ResolvedFileset {
        RawFileset::from_json(r#"{"A": ["a1", "a2", "a3"], "B": ["b1", "b2"]}"#)
            .unwrap()
            .resolve(FileLimit::All, "xcache")
    }

    #[tokio::test]
    async fn test_futures_matches_iterative_result() {
        let job = JobSpec::new(100);

        let sequential = IterativeExecutor::new()
            .run_job(&fileset(), &job, Arc::new(StubProcessor::new()))
            .await
            .unwrap();
        let pooled = FuturesExecutor::new(3)
            .run_job(&fileset(), &job, Arc::new(StubProcessor::with_delays()))
            .await
            .unwrap();

        assert_eq!(pooled, sequential);
    }

    #[tokio::test]
    async fn test_futures_respects_worker_limit() {
        let processor = Arc::new(StubProcessor::with_delays());
        FuturesExecutor::new(2)
            .run_job(&fileset(), &JobSpec::new(100), processor.clone())
            .await
            .unwrap();

        assert_eq!(processor.seen_files().len(), 5);
        assert!(processor.max_in_flight() <= 2);
    }

    #[tokio::test]
    async fn test_futures_propagates_first_failure() {
        let processor = Arc::new(FailingProcessor::on_file("root://xcache/a2"));
        let err = FuturesExecutor::new(4)
            .run_job(&fileset(), &JobSpec::new(100), processor)
            .await
            .unwrap_err();

        match err {
            ExecutionError::Processor { file, processor, .. } => {
                assert_eq!(file, "root://xcache/a2");
                assert_eq!(processor, "failing");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_zero_workers_clamped() {
        assert_eq!(FuturesExecutor::new(0).workers(), 1);
    }
}
