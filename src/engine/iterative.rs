// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Single-process, sequential executor.

use async_trait::async_trait;
use std::sync::Arc;

use crate::engine::{JobSpec, RunResult};
use crate::errors::ExecutionError;
use crate::fileset::ResolvedFileset;
use crate::observability::messages::engine::WorkItemCompleted;
use crate::observability::messages::StructuredLog;
use crate::traits::{AnalysisProcessor, JobExecutor};

/// Processes work items one at a time, in manifest order.
#[derive(Debug, Default)]
pub struct IterativeExecutor;

impl IterativeExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl JobExecutor for IterativeExecutor {
    async fn run_job(
        &self,
        fileset: &ResolvedFileset,
        job: &JobSpec,
        processor: Arc<dyn AnalysisProcessor>,
    ) -> Result<RunResult, ExecutionError> {
        let items = fileset.work_items(job);
        let total = items.len();
        let mut accumulated = RunResult::default();

        for (index, item) in items.iter().enumerate() {
            let partial = processor
                .process(item)
                .await
                .map_err(|source| ExecutionError::Processor {
                    processor: processor.name().to_string(),
                    file: item.file.clone(),
                    source,
                })?;
            accumulated.merge(partial);

            WorkItemCompleted {
                file: &item.file,
                completed: index + 1,
                total,
            }
            .log();
        }

        Ok(accumulated)
    }

    fn strategy(&self) -> &'static str {
        "iterative"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::{FailingProcessor, StubProcessor};
    use crate::config::FileLimit;
    use crate::fileset::RawFileset;

    fn fileset() -> ResolvedFileset {
        RawFileset::from_json(r#"{"A": ["a1", "a2"], "B": ["b1"]}"#)
            .unwrap()
            .resolve(FileLimit::All, "xcache")
    }

    #[tokio::test]
    async fn test_iterative_processes_every_file_in_order() {
        let processor = Arc::new(StubProcessor::new());
        let result = IterativeExecutor::new()
            .run_job(&fileset(), &JobSpec::new(100), processor.clone())
            .await
            .unwrap();

        assert_eq!(
            processor.seen_files(),
            vec!["root://xcache/a1", "root://xcache/a2", "root://xcache/b1"]
        );
        assert_eq!(result.metadata.events_before, 30.0);
        assert_eq!(result.metadata.events_after, 15.0);
        assert_eq!(result.payload["A"]["files"], 2);
        assert_eq!(result.payload["B"]["files"], 1);
    }

    #[tokio::test]
    async fn test_iterative_stops_on_first_failure() {
        let processor = Arc::new(FailingProcessor::on_file("root://xcache/a2"));
        let err = IterativeExecutor::new()
            .run_job(&fileset(), &JobSpec::new(100), processor.clone())
            .await
            .unwrap_err();

        assert!(matches!(err, ExecutionError::Processor { ref file, .. } if file == "root://xcache/a2"));
        assert_eq!(processor.attempts(), 2);
    }
}
