// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::engine::{JobSpec, RunResult};
use crate::errors::ExecutionError;
use crate::fileset::ResolvedFileset;
use crate::observability::messages::engine::WorkItemCompleted;
use crate::observability::messages::StructuredLog;
use crate::traits::{AnalysisProcessor, ClusterClient, JobExecutor, TaskSubmission};

/// Ships every work item to a remote cluster.
///
/// The processor itself runs on the workers; locally only its name and
/// keyword configuration are used to build the task. Results are merged in
/// submission order.
pub struct DistributedExecutor {
    client: Arc<dyn ClusterClient>,
}

impl DistributedExecutor {
    pub fn new(client: Arc<dyn ClusterClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JobExecutor for DistributedExecutor {
    async fn run_job(
        &self,
        fileset: &ResolvedFileset,
        job: &JobSpec,
        processor: Arc<dyn AnalysisProcessor>,
    ) -> Result<RunResult, ExecutionError> {
        let name = processor.name().to_string();
        let config = processor.config().to_kwargs();
        let items = fileset.work_items(job);
        let total = items.len();

        let handles: Vec<(String, JoinHandle<Result<RunResult, ExecutionError>>)> = items
            .into_iter()
            .map(|item| {
                let client = self.client.clone();
                let file = item.file.clone();
                let task = TaskSubmission {
                    processor: name.clone(),
                    config: config.clone(),
                    item,
                };
                let handle = tokio::spawn(async move {
                    let output = client.submit(&task).await.map_err(|source| {
                        ExecutionError::Cluster {
                            file: task.item.file.clone(),
                            source,
                        }
                    })?;
                    RunResult::from_output(output).map_err(|source| ExecutionError::Processor {
                        processor: task.processor.clone(),
                        file: task.item.file.clone(),
                        source,
                    })
                });
                (file, handle)
            })
            .collect();

        let mut accumulated = RunResult::default();
        let mut pending = handles.into_iter();
        let mut completed = 0;

        while let Some((file, handle)) = pending.next() {
            let outcome = handle.await.map_err(ExecutionError::Join).and_then(|r| r);
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
                    for (_, rest) in pending {
                        rest.abort();
                    }
                    return Err(error);
                }
            }
        }

        Ok(accumulated)
    }

    fn strategy(&self) -> &'static str {
        "dask"
    }
}
