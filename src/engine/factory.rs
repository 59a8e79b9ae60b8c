// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::Path;
use std::sync::Arc;

use crate::backends::{bootstrap_cluster, HttpClusterClient};
use crate::config::{ExecutorKind, RunArgs};
use crate::engine::{DistributedExecutor, FuturesExecutor, IterativeExecutor};
use crate::errors::{ConfigError, DriverError};
use crate::observability::messages::engine::ExecutorSelected;
use crate::observability::messages::StructuredLog;
use crate::traits::{ClusterClient, JobExecutor};

/// Factory for creating job executors from run arguments.
pub struct ExecutorFactory;

impl ExecutorFactory {
    /// Create the executor selected by `args.executor`, performing its bootstrap.
    ///
    /// - `iterative`: no bootstrap
    /// - `futures`: sized by `args.workers`
    /// - `dask`: connects to `args.client` (fatal on failure), then uploads
    ///   `worktree` minus the output location to the workers on a best-effort basis
    pub async fn from_args(
        args: &RunArgs,
        worktree: &Path,
    ) -> Result<Arc<dyn JobExecutor>, DriverError> {
        match args.executor {
            ExecutorKind::Dask => {
                let address = args
                    .client
                    .as_deref()
                    .ok_or(ConfigError::MissingClusterAddress)?;
                let client: Arc<dyn ClusterClient> =
                    Arc::new(HttpClusterClient::connect(address).await?);
                Ok(Self::distributed(client, worktree, Path::new(&args.output_location)).await)
            }
            kind => Ok(Self::local(kind, args.workers)),
        }
    }

    /// Executors that need no external resources.
    pub fn local(kind: ExecutorKind, workers: usize) -> Arc<dyn JobExecutor> {
        let executor: Arc<dyn JobExecutor> = match kind {
            ExecutorKind::Iterative => Arc::new(IterativeExecutor::new()),
            _ => Arc::new(FuturesExecutor::new(workers)),
        };

        ExecutorSelected {
            strategy: executor.strategy(),
            workers: Some(if kind == ExecutorKind::Iterative { 1 } else { workers.max(1) }),
        }
        .log();
        executor
    }

    /// Distributed executor over an already connected cluster client.
    pub async fn distributed(
        client: Arc<dyn ClusterClient>,
        worktree: &Path,
        output_root: &Path,
    ) -> Arc<dyn JobExecutor> {
        bootstrap_cluster(client.as_ref(), worktree, output_root).await;

        let executor = DistributedExecutor::new(client);
        ExecutorSelected {
            strategy: executor.strategy(),
            workers: None,
        }
        .log();
        Arc::new(executor)
    }
}
