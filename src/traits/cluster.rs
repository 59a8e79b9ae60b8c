// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::backends::cluster::DirectorySnapshot;
use crate::errors::ClusterError;
use crate::fileset::WorkItem;

/// One unit of work shipped to a remote worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSubmission {
    pub processor: String,
    pub config: Map<String, Value>,
    pub item: WorkItem,
}

/// Connection to an external compute cluster.
#[async_trait]
pub trait ClusterClient: Send + Sync {
    fn address(&self) -> &str;

    /// Install a code snapshot on every worker, optionally restarting them.
    async fn upload_directory(
        &self,
        snapshot: &DirectorySnapshot,
        restart: bool,
    ) -> Result<(), ClusterError>;

    /// Run one task remotely and return the processor's raw JSON answer.
    async fn submit(&self, task: &TaskSubmission) -> Result<Value, ClusterError>;
}
