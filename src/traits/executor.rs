// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;

use crate::engine::{JobSpec, RunResult};
use crate::errors::ExecutionError;
use crate::fileset::ResolvedFileset;
use crate::traits::AnalysisProcessor;

#[async_trait]
pub trait JobExecutor: Send + Sync {
    /// Run `processor` over every file of `fileset` and return the merged result.
    ///
    /// - `fileset`: resolved sample -> file locators
    /// - `job`: tree name, event schema and chunk size for every work item
    /// - `processor`: the constructed processor instance
    ///
    /// The first failing work item aborts the job; there is no retry and no
    /// partial result.
    async fn run_job(
        &self,
        fileset: &ResolvedFileset,
        job: &JobSpec,
        processor: Arc<dyn AnalysisProcessor>,
    ) -> Result<RunResult, ExecutionError>;

    fn strategy(&self) -> &'static str;
}
