// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::config::ProcessorConfig;
use crate::engine::RunResult;
use crate::errors::ProcessorError;
use crate::fileset::WorkItem;

/// An analysis routine applied uniformly to every file of a fileset.
///
/// Implementations answer each work item with a partial [`RunResult`];
/// executors fold the partials together.
#[async_trait]
pub trait AnalysisProcessor: Send + Sync {
    async fn process(&self, item: &WorkItem) -> Result<RunResult, ProcessorError>;

    fn name(&self) -> &'static str;

    /// Keyword configuration the processor was constructed with.
    fn config(&self) -> &ProcessorConfig;
}
