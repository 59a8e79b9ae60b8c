// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::backends::external::ExternalProcessor;
use crate::config::ProcessorConfig;
use crate::traits::AnalysisProcessor;

/// Factory for processor instances.
pub struct ProcessorFactory;

impl ProcessorFactory {
    /// Create the processor described by `config`, run through the external
    /// worker program `command`.
    ///
    /// The configuration was validated when it was built, so construction
    /// cannot fail here; an unusable command surfaces on the first work item.
    pub fn create_processor(config: ProcessorConfig, command: &str) -> Arc<dyn AnalysisProcessor> {
        Arc::new(ExternalProcessor::new(command, config))
    }
}
