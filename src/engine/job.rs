// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::TREE_NAME;

/// Columnar layout of the event data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSchema {
    NanoAod,
}

impl EventSchema {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventSchema::NanoAod => "NanoAODSchema",
        }
    }
}

/// Settings shared by every work item of a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpec {
    pub treename: &'static str,
    pub schema: EventSchema,
    pub chunksize: u64,
}

impl JobSpec {
    /// Job over the fixed `Events` tree with the NanoAOD schema.
    pub fn new(chunksize: u64) -> Self {
        Self {
            treename: TREE_NAME,
            schema: EventSchema::NanoAod,
            chunksize,
        }
    }
}
