// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::backends::cluster::DirectorySnapshot;
use crate::config::{ProcessorConfig, RunArgs};
use crate::engine::RunResult;
use crate::errors::{ClusterError, ProcessorError};
use crate::fileset::WorkItem;
use crate::traits::{AnalysisProcessor, ClusterClient, TaskSubmission};

/// The answer every stub gives for a work item: ten events read, five kept.
pub fn stub_output(item: &WorkItem) -> Value {
    let mut output = json!({
        "metadata": {
            "events_before": 10.0,
            "events_after": 5.0,
            "sumw": 5.0,
            "weight_statistics": {
                "genweight": {"sumw": 5.0, "sumw2": 5.0, "minw": 1.0, "maxw": 1.0, "n": 5}
            },
            "cutflow": {"all": 10, "one_lepton": 7, "two_bjets": 5}
        }
    });
    output[item.sample.as_str()] = json!({"files": 1, "entries": 5});
    output
}

fn default_config() -> ProcessorConfig {
    ProcessorConfig::from_args(&RunArgs::default()).unwrap()
}

/// A processor answering every item with [`stub_output`].
pub struct StubProcessor {
    config: ProcessorConfig,
    delayed: bool,
    seen: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl StubProcessor {
    pub fn new() -> Self {
        Self::with_config(default_config())
    }

    pub fn with_config(config: ProcessorConfig) -> Self {
        Self {
            config,
            delayed: false,
            seen: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Items finish out of submission order.
    pub fn with_delays() -> Self {
        Self {
            delayed: true,
            ..Self::new()
        }
    }

    pub fn seen_files(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisProcessor for StubProcessor {
    async fn process(&self, item: &WorkItem) -> Result<RunResult, ProcessorError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.seen.lock().unwrap().push(item.file.clone());

        if self.delayed {
            let last = item.file.bytes().last().unwrap_or(0) as u64;
            tokio::time::sleep(Duration::from_millis(5 * (4 - last % 4))).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        RunResult::from_output(stub_output(item))
    }

    fn name(&self) -> &'static str {
        "stub"
    }

    fn config(&self) -> &ProcessorConfig {
        &self.config
    }
}

/// A processor that fails on one file and succeeds on every other.
pub struct FailingProcessor {
    config: ProcessorConfig,
    failing_file: String,
    attempts: AtomicUsize,
}

impl FailingProcessor {
    pub fn on_file(file: &str) -> Self {
        Self {
            config: default_config(),
            failing_file: file.to_string(),
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisProcessor for FailingProcessor {
    async fn process(&self, item: &WorkItem) -> Result<RunResult, ProcessorError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if item.file == self.failing_file {
            return Err(ProcessorError::Failed {
                status: "exit status: 1".to_string(),
                stderr: "Simulated processor failure".to_string(),
            });
        }
        RunResult::from_output(stub_output(item))
    }

    fn name(&self) -> &'static str {
        "failing"
    }

    fn config(&self) -> &ProcessorConfig {
        &self.config
    }
}

/// A processor reporting more surviving events than it read.
pub struct InconsistentProcessor {
    config: ProcessorConfig,
}

impl InconsistentProcessor {
    pub fn new() -> Self {
        Self {
            config: default_config(),
        }
    }
}

#[async_trait]
impl AnalysisProcessor for InconsistentProcessor {
    async fn process(&self, item: &WorkItem) -> Result<RunResult, ProcessorError> {
        let mut output = stub_output(item);
        output["metadata"]["events_after"] = json!(50.0);
        RunResult::from_output(output)
    }

    fn name(&self) -> &'static str {
        "inconsistent"
    }

    fn config(&self) -> &ProcessorConfig {
        &self.config
    }
}

/// In-memory cluster answering tasks with [`stub_output`].
pub struct MockClusterClient {
    reject_uploads: bool,
    failing_file: Option<String>,
    uploads: Mutex<Vec<(usize, bool)>>,
    submissions: Mutex<Vec<TaskSubmission>>,
}

impl MockClusterClient {
    pub fn new() -> Self {
        Self {
            reject_uploads: false,
            failing_file: None,
            uploads: Mutex::new(Vec::new()),
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting_uploads() -> Self {
        Self {
            reject_uploads: true,
            ..Self::new()
        }
    }

    pub fn failing_on(file: &str) -> Self {
        Self {
            failing_file: Some(file.to_string()),
            ..Self::new()
        }
    }

    /// `(file count, restart)` for every accepted upload.
    pub fn uploads(&self) -> Vec<(usize, bool)> {
        self.uploads.lock().unwrap().clone()
    }

    /// Accepted submissions, sorted by file.
    pub fn submissions(&self) -> Vec<TaskSubmission> {
        let mut submissions = self.submissions.lock().unwrap().clone();
        submissions.sort_by(|a, b| a.item.file.cmp(&b.item.file));
        submissions
    }
}

#[async_trait]
impl ClusterClient for MockClusterClient {
    fn address(&self) -> &str {
        "http://mock-scheduler:8786"
    }

    async fn upload_directory(
        &self,
        snapshot: &DirectorySnapshot,
        restart: bool,
    ) -> Result<(), ClusterError> {
        if self.reject_uploads {
            return Err(ClusterError::Snapshot(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "upload target unreachable",
            )));
        }
        self.uploads.lock().unwrap().push((snapshot.len(), restart));
        Ok(())
    }

    async fn submit(&self, task: &TaskSubmission) -> Result<Value, ClusterError> {
        if self.failing_file.as_deref() == Some(task.item.file.as_str()) {
            return Err(ClusterError::Rejected {
                status: 500,
                body: "worker died".to_string(),
            });
        }
        self.submissions.lock().unwrap().push(task.clone());
        Ok(stub_output(&task.item))
    }
}
