// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processor backed by an external worker program.
//!
//! For every work item the program is launched as
//! `<command> <processor>`, receives one JSON task on stdin and answers
//! with one JSON result on stdout:
//!
//! ```text
//! stdin:  {"processor": "ttbar", "config": {...}, "sample": "A",
//!          "file": "root://xcache/f1.root", "treename": "Events",
//!          "schema": "NanoAODSchema", "chunksize": 50000}
//! stdout: {"A": {...}, "metadata": {"events_before": ..., ...}}
//! ```
//!
//! `command` may carry leading arguments (`"python -m wprime_plus_b.worker"`);
//! it is split on whitespace.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::process::Stdio;
use std::str::SplitWhitespace;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::Instrument;

use crate::config::ProcessorConfig;
use crate::engine::RunResult;
use crate::errors::ProcessorError;
use crate::fileset::WorkItem;
use crate::observability::messages::processor::{ProcessorExited, ProcessorLaunched};
use crate::observability::messages::StructuredLog;
use crate::traits::AnalysisProcessor;

#[derive(Serialize)]
struct ExternalTask<'a> {
    processor: &'a str,
    config: &'a Map<String, Value>,
    #[serde(flatten)]
    item: &'a WorkItem,
}

pub struct ExternalProcessor {
    command: String,
    config: ProcessorConfig,
    kwargs: Map<String, Value>,
}

impl ExternalProcessor {
    pub fn new(command: impl Into<String>, config: ProcessorConfig) -> Self {
        let kwargs = config.to_kwargs();
        Self {
            command: command.into(),
            config,
            kwargs,
        }
    }

    fn spawn_error(&self, source: std::io::Error) -> ProcessorError {
        ProcessorError::Spawn {
            command: self.command.clone(),
            source,
        }
    }

    /// Launch the program, hand it the task and parse its answer.
    async fn exchange(
        &self,
        program: &str,
        args: SplitWhitespace<'_>,
        item: &WorkItem,
    ) -> Result<RunResult, ProcessorError> {
        let mut child = Command::new(program)
            .args(args)
            .arg(self.name())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| self.spawn_error(source))?;

        let task = serde_json::to_vec(&ExternalTask {
            processor: self.name(),
            config: &self.kwargs,
            item,
        })
        .map_err(|e| ProcessorError::MalformedOutput(format!("unencodable task: {}", e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(&task).await?;
            stdin.shutdown().await?;
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            let status = output.status.to_string();
            ProcessorExited {
                processor: self.name(),
                file: &item.file,
                status: &status,
            }
            .log();
            return Err(ProcessorError::Failed {
                status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let answer: Value = serde_json::from_slice(&output.stdout)
            .map_err(|e| ProcessorError::MalformedOutput(e.to_string()))?;
        RunResult::from_output(answer)
    }
}

#[async_trait]
impl AnalysisProcessor for ExternalProcessor {
    async fn process(&self, item: &WorkItem) -> Result<RunResult, ProcessorError> {
        let mut parts = self.command.split_whitespace();
        let program = parts.next().ok_or_else(|| {
            self.spawn_error(std::io::Error::new(ErrorKind::InvalidInput, "empty command"))
        })?;

        let launched = ProcessorLaunched {
            processor: self.name(),
            command: &self.command,
            file: &item.file,
        };
        let span = launched.span("process");
        span.in_scope(|| launched.log());

        self.exchange(program, parts, item).instrument(span).await
    }

    fn name(&self) -> &'static str {
        self.config.kind().as_str()
    }

    fn config(&self) -> &ProcessorConfig {
        &self.config
    }
}
