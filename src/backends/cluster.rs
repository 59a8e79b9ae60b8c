// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! HTTP client for a remote compute cluster and worker code bootstrap.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{Client as HttpClient, Response};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::errors::ClusterError;
use crate::observability::messages::cluster::{ClusterConnected, CodeUploadFailed, CodeUploaded};
use crate::observability::messages::StructuredLog;
use crate::traits::{ClusterClient, TaskSubmission};

/// Directories never shipped to workers.
const SKIPPED_DIRS: &[&str] = &["target", ".git"];

/// One file of a [`DirectorySnapshot`], contents base64-encoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotFile {
    pub path: String,
    pub contents: String,
}

/// The files of a local directory tree, ready to be uploaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorySnapshot {
    pub root: PathBuf,
    pub files: Vec<SnapshotFile>,
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| SKIPPED_DIRS.contains(&name))
            .unwrap_or(false)
}

impl DirectorySnapshot {
    /// Walk `root` and read every regular file. Paths are relative to `root`
    /// and use `/` separators; order is deterministic.
    ///
    /// `excluded` paths are resolved against `root` and left out with
    /// everything below them.
    pub fn capture<P: AsRef<Path>>(root: P, excluded: &[&Path]) -> Result<Self, ClusterError> {
        let root = root.as_ref();
        let excluded: Vec<PathBuf> = excluded.iter().map(|path| root.join(path)).collect();
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                !is_skipped(entry) && !excluded.iter().any(|path| entry.path() == path)
            });

        for entry in walker {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            let path = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            files.push(SnapshotFile {
                path,
                contents: STANDARD.encode(fs::read(entry.path())?),
            });
        }

        Ok(Self {
            root: root.to_path_buf(),
            files,
        })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Prefix a bare `host:port` address with `http://`.
pub fn normalize_address(address: &str) -> String {
    let trimmed = address.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

async fn check_status(response: Response) -> Result<Response, ClusterError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClusterError::Rejected {
        status: status.as_u16(),
        body,
    })
}

/// Cluster scheduler reached over HTTP.
///
/// Endpoints:
/// - `GET /health` answers when the scheduler is up
/// - `POST /workers/upload?restart=<bool>` installs a [`DirectorySnapshot`]
/// - `POST /tasks` runs one [`TaskSubmission`] and answers with its result
pub struct HttpClusterClient {
    address: String,
    http: HttpClient,
}

impl HttpClusterClient {
    /// Connect to the scheduler at `address`. Fails if the health probe does.
    pub async fn connect(address: &str) -> Result<Self, ClusterError> {
        let address = normalize_address(address);
        let http = HttpClient::builder()
            .build()
            .map_err(|e| ClusterError::Connect {
                address: address.clone(),
                reason: e.to_string(),
            })?;

        let probe = http
            .get(format!("{}/health", address))
            .send()
            .await
            .and_then(Response::error_for_status);
        if let Err(e) = probe {
            return Err(ClusterError::Connect {
                address,
                reason: e.to_string(),
            });
        }

        ClusterConnected { address: &address }.log();
        Ok(Self { address, http })
    }
}

#[async_trait]
impl ClusterClient for HttpClusterClient {
    fn address(&self) -> &str {
        &self.address
    }

    async fn upload_directory(
        &self,
        snapshot: &DirectorySnapshot,
        restart: bool,
    ) -> Result<(), ClusterError> {
        let url = format!("{}/workers/upload?restart={}", self.address, restart);
        let response = self.http.post(&url).json(snapshot).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn submit(&self, task: &TaskSubmission) -> Result<Value, ClusterError> {
        let url = format!("{}/tasks", self.address);
        let response = self.http.post(&url).json(task).send().await?;
        let answer = check_status(response).await?.json::<Value>().await?;
        Ok(answer)
    }
}

/// Upload the working tree at `root` to every worker and restart them.
///
/// `output_root` is never shipped, so earlier artifacts stay local.
///
/// Best effort: a snapshot or upload failure is logged and swallowed, and
/// the job runs against whatever code the workers already have. Returns
/// whether the upload succeeded.
pub async fn bootstrap_cluster(
    client: &dyn ClusterClient,
    root: &Path,
    output_root: &Path,
) -> bool {
    let outcome = match DirectorySnapshot::capture(root, &[output_root]) {
        Ok(snapshot) => client
            .upload_directory(&snapshot, true)
            .await
            .map(|_| snapshot.len()),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(file_count) => {
            CodeUploaded {
                address: client.address(),
                file_count,
                restart: true,
            }
            .log();
            true
        }
        Err(error) => {
            CodeUploadFailed {
                address: client.address(),
                error: &error,
            }
            .log();
            false
        }
    }
}
