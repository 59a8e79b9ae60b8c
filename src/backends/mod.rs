// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processor and cluster backends.
//!
//! # Available Backends
//!
//! ## External Processor
//! Every analysis processor runs as an external worker program speaking a
//! JSON task/result protocol on stdin/stdout. See [`external`].
//!
//! ## Cluster Client
//! HTTP client for a remote scheduler plus the best-effort worker code
//! upload done when the `dask` executor starts. See [`cluster`].
//!
//! ## Stub Backend (Test-Only)
//! - **StubProcessor**: fixed answer per work item, optional delays
//! - **FailingProcessor**: fails on one chosen file
//! - **InconsistentProcessor**: reports more events after selection than before
//! - **MockClusterClient**: in-memory cluster, optionally rejecting uploads
//!
//! # Architecture
//!
//! ```text
//! ProcessorConfig → ProcessorFactory → Arc<dyn AnalysisProcessor> → JobExecutor
//! ```

pub mod cluster;
pub mod external;
pub mod factory;
#[cfg(test)]
pub mod stub;

pub use cluster::{bootstrap_cluster, DirectorySnapshot, HttpClusterClient};
pub use external::ExternalProcessor;
pub use factory::ProcessorFactory;
