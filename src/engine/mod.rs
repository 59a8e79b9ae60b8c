// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Job execution: executors, the job runner and result accumulation.
//!
//! | executor    | strategy                                         |
//! |-------------|--------------------------------------------------|
//! | `iterative` | one work item at a time, in manifest order        |
//! | `futures`   | local task pool bounded by the worker count       |
//! | `dask`      | every work item submitted to a remote cluster     |
//!
//! All three merge partial results in manifest order, so they produce the
//! same [`RunResult`] for the same processor answers.

pub mod distributed;
pub mod factory;
pub mod futures_pool;
pub mod iterative;
pub mod job;
pub mod result;
pub mod runner;

pub use distributed::DistributedExecutor;
pub use factory::ExecutorFactory;
pub use futures_pool::FuturesExecutor;
pub use iterative::IterativeExecutor;
pub use job::{EventSchema, JobSpec};
pub use result::{RunResult, RunStatistics, WeightStatistics, METADATA_KEY};
pub use runner::{JobRunner, TimedRun};
