// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // external processors + cluster client
pub mod config;     // run arguments + processor registry
pub mod driver;     // end-to-end run
pub mod engine;     // executors + job runner
pub mod errors;     // error handling
pub mod fileset;
pub mod metadata;   // selection tables + run record
pub mod observability;
pub mod output;
pub mod traits;     // processor / executor / cluster seams
