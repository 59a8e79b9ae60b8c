// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Fileset manifests: loading, truncation and redirector rewriting.

mod resolver;

pub use resolver::{redirect, RawFileset, ResolvedFileset, WorkItem};
