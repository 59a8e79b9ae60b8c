// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod paths;
pub mod writer;

pub use paths::OutputPath;
pub use writer::{write_outputs, WrittenOutput};
