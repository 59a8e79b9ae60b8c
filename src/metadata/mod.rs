// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod builder;
pub mod selections;
pub mod timespan;

pub use builder::{MetadataBuilder, MetadataRecord, INPUT_FILES_KEY};
pub use selections::selection_entries;
pub use timespan::format_timespan;
