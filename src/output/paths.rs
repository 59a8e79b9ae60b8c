// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::config::consts::{METADATA_DIR, OUTPUT_EXTENSION};
use crate::config::RunArgs;

/// Where one run's artifact and metadata live.
///
/// ```text
/// <output_location>/<tag>/<processor>/<YYYY-MM-DD>/[<channel>/]<year>/<lepton_flavor>/
///     <sample>.pkl
///     metadata/<sample>_metadata.json
/// ```
///
/// The channel segment is present only for channel-aware processors (`ttbar`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPath {
    directory: PathBuf,
    sample: String,
}

impl OutputPath {
    pub fn new(args: &RunArgs, date: NaiveDate, sample: &str) -> Self {
        let mut directory = PathBuf::from(&args.output_location);
        directory.push(&args.tag);
        directory.push(args.processor.as_str());
        directory.push(date.format("%Y-%m-%d").to_string());
        if args.processor.is_channel_aware() {
            directory.push(&args.channel);
        }
        directory.push(&args.year);
        directory.push(args.lepton_flavor.as_str());

        Self {
            directory,
            sample: sample.to_string(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn artifact(&self) -> PathBuf {
        self.directory
            .join(format!("{}.{}", self.sample, OUTPUT_EXTENSION))
    }

    pub fn metadata_dir(&self) -> PathBuf {
        self.directory.join(METADATA_DIR)
    }

    pub fn metadata_file(&self) -> PathBuf {
        self.metadata_dir()
            .join(format!("{}_metadata.json", self.sample))
    }
}
