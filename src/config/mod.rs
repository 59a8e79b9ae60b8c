// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod cli;
mod kinds;
mod loader;
mod processor_config;
mod validation;

pub mod consts;

pub use cli::CliArgs;
pub use kinds::{ExecutorKind, LeptonFlavor, OutputType, ProcessorKind, Syst};
pub use loader::{load_run_config, RunArgs};
pub use processor_config::{BtagEffConfig, ChannelConfig, FlavorConfig, ProcessorConfig};
pub use validation::{validate_run_args, FileLimit, ValidatedRun};
