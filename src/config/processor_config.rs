// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-processor keyword configuration.
//!
//! Every processor accepts only the keys that mean something to it. Rather
//! than deleting keys from a shared map, each variant owns a schema struct
//! carrying exactly its accepted keys; serializing the variant yields the
//! keyword configuration handed to the processor.

use crate::config::{LeptonFlavor, OutputType, ProcessorKind, RunArgs, Syst};
use crate::errors::ConfigError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Configuration for channel-aware processors (`ttbar`, `ztautau`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelConfig {
    pub year: String,
    pub yearmod: String,
    pub channel: String,
    pub lepton_flavor: LeptonFlavor,
    pub syst: Syst,
    pub output_type: OutputType,
}

/// Configuration for flavor-aware processors without a channel (`ztoll`, `qcd`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlavorConfig {
    pub year: String,
    pub yearmod: String,
    pub lepton_flavor: LeptonFlavor,
    pub output_type: OutputType,
}

/// Configuration for the b-tagging efficiency processor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BtagEffConfig {
    pub year: String,
    pub yearmod: String,
    pub output_type: OutputType,
}

/// Keyword configuration for one processor, tagged by processor kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProcessorConfig {
    Ttbar(ChannelConfig),
    Ztautau(ChannelConfig),
    Ztoll(FlavorConfig),
    Qcd(FlavorConfig),
    BtagEff(BtagEffConfig),
}

impl ProcessorConfig {
    /// Build the configuration for the processor selected in `args`.
    ///
    /// Fails when `qcd` is requested with anything other than the muon
    /// channel and histogram output.
    pub fn from_args(args: &RunArgs) -> Result<Self, ConfigError> {
        let channel = || ChannelConfig {
            year: args.year.clone(),
            yearmod: args.yearmod.clone(),
            channel: args.channel.clone(),
            lepton_flavor: args.lepton_flavor,
            syst: args.syst,
            output_type: args.output_type,
        };
        let flavor = || FlavorConfig {
            year: args.year.clone(),
            yearmod: args.yearmod.clone(),
            lepton_flavor: args.lepton_flavor,
            output_type: args.output_type,
        };

        let config = match args.processor {
            ProcessorKind::Ttbar => ProcessorConfig::Ttbar(channel()),
            ProcessorKind::Ztautau => ProcessorConfig::Ztautau(channel()),
            ProcessorKind::Ztoll => ProcessorConfig::Ztoll(flavor()),
            ProcessorKind::Qcd => {
                if args.lepton_flavor != LeptonFlavor::Mu || args.output_type != OutputType::Hist {
                    return Err(ConfigError::UnsupportedQcdSelection {
                        lepton_flavor: args.lepton_flavor,
                        output_type: args.output_type,
                    });
                }
                ProcessorConfig::Qcd(flavor())
            }
            ProcessorKind::BtagEff => ProcessorConfig::BtagEff(BtagEffConfig {
                year: args.year.clone(),
                yearmod: args.yearmod.clone(),
                output_type: args.output_type,
            }),
        };
        Ok(config)
    }

    pub fn kind(&self) -> ProcessorKind {
        match self {
            ProcessorConfig::Ttbar(_) => ProcessorKind::Ttbar,
            ProcessorConfig::Ztautau(_) => ProcessorKind::Ztautau,
            ProcessorConfig::Ztoll(_) => ProcessorKind::Ztoll,
            ProcessorConfig::Qcd(_) => ProcessorKind::Qcd,
            ProcessorConfig::BtagEff(_) => ProcessorKind::BtagEff,
        }
    }

    /// Keyword arguments passed to the processor constructor.
    pub fn to_kwargs(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}
