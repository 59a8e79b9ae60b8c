// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Closed identifier sets accepted on the command line.
//!
//! Each enum doubles as a clap `ValueEnum` and a serde value so the same
//! spelling is used in flags, run-config files and the metadata record.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Analysis processor to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ProcessorKind {
    Ttbar,
    Ztautau,
    Ztoll,
    Qcd,
    #[value(name = "btag_eff")]
    BtagEff,
}

impl ProcessorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessorKind::Ttbar => "ttbar",
            ProcessorKind::Ztautau => "ztautau",
            ProcessorKind::Ztoll => "ztoll",
            ProcessorKind::Qcd => "qcd",
            ProcessorKind::BtagEff => "btag_eff",
        }
    }

    /// Processors whose output layout carries a channel segment.
    pub fn is_channel_aware(&self) -> bool {
        matches!(self, ProcessorKind::Ttbar)
    }

    /// Processors whose run statistics include a cutflow.
    pub fn reports_cutflow(&self) -> bool {
        matches!(self, ProcessorKind::Ttbar | ProcessorKind::Ztautau)
    }

    /// Invocation keys that are meaningless for this processor.
    pub fn excluded_keys(&self) -> &'static [&'static str] {
        match self {
            ProcessorKind::Ttbar | ProcessorKind::Ztautau => &[],
            ProcessorKind::Ztoll | ProcessorKind::Qcd => &["channel", "syst"],
            ProcessorKind::BtagEff => &["channel", "syst", "lepton_flavor"],
        }
    }
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Execution backend strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ExecutorKind {
    Iterative,
    Futures,
    Dask,
}

impl ExecutorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutorKind::Iterative => "iterative",
            ExecutorKind::Futures => "futures",
            ExecutorKind::Dask => "dask",
        }
    }
}

impl fmt::Display for ExecutorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LeptonFlavor {
    Mu,
    Ele,
}

impl LeptonFlavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeptonFlavor::Mu => "mu",
            LeptonFlavor::Ele => "ele",
        }
    }
}

impl fmt::Display for LeptonFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of the physics payload a processor produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    Hist,
    Array,
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputType::Hist => "hist",
            OutputType::Array => "array",
        })
    }
}

/// Systematic variations to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Syst {
    Nominal,
    Jet,
    Met,
    Full,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processor_kind_parses_cli_spelling() {
        let cases = vec![
            ("ttbar", ProcessorKind::Ttbar),
            ("ztautau", ProcessorKind::Ztautau),
            ("ztoll", ProcessorKind::Ztoll),
            ("qcd", ProcessorKind::Qcd),
            ("btag_eff", ProcessorKind::BtagEff),
        ];

        for (input, expected) in cases {
            let parsed = ProcessorKind::from_str(input, false).unwrap();
            assert_eq!(parsed, expected, "flag value '{}'", input);
            assert_eq!(parsed.as_str(), input);
        }
        assert!(ProcessorKind::from_str("ttbar_cr1", false).is_err());
    }

    #[test]
    fn test_processor_kind_serde_matches_display() {
        let value = serde_json::to_value(ProcessorKind::BtagEff).unwrap();
        assert_eq!(value, serde_json::json!("btag_eff"));
        let flavor: LeptonFlavor = serde_json::from_str("\"ele\"").unwrap();
        assert_eq!(flavor, LeptonFlavor::Ele);
    }

    #[test]
    fn test_excluded_keys() {
        assert!(ProcessorKind::Ttbar.excluded_keys().is_empty());
        assert!(ProcessorKind::Ztautau.excluded_keys().is_empty());
        assert_eq!(ProcessorKind::Ztoll.excluded_keys(), &["channel", "syst"]);
        assert_eq!(ProcessorKind::Qcd.excluded_keys(), &["channel", "syst"]);
        assert_eq!(
            ProcessorKind::BtagEff.excluded_keys(),
            &["channel", "syst", "lepton_flavor"]
        );
    }
}
