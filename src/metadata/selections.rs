// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Static object-selection tables recorded in run metadata.
//!
//! The tables ship inside the binary as YAML. `ttbar` selections depend on
//! channel and lepton flavor; the `ztoll` table is flavor independent and
//! is also what `ztautau` runs record.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::config::{LeptonFlavor, ProcessorKind};
use crate::errors::ConfigError;

const TTBAR_TABLE: &str = include_str!("../../selections/ttbar.yaml");
const ZTOLL_TABLE: &str = include_str!("../../selections/ztoll.yaml");

pub const ELECTRON_SELECTION: &str = "electron_selection";
pub const MUON_SELECTION: &str = "muon_selection";
pub const TAU_SELECTION: &str = "tau_selection";
pub const JET_SELECTION: &str = "jet_selection";

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct ObjectSelections {
    electron_selection: Value,
    muon_selection: Value,
    tau_selection: Value,
    jet_selection: Value,
}

type TtbarTable = IndexMap<String, IndexMap<LeptonFlavor, ObjectSelections>>;

fn parse<T: for<'de> Deserialize<'de>>(table: &'static str, text: &str) -> Result<T, ConfigError> {
    serde_yaml::from_str(text).map_err(|e| ConfigError::SelectionTableInvalid {
        table,
        reason: e.to_string(),
    })
}

/// Ordered `(key, description)` entries describing the selections of a run.
///
/// Entries are meant to be applied in order; a repeated key replaces the
/// earlier value. `ztautau` relies on this: its tau description is written
/// under `jet_selection`, replacing the jet description.
///
/// Processors without a selection table (`qcd`, `btag_eff`) yield no entries.
pub fn selection_entries(
    processor: ProcessorKind,
    channel: &str,
    lepton_flavor: LeptonFlavor,
) -> Result<Vec<(&'static str, Value)>, ConfigError> {
    match processor {
        ProcessorKind::Ttbar => {
            let mut table: TtbarTable = parse("ttbar", TTBAR_TABLE)?;
            let selections = table
                .get_mut(channel)
                .and_then(|flavors| flavors.shift_remove(&lepton_flavor))
                .ok_or_else(|| ConfigError::UnknownSelection {
                    channel: channel.to_string(),
                    lepton_flavor,
                })?;
            Ok(vec![
                (ELECTRON_SELECTION, selections.electron_selection),
                (MUON_SELECTION, selections.muon_selection),
                (TAU_SELECTION, selections.tau_selection),
                (JET_SELECTION, selections.jet_selection),
            ])
        }
        ProcessorKind::Ztoll => {
            let selections: ObjectSelections = parse("ztoll", ZTOLL_TABLE)?;
            Ok(vec![
                (ELECTRON_SELECTION, selections.electron_selection),
                (MUON_SELECTION, selections.muon_selection),
                (JET_SELECTION, selections.jet_selection),
            ])
        }
        ProcessorKind::Ztautau => {
            let selections: ObjectSelections = parse("ztoll", ZTOLL_TABLE)?;
            Ok(vec![
                (ELECTRON_SELECTION, selections.electron_selection),
                (MUON_SELECTION, selections.muon_selection),
                (JET_SELECTION, selections.jet_selection),
                (JET_SELECTION, selections.tau_selection),
            ])
        }
        ProcessorKind::Qcd | ProcessorKind::BtagEff => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(entries: &[(&'static str, Value)]) -> Vec<&'static str> {
        entries.iter().map(|(key, _)| *key).collect()
    }

    #[test]
    fn test_every_ttbar_channel_and_flavor_has_selections() {
        for channel in ["2b1l", "1b1e1mu", "1b1l"] {
            for flavor in [LeptonFlavor::Ele, LeptonFlavor::Mu] {
                let entries = selection_entries(ProcessorKind::Ttbar, channel, flavor).unwrap();
                assert_eq!(
                    keys(&entries),
                    vec![ELECTRON_SELECTION, MUON_SELECTION, TAU_SELECTION, JET_SELECTION]
                );
                assert!(entries.iter().all(|(_, value)| value.is_object()));
            }
        }
    }

    #[test]
    fn test_ttbar_selection_depends_on_flavor() {
        let ele = selection_entries(ProcessorKind::Ttbar, "2b1l", LeptonFlavor::Ele).unwrap();
        let mu = selection_entries(ProcessorKind::Ttbar, "2b1l", LeptonFlavor::Mu).unwrap();
        assert_eq!(ele[0].1["electron_id_wp"], "wp80iso");
        assert_eq!(mu[0].1["electron_id_wp"], "wp90iso");
    }

    #[test]
    fn test_unknown_ttbar_channel() {
        let err = selection_entries(ProcessorKind::Ttbar, "3b", LeptonFlavor::Mu).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSelection { ref channel, .. } if channel == "3b"));
    }

    #[test]
    fn test_ztoll_and_ztautau_share_the_ztoll_table() {
        let ztoll = selection_entries(ProcessorKind::Ztoll, "ignored", LeptonFlavor::Ele).unwrap();
        assert_eq!(keys(&ztoll), vec![ELECTRON_SELECTION, MUON_SELECTION, JET_SELECTION]);

        let ztautau = selection_entries(ProcessorKind::Ztautau, "2b1l", LeptonFlavor::Mu).unwrap();
        assert_eq!(
            keys(&ztautau),
            vec![ELECTRON_SELECTION, MUON_SELECTION, JET_SELECTION, JET_SELECTION]
        );
        assert_eq!(ztautau[0].1, ztoll[0].1);
        assert!(ztautau[3].1.get("tau_vs_jet").is_some());
    }

    #[test]
    fn test_processors_without_tables() {
        for kind in [ProcessorKind::Qcd, ProcessorKind::BtagEff] {
            assert!(selection_entries(kind, "2b1l", LeptonFlavor::Mu).unwrap().is_empty());
        }
    }
}
