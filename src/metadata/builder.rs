// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

use crate::engine::RunStatistics;
use crate::metadata::timespan::format_timespan;

/// Key of the consumed sample's resolved file list.
pub const INPUT_FILES_KEY: &str = "input_files";

const FILESET_KEY: &str = "fileset";

/// Flat record describing one run, written next to its output artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataRecord(Map<String, Value>);

impl MetadataRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
}

/// Assembles a [`MetadataRecord`] from named sections.
///
/// Sections are merged in a fixed order regardless of the order the setters
/// are called in: run statistics, selections, input files, arguments. A key
/// written by a later section (or later within the selection section)
/// replaces the earlier value in place.
#[derive(Debug, Default)]
pub struct MetadataBuilder {
    run_statistics: Map<String, Value>,
    selections: Vec<(&'static str, Value)>,
    input_files: Option<Vec<String>>,
    arguments: Map<String, Value>,
}

impl MetadataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wall time plus the statistics reported by the processor.
    ///
    /// Weight statistics and cutflow counts are stored as strings. The
    /// cutflow is only kept when `include_cutflow` is set.
    pub fn run_statistics(
        mut self,
        walltime: Duration,
        statistics: &RunStatistics,
        include_cutflow: bool,
    ) -> Self {
        let section = &mut self.run_statistics;
        section.insert("walltime".into(), Value::from(format_timespan(walltime)));
        section.insert("events_before".into(), Value::from(statistics.events_before));
        section.insert("events_after".into(), Value::from(statistics.events_after));
        if let Some(sumw) = statistics.sumw {
            section.insert("sumw".into(), Value::from(sumw));
        }

        let weights: Map<String, Value> = statistics
            .weight_statistics
            .iter()
            .map(|(name, stats)| (name.clone(), Value::from(stats.to_string())))
            .collect();
        section.insert("weight_statistics".into(), Value::Object(weights));

        if include_cutflow {
            if let Some(cutflow) = &statistics.cutflow {
                let cuts: Map<String, Value> = cutflow
                    .iter()
                    .map(|(cut, count)| (cut.clone(), Value::from(count.to_string())))
                    .collect();
                section.insert("cutflow".into(), Value::Object(cuts));
            }
        }
        self
    }

    pub fn selections(mut self, entries: Vec<(&'static str, Value)>) -> Self {
        self.selections = entries;
        self
    }

    pub fn input_files(mut self, files: &[String]) -> Self {
        self.input_files = Some(files.to_vec());
        self
    }

    pub fn arguments(mut self, record: Map<String, Value>) -> Self {
        self.arguments = record;
        self
    }

    pub fn build(self) -> MetadataRecord {
        let mut record = self.run_statistics;

        for (key, value) in self.selections {
            record.insert(key.to_string(), value);
        }

        if let Some(files) = self.input_files {
            record.insert(INPUT_FILES_KEY.to_string(), Value::from(files));
        }

        for (key, value) in self.arguments {
            record.insert(key, value);
        }

        record.shift_remove(FILESET_KEY);
        MetadataRecord(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LeptonFlavor, ProcessorKind, RunArgs};
    use crate::engine::WeightStatistics;
    use crate::metadata::selections::{selection_entries, JET_SELECTION};
    use indexmap::IndexMap;
    use serde_json::{json, Number};
    use std::path::PathBuf;

    fn statistics() -> RunStatistics {
        let mut weight_statistics = IndexMap::new();
        weight_statistics.insert(
            "genweight".to_string(),
            WeightStatistics {
                sumw: 3.0,
                sumw2: 3.0,
                minw: 1.0,
                maxw: 1.0,
                n: 3,
            },
        );
        let mut cutflow = IndexMap::new();
        cutflow.insert("all".to_string(), Number::from(10));
        cutflow.insert("one_lepton".to_string(), Number::from(3));

        RunStatistics {
            events_before: 10.0,
            events_after: 3.0,
            sumw: Some(3.0),
            weight_statistics,
            cutflow: Some(cutflow),
        }
    }

    fn record_for(args: &RunArgs) -> MetadataRecord {
        let files = vec!["root://xcache/f1.root".to_string()];
        MetadataBuilder::new()
            .arguments(args.to_record())
            .input_files(&files)
            .selections(selection_entries(args.processor, &args.channel, args.lepton_flavor).unwrap())
            .run_statistics(
                Duration::from_secs_f64(4.5),
                &statistics(),
                args.processor.reports_cutflow(),
            )
            .build()
    }

    #[test]
    fn test_sections_merge_in_fixed_order() {
        let record = record_for(&RunArgs::default());
        let keys: Vec<&String> = record.keys().collect();

        assert_eq!(keys[0], "walltime");
        let position = |key: &str| keys.iter().position(|k| *k == key).unwrap();
        assert!(position("cutflow") < position("electron_selection"));
        assert!(position("jet_selection") < position(INPUT_FILES_KEY));
        assert!(position(INPUT_FILES_KEY) < position("processor"));
    }

    #[test]
    fn test_run_statistics_are_stringified() {
        let record = record_for(&RunArgs::default());

        assert_eq!(record.get("walltime"), Some(&json!("4.5 seconds")));
        assert_eq!(record.get("events_before"), Some(&json!(10.0)));
        assert_eq!(record.get("sumw"), Some(&json!(3.0)));
        assert_eq!(
            record.get("weight_statistics"),
            Some(&json!({"genweight": "WeightStatistics(sumw=3.0, sumw2=3.0, minw=1.0, maxw=1.0, n=3)"}))
        );
        assert_eq!(record.get("cutflow"), Some(&json!({"all": "10", "one_lepton": "3"})));
        assert_eq!(
            record.get(INPUT_FILES_KEY),
            Some(&json!(["root://xcache/f1.root"]))
        );
    }

    #[test]
    fn test_cutflow_only_for_cutflow_processors() {
        struct TestCase {
            processor: ProcessorKind,
            has_cutflow: bool,
        }

        let test_cases = vec![
            TestCase { processor: ProcessorKind::Ttbar, has_cutflow: true },
            TestCase { processor: ProcessorKind::Ztautau, has_cutflow: true },
            TestCase { processor: ProcessorKind::Ztoll, has_cutflow: false },
            TestCase { processor: ProcessorKind::Qcd, has_cutflow: false },
            TestCase { processor: ProcessorKind::BtagEff, has_cutflow: false },
        ];

        for case in test_cases {
            let args = RunArgs {
                processor: case.processor,
                ..RunArgs::default()
            };
            let record = record_for(&args);
            assert_eq!(record.contains_key("cutflow"), case.has_cutflow, "{}", case.processor);
        }
    }

    #[test]
    fn test_ztautau_jet_selection_holds_tau_description() {
        let args = RunArgs {
            processor: ProcessorKind::Ztautau,
            lepton_flavor: LeptonFlavor::Ele,
            ..RunArgs::default()
        };
        let record = record_for(&args);

        let jet = record.get(JET_SELECTION).unwrap();
        assert!(jet.get("tau_vs_jet").is_some());
        assert!(jet.get("jet_pt_threshold").is_none());
        assert!(!record.contains_key("tau_selection"));
    }

    #[test]
    fn test_record_round_trips_without_fileset() {
        let args = RunArgs {
            processor: ProcessorKind::Ztoll,
            fileset: Some(PathBuf::from("signal.json")),
            ..RunArgs::default()
        };
        let record = record_for(&args);

        let text = serde_json::to_string(&record).unwrap();
        let parsed: MetadataRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, record);
        assert!(!parsed.contains_key("fileset"));
        assert!(!parsed.contains_key("channel"));
        assert!(!parsed.contains_key("syst"));
    }

    #[test]
    fn test_later_sections_override_earlier_keys() {
        let mut arguments = Map::new();
        arguments.insert("walltime".to_string(), json!("overridden"));
        arguments.insert("fileset".to_string(), json!("leak.json"));

        let record = MetadataBuilder::new()
            .run_statistics(Duration::from_secs(1), &RunStatistics::default(), false)
            .arguments(arguments)
            .build();

        assert_eq!(record.get("walltime"), Some(&json!("overridden")));
        assert_eq!(record.keys().next().map(String::as_str), Some("walltime"));
        assert!(!record.contains_key("fileset"));
    }
}
