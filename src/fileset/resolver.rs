// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::FileLimit;
use crate::engine::JobSpec;
use crate::errors::FilesetError;
use crate::observability::messages::fileset::{FilesetLoaded, FilesetResolved};
use crate::observability::messages::StructuredLog;

/// Sample name to file list, exactly as read from the manifest.
///
/// Sample order follows the manifest document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawFileset {
    samples: IndexMap<String, Vec<String>>,
}

impl RawFileset {
    /// Read and parse a manifest file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FilesetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| FilesetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let fileset = Self::from_json(&content)?;

        FilesetLoaded {
            path: &path.display().to_string(),
            sample_count: fileset.samples.len(),
            file_count: fileset.samples.values().map(Vec::len).sum(),
        }
        .log();

        Ok(fileset)
    }

    /// Parse a manifest document. An empty mapping is rejected.
    pub fn from_json(text: &str) -> Result<Self, FilesetError> {
        let fileset: RawFileset = serde_json::from_str(text)?;
        if fileset.samples.is_empty() {
            return Err(FilesetError::Empty);
        }
        Ok(fileset)
    }

    /// Truncate every sample to `limit` files and prefix each path with the
    /// redirector. File order within a sample is preserved.
    pub fn resolve(&self, limit: FileLimit, redirector: &str) -> ResolvedFileset {
        let samples: IndexMap<String, Vec<String>> = self
            .samples
            .iter()
            .map(|(sample, files)| {
                let kept = match limit {
                    FileLimit::All => files.len(),
                    FileLimit::AtMost(n) => n.min(files.len()),
                };
                let resolved = files[..kept]
                    .iter()
                    .map(|file| redirect(redirector, file))
                    .collect();
                (sample.clone(), resolved)
            })
            .collect();

        let resolved = ResolvedFileset { samples };
        FilesetResolved {
            redirector,
            sample_count: resolved.samples.len(),
            file_count: resolved.file_count(),
        }
        .log();
        resolved
    }
}

/// Rewrite a file path to go through the given redirector.
pub fn redirect(redirector: &str, path: &str) -> String {
    format!("root://{}/{}", redirector, path)
}

/// Fileset after truncation and redirector rewriting. Never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedFileset {
    samples: IndexMap<String, Vec<String>>,
}

impl ResolvedFileset {
    pub fn sample_names(&self) -> impl Iterator<Item = &String> {
        self.samples.keys()
    }

    pub fn files(&self, sample: &str) -> Option<&[String]> {
        self.samples.get(sample).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.samples.values().map(Vec::len).sum()
    }

    /// The sample that names the run's artifacts: the last one in manifest order.
    pub fn output_sample(&self) -> Option<&str> {
        self.samples.keys().last().map(String::as_str)
    }

    /// One work item per (sample, file), in manifest order.
    pub fn work_items(&self, job: &JobSpec) -> Vec<WorkItem> {
        self.samples
            .iter()
            .flat_map(|(sample, files)| {
                files.iter().map(move |file| WorkItem {
                    sample: sample.clone(),
                    file: file.clone(),
                    treename: job.treename.to_string(),
                    schema: job.schema.as_str().to_string(),
                    chunksize: job.chunksize,
                })
            })
            .collect()
    }
}

/// A single file of a sample, as handed to a processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub sample: String,
    pub file: String,
    pub treename: String,
    pub schema: String,
    pub chunksize: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EventSchema;
    use proptest::prelude::*;

    #[test]
    fn test_resolve_truncates_and_redirects() {
        let raw = RawFileset::from_json(r#"{"A": ["f1.root", "f2.root", "f3.root"]}"#).unwrap();
        let resolved = raw.resolve(FileLimit::AtMost(2), "xcache");

        assert_eq!(
            resolved.files("A").unwrap(),
            &["root://xcache/f1.root", "root://xcache/f2.root"]
        );
    }

    #[test]
    fn test_resolve_all_files() {
        let raw = RawFileset::from_json(r#"{"A": ["a1", "a2"], "B": ["b1"]}"#).unwrap();
        let resolved = raw.resolve(FileLimit::All, "cms-xrd-global.cern.ch");

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved.file_count(), 3);
        assert_eq!(resolved.files("B").unwrap(), &["root://cms-xrd-global.cern.ch/b1"]);
    }

    #[test]
    fn test_sample_order_follows_manifest() {
        let raw = RawFileset::from_json(r#"{"zeta": ["z"], "alpha": ["a"], "mid": ["m"]}"#).unwrap();
        let resolved = raw.resolve(FileLimit::All, "xcache");

        let names: Vec<&String> = resolved.sample_names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(resolved.output_sample(), Some("mid"));
    }

    #[test]
    fn test_malformed_manifests_fail() {
        let cases = vec![
            r#"["f1.root"]"#,
            r#"{"A": "f1.root"}"#,
            r#"{"A": [1, 2]}"#,
            r#"{"A": ["f1.root"]"#,
        ];
        for text in cases {
            assert!(
                matches!(RawFileset::from_json(text), Err(FilesetError::Parse(_))),
                "manifest should be rejected: {}",
                text
            );
        }
        assert!(matches!(RawFileset::from_json("{}"), Err(FilesetError::Empty)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RawFileset::load("/nonexistent/fileset.json").unwrap_err();
        assert!(matches!(err, FilesetError::Read { .. }));
    }

    #[test]
    fn test_work_items_carry_job_settings() {
        let raw = RawFileset::from_json(r#"{"A": ["a1", "a2"], "B": ["b1"]}"#).unwrap();
        let resolved = raw.resolve(FileLimit::All, "xcache");
        let job = JobSpec {
            treename: "Events",
            schema: EventSchema::NanoAod,
            chunksize: 1000,
        };

        let items = resolved.work_items(&job);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].sample, "A");
        assert_eq!(items[0].file, "root://xcache/a1");
        assert_eq!(items[2].sample, "B");
        assert!(items.iter().all(|i| i.treename == "Events" && i.chunksize == 1000));
        assert!(items.iter().all(|i| i.schema == "NanoAODSchema"));
    }

    proptest! {
        #[test]
        fn truncation_keeps_prefix(files in proptest::collection::vec("[a-z0-9_]{1,12}\\.root", 0..20), n in 0usize..25) {
            let raw = RawFileset { samples: IndexMap::from([("S".to_string(), files.clone())]) };
            let resolved = raw.resolve(FileLimit::AtMost(n), "xcache");
            let out = resolved.files("S").unwrap();

            prop_assert_eq!(out.len(), n.min(files.len()));
            for (resolved_path, original) in out.iter().zip(files.iter()) {
                prop_assert_eq!(resolved_path, &format!("root://xcache/{}", original));
            }
        }

        #[test]
        fn no_limit_keeps_everything(files in proptest::collection::vec("[a-z/]{1,16}", 0..20), redirector in "[a-z.]{1,20}") {
            let raw = RawFileset { samples: IndexMap::from([("S".to_string(), files.clone())]) };
            let resolved = raw.resolve(FileLimit::All, &redirector);
            let expected: Vec<String> = files.iter().map(|f| format!("root://{}/{}", redirector, f)).collect();

            prop_assert_eq!(resolved.files("S").unwrap(), expected.as_slice());
        }
    }
}
