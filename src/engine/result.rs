// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Run results and their accumulation across work items.
//!
//! A processor answers every work item with a partial [`RunResult`]; the
//! executors fold those partials into one result with [`RunResult::merge`].
//!
//! # Accumulation rules
//!
//! Payload values are merged recursively:
//! - numbers add (integers stay integers while both sides are integers)
//! - objects merge key-wise, keeping first-seen key order
//! - arrays concatenate
//! - any other value is replaced by the later one
//!
//! Statistics add up, cutflow counts add per cut, and weight statistics
//! combine as sums, minimum and maximum.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

use crate::errors::ProcessorError;

/// Key under which run statistics travel inside a processor result.
pub const METADATA_KEY: &str = "metadata";

/// Summary of the weights applied by a processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightStatistics {
    #[serde(default)]
    pub sumw: f64,
    #[serde(default)]
    pub sumw2: f64,
    #[serde(default = "positive_infinity")]
    pub minw: f64,
    #[serde(default = "negative_infinity")]
    pub maxw: f64,
    #[serde(default)]
    pub n: u64,
}

fn positive_infinity() -> f64 {
    f64::INFINITY
}

fn negative_infinity() -> f64 {
    f64::NEG_INFINITY
}

impl Default for WeightStatistics {
    fn default() -> Self {
        Self {
            sumw: 0.0,
            sumw2: 0.0,
            minw: f64::INFINITY,
            maxw: f64::NEG_INFINITY,
            n: 0,
        }
    }
}

impl WeightStatistics {
    pub fn merge(&mut self, other: &WeightStatistics) {
        self.sumw += other.sumw;
        self.sumw2 += other.sumw2;
        self.minw = self.minw.min(other.minw);
        self.maxw = self.maxw.max(other.maxw);
        self.n += other.n;
    }
}

impl fmt::Display for WeightStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WeightStatistics(sumw={:?}, sumw2={:?}, minw={:?}, maxw={:?}, n={})",
            self.sumw, self.sumw2, self.minw, self.maxw, self.n
        )
    }
}

/// Event counts and weight summaries reported alongside the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    #[serde(default)]
    pub events_before: f64,
    #[serde(default)]
    pub events_after: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sumw: Option<f64>,
    #[serde(default)]
    pub weight_statistics: IndexMap<String, WeightStatistics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutflow: Option<IndexMap<String, Number>>,
}

impl RunStatistics {
    pub fn merge(&mut self, other: RunStatistics) {
        self.events_before += other.events_before;
        self.events_after += other.events_after;

        self.sumw = match (self.sumw, other.sumw) {
            (Some(a), Some(b)) => Some(a + b),
            (a, b) => a.or(b),
        };

        for (weight, stats) in other.weight_statistics {
            self.weight_statistics
                .entry(weight)
                .and_modify(|existing| existing.merge(&stats))
                .or_insert(stats);
        }

        if let Some(other_cutflow) = other.cutflow {
            let cutflow = self.cutflow.get_or_insert_with(IndexMap::new);
            for (cut, count) in other_cutflow {
                match cutflow.get_mut(&cut) {
                    Some(existing) => *existing = add_numbers(existing, &count),
                    None => {
                        cutflow.insert(cut, count);
                    }
                }
            }
        }
    }
}

/// Output of one job: processor payload keyed by sample plus run statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunResult {
    pub payload: Map<String, Value>,
    pub metadata: RunStatistics,
}

impl RunResult {
    /// Split a processor's JSON answer into payload and statistics.
    ///
    /// The answer is an object whose `metadata` key holds the statistics;
    /// every other key is payload.
    pub fn from_output(output: Value) -> Result<Self, ProcessorError> {
        let Value::Object(mut payload) = output else {
            return Err(ProcessorError::MalformedOutput(
                "expected a JSON object".to_string(),
            ));
        };

        let metadata = match payload.shift_remove(METADATA_KEY) {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| ProcessorError::MalformedOutput(format!("invalid metadata: {}", e)))?,
            None => {
                return Err(ProcessorError::MalformedOutput(format!(
                    "missing '{}' record",
                    METADATA_KEY
                )))
            }
        };

        Ok(Self { payload, metadata })
    }

    pub fn merge(&mut self, other: RunResult) {
        merge_objects(&mut self.payload, other.payload);
        self.metadata.merge(other.metadata);
    }
}

fn merge_objects(into: &mut Map<String, Value>, from: Map<String, Value>) {
    for (key, value) in from {
        match into.get_mut(&key) {
            Some(existing) => merge_values(existing, value),
            None => {
                into.insert(key, value);
            }
        }
    }
}

fn merge_values(into: &mut Value, from: Value) {
    match (into, from) {
        (Value::Number(a), Value::Number(b)) => *a = add_numbers(a, &b),
        (Value::Object(a), Value::Object(b)) => merge_objects(a, b),
        (Value::Array(a), Value::Array(b)) => a.extend(b),
        (slot, other) => *slot = other,
    }
}

fn add_numbers(a: &Number, b: &Number) -> Number {
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        if let Some(sum) = x.checked_add(y) {
            return Number::from(sum);
        }
    }
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        if let Some(sum) = x.checked_add(y) {
            return Number::from(sum);
        }
    }
    let sum = a.as_f64().unwrap_or(0.0) + b.as_f64().unwrap_or(0.0);
    Number::from_f64(sum).unwrap_or_else(|| Number::from(0))
}
