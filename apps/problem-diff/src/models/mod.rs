//! Shared data models for analysis documents and comparison summaries.

pub mod policy;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single analysis finding keyed by an opaque content hash.
pub struct Problem {
    pub hash: String,
    /// Supplementary details (stack frames, locations...). Missing means empty.
    #[serde(default)]
    pub data: Vec<String>,
}

impl Problem {
    pub fn new(hash: impl Into<String>, data: &[&str]) -> Self {
        Problem {
            hash: hash.into(),
            data: data.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Problems from one analysis run, in input order. Hashes may repeat.
pub struct AnalysisResult {
    #[serde(default)]
    pub problems: Vec<Problem>,
}

impl AnalysisResult {
    pub fn new(problems: Vec<Problem>) -> Self {
        AnalysisResult { problems }
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
/// Counts reported after a successful run.
pub struct Summary {
    pub first: usize,
    pub second: usize,
    pub only_in_first: usize,
    pub only_in_second: usize,
    pub in_both: usize,
}
