//! Hash-based partition of two analysis results.
//!
//! `diff` keeps problems whose hash is absent from the other side; `matching`
//! keeps problems whose hash is present and whose data agree as a multiset.
//! Both preserve the order of their first argument and never emit a problem
//! with empty `data`.

use crate::models::policy::DuplicatePolicy;
use crate::models::{AnalysisResult, Problem, Summary};
use std::collections::{HashMap, HashSet};

/// The three derived collections of one comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    pub only_in_first: Vec<Problem>,
    pub only_in_second: Vec<Problem>,
    pub in_both: Vec<Problem>,
}

impl Comparison {
    pub fn summary(&self, first: &AnalysisResult, second: &AnalysisResult) -> Summary {
        Summary {
            first: first.len(),
            second: second.len(),
            only_in_first: self.only_in_first.len(),
            only_in_second: self.only_in_second.len(),
            in_both: self.in_both.len(),
        }
    }
}

/// Problems of `first` whose hash never occurs in `second`.
///
/// Data content is not consulted; repeated hashes in `first` are all kept.
pub fn diff(first: &AnalysisResult, second: &AnalysisResult) -> Vec<Problem> {
    let hashes: HashSet<&str> = second.problems.iter().map(|p| p.hash.as_str()).collect();
    first
        .problems
        .iter()
        .filter(|p| !hashes.contains(p.hash.as_str()))
        .filter(|p| !p.data.is_empty())
        .cloned()
        .collect()
}

/// Problems of `first` whose hash occurs in `second` with the same data,
/// ignoring the order of the data entries.
///
/// When `second` repeats a hash, `policy` decides which occurrence is used.
pub fn matching(
    first: &AnalysisResult,
    second: &AnalysisResult,
    policy: DuplicatePolicy,
) -> Vec<Problem> {
    let by_hash = sorted_data_by_hash(second, policy);
    first
        .problems
        .iter()
        .filter(|p| !p.data.is_empty())
        .filter(|p| match by_hash.get(p.hash.as_str()) {
            Some(other) => sorted(&p.data) == *other,
            None => false,
        })
        .cloned()
        .collect()
}

/// Partition `first` and `second` into first-only, second-only and common.
pub fn compare(
    first: &AnalysisResult,
    second: &AnalysisResult,
    policy: DuplicatePolicy,
) -> Comparison {
    Comparison {
        only_in_first: diff(first, second),
        only_in_second: diff(second, first),
        in_both: matching(first, second, policy),
    }
}

fn sorted_data_by_hash(
    result: &AnalysisResult,
    policy: DuplicatePolicy,
) -> HashMap<&str, Vec<&str>> {
    let mut map: HashMap<&str, Vec<&str>> = HashMap::with_capacity(result.len());
    for p in &result.problems {
        match policy {
            DuplicatePolicy::First => {
                map.entry(p.hash.as_str()).or_insert_with(|| sorted(&p.data));
            }
            DuplicatePolicy::Last => {
                map.insert(p.hash.as_str(), sorted(&p.data));
            }
        }
    }
    map
}

fn sorted(data: &[String]) -> Vec<&str> {
    let mut v: Vec<&str> = data.iter().map(String::as_str).collect();
    v.sort_unstable();
    v
}
