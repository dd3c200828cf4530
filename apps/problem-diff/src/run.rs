//! End-to-end compare run: gather paths, read both inputs, partition, write.

use crate::compare::{compare, Comparison};
use crate::config::Effective;
use crate::error::Result;
use crate::io::{read_analysis, write_problems};
use crate::models::policy::DuplicatePolicy;
use crate::models::Summary;
use crate::output::Written;
use crate::prompt::{self, path_or_prompt};
use std::io::{BufRead, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
/// The two inputs and three outputs of one run.
pub struct RunPaths {
    pub first: String,
    pub second: String,
    pub only_first: String,
    pub only_second: String,
    pub both: String,
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct Report {
    pub paths: RunPaths,
    pub comparison: Comparison,
    pub summary: Summary,
}

impl Report {
    pub fn written(&self) -> Vec<Written<'_>> {
        vec![
            Written {
                kind: "only_in_first",
                path: &self.paths.only_first,
                problems: self.comparison.only_in_first.len(),
            },
            Written {
                kind: "only_in_second",
                path: &self.paths.only_second,
                problems: self.comparison.only_in_second.len(),
            },
            Written {
                kind: "in_both",
                path: &self.paths.both,
                problems: self.comparison.in_both.len(),
            },
        ]
    }
}

/// Take paths from `eff`, prompting in fixed order for any that are missing.
pub fn collect_paths<R: BufRead, W: Write>(
    eff: &Effective,
    reader: &mut R,
    writer: &mut W,
) -> Result<RunPaths> {
    Ok(RunPaths {
        first: path_or_prompt(eff.first.clone(), prompt::FIRST_INPUT, reader, writer)?,
        second: path_or_prompt(eff.second.clone(), prompt::SECOND_INPUT, reader, writer)?,
        only_first: path_or_prompt(
            eff.only_first.clone(),
            prompt::ONLY_FIRST_OUTPUT,
            reader,
            writer,
        )?,
        only_second: path_or_prompt(
            eff.only_second.clone(),
            prompt::ONLY_SECOND_OUTPUT,
            reader,
            writer,
        )?,
        both: path_or_prompt(eff.both.clone(), prompt::BOTH_OUTPUT, reader, writer)?,
    })
}

/// Read both inputs, partition them, and write the three outputs in order.
///
/// Stops at the first failure; outputs already written stay on disk.
pub fn process(paths: RunPaths, policy: DuplicatePolicy, pretty: bool) -> Result<Report> {
    let first = read_analysis(Path::new(&paths.first))?;
    let second = read_analysis(Path::new(&paths.second))?;

    let comparison = compare(&first, &second, policy);

    write_problems(&comparison.only_in_first, Path::new(&paths.only_first), pretty)?;
    write_problems(&comparison.only_in_second, Path::new(&paths.only_second), pretty)?;
    write_problems(&comparison.in_both, Path::new(&paths.both), pretty)?;

    let summary = comparison.summary(&first, &second);
    Ok(Report {
        paths,
        comparison,
        summary,
    })
}
