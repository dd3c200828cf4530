//! Tie-break policy for repeated hashes on the lookup side of a match.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Which problem a hash lookup keeps when the same hash occurs more than once.
pub enum DuplicatePolicy {
    /// The earliest occurrence wins.
    First,
    /// Later occurrences overwrite earlier ones.
    #[default]
    Last,
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(DuplicatePolicy::First),
            "last" => Ok(DuplicatePolicy::Last),
            other => Err(format!(
                "unknown duplicate policy '{}' (expected first|last)",
                other
            )),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::First => f.write_str("first"),
            DuplicatePolicy::Last => f.write_str("last"),
        }
    }
}
