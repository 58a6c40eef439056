//! Visualization hint attached to narrative steps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Suggested rendering for a step's content.
///
/// Metadata only: hints never affect step count or ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visualization {
    Chart,
    Table,
    Narrative,
}

impl fmt::Display for Visualization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Visualization::Chart => "chart",
            Visualization::Table => "table",
            Visualization::Narrative => "narrative",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visualization_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Visualization::Chart).unwrap(), "\"chart\"");
        assert_eq!(serde_json::to_string(&Visualization::Table).unwrap(), "\"table\"");
        assert_eq!(
            serde_json::to_string(&Visualization::Narrative).unwrap(),
            "\"narrative\""
        );
    }
}
