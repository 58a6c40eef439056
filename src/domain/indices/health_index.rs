//! Health index value object and the nine fixed index kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The nine fixed behavioral health indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexKind {
    Assertividade,
    #[serde(rename = "Paciência")]
    Paciencia,
    Conformidade,
    Empatia,
    Flexibilidade,
    Criatividade,
    #[serde(rename = "Liderança")]
    Lideranca,
    #[serde(rename = "Análise")]
    Analise,
    #[serde(rename = "Colaboração")]
    Colaboracao,
}

impl IndexKind {
    /// All nine kinds in canonical calculation order.
    pub const ALL: [IndexKind; 9] = [
        IndexKind::Assertividade,
        IndexKind::Paciencia,
        IndexKind::Conformidade,
        IndexKind::Empatia,
        IndexKind::Flexibilidade,
        IndexKind::Criatividade,
        IndexKind::Lideranca,
        IndexKind::Analise,
        IndexKind::Colaboracao,
    ];

    /// Portuguese display name.
    pub fn label(&self) -> &'static str {
        match self {
            IndexKind::Assertividade => "Assertividade",
            IndexKind::Paciencia => "Paciência",
            IndexKind::Conformidade => "Conformidade",
            IndexKind::Empatia => "Empatia",
            IndexKind::Flexibilidade => "Flexibilidade",
            IndexKind::Criatividade => "Criatividade",
            IndexKind::Lideranca => "Liderança",
            IndexKind::Analise => "Análise",
            IndexKind::Colaboracao => "Colaboração",
        }
    }

    /// English quality name used in diagnosis text.
    pub fn quality(&self) -> &'static str {
        match self {
            IndexKind::Assertividade => "Assertiveness",
            IndexKind::Paciencia => "Patience",
            IndexKind::Conformidade => "Conformity",
            IndexKind::Empatia => "Empathy",
            IndexKind::Flexibilidade => "Flexibility",
            IndexKind::Criatividade => "Creativity",
            IndexKind::Lideranca => "Leadership",
            IndexKind::Analise => "Analysis",
            IndexKind::Colaboracao => "Collaboration",
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A computed behavioral health index.
///
/// Created fresh per calculation call and never mutated. The numeric value
/// is a rounded integer percentage; [`HealthIndex::percentage`] renders the
/// display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthIndex {
    pub kind: IndexKind,
    /// Rounded integer score.
    pub value: i32,
    /// Value-banded interpretation text.
    pub diagnosis: String,
    /// Fixed description of what this index measures.
    pub impact: String,
    /// Whether the value crossed this index's alert threshold.
    pub is_alert: bool,
}

impl HealthIndex {
    /// Display name of the index.
    pub fn name(&self) -> &'static str {
        self.kind.label()
    }

    /// Value rendered as a rounded integer percentage string.
    pub fn percentage(&self) -> String {
        format!("{}%", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_nine_distinct_kinds() {
        assert_eq!(IndexKind::ALL.len(), 9);
        for (i, a) in IndexKind::ALL.iter().enumerate() {
            for b in IndexKind::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn kind_serializes_to_portuguese_label() {
        assert_eq!(
            serde_json::to_string(&IndexKind::Paciencia).unwrap(),
            "\"Paciência\""
        );
        assert_eq!(
            serde_json::to_string(&IndexKind::Assertividade).unwrap(),
            "\"Assertividade\""
        );
        assert_eq!(
            serde_json::to_string(&IndexKind::Colaboracao).unwrap(),
            "\"Colaboração\""
        );
    }

    #[test]
    fn percentage_renders_rounded_integer() {
        let index = HealthIndex {
            kind: IndexKind::Empatia,
            value: 62,
            diagnosis: String::new(),
            impact: String::new(),
            is_alert: false,
        };
        assert_eq!(index.percentage(), "62%");
    }
}
