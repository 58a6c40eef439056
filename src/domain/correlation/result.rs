//! Correlation result value objects.

use serde::{Deserialize, Serialize};

/// One scored correlation between the DISC profile and an external metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Metric label.
    pub metric: String,
    /// Affinity score in [0, 1].
    pub score: f64,
    /// Up to three templated insight strings.
    pub insights: Vec<String>,
}

impl CorrelationResult {
    /// Creates a new correlation result.
    pub fn new(metric: impl Into<String>, score: f64, insights: Vec<String>) -> Self {
        Self {
            metric: metric.into(),
            score,
            insights,
        }
    }
}

/// The three fixed correlation groups of a complete analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlations {
    pub disc_with_anchors: Vec<CorrelationResult>,
    pub disc_with_strengths: Vec<CorrelationResult>,
    pub disc_with_languages: Vec<CorrelationResult>,
}
