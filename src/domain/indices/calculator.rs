//! Index Calculation Engine - the nine weighted health index formulas.
//!
//! Each index is a weighted linear combination of the four DISC axes:
//!
//! | Index         | Formula                            | Alert if |
//! |---------------|------------------------------------|----------|
//! | Assertividade | 0.7·D + 0.3·I                      | < 30     |
//! | Paciência     | 0.7·S + 0.3·C                      | < 30     |
//! | Conformidade  | 0.8·C + 0.2·S                      | < 20     |
//! | Empatia       | 0.5·I + 0.5·S                      | < 25     |
//! | Flexibilidade | 0.4·I + 0.4·S + 0.2·(100−C)        | > 80     |
//! | Criatividade  | 0.5·D + 0.5·I                      | < 25     |
//! | Liderança     | 0.6·D + 0.3·I + 0.1·(100−C)        | < 30     |
//! | Análise       | 0.7·C + 0.3·(100−D)                | < 25     |
//! | Colaboração   | 0.4·I + 0.4·S + 0.2·(100−D)        | < 25     |
//!
//! Flexibilidade alerts on excess rather than deficiency.

use std::collections::HashMap;

use crate::domain::profile::DiscProfile;

use super::{HealthIndex, IndexKind};

/// Burnout-risk composite threshold.
const BURNOUT_THRESHOLD: f64 = 55.0;

/// Calculator for the nine behavioral health indices.
///
/// Stateless: every operation is a pure function of its inputs.
pub struct IndexCalculator;

impl IndexCalculator {
    /// Computes all nine indices in canonical order.
    ///
    /// Always returns exactly 9 entries, one per [`IndexKind`].
    pub fn calculate_all(profile: &DiscProfile) -> Vec<HealthIndex> {
        IndexKind::ALL
            .iter()
            .map(|kind| Self::build_index(*kind, profile))
            .collect()
    }

    /// Computes a single index score by kind.
    ///
    /// Numerically identical to the value produced by [`calculate_all`]
    /// for the same kind and profile.
    ///
    /// [`calculate_all`]: Self::calculate_all
    pub fn calculate_by_kind(kind: IndexKind, profile: &DiscProfile) -> i32 {
        let d = f64::from(profile.d());
        let i = f64::from(profile.i());
        let s = f64::from(profile.s());
        let c = f64::from(profile.c());

        let raw = match kind {
            IndexKind::Assertividade => d * 0.7 + i * 0.3,
            IndexKind::Paciencia => s * 0.7 + c * 0.3,
            IndexKind::Conformidade => c * 0.8 + s * 0.2,
            IndexKind::Empatia => i * 0.5 + s * 0.5,
            IndexKind::Flexibilidade => i * 0.4 + s * 0.4 + (100.0 - c) * 0.2,
            IndexKind::Criatividade => d * 0.5 + i * 0.5,
            IndexKind::Lideranca => d * 0.6 + i * 0.3 + (100.0 - c) * 0.1,
            IndexKind::Analise => c * 0.7 + (100.0 - d) * 0.3,
            IndexKind::Colaboracao => i * 0.4 + s * 0.4 + (100.0 - d) * 0.2,
        };

        raw.round() as i32
    }

    /// Builds a formatted textual report over a set of indices:
    /// overall average with a banded health level, alert / strong /
    /// developing groupings, then full per-index detail.
    pub fn generate_report(indices: &[HealthIndex]) -> String {
        let mut report = String::from("# Behavioral Health Indices Report\n\n");

        let avg = if indices.is_empty() {
            0
        } else {
            let sum: i32 = indices.iter().map(|idx| idx.value).sum();
            (f64::from(sum) / indices.len() as f64).round() as i32
        };

        report.push_str(&format!("## Overall Health Score: {}%\n", avg));
        report.push_str(&format!("**Assessment**: {}\n\n", Self::health_level(avg)));

        let alerts: Vec<_> = indices.iter().filter(|idx| idx.is_alert).collect();
        if !alerts.is_empty() {
            report.push_str(&format!("## ⚠️ Alert Areas ({})\n", alerts.len()));
            for idx in &alerts {
                report.push_str(&format!(
                    "- **{}** ({}): {}\n",
                    idx.name(),
                    idx.percentage(),
                    idx.diagnosis
                ));
            }
            report.push('\n');
        }

        let strong: Vec<_> = indices.iter().filter(|idx| idx.value >= 70).collect();
        if !strong.is_empty() {
            report.push_str(&format!("## ✅ Strong Areas ({})\n", strong.len()));
            for idx in &strong {
                report.push_str(&format!(
                    "- **{}** ({}): Core strength\n",
                    idx.name(),
                    idx.percentage()
                ));
            }
            report.push('\n');
        }

        let developing: Vec<_> = indices
            .iter()
            .filter(|idx| idx.value >= 40 && idx.value < 70 && !idx.is_alert)
            .collect();
        if !developing.is_empty() {
            report.push_str(&format!(
                "## 📈 Development Opportunities ({})\n",
                developing.len()
            ));
            for idx in &developing {
                report.push_str(&format!(
                    "- **{}** ({}): Growing edge\n",
                    idx.name(),
                    idx.percentage()
                ));
            }
            report.push('\n');
        }

        report.push_str("## Detailed Index Analysis\n\n");
        for idx in indices {
            report.push_str(&format!("### {}\n", idx.name()));
            report.push_str(&format!("- **Score**: {}\n", idx.percentage()));
            report.push_str(&format!("- **Diagnosis**: {}\n", idx.diagnosis));
            report.push_str(&format!("- **Impact**: {}\n\n", idx.impact));
        }

        report
    }

    /// Detects fixed cross-index patterns and renders matching insight
    /// paragraphs; emits a generic balanced note when none match.
    pub fn analyze_patterns(indices: &[HealthIndex]) -> String {
        let values = Self::value_map(indices);
        let get = |kind: IndexKind| values.get(&kind).copied().unwrap_or(0);

        let mut analysis = String::from("## Behavioral Patterns & Insights\n\n");
        let mut matched = false;

        if get(IndexKind::Lideranca) > 65 && get(IndexKind::Colaboracao) < 40 {
            analysis.push_str(
                "**Leadership Pattern**: Your high leadership combined with lower \
                 collaboration suggests a directive leadership style. Consider \
                 balancing with more team input.\n\n",
            );
            matched = true;
        }

        if get(IndexKind::Criatividade) > 65 && get(IndexKind::Analise) < 40 {
            analysis.push_str(
                "**Decision Pattern**: High creativity with lower analysis suggests \
                 you tend to act quickly with innovative ideas. Balance with thorough \
                 evaluation before implementation.\n\n",
            );
            matched = true;
        }

        if get(IndexKind::Paciencia) > 65 && get(IndexKind::Assertividade) < 40 {
            analysis.push_str(
                "**Expression Pattern**: Your patience may limit your ability to \
                 advocate for your needs. Practice assertiveness to ensure your voice \
                 is heard.\n\n",
            );
            matched = true;
        }

        if get(IndexKind::Flexibilidade) > 65 && get(IndexKind::Conformidade) < 40 {
            analysis.push_str(
                "**Compliance Pattern**: Your flexibility and lower conformity suggest \
                 you challenge conventional approaches. Ensure this creativity is \
                 channeled productively.\n\n",
            );
            matched = true;
        }

        if get(IndexKind::Empatia) > 60 && get(IndexKind::Assertividade) > 60 {
            analysis.push_str(
                "**Social Pattern**: You combine empathy with assertiveness - an \
                 excellent combination for healthy relationships and team dynamics.\n\n",
            );
            matched = true;
        }

        if matched {
            analysis
        } else {
            String::from(
                "## Behavioral Patterns\nYour indices suggest a balanced behavioral profile.",
            )
        }
    }

    /// Computes the burnout-risk flag from the weighted composite
    /// `0.3·(100−patience) + 0.2·assertiveness + 0.3·(100−flexibility)
    /// + 0.2·(100−collaboration) > 55`. Missing indices default to 50.
    pub fn burnout_risk(indices: &[HealthIndex]) -> bool {
        let values = Self::value_map(indices);
        let get = |kind: IndexKind| f64::from(values.get(&kind).copied().unwrap_or(50));

        let patience = get(IndexKind::Paciencia);
        let assertiveness = get(IndexKind::Assertividade);
        let flexibility = get(IndexKind::Flexibilidade);
        let collaboration = get(IndexKind::Colaboracao);

        let risk_score = (100.0 - patience) * 0.3
            + assertiveness * 0.2
            + (100.0 - flexibility) * 0.3
            + (100.0 - collaboration) * 0.2;

        risk_score > BURNOUT_THRESHOLD
    }

    /// Picks the three lowest-scoring indices and emits one fixed
    /// recommendation per kind scoring below 50, falling back to a
    /// generic encouragement when none qualify.
    pub fn growth_recommendations(indices: &[HealthIndex]) -> Vec<String> {
        let mut sorted: Vec<_> = indices.iter().collect();
        sorted.sort_by_key(|idx| idx.value);

        let recommendations: Vec<String> = sorted
            .iter()
            .take(3)
            .filter(|idx| idx.value < 50)
            .map(|idx| Self::recommendation_for(idx.kind).to_string())
            .collect();

        if recommendations.is_empty() {
            vec![String::from(
                "Continue leveraging your natural strengths while exploring new capabilities.",
            )]
        } else {
            recommendations
        }
    }

    fn build_index(kind: IndexKind, profile: &DiscProfile) -> HealthIndex {
        let value = Self::calculate_by_kind(kind, profile);
        HealthIndex {
            kind,
            value,
            diagnosis: Self::diagnose(value, kind),
            impact: Self::impact_for(kind).to_string(),
            is_alert: Self::is_alert(kind, value),
        }
    }

    fn is_alert(kind: IndexKind, value: i32) -> bool {
        match kind {
            IndexKind::Assertividade | IndexKind::Paciencia | IndexKind::Lideranca => value < 30,
            IndexKind::Conformidade => value < 20,
            IndexKind::Empatia
            | IndexKind::Criatividade
            | IndexKind::Analise
            | IndexKind::Colaboracao => value < 25,
            // Flexibility alerts on excess
            IndexKind::Flexibilidade => value > 80,
        }
    }

    fn diagnose(value: i32, kind: IndexKind) -> String {
        let quality = kind.quality();
        if value >= 70 {
            format!(
                "High {}: You naturally display this quality strongly in most situations.",
                quality
            )
        } else if value >= 50 {
            format!(
                "Moderate {}: You display this quality consistently but with room for growth.",
                quality
            )
        } else if value >= 30 {
            format!(
                "Low {}: This is a development area that benefits from conscious effort.",
                quality
            )
        } else {
            format!(
                "Very Low {}: This requires deliberate focus and practice to develop.",
                quality
            )
        }
    }

    fn impact_for(kind: IndexKind) -> &'static str {
        match kind {
            IndexKind::Assertividade => {
                "Ability to express needs, stand firm on positions, and take action decisively."
            }
            IndexKind::Paciencia => {
                "Ability to work methodically, listen fully, and persist through challenges."
            }
            IndexKind::Conformidade => {
                "Respect for guidelines, quality standards, and established procedures. High \
                 values suggest strong compliance; low values suggest flexibility and creativity."
            }
            IndexKind::Empatia => {
                "Ability to understand others' perspectives, show care, and build supportive \
                 relationships."
            }
            IndexKind::Flexibilidade => {
                "Ability to adapt to change, adjust plans, and embrace new approaches. Balance \
                 is key - too high suggests lack of consistency."
            }
            IndexKind::Criatividade => {
                "Drive for new ideas, innovative solutions, and challenging the status quo."
            }
            IndexKind::Lideranca => {
                "Ability to guide others, make decisions, inspire teams, and take charge of \
                 situations."
            }
            IndexKind::Analise => {
                "Ability to think critically, evaluate options thoroughly, and avoid impulsive \
                 decisions."
            }
            IndexKind::Colaboracao => {
                "Ability to work well with others, value team input, and contribute to group \
                 goals."
            }
        }
    }

    fn recommendation_for(kind: IndexKind) -> &'static str {
        match kind {
            IndexKind::Assertividade => {
                "Practice expressing your needs directly and standing firm on decisions."
            }
            IndexKind::Paciencia => {
                "Develop mindfulness practices to increase calm and reduce reactivity."
            }
            IndexKind::Conformidade => {
                "Balance flexibility with consistency - choose which rules matter most."
            }
            IndexKind::Empatia => {
                "Practice active listening and perspective-taking in conversations."
            }
            IndexKind::Flexibilidade => {
                "Create structured change practices to build comfort with adaptation."
            }
            IndexKind::Criatividade => {
                "Set aside time for brainstorming and exploring new ideas."
            }
            IndexKind::Lideranca => {
                "Take on small leadership opportunities to build confidence."
            }
            IndexKind::Analise => {
                "Slow down decisions to gather more information before acting."
            }
            IndexKind::Colaboracao => {
                "Increase team input in decisions and seek others' perspectives."
            }
        }
    }

    fn health_level(avg: i32) -> &'static str {
        if avg >= 80 {
            "Excellent - You demonstrate strong behavioral health across all dimensions."
        } else if avg >= 65 {
            "Good - You have solid behavioral health with some areas for growth."
        } else if avg >= 50 {
            "Moderate - You show some strengths and some clear development areas."
        } else {
            "Needs Support - Multiple areas require focused attention and development."
        }
    }

    fn value_map(indices: &[HealthIndex]) -> HashMap<IndexKind, i32> {
        indices.iter().map(|idx| (idx.kind, idx.value)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference_profile() -> DiscProfile {
        DiscProfile::new(65, 55, 45, 35)
    }

    #[test]
    fn calculate_all_returns_nine_indices_in_canonical_order() {
        let indices = IndexCalculator::calculate_all(&reference_profile());
        assert_eq!(indices.len(), 9);
        for (index, kind) in indices.iter().zip(IndexKind::ALL) {
            assert_eq!(index.kind, kind);
        }
    }

    #[test]
    fn reference_profile_scores_match_formulas() {
        let profile = reference_profile();
        assert_eq!(
            IndexCalculator::calculate_by_kind(IndexKind::Assertividade, &profile),
            62
        );
        assert_eq!(
            IndexCalculator::calculate_by_kind(IndexKind::Paciencia, &profile),
            42
        );
        assert_eq!(
            IndexCalculator::calculate_by_kind(IndexKind::Conformidade, &profile),
            37
        );
        assert_eq!(
            IndexCalculator::calculate_by_kind(IndexKind::Lideranca, &profile),
            62
        );
    }

    #[test]
    fn flexibility_alerts_on_excess_not_deficiency() {
        // High I and S with zero C drives flexibility past 80
        let profile = DiscProfile::new(0, 100, 100, 0);
        let indices = IndexCalculator::calculate_all(&profile);
        let flexibility = indices
            .iter()
            .find(|idx| idx.kind == IndexKind::Flexibilidade)
            .unwrap();
        assert_eq!(flexibility.value, 100);
        assert!(flexibility.is_alert);

        let low = DiscProfile::new(100, 0, 0, 100);
        let indices = IndexCalculator::calculate_all(&low);
        let flexibility = indices
            .iter()
            .find(|idx| idx.kind == IndexKind::Flexibilidade)
            .unwrap();
        assert_eq!(flexibility.value, 0);
        assert!(!flexibility.is_alert);
    }

    #[test]
    fn diagnosis_bands_by_value() {
        let high = IndexCalculator::calculate_all(&DiscProfile::new(100, 100, 100, 100));
        assert!(high
            .iter()
            .find(|idx| idx.kind == IndexKind::Empatia)
            .unwrap()
            .diagnosis
            .starts_with("High Empathy"));

        let low = IndexCalculator::calculate_all(&DiscProfile::new(0, 0, 0, 0));
        assert!(low
            .iter()
            .find(|idx| idx.kind == IndexKind::Empatia)
            .unwrap()
            .diagnosis
            .starts_with("Very Low Empathy"));
    }

    #[test]
    fn extreme_profile_yields_nine_finite_indices() {
        let profile = DiscProfile::new(100, 0, 0, 0);
        let indices = IndexCalculator::calculate_all(&profile);
        assert_eq!(indices.len(), 9);
        for idx in &indices {
            assert!((0..=100).contains(&idx.value), "{} out of range", idx.name());
        }
    }

    #[test]
    fn engine_is_idempotent() {
        let profile = reference_profile();
        let first = IndexCalculator::calculate_all(&profile);
        let second = IndexCalculator::calculate_all(&profile);
        assert_eq!(first, second);
    }

    #[test]
    fn report_contains_overall_score_and_detail_sections() {
        let indices = IndexCalculator::calculate_all(&reference_profile());
        let report = IndexCalculator::generate_report(&indices);
        assert!(report.contains("# Behavioral Health Indices Report"));
        assert!(report.contains("## Overall Health Score:"));
        assert!(report.contains("## Detailed Index Analysis"));
        assert!(report.contains("### Assertividade"));
    }

    #[test]
    fn report_health_level_bands() {
        // All-100 profile: 100,100,100,100,80,100,90,70,80 -> avg 91
        let excellent = IndexCalculator::calculate_all(&DiscProfile::new(100, 100, 100, 100));
        let report = IndexCalculator::generate_report(&excellent);
        assert!(report.contains("## Overall Health Score: 91%"));
        assert!(report.contains("Excellent - "));

        let needs_support = IndexCalculator::calculate_all(&DiscProfile::new(0, 0, 0, 0));
        let report = IndexCalculator::generate_report(&needs_support);
        assert!(report.contains("Needs Support - "));
    }

    #[test]
    fn patterns_detect_directive_leadership() {
        // High D, low I/S: leadership high, collaboration low
        let profile = DiscProfile::new(100, 10, 10, 30);
        let indices = IndexCalculator::calculate_all(&profile);
        let analysis = IndexCalculator::analyze_patterns(&indices);
        assert!(analysis.contains("Leadership Pattern"));
    }

    #[test]
    fn patterns_fall_back_to_balanced_note() {
        let profile = DiscProfile::new(50, 50, 50, 50);
        let indices = IndexCalculator::calculate_all(&profile);
        let analysis = IndexCalculator::analyze_patterns(&indices);
        assert!(analysis.contains("balanced behavioral profile"));
    }

    #[test]
    fn burnout_risk_matches_documented_composite() {
        // d=100, i=0, s=0, c=0: patience 0, assertiveness 70, flexibility 20,
        // collaboration 0 -> 0.3*100 + 0.2*70 + 0.3*80 + 0.2*100 = 88 > 55
        let hot = IndexCalculator::calculate_all(&DiscProfile::new(100, 0, 0, 0));
        assert!(IndexCalculator::burnout_risk(&hot));

        // Balanced 50s give a composite of exactly 50, below threshold
        let calm = IndexCalculator::calculate_all(&DiscProfile::new(50, 50, 50, 50));
        assert!(!IndexCalculator::burnout_risk(&calm));
    }

    #[test]
    fn burnout_risk_defaults_missing_indices_to_50() {
        // Empty index set: all factors default to 50, composite is 50
        assert!(!IndexCalculator::burnout_risk(&[]));
    }

    #[test]
    fn growth_recommendations_target_lowest_indices() {
        let profile = DiscProfile::new(100, 0, 0, 0);
        let indices = IndexCalculator::calculate_all(&profile);
        let recs = IndexCalculator::growth_recommendations(&indices);
        assert!(!recs.is_empty());
        assert!(recs.len() <= 3);
        // Patience and collaboration are both 0 for this profile
        assert!(recs
            .iter()
            .any(|r| r.contains("mindfulness") || r.contains("team input")));
    }

    #[test]
    fn growth_recommendations_fall_back_when_all_strong() {
        let profile = DiscProfile::new(80, 80, 80, 80);
        let indices = IndexCalculator::calculate_all(&profile);
        let recs = IndexCalculator::growth_recommendations(&indices);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("natural strengths"));
    }

    proptest! {
        #[test]
        fn batch_and_by_kind_paths_agree(
            d in 0u8..=100,
            i in 0u8..=100,
            s in 0u8..=100,
            c in 0u8..=100,
        ) {
            let profile = DiscProfile::new(d, i, s, c);
            let indices = IndexCalculator::calculate_all(&profile);
            prop_assert_eq!(indices.len(), 9);
            for idx in &indices {
                prop_assert_eq!(
                    idx.value,
                    IndexCalculator::calculate_by_kind(idx.kind, &profile)
                );
            }
        }

        #[test]
        fn values_stay_within_percentage_range(
            d in 0u8..=100,
            i in 0u8..=100,
            s in 0u8..=100,
            c in 0u8..=100,
        ) {
            let profile = DiscProfile::new(d, i, s, c);
            for idx in IndexCalculator::calculate_all(&profile) {
                prop_assert!((0..=100).contains(&idx.value));
            }
        }
    }
}
