//! The complete devolutiva record: everything a finished analysis produced.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DevolutivaId;
use crate::domain::indices::HealthIndex;
use crate::domain::profile::{DiscProfile, DominantProfile, Skill, TowerReading, ValuesPyramid};

/// A templated reflection question tied to a profile or skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GeneratedQuestion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<DominantProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
    pub question: String,
}

/// Question lists grouped by development direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GeneratedQuestions {
    /// Moderação.
    pub decrease: Vec<GeneratedQuestion>,
    /// Desenvolvimento.
    pub increase: Vec<GeneratedQuestion>,
    /// Expansão.
    pub expand_skill: Vec<GeneratedQuestion>,
    /// Retração.
    pub retract_skill: Vec<GeneratedQuestion>,
}

/// Narrative strings produced alongside the structured data.
///
/// Fields left empty here are filled by an external content generator,
/// which is outside this crate's scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GeneratedContent {
    pub rapport: String,
    pub pizza_chart_analysis: String,
    pub tower_chart_analysis: String,
    pub skills_analysis: String,
    pub health_index_analysis: String,
    pub pyramid_analysis: String,
    pub internal_war_diagnosis: String,
    pub smart_task_suggestion: String,
    pub final_impact_question: String,
    pub questions: GeneratedQuestions,
}

/// The full persisted analysis record.
///
/// A value object: created once per analysis run and replaced wholesale on
/// regeneration, never partially updated. Serializable as plain JSON for
/// the external history collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevolutivaData {
    pub id: DevolutivaId,
    pub subject_name: String,
    /// ISO-8601 date of the analysis run.
    pub date: String,
    pub disc_profile: DiscProfile,
    pub dominant_profile: DominantProfile,
    /// Always exactly nine entries.
    pub health_indexes: Vec<HealthIndex>,
    pub tower_data: Vec<TowerReading>,
    pub skills: Vec<Skill>,
    pub pyramid: ValuesPyramid,
    pub burnout_risk: bool,
    pub generated_content: GeneratedContent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indices::IndexCalculator;
    use crate::domain::profile::SkillKind;

    fn sample_data() -> DevolutivaData {
        let profile = DiscProfile::new(65, 55, 45, 35);
        let indices = IndexCalculator::calculate_all(&profile);
        DevolutivaData {
            id: DevolutivaId::new(),
            subject_name: "Maria Silva".into(),
            date: "2025-06-01T00:00:00Z".into(),
            disc_profile: profile,
            dominant_profile: profile.dominant(),
            health_indexes: indices,
            tower_data: vec![TowerReading::new(DominantProfile::D, 60, 55)],
            skills: vec![Skill::with_proficiency(
                "Strategic Thinking",
                SkillKind::Core,
                75,
            )],
            pyramid: ValuesPyramid::new(
                vec!["Integrity".into(), "Excellence".into()],
                vec!["Growth".into(), "Connection".into()],
                "Making Impact",
            ),
            burnout_risk: false,
            generated_content: GeneratedContent::default(),
        }
    }

    #[test]
    fn data_round_trips_through_json() {
        let data = sample_data();
        let json = serde_json::to_string(&data).unwrap();
        let back: DevolutivaData = serde_json::from_str(&json).unwrap();
        assert_eq!(data, back);
    }

    #[test]
    fn data_carries_nine_health_indexes() {
        assert_eq!(sample_data().health_indexes.len(), 9);
    }

    #[test]
    fn generated_question_omits_empty_optionals() {
        let question = GeneratedQuestion {
            profile: None,
            skill: None,
            question: "What surprised you?".into(),
        };
        let json = serde_json::to_value(&question).unwrap();
        assert!(json.get("profile").is_none());
        assert!(json.get("skill").is_none());
    }
}
