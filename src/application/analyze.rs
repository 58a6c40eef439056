//! Devolutiva orchestrator.
//!
//! Runs the full pipeline: validate input, classify the dominant profile,
//! compute health indices and burnout risk, assemble the analysis record,
//! generate the 15-step narrative, and correlate against the other
//! assessment dimensions. Progress checkpoints are pushed through a
//! [`ProgressObserver`]; any failure aborts the remaining stages, resets
//! progress to zero, and returns no partial result.

use thiserror::Error;
use tracing::{error, info};

use crate::domain::correlation::{CorrelationEngine, Correlations};
use crate::domain::devolutiva::{
    DevolutivaData, DevolutivaSession, GeneratedContent, NarrativeAssembler,
};
use crate::domain::foundation::{DevolutivaId, ErrorCode, Timestamp};
use crate::domain::indices::IndexCalculator;
use crate::domain::profile::{DiscProfile, Skill, TowerReading, ValuesPyramid};
use crate::ports::AssessmentExtractor;

use super::progress::ProgressObserver;

/// Errors the orchestrator can surface to callers.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Input rejected before any computation ran.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The extraction collaborator failed; propagated verbatim.
    #[error("extraction failed: {0}")]
    Extraction(String),

    /// A pipeline stage produced an inconsistent result.
    #[error("computation failed: {0}")]
    Computation(String),
}

/// Already-structured assessment inputs for one subject.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub subject_name: String,
    pub disc_profile: DiscProfile,
    pub tower_data: Vec<TowerReading>,
    pub skills: Vec<Skill>,
    pub pyramid: ValuesPyramid,
}

/// Everything a successful analysis run produced.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub data: DevolutivaData,
    pub session: DevolutivaSession,
    pub correlations: Correlations,
}

/// Stateless pipeline orchestrator.
pub struct DevolutivaAnalyzer;

impl DevolutivaAnalyzer {
    /// Runs the complete analysis pipeline.
    pub fn analyze(
        input: AnalysisInput,
        observer: &dyn ProgressObserver,
    ) -> Result<AnalysisOutcome, AnalysisError> {
        observer.on_progress(0, "Starting analysis");

        match Self::run(input, observer) {
            Ok(outcome) => {
                observer.on_progress(100, "Analysis complete");
                info!(
                    subject = %outcome.data.subject_name,
                    dominant = %outcome.data.dominant_profile,
                    burnout_risk = outcome.data.burnout_risk,
                    steps = outcome.session.step_count(),
                    "devolutiva analysis complete"
                );
                Ok(outcome)
            }
            Err(err) => {
                error!(error = %err, "devolutiva analysis failed");
                observer.on_progress(0, "Analysis failed");
                Err(err)
            }
        }
    }

    /// Extracts structured assessment data through the port, then analyzes.
    ///
    /// Extraction failures are propagated verbatim as
    /// [`AnalysisError::Extraction`]; the pipeline never retries.
    pub fn analyze_documents(
        extractor: &dyn AssessmentExtractor,
        subject_name: impl Into<String>,
        observer: &dyn ProgressObserver,
    ) -> Result<AnalysisOutcome, AnalysisError> {
        let subject_name = subject_name.into();
        let extracted = match extractor.extract(&subject_name) {
            Ok(extracted) => extracted,
            Err(err) => {
                error!(error = %err, subject = %subject_name, "assessment extraction failed");
                observer.on_progress(0, "Analysis failed");
                return Err(AnalysisError::Extraction(err.message));
            }
        };

        Self::analyze(
            AnalysisInput {
                subject_name,
                disc_profile: extracted.disc_profile,
                tower_data: extracted.tower_data,
                skills: extracted.skills,
                pyramid: extracted.pyramid,
            },
            observer,
        )
    }

    fn run(
        input: AnalysisInput,
        observer: &dyn ProgressObserver,
    ) -> Result<AnalysisOutcome, AnalysisError> {
        observer.on_progress(5, "Validating input");
        let subject_name = input.subject_name.trim();
        if subject_name.is_empty() {
            return Err(AnalysisError::InvalidInput(
                "Subject name cannot be blank".into(),
            ));
        }

        let dominant_profile = input.disc_profile.dominant();

        observer.on_progress(30, "Calculating health indices");
        let health_indexes = IndexCalculator::calculate_all(&input.disc_profile);
        let burnout_risk = IndexCalculator::burnout_risk(&health_indexes);

        observer.on_progress(50, "Assembling analysis record");
        let generated_content = GeneratedContent {
            health_index_analysis: IndexCalculator::generate_report(&health_indexes),
            ..GeneratedContent::default()
        };
        let data = DevolutivaData {
            id: DevolutivaId::new(),
            subject_name: subject_name.to_string(),
            date: Timestamp::now().as_datetime().to_rfc3339(),
            disc_profile: input.disc_profile,
            dominant_profile,
            health_indexes,
            tower_data: input.tower_data,
            skills: input.skills,
            pyramid: input.pyramid,
            burnout_risk,
            generated_content,
        };

        observer.on_progress(60, "Generating narrative");
        let session = NarrativeAssembler::generate_complete(&data).map_err(|err| {
            match err.code {
                ErrorCode::InvalidInput => AnalysisError::InvalidInput(err.message),
                _ => AnalysisError::Computation(err.message),
            }
        })?;

        observer.on_progress(85, "Correlating assessments");
        let correlations = CorrelationEngine::complete_insights(&data);

        Ok(AnalysisOutcome {
            data,
            session,
            correlations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::progress::{NullProgress, RecordingProgress};
    use crate::domain::foundation::DomainError;
    use crate::domain::profile::{DominantProfile, SkillKind};
    use crate::ports::ExtractedAssessment;

    fn sample_input(subject_name: &str) -> AnalysisInput {
        AnalysisInput {
            subject_name: subject_name.into(),
            disc_profile: DiscProfile::new(65, 55, 45, 35),
            tower_data: vec![TowerReading::new(DominantProfile::D, 60, 55)],
            skills: vec![
                Skill::with_proficiency("Strategic Thinking", SkillKind::Core, 75),
                Skill::new("Public Speaking", SkillKind::Expansion),
            ],
            pyramid: ValuesPyramid::new(
                vec!["Integrity".into()],
                vec!["Growth".into()],
                "Making Impact",
            ),
        }
    }

    #[test]
    fn analyze_produces_complete_outcome() {
        let outcome = DevolutivaAnalyzer::analyze(sample_input("Maria Silva"), &NullProgress)
            .expect("analysis should succeed");

        assert_eq!(outcome.data.subject_name, "Maria Silva");
        assert_eq!(outcome.data.dominant_profile, DominantProfile::D);
        assert_eq!(outcome.data.health_indexes.len(), 9);
        assert!(outcome.session.is_complete());
        assert_eq!(outcome.session.step_count(), 15);
        assert_eq!(outcome.correlations.disc_with_languages.len(), 5);
        assert!(outcome
            .data
            .generated_content
            .health_index_analysis
            .contains("Behavioral Health Indices Report"));
    }

    #[test]
    fn analyze_trims_subject_name() {
        let outcome = DevolutivaAnalyzer::analyze(sample_input("  Maria Silva  "), &NullProgress)
            .expect("analysis should succeed");
        assert_eq!(outcome.data.subject_name, "Maria Silva");
    }

    #[test]
    fn blank_subject_name_is_invalid_input() {
        let observer = RecordingProgress::new();
        let result = DevolutivaAnalyzer::analyze(sample_input("   "), &observer);

        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
        assert_eq!(observer.last_percent(), Some(0));
    }

    #[test]
    fn progress_hits_every_checkpoint_in_order() {
        let observer = RecordingProgress::new();
        DevolutivaAnalyzer::analyze(sample_input("Maria Silva"), &observer)
            .expect("analysis should succeed");

        let percents: Vec<u8> = observer
            .events()
            .iter()
            .map(|(percent, _)| *percent)
            .collect();
        assert_eq!(percents, vec![0, 5, 30, 50, 60, 85, 100]);
    }

    struct FailingExtractor;

    impl AssessmentExtractor for FailingExtractor {
        fn extract(&self, _subject_name: &str) -> Result<ExtractedAssessment, DomainError> {
            Err(DomainError::new(
                ErrorCode::ExtractionFailed,
                "PDF parser rejected the document",
            ))
        }
    }

    struct FixedExtractor;

    impl AssessmentExtractor for FixedExtractor {
        fn extract(&self, _subject_name: &str) -> Result<ExtractedAssessment, DomainError> {
            Ok(ExtractedAssessment {
                disc_profile: DiscProfile::new(20, 30, 80, 60),
                tower_data: vec![TowerReading::new(DominantProfile::S, 70, 40)],
                skills: vec![Skill::new("Active Listening", SkillKind::Core)],
                pyramid: ValuesPyramid::new(
                    vec!["Loyalty".into()],
                    vec!["Harmony".into()],
                    "Serving Others",
                ),
            })
        }
    }

    #[test]
    fn extraction_failure_propagates_verbatim() {
        let observer = RecordingProgress::new();
        let result =
            DevolutivaAnalyzer::analyze_documents(&FailingExtractor, "Maria Silva", &observer);

        match result {
            Err(AnalysisError::Extraction(message)) => {
                assert_eq!(message, "PDF parser rejected the document");
            }
            other => panic!("expected extraction error, got {:?}", other.map(|_| ())),
        }
        assert_eq!(observer.last_percent(), Some(0));
    }

    #[test]
    fn analyze_documents_runs_full_pipeline() {
        let outcome =
            DevolutivaAnalyzer::analyze_documents(&FixedExtractor, "João Costa", &NullProgress)
                .expect("analysis should succeed");

        assert_eq!(outcome.data.dominant_profile, DominantProfile::S);
        assert!(outcome.session.is_complete());
    }
}
