//! Port for the assessment-extraction collaborator.
//!
//! An extractor turns raw assessment documents (PDFs, spreadsheets,
//! questionnaire exports) into the structured inputs the analysis pipeline
//! consumes. Document parsing itself lives outside this crate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;
use crate::domain::profile::{DiscProfile, Skill, TowerReading, ValuesPyramid};

/// Structured assessment data pulled from source documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedAssessment {
    pub disc_profile: DiscProfile,
    pub tower_data: Vec<TowerReading>,
    pub skills: Vec<Skill>,
    pub pyramid: ValuesPyramid,
}

/// Extracts structured assessment data for a subject.
///
/// Failures surface as `ErrorCode::ExtractionFailed` and are propagated
/// to callers verbatim, without retry.
pub trait AssessmentExtractor: Send + Sync {
    fn extract(&self, subject_name: &str) -> Result<ExtractedAssessment, DomainError>;
}
