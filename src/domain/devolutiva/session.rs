//! Devolutiva session aggregate.
//!
//! A session starts empty, is filled by appending each phase's steps in
//! order, and is then marked complete. A completed session always holds
//! exactly 15 steps numbered contiguously from 1.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DevolutivaId, DomainError, ErrorCode, Timestamp};

use super::DevolutivaStep;

/// Number of steps in a complete devolutiva.
pub const EXPECTED_STEP_COUNT: usize = 15;

/// Session aggregate holding the ordered narrative steps.
///
/// # Invariants
///
/// - Steps are appended in order and never reordered or mutated
/// - Step numbers continue the contiguous 1-based sequence
/// - `complete()` only succeeds with exactly 15 steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevolutivaSession {
    id: DevolutivaId,
    subject_name: String,
    steps: Vec<DevolutivaStep>,
    current_step: usize,
    is_complete: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl DevolutivaSession {
    /// Creates a new empty session.
    pub fn new(id: DevolutivaId, subject_name: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            subject_name: subject_name.into(),
            steps: Vec::new(),
            current_step: 0,
            is_complete: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a phase's steps, validating the contiguous numbering.
    ///
    /// # Errors
    ///
    /// - `ComputationFailed` if a step number breaks the 1-based sequence
    /// - `IncompleteSession` if called after completion
    pub fn append_steps(&mut self, steps: Vec<DevolutivaStep>) -> Result<(), DomainError> {
        if self.is_complete {
            return Err(DomainError::new(
                ErrorCode::IncompleteSession,
                "Cannot append steps to a completed session",
            ));
        }

        for step in steps {
            let expected = self.steps.len() as u8 + 1;
            if step.step_number != expected {
                return Err(DomainError::new(
                    ErrorCode::ComputationFailed,
                    format!(
                        "Step number {} breaks the sequence, expected {}",
                        step.step_number, expected
                    ),
                ));
            }
            self.steps.push(step);
        }
        Ok(())
    }

    /// Marks the session complete and restamps `updated_at`.
    ///
    /// # Errors
    ///
    /// - `IncompleteSession` if the session does not hold exactly 15 steps
    pub fn complete(&mut self) -> Result<(), DomainError> {
        if self.steps.len() != EXPECTED_STEP_COUNT {
            return Err(DomainError::new(
                ErrorCode::IncompleteSession,
                format!(
                    "Session holds {} steps, expected {}",
                    self.steps.len(),
                    EXPECTED_STEP_COUNT
                ),
            ));
        }
        self.is_complete = true;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Returns the session ID.
    pub fn id(&self) -> &DevolutivaId {
        &self.id
    }

    /// Returns the subject's name.
    pub fn subject_name(&self) -> &str {
        &self.subject_name
    }

    /// Returns the ordered steps.
    pub fn steps(&self) -> &[DevolutivaStep] {
        &self.steps
    }

    /// Returns the number of steps appended so far.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns the current step cursor.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Advances the step cursor, saturating at the last step.
    pub fn advance(&mut self) {
        if self.current_step + 1 < self.steps.len() {
            self.current_step += 1;
        }
    }

    /// Whether the session has been marked complete.
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the session was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DevolutivaPhase, Visualization};

    fn step(number: u8) -> DevolutivaStep {
        DevolutivaStep::new(
            DevolutivaPhase::Rapport,
            number,
            format!("Step {}", number),
            "description",
            "content",
            Some(Visualization::Narrative),
        )
    }

    fn fifteen_steps() -> Vec<DevolutivaStep> {
        (1..=15).map(step).collect()
    }

    #[test]
    fn new_session_is_empty_and_incomplete() {
        let session = DevolutivaSession::new(DevolutivaId::new(), "Maria");
        assert_eq!(session.step_count(), 0);
        assert!(!session.is_complete());
        assert_eq!(session.current_step(), 0);
    }

    #[test]
    fn append_steps_enforces_contiguous_numbering() {
        let mut session = DevolutivaSession::new(DevolutivaId::new(), "Maria");
        session.append_steps(vec![step(1), step(2)]).unwrap();

        let result = session.append_steps(vec![step(5)]);
        assert!(result.is_err());
        assert_eq!(session.step_count(), 2);
    }

    #[test]
    fn complete_requires_exactly_fifteen_steps() {
        let mut session = DevolutivaSession::new(DevolutivaId::new(), "Maria");
        session.append_steps(vec![step(1)]).unwrap();
        assert!(session.complete().is_err());

        let mut session = DevolutivaSession::new(DevolutivaId::new(), "Maria");
        session.append_steps(fifteen_steps()).unwrap();
        assert!(session.complete().is_ok());
        assert!(session.is_complete());
    }

    #[test]
    fn complete_restamps_updated_at() {
        let mut session = DevolutivaSession::new(DevolutivaId::new(), "Maria");
        let created = *session.created_at();
        session.append_steps(fifteen_steps()).unwrap();
        session.complete().unwrap();
        assert!(!session.updated_at().is_before(&created));
    }

    #[test]
    fn cannot_append_after_completion() {
        let mut session = DevolutivaSession::new(DevolutivaId::new(), "Maria");
        session.append_steps(fifteen_steps()).unwrap();
        session.complete().unwrap();
        assert!(session.append_steps(vec![step(16)]).is_err());
    }

    #[test]
    fn advance_saturates_at_last_step() {
        let mut session = DevolutivaSession::new(DevolutivaId::new(), "Maria");
        session.append_steps(vec![step(1), step(2)]).unwrap();
        session.advance();
        assert_eq!(session.current_step(), 1);
        session.advance();
        assert_eq!(session.current_step(), 1);
    }
}
