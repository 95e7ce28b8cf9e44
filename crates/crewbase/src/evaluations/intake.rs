use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};

use super::domain::{
    EvaluationDraft, EvaluationId, EvaluationRecord, QuestionnaireKind, SCORE_RANGE,
};

/// Validation errors raised by the intake guard.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("score {found} outside accepted range {min}..={max}")]
    ScoreOutOfRange { found: u8, min: u8, max: u8 },
    #[error("language evaluations require a language level")]
    MissingLanguageLevel,
    #[error("performance evaluations do not carry a language level")]
    UnexpectedLanguageLevel,
}

/// Score bounds applied at intake.
#[derive(Debug, Clone)]
pub struct IntakePolicy {
    score_range: RangeInclusive<u8>,
}

impl IntakePolicy {
    pub fn new(score_range: RangeInclusive<u8>) -> Self {
        let sanitized = if score_range.is_empty() {
            SCORE_RANGE
        } else {
            score_range
        };

        Self {
            score_range: sanitized,
        }
    }

    pub fn score_range(&self) -> &RangeInclusive<u8> {
        &self.score_range
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::new(SCORE_RANGE)
    }
}

/// Guard responsible for producing `EvaluationRecord` instances.
///
/// A draft that fails here never reaches the store, so downstream side
/// effects (office score refresh) cannot fire for rejected input.
#[derive(Debug, Clone, Default)]
pub struct EvaluationIntake {
    policy: IntakePolicy,
}

impl EvaluationIntake {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    /// Validate a draft and mint the immutable record.
    pub fn admit(
        &self,
        draft: EvaluationDraft,
        id: EvaluationId,
        created_at: DateTime<Utc>,
    ) -> Result<EvaluationRecord, ValidationError> {
        if !self.policy.score_range.contains(&draft.score) {
            return Err(ValidationError::ScoreOutOfRange {
                found: draft.score,
                min: *self.policy.score_range.start(),
                max: *self.policy.score_range.end(),
            });
        }

        match (draft.questionnaire, draft.language_level.is_some()) {
            (QuestionnaireKind::Language, false) => {
                return Err(ValidationError::MissingLanguageLevel)
            }
            (QuestionnaireKind::Performance, true) => {
                return Err(ValidationError::UnexpectedLanguageLevel)
            }
            _ => {}
        }

        Ok(EvaluationRecord {
            id,
            evaluated_id: draft.evaluated_id,
            evaluator_id: draft.evaluator_id,
            questionnaire: draft.questionnaire,
            score: draft.score,
            language_level: draft.language_level,
            company_id: draft.company_id,
            created_at,
        })
    }
}
