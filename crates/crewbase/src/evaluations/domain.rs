use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::people::{CompanyId, UserId};

/// Accepted score domain for any evaluation, bounds inclusive.
pub const SCORE_RANGE: RangeInclusive<u8> = 1..=10;

/// Identifier wrapper for stored evaluations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvaluationId(pub String);

/// Questionnaire family the evaluation was answered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireKind {
    Performance,
    Language,
}

impl QuestionnaireKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Language => "language",
        }
    }
}

/// Proficiency ladder attached to language evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageLevel {
    Beginner,
    Intermediate,
    Advanced,
    Fluent,
}

impl LanguageLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Fluent => "fluent",
        }
    }
}

/// Caller-supplied payload for a new evaluation, before validation.
///
/// Nothing forbids `evaluated_id == evaluator_id`; self-evaluation is an
/// accepted input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationDraft {
    pub evaluated_id: UserId,
    pub evaluator_id: UserId,
    pub questionnaire: QuestionnaireKind,
    pub score: u8,
    pub language_level: Option<LanguageLevel>,
    pub company_id: CompanyId,
}

/// One scored assessment of a person by another. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub id: EvaluationId,
    pub evaluated_id: UserId,
    pub evaluator_id: UserId,
    pub questionnaire: QuestionnaireKind,
    pub score: u8,
    pub language_level: Option<LanguageLevel>,
    pub company_id: CompanyId,
    pub created_at: DateTime<Utc>,
}
