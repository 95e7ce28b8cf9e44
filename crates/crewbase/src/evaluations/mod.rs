//! Evaluation scoring core: record intake, derived scores, and office
//! propagation.
//!
//! Evaluations are immutable once stored. Derived scores are never
//! persisted; they are recomputed from raw records on every read, so a
//! snapshot is always consistent with the store the caller reads from.

pub mod domain;
pub mod import;
mod intake;
pub mod report;
pub mod scoring;
mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    EvaluationDraft, EvaluationId, EvaluationRecord, LanguageLevel, QuestionnaireKind, SCORE_RANGE,
};
pub use import::{parse_history, HistoryImportError};
pub use intake::{EvaluationIntake, IntakePolicy, ValidationError};
pub use report::{CompanyScoreReport, PersonScoreRow};
pub use scoring::{company_overall_average, snapshot, PersonScoreSnapshot};
pub use service::{EvaluationService, EvaluationServiceError};
pub use store::{EvaluationStore, OfficeScoreboard, RecomputeError, StoreError};
