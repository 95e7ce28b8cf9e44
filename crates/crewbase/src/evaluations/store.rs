use super::domain::EvaluationRecord;
use crate::people::{CompanyId, OfficeId, UserId};

/// Storage abstraction so the service can be exercised in isolation.
///
/// Implementations return records ordered by creation time, oldest first.
pub trait EvaluationStore: Send + Sync {
    fn insert(&self, record: EvaluationRecord) -> Result<EvaluationRecord, StoreError>;
    fn for_person(&self, person: UserId) -> Result<Vec<EvaluationRecord>, StoreError>;
    fn for_company(&self, company: CompanyId) -> Result<Vec<EvaluationRecord>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("evaluation store unavailable: {0}")]
    Unavailable(String),
}

/// Office aggregate hook notified after every stored evaluation.
///
/// Recomputation must be idempotent and tolerate concurrent invocation;
/// the service never retries and never serializes calls.
pub trait OfficeScoreboard: Send + Sync {
    fn recompute(&self, office: OfficeId) -> Result<(), RecomputeError>;
}

/// Recomputation dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum RecomputeError {
    #[error("office scoreboard unavailable: {0}")]
    Unavailable(String),
}
