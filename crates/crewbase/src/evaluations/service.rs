use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use super::domain::{EvaluationDraft, EvaluationId, EvaluationRecord};
use super::intake::{EvaluationIntake, ValidationError};
use super::scoring::{self, PersonScoreSnapshot};
use super::store::{EvaluationStore, OfficeScoreboard, StoreError};
use crate::people::{CompanyId, UserDirectory, UserId};

/// Service composing the intake guard, store, directory, and office
/// scoreboard.
pub struct EvaluationService<S, D, B> {
    intake: EvaluationIntake,
    store: Arc<S>,
    directory: Arc<D>,
    scoreboard: Arc<B>,
}

static EVALUATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_evaluation_id() -> EvaluationId {
    let id = EVALUATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    EvaluationId(format!("eval-{id:06}"))
}

impl<S, D, B> EvaluationService<S, D, B>
where
    S: EvaluationStore + 'static,
    D: UserDirectory + 'static,
    B: OfficeScoreboard + 'static,
{
    pub fn new(store: Arc<S>, directory: Arc<D>, scoreboard: Arc<B>) -> Self {
        Self::with_intake(EvaluationIntake::default(), store, directory, scoreboard)
    }

    pub fn with_intake(
        intake: EvaluationIntake,
        store: Arc<S>,
        directory: Arc<D>,
        scoreboard: Arc<B>,
    ) -> Self {
        Self {
            intake,
            store,
            directory,
            scoreboard,
        }
    }

    /// Validate and persist a new evaluation, then nudge the evaluated
    /// person's office to refresh its aggregate score.
    ///
    /// The nudge happens once the record is durably stored; a scoreboard
    /// failure is logged and never rolls the creation back.
    pub fn create(&self, draft: EvaluationDraft) -> Result<EvaluationRecord, EvaluationServiceError> {
        let record = self.intake.admit(draft, next_evaluation_id(), Utc::now())?;
        let stored = self.store.insert(record)?;

        debug!(
            id = %stored.id.0,
            evaluated = stored.evaluated_id.0,
            kind = stored.questionnaire.label(),
            "evaluation stored"
        );

        self.refresh_office_score(&stored);
        Ok(stored)
    }

    /// Recompute a person's derived scores from their records.
    pub fn snapshot(&self, person: UserId) -> Result<PersonScoreSnapshot, EvaluationServiceError> {
        let records = self.store.for_person(person)?;
        Ok(scoring::snapshot(&records))
    }

    /// Company-wide mean of defined overall scores.
    pub fn company_average(&self, company: CompanyId) -> Result<f64, EvaluationServiceError> {
        let records = self.store.for_company(company)?;
        Ok(scoring::company_overall_average(&records))
    }

    fn refresh_office_score(&self, record: &EvaluationRecord) {
        let office = match self.directory.office_of(record.evaluated_id) {
            Some(office) => office,
            None => {
                debug!(
                    evaluated = record.evaluated_id.0,
                    "evaluated person has no office, skipping score refresh"
                );
                return;
            }
        };

        if let Err(error) = self.scoreboard.recompute(office) {
            warn!(office = office.0, %error, "office score recomputation failed");
        }
    }
}

/// Error raised by the evaluation service.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
