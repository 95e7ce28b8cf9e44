use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::evaluations::domain::{
    EvaluationDraft, EvaluationId, EvaluationRecord, LanguageLevel, QuestionnaireKind,
};
use crate::evaluations::store::{
    EvaluationStore, OfficeScoreboard, RecomputeError, StoreError,
};
use crate::evaluations::EvaluationService;
use crate::people::{CompanyId, OfficeId, Subject, UserDirectory, UserId};

pub(super) fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn performance_record(person: UserId, score: u8, minutes: i64) -> EvaluationRecord {
    EvaluationRecord {
        id: EvaluationId(format!("perf-{}-{minutes}", person.0)),
        evaluated_id: person,
        evaluator_id: UserId(900),
        questionnaire: QuestionnaireKind::Performance,
        score,
        language_level: None,
        company_id: CompanyId(1),
        created_at: base_time() + Duration::minutes(minutes),
    }
}

pub(super) fn language_record(
    person: UserId,
    score: u8,
    level: LanguageLevel,
    minutes: i64,
) -> EvaluationRecord {
    EvaluationRecord {
        id: EvaluationId(format!("lang-{}-{minutes}", person.0)),
        evaluated_id: person,
        evaluator_id: UserId(900),
        questionnaire: QuestionnaireKind::Language,
        score,
        language_level: Some(level),
        company_id: CompanyId(1),
        created_at: base_time() + Duration::minutes(minutes),
    }
}

pub(super) fn performance_draft(person: UserId, score: u8) -> EvaluationDraft {
    EvaluationDraft {
        evaluated_id: person,
        evaluator_id: UserId(900),
        questionnaire: QuestionnaireKind::Performance,
        score,
        language_level: None,
        company_id: CompanyId(1),
    }
}

pub(super) fn language_draft(
    person: UserId,
    score: u8,
    level: Option<LanguageLevel>,
) -> EvaluationDraft {
    EvaluationDraft {
        evaluated_id: person,
        evaluator_id: UserId(900),
        questionnaire: QuestionnaireKind::Language,
        score,
        language_level: level,
        company_id: CompanyId(1),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    records: Arc<Mutex<Vec<EvaluationRecord>>>,
}

impl MemoryStore {
    pub(super) fn records(&self) -> Vec<EvaluationRecord> {
        self.records.lock().expect("store mutex poisoned").clone()
    }
}

impl EvaluationStore for MemoryStore {
    fn insert(&self, record: EvaluationRecord) -> Result<EvaluationRecord, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(StoreError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn for_person(&self, person: UserId) -> Result<Vec<EvaluationRecord>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        let mut records: Vec<EvaluationRecord> = guard
            .iter()
            .filter(|record| record.evaluated_id == person)
            .cloned()
            .collect();
        records.sort_by_key(|record| record.created_at);
        Ok(records)
    }

    fn for_company(&self, company: CompanyId) -> Result<Vec<EvaluationRecord>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        let mut records: Vec<EvaluationRecord> = guard
            .iter()
            .filter(|record| record.company_id == company)
            .cloned()
            .collect();
        records.sort_by_key(|record| record.created_at);
        Ok(records)
    }
}

pub(super) struct UnavailableStore;

impl EvaluationStore for UnavailableStore {
    fn insert(&self, _record: EvaluationRecord) -> Result<EvaluationRecord, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn for_person(&self, _person: UserId) -> Result<Vec<EvaluationRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn for_company(&self, _company: CompanyId) -> Result<Vec<EvaluationRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct StaticDirectory {
    offices: HashMap<UserId, OfficeId>,
}

impl StaticDirectory {
    pub(super) fn with_office(person: UserId, office: OfficeId) -> Self {
        let mut offices = HashMap::new();
        offices.insert(person, office);
        Self { offices }
    }
}

impl UserDirectory for StaticDirectory {
    fn subject(&self, id: UserId) -> Option<Subject> {
        Some(Subject::employee(id, CompanyId(1)))
    }

    fn office_of(&self, id: UserId) -> Option<OfficeId> {
        self.offices.get(&id).copied()
    }
}

#[derive(Default, Clone)]
pub(super) struct RecordingScoreboard {
    refreshed: Arc<Mutex<Vec<OfficeId>>>,
}

impl RecordingScoreboard {
    pub(super) fn refreshed(&self) -> Vec<OfficeId> {
        self.refreshed
            .lock()
            .expect("scoreboard mutex poisoned")
            .clone()
    }
}

impl OfficeScoreboard for RecordingScoreboard {
    fn recompute(&self, office: OfficeId) -> Result<(), RecomputeError> {
        self.refreshed
            .lock()
            .expect("scoreboard mutex poisoned")
            .push(office);
        Ok(())
    }
}

pub(super) struct FailingScoreboard;

impl OfficeScoreboard for FailingScoreboard {
    fn recompute(&self, _office: OfficeId) -> Result<(), RecomputeError> {
        Err(RecomputeError::Unavailable("scoreboard offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    EvaluationService<MemoryStore, StaticDirectory, RecordingScoreboard>,
    Arc<MemoryStore>,
    Arc<RecordingScoreboard>,
) {
    let store = Arc::new(MemoryStore::default());
    let directory = Arc::new(StaticDirectory::with_office(UserId(7), OfficeId(3)));
    let scoreboard = Arc::new(RecordingScoreboard::default());
    let service = EvaluationService::new(store.clone(), directory, scoreboard.clone());
    (service, store, scoreboard)
}
