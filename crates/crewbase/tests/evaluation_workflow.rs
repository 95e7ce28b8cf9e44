//! Integration specifications for evaluation intake, scoring, and office
//! propagation.
//!
//! Scenarios drive the public service facade with in-memory collaborators so
//! the full create → propagate → recompute path is validated without
//! reaching into private modules.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use crewbase::evaluations::{
        EvaluationDraft, EvaluationRecord, EvaluationService, EvaluationStore, LanguageLevel,
        OfficeScoreboard, QuestionnaireKind, RecomputeError, StoreError,
    };
    use crewbase::people::{CompanyId, OfficeId, Subject, UserDirectory, UserId};

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
        level: LanguageLevel,
    ) -> EvaluationDraft {
        EvaluationDraft {
            evaluated_id: person,
            evaluator_id: UserId(900),
            questionnaire: QuestionnaireKind::Language,
            score,
            language_level: Some(level),
            company_id: CompanyId(1),
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct MemoryStore {
        records: Arc<Mutex<Vec<EvaluationRecord>>>,
    }

    impl MemoryStore {
        pub(super) fn len(&self) -> usize {
            self.records.lock().expect("store mutex poisoned").len()
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

    #[derive(Default, Clone)]
    pub(super) struct StaticDirectory {
        offices: HashMap<UserId, OfficeId>,
    }

    impl StaticDirectory {
        pub(super) fn assign(mut self, person: UserId, office: OfficeId) -> Self {
            self.offices.insert(person, office);
            self
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
        let directory = Arc::new(
            StaticDirectory::default()
                .assign(UserId(7), OfficeId(3))
                .assign(UserId(8), OfficeId(3)),
        );
        let scoreboard = Arc::new(RecordingScoreboard::default());
        let service = EvaluationService::new(store.clone(), directory, scoreboard.clone());
        (service, store, scoreboard)
    }
}

use std::io::Cursor;
use std::sync::Arc;

use common::*;
use crewbase::evaluations::{
    parse_history, CompanyScoreReport, EvaluationService, EvaluationServiceError, LanguageLevel,
    ValidationError,
};
use crewbase::people::{CompanyId, OfficeId, UserId};

#[test]
fn creating_evaluations_builds_the_person_snapshot() {
    let (service, _store, scoreboard) = build_service();
    let person = UserId(7);

    for score in [6, 8, 10] {
        service
            .create(performance_draft(person, score))
            .expect("performance draft stored");
    }
    service
        .create(language_draft(person, 5, LanguageLevel::Beginner))
        .expect("language draft stored");
    service
        .create(language_draft(person, 9, LanguageLevel::Advanced))
        .expect("language draft stored");

    let snapshot = service.snapshot(person).expect("snapshot computed");

    assert_eq!(snapshot.performance_score, Some(8.0));
    assert_eq!(snapshot.language_score, Some(9));
    assert_eq!(snapshot.language_level, Some(LanguageLevel::Advanced));
    assert_eq!(snapshot.overall_score, Some(8.5));

    // one office refresh per stored record
    assert_eq!(scoreboard.refreshed(), vec![OfficeId(3); 5]);
}

#[test]
fn company_average_spans_people_with_an_overall_score() {
    let (service, _store, _scoreboard) = build_service();

    service
        .create(performance_draft(UserId(7), 7))
        .expect("stored");
    service
        .create(language_draft(UserId(7), 9, LanguageLevel::Advanced))
        .expect("stored");
    service
        .create(performance_draft(UserId(8), 6))
        .expect("stored");
    service
        .create(language_draft(UserId(8), 6, LanguageLevel::Intermediate))
        .expect("stored");
    // no language record, so this person never contributes
    service
        .create(performance_draft(UserId(9), 10))
        .expect("stored");

    let average = service
        .company_average(CompanyId(1))
        .expect("average computed");
    assert_eq!(average, 7.0);
}

#[test]
fn rejected_drafts_leave_no_trace() {
    let (service, store, scoreboard) = build_service();

    match service.create(performance_draft(UserId(7), 11)) {
        Err(EvaluationServiceError::Validation(ValidationError::ScoreOutOfRange { .. })) => {}
        other => panic!("expected validation rejection, got {other:?}"),
    }

    assert_eq!(store.len(), 0);
    assert!(scoreboard.refreshed().is_empty());
}

#[test]
fn people_without_an_office_are_scored_but_propagate_nothing() {
    let (service, store, scoreboard) = build_service();
    let drifter = UserId(9);

    service
        .create(performance_draft(drifter, 8))
        .expect("draft stored");

    assert_eq!(store.len(), 1);
    assert!(scoreboard.refreshed().is_empty());
    assert_eq!(
        service
            .snapshot(drifter)
            .expect("snapshot computed")
            .performance_score,
        Some(8.0)
    );
}

#[test]
fn scoreboard_outages_do_not_lose_evaluations() {
    let store = Arc::new(MemoryStore::default());
    let directory = Arc::new(StaticDirectory::default().assign(UserId(7), OfficeId(3)));
    let service = EvaluationService::new(store.clone(), directory, Arc::new(FailingScoreboard));

    service
        .create(performance_draft(UserId(7), 8))
        .expect("creation survives the outage");

    assert_eq!(store.len(), 1);
}

#[test]
fn imported_history_feeds_the_company_report() {
    let export = "\
Evaluated Id,Evaluator Id,Questionnaire,Score,Language Level,Company Id,Created At
7,900,performance,7,,1,2024-03-01 10:00:00
7,900,english,5,beginner,1,2024-03-15 10:00:00
7,900,language,9,advanced,1,2024-06-01 10:00:00
8,900,performance,6,,1,2024-03-02 10:00:00
8,900,language,6,intermediate,1,2024-05-02 10:00:00
9,900,performance,10,,1,2024-03-03 10:00:00
";

    let records = parse_history(Cursor::new(export)).expect("history parses");
    let report = CompanyScoreReport::from_records(CompanyId(1), &records);

    assert_eq!(report.people.len(), 3);
    assert_eq!(report.people[0].person, UserId(7));
    assert_eq!(report.people[0].snapshot.language_score, Some(9));
    assert_eq!(report.people[0].snapshot.overall_score, Some(8.0));
    assert_eq!(report.people[1].snapshot.overall_score, Some(6.0));
    assert_eq!(report.people[2].snapshot.overall_score, None);
    assert_eq!(report.overall_average, 7.0);
}
