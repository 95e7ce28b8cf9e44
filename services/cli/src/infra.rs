use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crewbase::access::{Action, ResourceKind};
use crewbase::evaluations::{
    EvaluationRecord, EvaluationStore, OfficeScoreboard, RecomputeError, StoreError,
};
use crewbase::people::{
    CompanyId, Level, Occupation, OfficeId, Role, Subject, UserDirectory, UserId,
};

/// Roster entry backing the in-memory directory used by the demo.
#[derive(Debug, Clone)]
pub(crate) struct RosterEntry {
    pub(crate) id: UserId,
    pub(crate) name: &'static str,
    pub(crate) company_id: CompanyId,
    pub(crate) office_id: Option<OfficeId>,
    pub(crate) role: Role,
    pub(crate) occupation: Occupation,
    pub(crate) level: Option<Level>,
    pub(crate) admin_account: bool,
    pub(crate) heads_office: bool,
}

impl RosterEntry {
    pub(crate) fn subject(&self) -> Subject {
        Subject {
            id: self.id,
            company_id: if self.role == Role::SuperAdmin {
                None
            } else {
                Some(self.company_id)
            },
            role: self.role,
            admin_account: self.admin_account,
            office_head: self.heads_office,
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self.level {
            Some(level) => format!(
                "{} ({}, {})",
                self.name,
                self.occupation.label(),
                level.label()
            ),
            None => format!("{} ({})", self.name, self.occupation.label()),
        }
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryDirectory {
    entries: Arc<Mutex<HashMap<UserId, RosterEntry>>>,
}

impl InMemoryDirectory {
    pub(crate) fn insert(&self, entry: RosterEntry) {
        self.entries
            .lock()
            .expect("directory mutex poisoned")
            .insert(entry.id, entry);
    }

    pub(crate) fn entries(&self) -> Vec<RosterEntry> {
        let mut entries: Vec<RosterEntry> = self
            .entries
            .lock()
            .expect("directory mutex poisoned")
            .values()
            .cloned()
            .collect();
        entries.sort_by_key(|entry| entry.id);
        entries
    }
}

impl UserDirectory for InMemoryDirectory {
    fn subject(&self, id: UserId) -> Option<Subject> {
        self.entries
            .lock()
            .expect("directory mutex poisoned")
            .get(&id)
            .map(RosterEntry::subject)
    }

    fn office_of(&self, id: UserId) -> Option<OfficeId> {
        self.entries
            .lock()
            .expect("directory mutex poisoned")
            .get(&id)
            .and_then(|entry| entry.office_id)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryEvaluationStore {
    records: Arc<Mutex<Vec<EvaluationRecord>>>,
}

impl EvaluationStore for InMemoryEvaluationStore {
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
pub(crate) struct InMemoryScoreboard {
    refreshed: Arc<Mutex<Vec<OfficeId>>>,
}

impl InMemoryScoreboard {
    pub(crate) fn refreshed(&self) -> Vec<OfficeId> {
        self.refreshed
            .lock()
            .expect("scoreboard mutex poisoned")
            .clone()
    }
}

impl OfficeScoreboard for InMemoryScoreboard {
    fn recompute(&self, office: OfficeId) -> Result<(), RecomputeError> {
        self.refreshed
            .lock()
            .expect("scoreboard mutex poisoned")
            .push(office);
        Ok(())
    }
}

pub(crate) fn parse_role(raw: &str) -> Result<Role, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "normal" => Ok(Role::Normal),
        "evaluator" => Ok(Role::Evaluator),
        "admin" => Ok(Role::Admin),
        "super_admin" | "super-admin" => Ok(Role::SuperAdmin),
        other => Err(format!("unknown role '{other}'")),
    }
}

pub(crate) fn parse_action(raw: &str) -> Result<Action, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "manage" => Ok(Action::Manage),
        "create" => Ok(Action::Create),
        "read" => Ok(Action::Read),
        "update" => Ok(Action::Update),
        "edit" => Ok(Action::Edit),
        "destroy" => Ok(Action::Destroy),
        other => Err(format!("unknown action '{other}'")),
    }
}

pub(crate) fn parse_resource_kind(raw: &str) -> Result<ResourceKind, String> {
    let normalized = raw.trim().to_ascii_lowercase();
    ResourceKind::ordered()
        .into_iter()
        .find(|kind| kind.label() == normalized)
        .ok_or_else(|| format!("unknown resource kind '{normalized}'"))
}
