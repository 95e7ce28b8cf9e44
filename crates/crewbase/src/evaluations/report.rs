use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::EvaluationRecord;
use super::scoring::{self, PersonScoreSnapshot};
use crate::people::{CompanyId, UserId};

/// Per-person line in a company score report.
#[derive(Debug, Clone, Serialize)]
pub struct PersonScoreRow {
    pub person: UserId,
    pub evaluations: usize,
    #[serde(flatten)]
    pub snapshot: PersonScoreSnapshot,
}

/// Company-wide scoring summary derived from raw records.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyScoreReport {
    pub company: CompanyId,
    pub people: Vec<PersonScoreRow>,
    pub overall_average: f64,
}

impl CompanyScoreReport {
    /// Build the report from a record set, keeping only the named company's
    /// records. Rows come out ordered by person id.
    pub fn from_records(company: CompanyId, records: &[EvaluationRecord]) -> Self {
        let company_records: Vec<EvaluationRecord> = records
            .iter()
            .filter(|record| record.company_id == company)
            .cloned()
            .collect();

        let mut by_person: BTreeMap<UserId, Vec<EvaluationRecord>> = BTreeMap::new();
        for record in &company_records {
            by_person
                .entry(record.evaluated_id)
                .or_default()
                .push(record.clone());
        }

        let people = by_person
            .iter()
            .map(|(person, records)| PersonScoreRow {
                person: *person,
                evaluations: records.len(),
                snapshot: scoring::snapshot(records),
            })
            .collect();

        let overall_average = scoring::company_overall_average(&company_records);

        Self {
            company,
            people,
            overall_average,
        }
    }
}
