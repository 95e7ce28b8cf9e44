use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{EvaluationRecord, LanguageLevel, QuestionnaireKind};
use crate::people::UserId;

/// Derived, non-persisted aggregate of one person's evaluations.
///
/// A missing kind contributes `None`, never zero: a person without language
/// evaluations has no language score, and without both kinds no overall
/// score. Snapshots are recomputed from raw records on every read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonScoreSnapshot {
    pub language_level: Option<LanguageLevel>,
    pub language_score: Option<u8>,
    pub performance_score: Option<f64>,
    pub overall_score: Option<f64>,
}

/// Recompute a person's snapshot from that person's records.
///
/// Language figures come from the most recently created language record;
/// the performance score is the mean of all performance scores rounded to
/// two decimal places; the overall score halves their sum without further
/// rounding.
pub fn snapshot(records: &[EvaluationRecord]) -> PersonScoreSnapshot {
    let latest_language = records
        .iter()
        .filter(|record| record.questionnaire == QuestionnaireKind::Language)
        .max_by_key(|record| record.created_at);

    let performance: Vec<u8> = records
        .iter()
        .filter(|record| record.questionnaire == QuestionnaireKind::Performance)
        .map(|record| record.score)
        .collect();

    let performance_score = if performance.is_empty() {
        None
    } else {
        let mean = performance.iter().map(|score| f64::from(*score)).sum::<f64>()
            / performance.len() as f64;
        Some(round_two(mean))
    };

    let language_level = latest_language.and_then(|record| record.language_level);
    let language_score = latest_language.map(|record| record.score);

    let overall_score = match (performance_score, language_score) {
        (Some(performance), Some(language)) => Some((performance + f64::from(language)) / 2.0),
        _ => None,
    };

    PersonScoreSnapshot {
        language_level,
        language_score,
        performance_score,
        overall_score,
    }
}

/// Mean of defined overall scores across everyone in the supplied records,
/// rounded to two decimal places.
///
/// People without an overall score drop out of the mean entirely; a set
/// where nobody qualifies averages to exactly `0`, not `None`.
pub fn company_overall_average(records: &[EvaluationRecord]) -> f64 {
    let mut by_person: BTreeMap<UserId, Vec<EvaluationRecord>> = BTreeMap::new();
    for record in records {
        by_person
            .entry(record.evaluated_id)
            .or_default()
            .push(record.clone());
    }

    let overall: Vec<f64> = by_person
        .values()
        .filter_map(|records| snapshot(records).overall_score)
        .collect();

    if overall.is_empty() {
        return 0.0;
    }

    round_two(overall.iter().sum::<f64>() / overall.len() as f64)
}

pub(crate) fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
