use std::io::Read;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::domain::{EvaluationDraft, EvaluationId, EvaluationRecord, LanguageLevel, QuestionnaireKind};
use super::intake::{EvaluationIntake, ValidationError};
use crate::people::{CompanyId, UserId};

/// Errors raised while loading an exported evaluation history.
#[derive(Debug, thiserror::Error)]
pub enum HistoryImportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("row {row}: unknown questionnaire kind '{value}'")]
    UnknownKind { row: usize, value: String },
    #[error("row {row}: unknown language level '{value}'")]
    UnknownLevel { row: usize, value: String },
    #[error("row {row}: unreadable timestamp '{value}'")]
    BadTimestamp { row: usize, value: String },
    #[error("row {row}: {source}")]
    Rejected {
        row: usize,
        #[source]
        source: ValidationError,
    },
}

/// Parse a CSV export of historical evaluations into validated records.
///
/// Original creation timestamps are preserved so latest-language selection
/// stays faithful to the exported data. Every row passes through the same
/// intake guard as live submissions.
pub fn parse_history<R: Read>(reader: R) -> Result<Vec<EvaluationRecord>, HistoryImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let intake = EvaluationIntake::default();
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<HistoryRow>().enumerate() {
        let row = row?;
        let row_number = index + 1;

        let questionnaire =
            parse_kind(&row.questionnaire).ok_or_else(|| HistoryImportError::UnknownKind {
                row: row_number,
                value: row.questionnaire.clone(),
            })?;

        let language_level = match row.language_level.as_deref() {
            Some(value) => {
                Some(
                    parse_level(value).ok_or_else(|| HistoryImportError::UnknownLevel {
                        row: row_number,
                        value: value.to_string(),
                    })?,
                )
            }
            None => None,
        };

        let created_at =
            parse_timestamp(&row.created_at).ok_or_else(|| HistoryImportError::BadTimestamp {
                row: row_number,
                value: row.created_at.clone(),
            })?;

        let draft = EvaluationDraft {
            evaluated_id: UserId(row.evaluated_id),
            evaluator_id: UserId(row.evaluator_id),
            questionnaire,
            score: row.score,
            language_level,
            company_id: CompanyId(row.company_id),
        };

        let record = intake
            .admit(draft, EvaluationId(format!("hist-{row_number:06}")), created_at)
            .map_err(|source| HistoryImportError::Rejected {
                row: row_number,
                source,
            })?;

        records.push(record);
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    #[serde(rename = "Evaluated Id")]
    evaluated_id: u64,
    #[serde(rename = "Evaluator Id")]
    evaluator_id: u64,
    #[serde(rename = "Questionnaire")]
    questionnaire: String,
    #[serde(rename = "Score")]
    score: u8,
    #[serde(
        rename = "Language Level",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    language_level: Option<String>,
    #[serde(rename = "Company Id")]
    company_id: u64,
    #[serde(rename = "Created At")]
    created_at: String,
}

fn parse_kind(value: &str) -> Option<QuestionnaireKind> {
    match value.trim().to_ascii_lowercase().as_str() {
        "performance" => Some(QuestionnaireKind::Performance),
        // legacy exports label language questionnaires "english"
        "language" | "english" => Some(QuestionnaireKind::Language),
        _ => None,
    }
}

fn parse_level(value: &str) -> Option<LanguageLevel> {
    match value.trim().to_ascii_lowercase().as_str() {
        "beginner" => Some(LanguageLevel::Beginner),
        "intermediate" => Some(LanguageLevel::Intermediate),
        "advanced" => Some(LanguageLevel::Advanced),
        "fluent" => Some(LanguageLevel::Fluent),
        _ => None,
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    None
}
