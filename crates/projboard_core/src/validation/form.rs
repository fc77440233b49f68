//! Project form validation.
//!
//! # Responsibility
//! - Package the three raw form strings into validation rules.
//! - Decide rejection under the configured `RejectionPolicy`.
//!
//! # Invariants
//! - A returned `ProjectDraft` always carries the raw title/description text.
//! - Rejection never mutates any input.

use crate::config::BoardConfig;
use crate::validation::rule::{validate, ValidationRule};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// How per-field failures combine into a form rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionPolicy {
    /// Reject when at least one field fails.
    #[default]
    AnyFieldInvalid,
    /// Reject only when every field fails. Matches the legacy board, which
    /// accepted a form as long as one field was valid.
    AllFieldsInvalid,
}

impl RejectionPolicy {
    /// Returns whether a form with these per-field results is rejected.
    ///
    /// `results` holds one `validate()` result per field.
    pub fn rejects(self, results: &[bool]) -> bool {
        match self {
            Self::AnyFieldInvalid => results.iter().any(|valid| !valid),
            Self::AllFieldsInvalid => results.iter().all(|valid| !valid),
        }
    }
}

/// Project form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    People,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// Raw, unvalidated values pulled from the project form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl FormInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }
}

/// Accepted form values, ready for `ProjectStore::add_project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Form submission errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Input failed the declared constraints under the active policy.
    Invalid { fields: Vec<FormField> },
    /// Submit was dispatched before the input component was configured.
    NotConfigured,
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid { fields } => {
                let names = fields
                    .iter()
                    .map(|field| field.as_str())
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "invalid project input: failed fields [{names}]")
            }
            Self::NotConfigured => write!(f, "project input is not configured"),
        }
    }
}

impl Error for InputError {}

/// Coerces the raw people field to a number.
///
/// Blank input becomes `0`. Only finite decimal spellings (digits, sign,
/// `.`, exponent) are read; everything else becomes `NaN`, which then fails
/// every numeric bound. That includes hex/octal/binary literals and any
/// infinity or NaN spelling, so an out-of-range value can never saturate
/// the team size.
pub fn parse_people_input(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let decimal_only = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !decimal_only {
        return f64::NAN;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(f64::NAN)
}

/// Validates raw form values and returns the accepted draft.
///
/// # Errors
/// - `InputError::Invalid` when `config.rejection_policy` rejects the
///   per-field results. `fields` lists every field that failed, which may be
///   non-empty even for accepted input under `AllFieldsInvalid`.
pub fn gather_inputs(input: &FormInput, config: &BoardConfig) -> Result<ProjectDraft, InputError> {
    let people = parse_people_input(&input.people);

    let rules = [
        (
            FormField::Title,
            ValidationRule::text(input.title.as_str())
                .required()
                .min_length(config.title_min_length),
        ),
        (
            FormField::Description,
            ValidationRule::text(input.description.as_str())
                .required()
                .min_length(config.description_min_length),
        ),
        (
            FormField::People,
            ValidationRule::number(people)
                .required()
                .min(config.people_min)
                .max(config.people_max),
        ),
    ];

    let results = rules
        .iter()
        .map(|(_, rule)| validate(rule))
        .collect::<Vec<_>>();

    if config.rejection_policy.rejects(&results) {
        let fields = rules
            .iter()
            .zip(&results)
            .filter(|(_, valid)| !**valid)
            .map(|((field, _), _)| *field)
            .collect();
        return Err(InputError::Invalid { fields });
    }

    Ok(ProjectDraft {
        title: input.title.clone(),
        description: input.description.clone(),
        people: people_count(people),
    })
}

// Float-to-int `as` saturates and maps NaN to 0.
fn people_count(value: f64) -> u32 {
    value.trunc() as u32
}
