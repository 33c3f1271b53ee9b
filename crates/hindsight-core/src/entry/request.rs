//! Caller-facing record request and its validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::category::Category;
use crate::constants::{DERIVED_TITLE_MAX_CHARS, MAX_SUCCESS_RATE};
use crate::errors::{HindsightError, HindsightResult};

/// Input to `record_entry`. Text fields are optional at the type level so
/// hosts can forward whatever they received; [`RecordRequest::validate`]
/// enforces what is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRequest {
    pub category: Category,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    /// Percent in [0, 100]. Ignored for failures.
    #[serde(default)]
    pub success_rate: Option<f64>,
}

/// A record whose required fields are present and whose values are in range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecord {
    pub category: Category,
    pub title: String,
    pub problem: String,
    pub solution: String,
    pub context: String,
    pub success_rate: Option<f64>,
}

impl RecordRequest {
    pub fn new(
        category: Category,
        title: impl Into<String>,
        problem: impl Into<String>,
        solution: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            category,
            title: Some(title.into()),
            problem: Some(problem.into()),
            solution: Some(solution.into()),
            context: Some(context.into()),
            success_rate: None,
        }
    }

    pub fn with_success_rate(mut self, success_rate: f64) -> Self {
        self.success_rate = Some(success_rate);
        self
    }

    /// Build a request from loosely-typed JSON (e.g. an HTTP body).
    ///
    /// Any field that is present but not a string (or number, for
    /// `success_rate`) is rejected with `InvalidInput`. `null` counts as absent.
    pub fn from_json(value: &Value) -> HindsightResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| HindsightError::invalid_input("request", "expected a JSON object"))?;

        let category = match object.get("category") {
            Some(Value::String(s)) => s.parse::<Category>()?,
            Some(Value::Null) | None => {
                return Err(HindsightError::invalid_input("category", "is required"))
            }
            Some(other) => return Err(not_text("category", other)),
        };

        let text = |field: &str| -> HindsightResult<Option<String>> {
            match object.get(field) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::String(s)) => Ok(Some(s.clone())),
                Some(other) => Err(not_text(field, other)),
            }
        };

        let success_rate = match object.get("success_rate") {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => n.as_f64(),
            Some(other) => {
                return Err(HindsightError::invalid_input(
                    "success_rate",
                    format!("expected a number, got {}", json_kind(other)),
                ))
            }
        };

        Ok(Self {
            category,
            title: text("title")?,
            problem: text("problem")?,
            solution: text("solution")?,
            context: text("context")?,
            success_rate,
        })
    }

    /// Check required fields and ranges.
    ///
    /// `problem` and `solution` are required; an absent title is derived from
    /// the first line of the problem; an absent context becomes empty.
    pub fn validate(self) -> HindsightResult<ValidatedRecord> {
        let problem = self
            .problem
            .ok_or_else(|| HindsightError::invalid_input("problem", "is required"))?;
        let solution = self
            .solution
            .ok_or_else(|| HindsightError::invalid_input("solution", "is required"))?;

        if let Some(rate) = self.success_rate {
            if !rate.is_finite() || !(0.0..=MAX_SUCCESS_RATE).contains(&rate) {
                return Err(HindsightError::invalid_input(
                    "success_rate",
                    format!("must be between 0 and {MAX_SUCCESS_RATE}, got {rate}"),
                ));
            }
        }

        let title = match self.title {
            Some(t) if !t.trim().is_empty() => t,
            _ => derive_title(&problem),
        };

        Ok(ValidatedRecord {
            category: self.category,
            title,
            problem,
            solution,
            context: self.context.unwrap_or_default(),
            success_rate: self.success_rate,
        })
    }
}

impl ValidatedRecord {
    /// All text fields joined, matching [`crate::Entry::combined_text`].
    pub fn combined_text(&self) -> String {
        [
            self.title.as_str(),
            self.problem.as_str(),
            self.solution.as_str(),
            self.context.as_str(),
        ]
        .join("\n")
    }
}

fn derive_title(problem: &str) -> String {
    problem
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or_default()
        .chars()
        .take(DERIVED_TITLE_MAX_CHARS)
        .collect()
}

fn not_text(field: &str, value: &Value) -> HindsightError {
    HindsightError::invalid_input(field, format!("expected text, got {}", json_kind(value)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
