use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::request::ValidatedRecord;
use crate::constants::{MAX_SUCCESS_RATE, SOLUTION_DELTA_HEADER_PREFIX};

/// One experience entry: a problem, the solution that was applied, and the
/// features derived from its text.
///
/// `tags` and `keywords` are derived from `title + problem + solution + context`
/// and must be refreshed by the feature extractor whenever one of those fields
/// changes. Delta header lines inside `solution` are bookkeeping and never
/// reach the extractor or the content hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// UUID v4 identifier, unique across all categories.
    pub id: String,
    pub category: Category,
    pub title: String,
    pub problem: String,
    pub solution: String,
    pub context: String,
    /// Domain tags matched from the dictionary.
    pub tags: BTreeSet<String>,
    /// Extracted terms with occurrence counts.
    pub keywords: BTreeMap<String, u32>,
    /// Times this entry was recorded again (merge) or returned as top hit.
    pub usage_count: u64,
    /// Percent in [0, 100]. `None` for failure entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// blake3 of the normalised text fields, for exact-duplicate detection.
    pub content_hash: String,
}

impl Entry {
    /// Build a new entry from a validated record and its derived features.
    pub fn new(
        record: &ValidatedRecord,
        tags: BTreeSet<String>,
        keywords: BTreeMap<String, u32>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut entry = Self {
            id: uuid::Uuid::new_v4().to_string(),
            category: record.category,
            title: record.title.clone(),
            problem: record.problem.clone(),
            solution: record.solution.clone(),
            context: record.context.clone(),
            tags,
            keywords,
            usage_count: 1,
            success_rate: record.category.initial_success_rate(record.success_rate),
            created_at: now,
            updated_at: now,
            content_hash: String::new(),
        };
        entry.refresh_content_hash();
        entry
    }

    /// blake3 over the lowercased, whitespace-collapsed text fields.
    pub fn compute_content_hash(title: &str, problem: &str, solution: &str, context: &str) -> String {
        let mut hasher = blake3::Hasher::new();
        for field in [title, problem, solution, context] {
            let normalized = field
                .split_whitespace()
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
                .join(" ");
            hasher.update(normalized.as_bytes());
            hasher.update(&[0x1f]);
        }
        hasher.finalize().to_hex().to_string()
    }

    /// All text fields joined, in the order features are derived from.
    pub fn combined_text(&self) -> String {
        [
            self.title.as_str(),
            self.problem.as_str(),
            self.solution_text().as_str(),
            self.context.as_str(),
        ]
        .join("\n")
    }

    /// The solution split at delta headers: the original text first, then
    /// each appended delta. Header lines are dropped; empty segments skipped.
    pub fn solution_segments(&self) -> Vec<String> {
        let mut segments = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in self.solution.lines() {
            if is_delta_header(line) {
                push_segment(&mut segments, &current);
                current.clear();
            } else {
                current.push(line);
            }
        }
        push_segment(&mut segments, &current);
        segments
    }

    /// The solution without delta header lines.
    pub fn solution_text(&self) -> String {
        self.solution_segments().join("\n\n")
    }

    pub fn is_failure(&self) -> bool {
        self.category.is_failure()
    }

    /// Distinct keyword terms.
    pub fn keyword_terms(&self) -> BTreeSet<String> {
        self.keywords.keys().cloned().collect()
    }

    /// Read-path side effect: the entry was the top search hit.
    pub fn record_hit(&mut self, now: DateTime<Utc>) {
        self.usage_count += 1;
        self.updated_at = now;
    }

    /// Append `incoming` to the solution as a timestamped delta.
    ///
    /// Returns `false` without touching the text when the incoming solution is
    /// empty or already present verbatim.
    pub fn append_solution_delta(&mut self, incoming: &str, now: DateTime<Utc>) -> bool {
        let incoming = incoming.trim();
        if incoming.is_empty() || self.solution.contains(incoming) {
            return false;
        }
        self.solution = format!(
            "{}\n\n{}{}]\n{}",
            self.solution.trim_end(),
            SOLUTION_DELTA_HEADER_PREFIX,
            now.format("%Y-%m-%d %H:%M:%S UTC"),
            incoming
        );
        self.refresh_content_hash();
        true
    }

    /// Average the success rate with an incoming observation. No-op for failures.
    pub fn average_success_rate(&mut self, incoming: Option<f64>) {
        if let (Some(current), Some(incoming)) = (self.success_rate, incoming) {
            self.success_rate = Some(((current + incoming) / 2.0).clamp(0.0, MAX_SUCCESS_RATE));
        }
    }

    pub fn refresh_content_hash(&mut self) {
        self.content_hash = Self::compute_content_hash(
            &self.title,
            &self.problem,
            &self.solution_text(),
            &self.context,
        );
    }
}

/// A `[update YYYY-MM-DD HH:MM:SS UTC]` line written by
/// [`Entry::append_solution_delta`].
pub fn is_delta_header(line: &str) -> bool {
    let line = line.trim();
    line.starts_with(SOLUTION_DELTA_HEADER_PREFIX) && line.ends_with(']')
}

fn push_segment(segments: &mut Vec<String>, lines: &[&str]) {
    let text = lines.join("\n");
    let text = text.trim();
    if !text.is_empty() {
        segments.push(text.to_string());
    }
}

/// Identity equality: two entries are equal if they have the same id.
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
