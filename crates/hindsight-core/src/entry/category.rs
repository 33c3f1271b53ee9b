use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SUCCESS_RATE;
use crate::errors::HindsightError;

/// Entry category. Closed set; each variant routes to exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Bugfix,
    Tool,
    Pattern,
    Failure,
}

/// Storage bucket an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Reusable experience: ranked by `find_solution`, eligible for dedup merges.
    Experience,
    /// Known-bad approaches: only consulted by `check_prior_failure`.
    Failure,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Bugfix,
        Category::Tool,
        Category::Pattern,
        Category::Failure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Bugfix => "bugfix",
            Category::Tool => "tool",
            Category::Pattern => "pattern",
            Category::Failure => "failure",
        }
    }

    pub fn bucket(self) -> Bucket {
        match self {
            Category::Bugfix | Category::Tool | Category::Pattern => Bucket::Experience,
            Category::Failure => Bucket::Failure,
        }
    }

    pub fn is_failure(self) -> bool {
        self.bucket() == Bucket::Failure
    }

    /// Success rate a fresh entry starts with. Failures carry none.
    pub fn initial_success_rate(self, requested: Option<f64>) -> Option<f64> {
        match self.bucket() {
            Bucket::Experience => Some(requested.unwrap_or(DEFAULT_SUCCESS_RATE)),
            Bucket::Failure => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = HindsightError;

    /// Accepts `bugfix`, `bugFix`, `bug_fix`, `bug-fix` and the other names
    /// in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "bugfix" => Ok(Category::Bugfix),
            "tool" => Ok(Category::Tool),
            "pattern" => Ok(Category::Pattern),
            "failure" => Ok(Category::Failure),
            _ => Err(HindsightError::invalid_input(
                "category",
                format!("unknown category '{s}'"),
            )),
        }
    }
}
