//! Interchangeable-term groups.
//!
//! Used to widen a term set before containment scoring (prior-failure checks)
//! and, when enabled, to expand search queries. E.g. "fixed" → "hardcode static
//! constant".

use std::collections::BTreeSet;

const GROUPS: &[&[&str]] = &[
    &["hardcode", "hardcoded", "hardcoding", "fixed", "static", "constant"],
    &["screen", "display", "monitor"],
    &["click", "clicks", "clicking", "tap"],
    &["error", "err", "failure", "fail", "fails", "failed", "exception"],
    &["start", "startup", "launch", "boot"],
    &["config", "configuration", "settings", "setting"],
    &["install", "installation", "setup"],
    &["delete", "remove", "rm"],
    &["slow", "latency", "performance", "perf"],
    &["auth", "authentication", "login"],
    &["db", "database"],
    &["screenshot", "capture", "screencap"],
    &["crash", "panic", "segfault"],
    &["deploy", "release", "rollout"],
    &["async", "concurrent", "parallel"],
];

/// Synonym group containing `term`, if any.
pub fn group_of(term: &str) -> Option<&'static [&'static str]> {
    GROUPS.iter().copied().find(|group| group.contains(&term))
}

/// `terms` plus every synonym of every member.
pub fn expand(terms: &BTreeSet<String>) -> BTreeSet<String> {
    let mut expanded = terms.clone();
    for term in terms {
        if let Some(group) = group_of(term) {
            expanded.extend(group.iter().map(|s| s.to_string()));
        }
    }
    expanded
}
