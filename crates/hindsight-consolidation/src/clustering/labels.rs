//! Distinctive label terms per cluster.

use std::collections::{BTreeMap, HashMap};

/// Top `limit` terms of each cluster.
///
/// Each cluster is treated as one document made of its members' keyword
/// counts. A term scores `tf × (ln(clusters / df) + 1)`, so terms shared by
/// every cluster sink below terms that set one cluster apart. Ties break by
/// term order.
pub fn label_terms(clusters: &[Vec<&BTreeMap<String, u32>>], limit: usize) -> Vec<Vec<String>> {
    if limit == 0 {
        return vec![Vec::new(); clusters.len()];
    }

    let aggregated: Vec<BTreeMap<&str, u64>> = clusters
        .iter()
        .map(|members| {
            let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
            for keywords in members {
                for (term, &count) in keywords.iter() {
                    *counts.entry(term.as_str()).or_insert(0) += u64::from(count);
                }
            }
            counts
        })
        .collect();

    let mut df: HashMap<&str, usize> = HashMap::new();
    for counts in &aggregated {
        for term in counts.keys() {
            *df.entry(*term).or_insert(0) += 1;
        }
    }

    let n_clusters = clusters.len() as f64;
    aggregated
        .iter()
        .map(|counts| {
            let total: u64 = counts.values().sum();
            if total == 0 {
                return Vec::new();
            }
            let mut scored: Vec<(&str, f64)> = counts
                .iter()
                .map(|(&term, &count)| {
                    let doc_freq = df.get(term).copied().unwrap_or(1) as f64;
                    let tf = count as f64 / total as f64;
                    (term, tf * ((n_clusters / doc_freq).ln() + 1.0))
                })
                .collect();
            scored.sort_by(|a, b| {
                b.1.partial_cmp(&a.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.0.cmp(b.0))
            });
            scored
                .into_iter()
                .take(limit)
                .map(|(term, _)| term.to_string())
                .collect()
        })
        .collect()
}
