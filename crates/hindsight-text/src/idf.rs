//! Batch inverse-document-frequency table.

use std::collections::{BTreeMap, HashMap, HashSet};

use hindsight_core::models::IdfSnapshot;

/// Weight for terms the table has not seen since its last rebuild.
pub const NEUTRAL_IDF: f64 = 1.0;

/// `idf(term) = ln(N / df(term))`, rebuilt only by [`IdfTable::recompute`].
///
/// Terms first seen after the last rebuild weigh [`NEUTRAL_IDF`] until the
/// next one.
#[derive(Debug, Clone, Default)]
pub struct IdfTable {
    weights: HashMap<String, f64>,
    corpus_size: usize,
    generation: u64,
}

impl IdfTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the corpus once, counting document frequency per term.
    pub fn recompute<'a, I>(&mut self, documents: I)
    where
        I: IntoIterator<Item = &'a BTreeMap<String, u32>>,
    {
        let mut df: HashMap<&'a str, usize> = HashMap::new();
        let mut n = 0usize;
        for terms in documents {
            n += 1;
            let unique: HashSet<&'a str> = terms.keys().map(String::as_str).collect();
            for term in unique {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        self.weights = df
            .into_iter()
            .map(|(term, doc_freq)| {
                let idf = if doc_freq == 0 {
                    0.0
                } else {
                    (n as f64 / doc_freq as f64).ln()
                };
                (term.to_string(), idf)
            })
            .collect();
        self.corpus_size = n;
        self.generation += 1;
        tracing::debug!(
            corpus_size = n,
            terms = self.weights.len(),
            generation = self.generation,
            "idf recomputed"
        );
    }

    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(NEUTRAL_IDF)
    }

    /// Whether `term` was present at the last rebuild.
    pub fn contains(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    /// Bumped on every rebuild; cached vectors built under an older
    /// generation are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn to_snapshot(&self) -> IdfSnapshot {
        IdfSnapshot {
            weights: self
                .weights
                .iter()
                .map(|(t, w)| (t.clone(), *w))
                .collect(),
            corpus_size: self.corpus_size,
        }
    }

    pub fn from_snapshot(snapshot: &IdfSnapshot) -> Self {
        Self {
            weights: snapshot
                .weights
                .iter()
                .map(|(t, w)| (t.clone(), *w))
                .collect(),
            corpus_size: snapshot.corpus_size,
            generation: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(terms: &[&str]) -> BTreeMap<String, u32> {
        terms.iter().map(|t| (t.to_string(), 1)).collect()
    }

    #[test]
    fn idf_is_log_of_inverse_document_frequency() {
        let docs = vec![doc(&["docker", "build"]), doc(&["docker", "deploy"])];
        let mut idf = IdfTable::new();
        idf.recompute(&docs);
        assert_eq!(idf.corpus_size(), 2);
        assert_eq!(idf.weight("docker"), 0.0);
        assert!((idf.weight("build") - 2f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn unseen_terms_are_neutral() {
        let mut idf = IdfTable::new();
        idf.recompute(&vec![doc(&["docker"])]);
        assert!(!idf.contains("kubectl"));
        assert_eq!(idf.weight("kubectl"), NEUTRAL_IDF);
    }

    #[test]
    fn empty_corpus_produces_empty_table() {
        let mut idf = IdfTable::new();
        idf.recompute(std::iter::empty());
        assert_eq!(idf.corpus_size(), 0);
        assert_eq!(idf.generation(), 1);
    }

    #[test]
    fn generation_increments_per_rebuild() {
        let mut idf = IdfTable::new();
        let docs = vec![doc(&["a1"])];
        idf.recompute(&docs);
        idf.recompute(&docs);
        assert_eq!(idf.generation(), 2);
    }

    #[test]
    fn snapshot_roundtrip_keeps_weights() {
        let mut idf = IdfTable::new();
        idf.recompute(&vec![doc(&["a1", "b2"]), doc(&["a1"])]);
        let restored = IdfTable::from_snapshot(&idf.to_snapshot());
        assert_eq!(restored.weight("b2"), idf.weight("b2"));
        assert_eq!(restored.corpus_size(), 2);
    }
}
