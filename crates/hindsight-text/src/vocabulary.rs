//! Term → dimension index table. Grows monotonically; indices are never reused.

use std::collections::HashMap;

use hindsight_core::errors::SnapshotError;

#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    terms: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore from a snapshot; position in `terms` is the index.
    pub fn from_terms(terms: Vec<String>) -> Result<Self, SnapshotError> {
        let mut index = HashMap::with_capacity(terms.len());
        for (i, term) in terms.iter().enumerate() {
            if index.insert(term.clone(), i).is_some() {
                return Err(SnapshotError::DuplicateTerm { term: term.clone() });
            }
        }
        Ok(Self { index, terms })
    }

    /// Index for `term`, assigning the next free one on first sight.
    pub fn index_of(&mut self, term: &str) -> usize {
        if let Some(&i) = self.index.get(term) {
            return i;
        }
        let i = self.terms.len();
        self.terms.push(term.to_string());
        self.index.insert(term.to_string(), i);
        i
    }

    /// Index for a known term, without growing.
    pub fn get(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn term_at(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_by_one_per_new_term() {
        let mut v = Vocabulary::new();
        assert_eq!(v.index_of("docker"), 0);
        assert_eq!(v.index_of("build"), 1);
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn known_terms_are_idempotent() {
        let mut v = Vocabulary::new();
        let a = v.index_of("docker");
        let b = v.index_of("docker");
        assert_eq!(a, b);
        assert_eq!(v.len(), 1);
        assert_eq!(v.get("docker"), Some(0));
        assert_eq!(v.get("missing"), None);
    }

    #[test]
    fn restores_indices_from_terms() {
        let v = Vocabulary::from_terms(vec!["a1".into(), "b2".into()]).unwrap();
        assert_eq!(v.get("b2"), Some(1));
        assert_eq!(v.term_at(0), Some("a1"));
    }

    #[test]
    fn rejects_duplicate_terms() {
        assert!(Vocabulary::from_terms(vec!["x1".into(), "x1".into()]).is_err());
    }
}
