//! # hindsight-text
//!
//! Text → features → vectors → scores.
//! Lightweight tokenization with CJK substring splitting, stop words, a domain
//! tag dictionary, a growing vocabulary, batch IDF, TF-IDF vectorization and
//! the cosine / Jaccard / substring-overlap similarity signals.

pub mod extractor;
pub mod idf;
pub mod similarity;
pub mod space;
pub mod synonyms;
pub mod vectorizer;
pub mod vocabulary;

pub use extractor::{FeatureExtractor, Features};
pub use idf::IdfTable;
pub use similarity::DedupBlend;
pub use space::VectorSpace;
pub use vectorizer::{DocumentVector, Vectorizer};
pub use vocabulary::Vocabulary;
