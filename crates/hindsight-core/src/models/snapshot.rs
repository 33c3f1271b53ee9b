//! The engine's only persistence contract. Hosts serialize this however they
//! like; the engine never touches storage.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::SNAPSHOT_FORMAT_VERSION;
use crate::entry::Entry;
use crate::errors::HindsightResult;

/// Serialized IDF table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdfSnapshot {
    pub weights: BTreeMap<String, f64>,
    /// Number of documents the weights were computed over.
    pub corpus_size: usize,
}

/// Full engine state: entries, vocabulary (index = position) and IDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub entries: Vec<Entry>,
    pub vocabulary: Vec<String>,
    pub idf: IdfSnapshot,
}

impl Snapshot {
    pub fn new(entries: Vec<Entry>, vocabulary: Vec<String>, idf: IdfSnapshot) -> Self {
        Self {
            version: SNAPSHOT_FORMAT_VERSION,
            entries,
            vocabulary,
            idf,
        }
    }

    pub fn to_json(&self) -> HindsightResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> HindsightResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
