// src/analysis/aggregator.rs
//! Per-path running statistics for one log file.

use std::collections::HashMap;

use crate::types::{ParsedRecord, PathStats};

#[derive(Debug, Default)]
pub struct Aggregator {
    stats: HashMap<String, PathStats>,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest(&mut self, record: ParsedRecord) {
        let ParsedRecord {
            path,
            response_time,
        } = record;
        match self.stats.get_mut(&path) {
            Some(entry) => entry.record(response_time),
            None => {
                let mut entry = PathStats::new(path.clone());
                entry.record(response_time);
                self.stats.insert(path, entry);
            }
        }
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&PathStats> {
        self.stats.get(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Hands the finished statistics to the ranker.
    #[must_use]
    pub fn into_stats(self) -> Vec<PathStats> {
        self.stats.into_values().collect()
    }
}
