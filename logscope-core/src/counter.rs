use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered association list of per-key counts.
///
/// Keys keep the order in which they were first observed. Ranking uses a
/// stable sort by descending count, so equal counts fall back to
/// first-seen order rather than anything map-iteration-dependent.
#[derive(Debug, Clone)]
pub struct OrderedCounter<K> {
    entries: Vec<(K, u64)>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> OrderedCounter<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn increment(&mut self, key: K) {
        if let Some(slot) = self.index.get(&key).copied() {
            self.entries[slot].1 += 1;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, 1));
        }
    }

    /// Consumes the counter into a ranked list: descending count, ties in
    /// first-seen order.
    pub fn into_ranked(self) -> Vec<(K, u64)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Ranked list truncated to the `limit` highest entries.
    pub fn into_top(self, limit: usize) -> Vec<(K, u64)> {
        let mut ranked = self.into_ranked();
        ranked.truncate(limit);
        ranked
    }
}

impl<K: Eq + Hash + Clone> Default for OrderedCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}
