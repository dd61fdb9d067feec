//! Bounded search history.

use std::collections::VecDeque;

/// The most recent search queries, newest first.
///
/// Repeated queries are kept as separate entries. Once the limit is reached
/// the oldest entry is dropped.
#[derive(Debug, Clone)]
pub struct SearchHistory {
    entries: VecDeque<String>,
    limit: usize,
}

impl SearchHistory {
    /// Create an empty history holding at most `limit` entries.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// Record a query as the most recent entry.
    pub fn record(&mut self, query: impl Into<String>) {
        self.entries.push_front(query.into());
        self.entries.truncate(self.limit);
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Entries, newest first, as owned strings.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no queries have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
