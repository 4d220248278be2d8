//! Deduplicating merge store.
//!
//! Accumulates links from any number of ingested files. A URL is kept the
//! first time it is seen, session-wide; every later occurrence, from any
//! file, is dropped. Surviving links are grouped by their label text in
//! insertion order.

use crate::extract::LinkEntry;
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::debug;

/// Counts reported by a single [`MergeStore::ingest`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestOutcome {
    /// Entries newly recorded by this call.
    pub accepted: usize,
    /// Entries dropped because their URL was already present.
    pub duplicates: usize,
}

/// Session-wide accumulator of deduplicated, grouped links.
///
/// The seen-URL set and the grouped mapping are updated together, entry by
/// entry: a URL is in the set exactly when it is in some group's list.
/// Both grow for the life of the store and are dropped with it.
#[derive(Debug, Default)]
pub struct MergeStore {
    seen: HashSet<String>,
    groups: IndexMap<String, Vec<String>>,
}

impl MergeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a sequence of entries into the store, in order.
    ///
    /// A URL already present anywhere in the store is skipped silently;
    /// URL comparison is exact string equality, with no normalization.
    /// Otherwise the URL is appended to its label's group, creating the
    /// group on first use. The grouping key is the label text alone, so
    /// distinct URLs sharing a label land in the same group, and an empty
    /// label is a valid key.
    pub fn ingest(&mut self, entries: impl IntoIterator<Item = LinkEntry>) -> IngestOutcome {
        let mut outcome = IngestOutcome::default();

        for entry in entries {
            if self.seen.contains(&entry.url) {
                debug!(url = %entry.url, "dropping duplicate");
                outcome.duplicates += 1;
                continue;
            }
            self.seen.insert(entry.url.clone());
            self.groups.entry(entry.label).or_default().push(entry.url);
            outcome.accepted += 1;
        }

        outcome
    }

    /// Number of distinct label groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of links held across all groups.
    pub fn link_count(&self) -> usize {
        self.seen.len()
    }

    /// True if nothing has been ingested (or everything was a duplicate).
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate groups in insertion order; URLs within a group are in
    /// first-ingested order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.iter().map(|(label, urls)| (label.as_str(), urls.as_slice()))
    }
}
