//! Keep-newest retention over grouped version entries.

use super::entry::VersionEntry;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// The outcome of comparing every entry of one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionDecision {
    /// Group this decision covers.
    pub group_key: String,
    /// The newest entry, which stays on disk.
    pub kept: VersionEntry,
    /// Everything else, newest first.
    pub removed: Vec<VersionEntry>,
}

impl RetentionDecision {
    /// Number of entries the group had.
    pub fn total(&self) -> usize {
        self.removed.len() + 1
    }
}

/// Partition entries into one kept and N-1 removed per group.
///
/// Within a group entries are ordered by `modified_at` descending. Equal
/// timestamps fall back to path descending so the same tree always yields
/// the same decision, even on filesystems with coarse mtime resolution.
/// Single-entry groups are returned with an empty `removed` list.
pub fn resolve(entries: Vec<VersionEntry>) -> BTreeMap<String, RetentionDecision> {
    let mut groups: BTreeMap<String, Vec<VersionEntry>> = BTreeMap::new();
    for entry in entries {
        groups.entry(entry.group_key.clone()).or_default().push(entry);
    }

    groups
        .into_iter()
        .filter_map(|(group_key, mut members)| {
            members.sort_by(newest_first);
            let mut members = members.into_iter();
            let kept = members.next()?;
            Some((
                group_key.clone(),
                RetentionDecision {
                    group_key,
                    kept,
                    removed: members.collect(),
                },
            ))
        })
        .collect()
}

fn newest_first(a: &VersionEntry, b: &VersionEntry) -> Ordering {
    b.modified_at
        .cmp(&a.modified_at)
        .then_with(|| b.path.cmp(&a.path))
}
