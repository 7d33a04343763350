// Domain model: channel catalog entries and resolution results.
//
// A `Catalog` is an immutable snapshot behind an `Arc`; the store swaps
// whole snapshots, so clones are cheap and readers never observe a
// half-replaced catalog.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Reserved EPG identifier for the multi-channel overview screen.
pub const MOSAIC_EPG_ID: &str = "0";
/// Name of the synthetic overview entry.
pub const MOSAIC_NAME: &str = "Mosaique";
/// Sentinel name the directory uses when a channel's identity is unknown.
pub const UNKNOWN_CHANNEL_NAME: &str = "N/A";

/// One channel known to the directory.
///
/// `epg_id` is unique within a snapshot; `name` is not (regional variants
/// may share a name), which is why resolution tie-breaks on catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelEntry {
    pub name: String,
    /// Display index as dialed on the remote (`"2"` for France 2).
    pub index: String,
    /// The appliance-internal identifier used for tuning.
    pub epg_id: String,
}

/// An ordered, immutable snapshot of all known channels.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Arc<Vec<ChannelEntry>>,
}

impl Catalog {
    pub fn new(entries: Vec<ChannelEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChannelEntry> {
        self.entries.iter()
    }

    /// All channel names, in catalog order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Find the entry whose `epg_id` equals `id`.
    ///
    /// The reserved identifier `"0"` always resolves to the synthetic
    /// Mosaique entry, even on an empty catalog -- it is a firmware
    /// fixture, not a directory member.
    pub fn lookup_by_id(&self, id: &str) -> Option<ChannelEntry> {
        if id == MOSAIC_EPG_ID {
            return Some(Self::mosaic());
        }
        self.entries.iter().find(|e| e.epg_id == id).cloned()
    }

    /// The synthetic multi-channel overview entry.
    pub fn mosaic() -> ChannelEntry {
        ChannelEntry {
            name: MOSAIC_NAME.to_owned(),
            index: MOSAIC_EPG_ID.to_owned(),
            epg_id: MOSAIC_EPG_ID.to_owned(),
        }
    }

    /// Two snapshots are the same if they share the same allocation.
    /// Used by tests to assert that the cache served the snapshot verbatim.
    pub fn same_snapshot(&self, other: &Catalog) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ChannelEntry;
    type IntoIter = std::slice::Iter<'a, ChannelEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// How a token was matched during resolution. Diagnostic only -- the
/// tuning path cares about the entry, not the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Matched by `#index` lookup.
    Indexed,
    /// Case-insensitive exact name match.
    Exact,
    /// Best-scoring fuzzy candidate.
    Fuzzy,
    /// A reserved identifier (the Mosaique overview).
    Special,
}

/// A successful resolution: the catalog entry plus how it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedChannel {
    pub entry: ChannelEntry,
    pub kind: MatchKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            ChannelEntry {
                name: "France 2".into(),
                index: "2".into(),
                epg_id: "201".into(),
            },
            ChannelEntry {
                name: "France 3".into(),
                index: "3".into(),
                epg_id: "301".into(),
            },
        ])
    }

    #[test]
    fn lookup_by_id_finds_catalog_entries() {
        let entry = catalog().lookup_by_id("301").expect("entry exists");
        assert_eq!(entry.name, "France 3");
    }

    #[test]
    fn lookup_by_id_misses_unknown_ids() {
        assert!(catalog().lookup_by_id("999").is_none());
    }

    #[test]
    fn mosaic_resolves_on_any_catalog() {
        assert_eq!(
            catalog().lookup_by_id("0").map(|e| e.name),
            Some(MOSAIC_NAME.to_owned())
        );
        assert_eq!(
            Catalog::default().lookup_by_id("0").map(|e| e.name),
            Some(MOSAIC_NAME.to_owned())
        );
    }

    #[test]
    fn clones_share_the_snapshot() {
        let a = catalog();
        let b = a.clone();
        assert!(a.same_snapshot(&b));
        assert!(!a.same_snapshot(&catalog()));
    }
}
