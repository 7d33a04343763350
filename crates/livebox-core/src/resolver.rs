// Channel resolution.
//
// Priority order: indexed (`#N`) lookup, case-insensitive exact name
// match, fuzzy ranking. The ordering avoids fuzzy false positives when
// the caller already supplies a precise index or name; fuzzy matching
// exists because on-air channel names are inconsistently cased,
// accented, and abbreviated across sources.

use crate::model::{Catalog, ChannelEntry, MatchKind, ResolvedChannel};

/// Marker prefix for display-index lookups (`#3` tunes to index 3).
pub const INDEX_MARKER: char = '#';

/// Resolve a user-supplied channel token against a catalog snapshot.
///
/// Pure function of its inputs. Returns `None` only for an empty catalog
/// or a malformed token (empty, or the bare `#` marker); any well-formed
/// token against a non-empty catalog resolves to *something*, falling
/// back to the best fuzzy candidate. Ties are broken by catalog order,
/// first entry wins -- deterministic, never random.
pub fn resolve(token: &str, catalog: &Catalog) -> Option<ResolvedChannel> {
    let token = token.trim();
    if catalog.is_empty() || token.is_empty() || token == "#" {
        return None;
    }

    // 1. Indexed lookup: exact string match on the display index.
    if let Some(index) = token.strip_prefix(INDEX_MARKER) {
        if let Some(entry) = catalog.iter().find(|e| e.index == index) {
            return Some(found(entry, MatchKind::Indexed));
        }
    }

    // 2. Exact name match, case-insensitive.
    let token_lower = token.to_lowercase();
    if let Some(entry) = catalog.iter().find(|e| e.name.to_lowercase() == token_lower) {
        return Some(found(entry, MatchKind::Exact));
    }

    // 3. Fuzzy ranking over every name. Strictly-greater comparison
    // keeps the first catalog entry among equal-scoring candidates.
    let mut best: Option<(f64, &ChannelEntry)> = None;
    for entry in catalog {
        let score = strsim::jaro_winkler(&token_lower, &entry.name.to_lowercase());
        if best.is_none_or(|(top, _)| score > top) {
            best = Some((score, entry));
        }
    }
    best.map(|(_, entry)| found(entry, MatchKind::Fuzzy))
}

fn found(entry: &ChannelEntry, kind: MatchKind) -> ResolvedChannel {
    ResolvedChannel {
        entry: entry.clone(),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(name: &str, index: &str, epg_id: &str) -> ChannelEntry {
        ChannelEntry {
            name: name.into(),
            index: index.into(),
            epg_id: epg_id.into(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            entry("France 2", "2", "201"),
            entry("France 3", "3", "301"),
            entry("Arte", "7", "111"),
            entry("W9", "9", "119"),
        ])
    }

    fn resolve_ok(token: &str) -> ResolvedChannel {
        resolve(token, &catalog()).expect("token should resolve")
    }

    #[test]
    fn indexed_lookup_wins_over_names() {
        let r = resolve_ok("#3");
        assert_eq!(r.entry.epg_id, "301");
        assert_eq!(r.kind, MatchKind::Indexed);
    }

    #[test]
    fn unmatched_index_falls_back_to_fuzzy() {
        let r = resolve_ok("#42");
        assert_eq!(r.kind, MatchKind::Fuzzy);
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let r = resolve_ok("france 2");
        assert_eq!(r.entry.epg_id, "201");
        assert_eq!(r.kind, MatchKind::Exact);

        let r = resolve_ok("ARTE");
        assert_eq!(r.entry.epg_id, "111");
        assert_eq!(r.kind, MatchKind::Exact);
    }

    #[test]
    fn fuzzy_picks_the_closest_name() {
        let r = resolve_ok("franc3");
        assert_eq!(r.entry.epg_id, "301");
        assert_eq!(r.kind, MatchKind::Fuzzy);
    }

    #[test]
    fn fuzzy_never_misses_on_a_nonempty_catalog() {
        let r = resolve_ok("zzzzzz");
        assert_eq!(r.kind, MatchKind::Fuzzy);
    }

    #[test]
    fn duplicate_names_resolve_to_the_first_in_catalog_order() {
        let catalog = Catalog::new(vec![
            entry("France 3", "3", "301"),
            entry("France 3", "313", "313"),
        ]);
        let r = resolve("france 3", &catalog).expect("resolves");
        assert_eq!(r.entry.epg_id, "301");

        // Same for fuzzy ties between identical names.
        let r = resolve("france", &catalog).expect("resolves");
        assert_eq!(r.entry.epg_id, "301");
    }

    #[test]
    fn empty_catalog_never_resolves() {
        assert_eq!(resolve("france 2", &Catalog::default()), None);
    }

    #[test]
    fn malformed_tokens_do_not_resolve() {
        assert_eq!(resolve("", &catalog()), None);
        assert_eq!(resolve("   ", &catalog()), None);
        assert_eq!(resolve("#", &catalog()), None);
    }
}
