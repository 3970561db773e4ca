use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::config::MAX_GLYPH_LEN;
use super::ClusterKind;

/// One Latin cluster that produces a given glyph code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseEntry {
    pub cluster: String,
    pub kind: ClusterKind,
}

/// Glyph code -> every cluster that produces it, canonical representative first.
///
/// Candidate order: the table's `[preferred]` cluster, then shorter clusters,
/// then byte order of the uppercase cluster. The order depends only on table
/// contents, never on insertion or hashing order.
#[derive(Debug)]
pub struct ReverseIndex {
    /// `by_len[n - 1]` holds glyph codes that are `n` chars long.
    by_len: [BTreeMap<String, Vec<ReverseEntry>>; MAX_GLYPH_LEN],
}

impl ReverseIndex {
    pub(super) fn build<'a, I>(entries: I, preferred: &BTreeMap<String, String>) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, ClusterKind)>,
    {
        let mut by_len: [BTreeMap<String, Vec<ReverseEntry>>; MAX_GLYPH_LEN] = Default::default();
        for (cluster, glyph, kind) in entries {
            let len = glyph.chars().count();
            by_len[len - 1]
                .entry(glyph.to_string())
                .or_default()
                .push(ReverseEntry {
                    cluster: cluster.to_string(),
                    kind,
                });
        }

        for partition in &mut by_len {
            for (glyph, candidates) in partition.iter_mut() {
                let pick = preferred.get(glyph).map(String::as_str);
                candidates.sort_by(|a, b| canonical_order(pick, a, b));
            }
        }

        Self { by_len }
    }

    /// All clusters for `glyph`, canonical first. Empty when unmapped.
    pub fn candidates(&self, glyph: &str) -> &[ReverseEntry] {
        let len = glyph.chars().count();
        if len == 0 || len > MAX_GLYPH_LEN {
            return &[];
        }
        self.by_len[len - 1]
            .get(glyph)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn canonical(&self, glyph: &str) -> Option<&ReverseEntry> {
        self.candidates(glyph).first()
    }

    /// Glyph codes shared by more than one cluster, in glyph order.
    pub fn ambiguous(&self) -> impl Iterator<Item = (&str, &[ReverseEntry])> {
        self.by_len
            .iter()
            .flat_map(|m| m.iter())
            .filter(|(_, c)| c.len() > 1)
            .map(|(g, c)| (g.as_str(), c.as_slice()))
    }

    /// Longest glyph code present, in chars.
    pub fn max_glyph_len(&self) -> usize {
        self.by_len
            .iter()
            .rposition(|m| !m.is_empty())
            .map_or(0, |i| i + 1)
    }

    pub fn len(&self) -> usize {
        self.by_len.iter().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn canonical_order(preferred: Option<&str>, a: &ReverseEntry, b: &ReverseEntry) -> Ordering {
    let is_pick = |e: &ReverseEntry| preferred == Some(e.cluster.as_str());
    is_pick(b)
        .cmp(&is_pick(a))
        .then_with(|| a.cluster.len().cmp(&b.cluster.len()))
        .then_with(|| a.cluster.cmp(&b.cluster))
}
