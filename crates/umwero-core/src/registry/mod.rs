//! Latin Kinyarwanda <-> Umwero mapping tables.
//!
//! The registry owns the vowel, ligature and consonant-cluster tables, the
//! punctuation passthrough set and the derived reverse index. It is built once
//! from TOML and shared read-only; lookups never mutate it.

mod config;
mod reverse_index;
mod table;


use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use serde::Serialize;
use tracing::{debug, debug_span};

pub use config::{
    parse_umwero_toml, RegistryError, UmweroTables, MAX_CLUSTER_LEN, MAX_GLYPH_LEN,
};
pub use reverse_index::{ReverseEntry, ReverseIndex};

use table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Which table a cluster came from. Declaration order is lookup priority at
/// equal cluster length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ClusterKind {
    Ligature,
    Consonant,
    Vowel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterMatch<'a> {
    pub glyph: &'a str,
    pub kind: ClusterKind,
}

#[derive(Debug)]
pub struct MappingRegistry {
    tables: UmweroTables,
    reverse: ReverseIndex,
}

impl MappingRegistry {
    /// Set a custom table before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RegistryError> {
        // Validate eagerly
        Self::from_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RegistryError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static MappingRegistry {
        static INSTANCE: OnceLock<MappingRegistry> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            MappingRegistry::from_toml(toml_str).expect("umwero table TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, RegistryError> {
        parse_umwero_toml(toml_str).map(Self::from_tables)
    }

    fn from_tables(tables: UmweroTables) -> Self {
        let _span = debug_span!("registry_build").entered();
        let entries: Vec<(String, String, ClusterKind)> = Self::collect_entries(&tables);
        let reverse = ReverseIndex::build(
            entries
                .iter()
                .map(|(c, g, k)| (c.as_str(), g.as_str(), *k)),
            &tables.preferred,
        );
        debug!(
            entry_count = entries.len(),
            glyph_count = reverse.len(),
            ambiguous_count = reverse.ambiguous().count()
        );
        Self { tables, reverse }
    }

    fn collect_entries(tables: &UmweroTables) -> Vec<(String, String, ClusterKind)> {
        let vowels = tables
            .vowels
            .iter()
            .map(|(c, g)| (c.to_string(), g.clone(), ClusterKind::Vowel));
        let ligatures = tables
            .ligatures
            .iter()
            .map(|(c, g)| (c.clone(), g.clone(), ClusterKind::Ligature));
        let consonants = tables
            .consonants
            .iter()
            .flat_map(|m| m.iter())
            .map(|(c, g)| (c.clone(), g.clone(), ClusterKind::Consonant));
        vowels.chain(ligatures).chain(consonants).collect()
    }

    pub fn vowels(&self) -> &BTreeMap<char, String> {
        &self.tables.vowels
    }

    pub fn ligatures(&self) -> &BTreeMap<String, String> {
        &self.tables.ligatures
    }

    /// Consonant clusters of exactly `len` letters (1..=4).
    pub fn consonant_clusters(&self, len: usize) -> Option<&BTreeMap<String, String>> {
        len.checked_sub(1).and_then(|i| self.tables.consonants.get(i))
    }

    pub fn punctuation_passthrough(&self) -> &BTreeSet<char> {
        &self.tables.punctuation
    }

    pub fn is_passthrough(&self, c: char) -> bool {
        self.tables.punctuation.contains(&c)
    }

    /// Look up one Latin cluster, case-insensitively.
    ///
    /// At a given length a ligature is tried before a consonant cluster and a
    /// consonant before a vowel. The tables reject overlapping keys at build
    /// time, so the order only matters for hand-built inputs.
    pub fn lookup(&self, cluster: &str) -> Option<ClusterMatch<'_>> {
        if cluster.bytes().any(|b| b.is_ascii_lowercase()) {
            return self.lookup_folded(&cluster.to_ascii_uppercase());
        }
        self.lookup_folded(cluster)
    }

    fn lookup_folded(&self, key: &str) -> Option<ClusterMatch<'_>> {
        let len = key.len();
        if !key.is_ascii() || len == 0 || len > MAX_CLUSTER_LEN {
            return None;
        }
        if len == 2 {
            if let Some(glyph) = self.tables.ligatures.get(key) {
                return Some(ClusterMatch {
                    glyph,
                    kind: ClusterKind::Ligature,
                });
            }
        }
        if let Some(glyph) = self.tables.consonants[len - 1].get(key) {
            return Some(ClusterMatch {
                glyph,
                kind: ClusterKind::Consonant,
            });
        }
        if len == 1 {
            let c = key.chars().next()?;
            if let Some(glyph) = self.tables.vowels.get(&c) {
                return Some(ClusterMatch {
                    glyph,
                    kind: ClusterKind::Vowel,
                });
            }
        }
        None
    }

    pub fn reverse_index(&self) -> &ReverseIndex {
        &self.reverse
    }

    /// Every cluster that produces `glyph`, canonical first.
    pub fn candidates(&self, glyph: &str) -> &[ReverseEntry] {
        self.reverse.candidates(glyph)
    }

    pub fn canonical(&self, glyph: &str) -> Option<&ReverseEntry> {
        self.reverse.canonical(glyph)
    }

    /// Glyph codes shared by more than one cluster, with their candidates in
    /// canonical order.
    pub fn ambiguous_glyphs(&self) -> impl Iterator<Item = (&str, &[ReverseEntry])> {
        self.reverse.ambiguous()
    }

    /// Every (cluster, glyph, kind) triple: vowels, ligatures, then consonants
    /// by length and key.
    pub fn entries(&self) -> Vec<(String, String, ClusterKind)> {
        Self::collect_entries(&self.tables)
    }

    /// Number of Latin clusters across all tables.
    pub fn len(&self) -> usize {
        self.tables.vowels.len()
            + self.tables.ligatures.len()
            + self
                .tables
                .consonants
                .iter()
                .map(BTreeMap::len)
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
