use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::unicode::{is_latin_vowel, is_place_marker};

/// Longest Latin cluster the tables may contain.
pub const MAX_CLUSTER_LEN: usize = 4;

/// Longest glyph code, in chars.
pub const MAX_GLYPH_LEN: usize = 4;

#[derive(Deserialize)]
struct UmweroTableConfig {
    vowels: BTreeMap<String, String>,
    ligatures: BTreeMap<String, String>,
    consonants: BTreeMap<String, String>,
    #[serde(default)]
    punctuation: PunctuationConfig,
    #[serde(default)]
    preferred: BTreeMap<String, String>,
}

#[derive(Deserialize, Default)]
struct PunctuationConfig {
    #[serde(default)]
    passthrough: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("duplicate key in [{table}]: {key}")]
    DuplicateKey { table: &'static str, key: String },
    #[error("invalid entry in [{table}]: {key}: {reason}")]
    InvalidCluster {
        table: &'static str,
        key: String,
        reason: &'static str,
    },
    #[error("mapping registry already initialized")]
    AlreadyInitialized,
}

/// Validated tables with every cluster key folded to uppercase.
#[derive(Debug, Clone)]
pub struct UmweroTables {
    pub vowels: BTreeMap<char, String>,
    pub ligatures: BTreeMap<String, String>,
    /// `consonants[len - 1]` holds the clusters of that length.
    pub consonants: [BTreeMap<String, String>; MAX_CLUSTER_LEN],
    pub punctuation: BTreeSet<char>,
    /// glyph -> preferred cluster for reverse conversion.
    pub preferred: BTreeMap<String, String>,
}

/// Parse TOML text into validated, length-partitioned tables.
pub fn parse_umwero_toml(toml_str: &str) -> Result<UmweroTables, RegistryError> {
    let config: UmweroTableConfig =
        toml::from_str(toml_str).map_err(|e| RegistryError::Parse(e.to_string()))?;

    let mut vowels = BTreeMap::new();
    for (key, glyph) in &config.vowels {
        let folded = key.to_ascii_uppercase();
        let mut chars = folded.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) if is_latin_vowel(c) => c,
            _ => {
                return Err(invalid("vowels", key, "must be one of A, E, I, O, U"));
            }
        };
        check_glyph("vowels", key, glyph)?;
        if vowels.insert(c, glyph.clone()).is_some() {
            return Err(duplicate("vowels", &folded));
        }
    }

    let mut ligatures = BTreeMap::new();
    for (key, glyph) in &config.ligatures {
        let folded = key.to_ascii_uppercase();
        let chars: Vec<char> = folded.chars().collect();
        if chars.len() != 2 || chars[0] != chars[1] || !is_latin_vowel(chars[0]) {
            return Err(invalid("ligatures", key, "must be a doubled vowel"));
        }
        check_glyph("ligatures", key, glyph)?;
        if ligatures.insert(folded.clone(), glyph.clone()).is_some() {
            return Err(duplicate("ligatures", &folded));
        }
    }

    let mut consonants: [BTreeMap<String, String>; MAX_CLUSTER_LEN] = Default::default();
    for (key, glyph) in &config.consonants {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid("consonants", key, "must contain only ASCII letters"));
        }
        if key.len() > MAX_CLUSTER_LEN {
            return Err(invalid("consonants", key, "longer than 4 letters"));
        }
        check_glyph("consonants", key, glyph)?;
        let folded = key.to_ascii_uppercase();
        if folded.len() == 1 && folded.chars().all(is_latin_vowel) {
            return Err(duplicate("consonants", &folded));
        }
        if ligatures.contains_key(&folded) {
            return Err(duplicate("consonants", &folded));
        }
        if consonants[folded.len() - 1]
            .insert(folded.clone(), glyph.clone())
            .is_some()
        {
            return Err(duplicate("consonants", &folded));
        }
    }

    let glyph_chars: BTreeSet<char> = vowels
        .values()
        .chain(ligatures.values())
        .chain(consonants.iter().flat_map(|m| m.values()))
        .flat_map(|g| g.chars())
        .collect();

    let mut punctuation = BTreeSet::new();
    for p in &config.punctuation.passthrough {
        let mut chars = p.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(invalid("punctuation", p, "must be a single character")),
        };
        if c.is_alphanumeric() {
            return Err(invalid("punctuation", p, "letters and digits cannot pass through"));
        }
        if glyph_chars.contains(&c) || !punctuation.insert(c) {
            return Err(duplicate("punctuation", p));
        }
    }

    let mut preferred = BTreeMap::new();
    for (glyph, cluster) in &config.preferred {
        let folded = cluster.to_ascii_uppercase();
        let produces = match folded.len() {
            1 => folded
                .chars()
                .next()
                .and_then(|c| vowels.get(&c))
                .or_else(|| consonants[0].get(&folded)),
            2..=MAX_CLUSTER_LEN => ligatures
                .get(&folded)
                .or_else(|| consonants[folded.len() - 1].get(&folded)),
            _ => None,
        };
        if produces != Some(glyph) {
            return Err(invalid(
                "preferred",
                glyph,
                "cluster does not produce this glyph",
            ));
        }
        preferred.insert(glyph.clone(), folded);
    }

    Ok(UmweroTables {
        vowels,
        ligatures,
        consonants,
        punctuation,
        preferred,
    })
}

fn check_glyph(table: &'static str, key: &str, glyph: &str) -> Result<(), RegistryError> {
    let len = glyph.chars().count();
    if len == 0 {
        return Err(invalid(table, key, "empty glyph code"));
    }
    if len > MAX_GLYPH_LEN {
        return Err(invalid(table, key, "glyph code longer than 4 characters"));
    }
    if glyph
        .chars()
        .any(|c| c.is_ascii_digit() || is_place_marker(c) || c.is_whitespace())
    {
        return Err(invalid(
            table,
            key,
            "glyph code collides with numeral or whitespace characters",
        ));
    }
    Ok(())
}

fn invalid(table: &'static str, key: &str, reason: &'static str) -> RegistryError {
    RegistryError::InvalidCluster {
        table,
        key: key.to_string(),
        reason,
    }
}

fn duplicate(table: &'static str, key: &str) -> RegistryError {
    RegistryError::DuplicateKey {
        table,
        key: key.to_string(),
    }
}
