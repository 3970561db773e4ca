//! UniFFI export layer: generated bindings for the Umwero codec.
//!
//! Everything here is a thin wrapper over `umwero-core`; conversions use the
//! global registry and settings.

mod types;


pub use types::{UmweroCandidate, UmweroError, UmweroToken, UmweroTokenKind};

use std::path::Path;

use tracing::debug;

use umwero_core::numeral::NumeralCodec;
use umwero_core::registry::MappingRegistry;
use umwero_core::translit::Transliterator;

fn read_config(path: &str) -> Result<String, UmweroError> {
    std::fs::read_to_string(path).map_err(|e| UmweroError::Io {
        msg: format!("{path}: {e}"),
    })
}

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn transliterate_forward(text: String) -> String {
    umwero_core::transliterate_forward(&text)
}

#[uniffi::export]
fn transliterate_reverse(text: String) -> String {
    umwero_core::transliterate_reverse(&text)
}

/// Token stream for either direction, for UIs that highlight clusters.
#[uniffi::export]
fn tokenize(text: String, reverse: bool) -> Vec<UmweroToken> {
    let t = Transliterator::global();
    let tokens = if reverse {
        t.tokenize_reverse(&text)
    } else {
        t.tokenize_forward(&text)
    };
    tokens.into_iter().map(UmweroToken::from).collect()
}

#[uniffi::export]
fn numeral_encode(n: u64) -> Result<String, UmweroError> {
    NumeralCodec::from_settings()
        .encode_str(n)
        .map_err(|e| UmweroError::Numeral { msg: e.to_string() })
}

#[uniffi::export]
fn numeral_decode(glyphs: String) -> Result<u64, UmweroError> {
    NumeralCodec::from_settings()
        .decode_str(&glyphs)
        .map_err(|e| UmweroError::Numeral { msg: e.to_string() })
}

/// Every Latin cluster written with `glyph`, canonical pick first.
#[uniffi::export]
fn glyph_candidates(glyph: String) -> Vec<UmweroCandidate> {
    MappingRegistry::global()
        .candidates(&glyph)
        .iter()
        .enumerate()
        .map(|(i, entry)| UmweroCandidate {
            cluster: entry.cluster.clone(),
            canonical: i == 0,
        })
        .collect()
}

#[uniffi::export]
fn registry_load_config(path: String) -> Result<(), UmweroError> {
    let content = read_config(&path)?;
    MappingRegistry::init_custom(content)
        .map_err(|e| UmweroError::InvalidData { msg: e.to_string() })?;
    debug!(path = %path, "custom umwero table installed");
    Ok(())
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), UmweroError> {
    let content = read_config(&path)?;
    umwero_core::settings::init_custom(content)
        .map_err(|e| UmweroError::InvalidData { msg: e.to_string() })?;
    debug!(path = %path, "custom settings installed");
    Ok(())
}

#[uniffi::export]
fn registry_default_config() -> String {
    umwero_core::registry::default_toml().to_string()
}

#[uniffi::export]
fn settings_default_config() -> String {
    umwero_core::settings::default_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
