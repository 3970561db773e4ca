/// Embedded canonical Umwero inventory (vowels, ligatures, consonant clusters,
/// punctuation passthrough, reverse preferences).
pub(crate) const DEFAULT_TOML: &str = include_str!("default_umwero.toml");
