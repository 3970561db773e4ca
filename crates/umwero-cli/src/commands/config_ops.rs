use std::fs;
use std::process;

use umwero_core::registry::{MappingRegistry, RegistryError};
use umwero_core::settings::{parse_settings_toml, Settings, SettingsError};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Table(#[from] RegistryError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

fn read(file: &str) -> Result<String, ConfigError> {
    fs::read_to_string(file).map_err(|source| ConfigError::Read {
        path: file.to_string(),
        source,
    })
}

pub fn load_table(file: &str) -> Result<MappingRegistry, ConfigError> {
    Ok(MappingRegistry::from_toml(&read(file)?)?)
}

pub fn load_settings(file: &str) -> Result<Settings, ConfigError> {
    Ok(parse_settings_toml(&read(file)?)?)
}

/// Install `--table` / `--settings` files as the global configuration.
/// Must run before any command touches the registry or settings.
pub fn apply_overrides(table: Option<&str>, settings: Option<&str>) {
    if let Some(file) = table {
        let content = die!(read(file), "Error: {}");
        die!(MappingRegistry::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = settings {
        let content = die!(read(file), "Error: {}");
        die!(
            umwero_core::settings::init_custom(content),
            "Error in {file}: {}"
        );
    }
}

pub fn table_export() {
    print!("{}", umwero_core::registry::default_toml());
}

pub fn table_validate(file: &str) {
    let registry = die!(load_table(file), "Error: {}");
    println!(
        "OK: {} mappings, {} glyph codes, {} ambiguous",
        registry.len(),
        registry.reverse_index().len(),
        registry.ambiguous_glyphs().count()
    );
}

pub fn settings_export() {
    print!("{}", umwero_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let s = die!(load_settings(file), "Error: {}");
    println!(
        "OK: numerals.max_place={}, text.collapse_whitespace={}, reverse.lowercase_output={}",
        s.numerals.max_place, s.text.collapse_whitespace, s.reverse.lowercase_output
    );
}
