const SETTINGS: (&str, &str) = (
    "src/default_settings.toml",
    include_str!("src/default_settings.toml"),
);
const TABLE: (&str, &str) = (
    "src/registry/default_umwero.toml",
    include_str!("src/registry/default_umwero.toml"),
);

fn main() {
    // Embedded tables are parsed lazily at runtime; catch a broken edit here.
    check_sections(SETTINGS, &["numerals", "text", "reverse"]);
    check_sections(TABLE, &["vowels", "ligatures", "consonants"]);
    println!("cargo:rerun-if-changed={}", SETTINGS.0);
    println!("cargo:rerun-if-changed={}", TABLE.0);
}

fn check_sections((path, content): (&str, &str), required: &[&str]) {
    let value = match content.parse::<toml::Table>() {
        Ok(v) => v,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    for section in required {
        if !value.get(*section).is_some_and(toml::Value::is_table) {
            panic!("{path} is missing the [{section}] table");
        }
    }
}
