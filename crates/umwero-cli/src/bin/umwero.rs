use clap::{Parser, Subcommand};

use umwero_cli::commands::{config_ops, numeral_ops, translit_ops};

#[derive(Parser)]
#[command(name = "umwero", about = "Kinyarwanda Latin <-> Umwero transliteration")]
struct Cli {
    /// Mapping table TOML to use instead of the built-in one
    #[arg(long, global = true)]
    table: Option<String>,
    /// Settings TOML to use instead of the built-in one
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Latin Kinyarwanda -> Umwero
    Forward {
        text: String,
        /// Print PUA glyphs as <U+XXXX>
        #[arg(long)]
        escape: bool,
    },
    /// Umwero -> Latin Kinyarwanda
    Reverse {
        /// Umwero text; PUA glyphs may be written as <U+XXXX>
        text: String,
    },
    /// Encode or decode positional numerals
    Numeral {
        #[command(subcommand)]
        action: NumeralAction,
    },
    /// Show the token stream of a conversion
    Explain {
        text: String,
        /// Explain Umwero -> Latin instead
        #[arg(long)]
        reverse: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List glyph codes shared by several Latin clusters
    Ambiguities,
    /// Export or validate configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum NumeralAction {
    /// Number -> numeral glyphs
    Encode {
        n: u64,
        /// Highest place marker allowed (1-19)
        #[arg(long)]
        max_place: Option<u32>,
        /// Print place markers as <U+XXXX>
        #[arg(long)]
        escape: bool,
    },
    /// Numeral glyphs -> number
    Decode {
        glyphs: String,
        /// Highest place marker allowed (1-19)
        #[arg(long)]
        max_place: Option<u32>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the built-in mapping table
    TableExport,
    /// Check a mapping table TOML
    TableValidate { file: String },
    /// Print the built-in settings
    SettingsExport,
    /// Check a settings TOML
    SettingsValidate { file: String },
}

fn main() {
    let cli = Cli::parse();
    config_ops::apply_overrides(cli.table.as_deref(), cli.settings.as_deref());

    match cli.command {
        Command::Forward { text, escape } => translit_ops::forward(&text, escape),
        Command::Reverse { text } => translit_ops::reverse(&text),
        Command::Numeral { action } => match action {
            NumeralAction::Encode {
                n,
                max_place,
                escape,
            } => numeral_ops::encode(n, max_place, escape),
            NumeralAction::Decode { glyphs, max_place } => {
                numeral_ops::decode(&glyphs, max_place)
            }
        },
        Command::Explain {
            text,
            reverse,
            json,
        } => translit_ops::explain(&text, reverse, json),
        Command::Ambiguities => translit_ops::ambiguities(),
        Command::Config { action } => match action {
            ConfigAction::TableExport => config_ops::table_export(),
            ConfigAction::TableValidate { file } => config_ops::table_validate(&file),
            ConfigAction::SettingsExport => config_ops::settings_export(),
            ConfigAction::SettingsValidate { file } => config_ops::settings_validate(&file),
        },
    }
}
