use clap::{Parser, Subcommand};

use translit_cli::commands::{config_ops, convert_ops, type_ops};

#[derive(Parser)]
#[command(name = "translit", about = "Latin/Cyrillic transliteration tool")]
struct Cli {
    /// Custom grammar TOML to use instead of the built-in one
    #[arg(long, global = true)]
    grammar: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate Latin text to Cyrillic
    Convert {
        /// Text to convert (reads stdin when omitted)
        text: Option<String>,
    },
    /// Transliterate Cyrillic text back to Latin
    Reverse {
        /// Text to convert (reads stdin when omitted)
        text: Option<String>,
    },
    /// Count characters, words, sentences, paragraphs and lines
    Stats {
        /// Text to count (reads stdin when omitted)
        text: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Type text keystroke by keystroke and show every edit
    Type {
        /// Keystrokes to feed
        text: String,
        /// Type in the Cyrillic-to-Latin direction
        #[arg(long)]
        reverse: bool,
    },
    /// Export the default grammar as TOML
    GrammarExport,
    /// Validate a custom grammar TOML file
    GrammarValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref file) = cli.grammar {
        config_ops::install_grammar(file);
    }

    match cli.command {
        Command::Convert { text } => convert_ops::convert(text),
        Command::Reverse { text } => convert_ops::reverse(text),
        Command::Stats { text, json } => convert_ops::stats(text, json),
        Command::Type { text, reverse } => type_ops::type_cmd(&text, reverse),
        Command::GrammarExport => config_ops::grammar_export(),
        Command::GrammarValidate { file } => config_ops::grammar_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
