use std::path::Path;

use translit_core::grammar::{self, Grammar};
use translit_core::settings;

use super::read_file;

/// Install a custom grammar for the rest of the process.
pub fn install_grammar(file: &str) {
    let content = die!(read_file(file), "Error: {}");
    die!(Grammar::init_custom(content), "Error in grammar {file}: {}");
}

pub fn grammar_export() {
    print!("{}", grammar::default_toml());
}

pub fn grammar_validate(file: &str) {
    let config = die!(grammar::read_grammar_file(Path::new(file)), "Error: {}");
    let grammar = die!(Grammar::from_config(&config), "Error: {}");
    println!(
        "OK: {} multi, {} single, {} reverse mappings (longest key {})",
        config.multi.len(),
        config.single.len(),
        config.reverse.len(),
        grammar.max_key_len()
    );
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(read_file(file), "Error: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!("OK: enabled={}, direction={}", s.enabled, s.direction);
}
