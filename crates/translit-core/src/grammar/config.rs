use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

/// Raw grammar tables as declared in TOML. Order is significant.
#[derive(Debug, Clone, Deserialize)]
pub struct GrammarConfig {
    #[serde(default)]
    pub multi: Vec<(String, String)>,
    pub single: Vec<(String, String)>,
    #[serde(default)]
    pub reverse: Vec<(String, String)>,
}

#[derive(Debug, thiserror::Error)]
pub enum GrammarConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("[single] table is empty")]
    Empty,
    #[error("empty key in [{table}]")]
    EmptyKey { table: &'static str },
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("duplicate key in [{table}]: {key}")]
    DuplicateKey { table: &'static str, key: String },
    #[error("multi key must be at least two characters: {0}")]
    ShortMultiKey(String),
    #[error("single key must be exactly one character: {0}")]
    LongSingleKey(String),
    #[error("reverse key must be exactly one character: {0}")]
    LongReverseKey(String),
    #[error("multi key {key} starts with '{first}', which has no single mapping")]
    MissingStarter { key: String, first: char },
    #[error("multi key {key} is missing its case variant {variant}")]
    MissingCaseVariant { key: String, variant: String },
    #[error("grammar already initialized")]
    AlreadyInitialized,
}

/// Parse and validate grammar TOML.
pub fn parse_grammar_toml(toml_str: &str) -> Result<GrammarConfig, GrammarConfigError> {
    let config: GrammarConfig =
        toml::from_str(toml_str).map_err(|e| GrammarConfigError::Parse(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

/// Read and validate a grammar file.
pub fn read_grammar_file(path: &Path) -> Result<GrammarConfig, GrammarConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| GrammarConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_grammar_toml(&content)
}

pub(crate) fn validate(config: &GrammarConfig) -> Result<(), GrammarConfigError> {
    if config.single.is_empty() {
        return Err(GrammarConfigError::Empty);
    }

    check_entries("single", &config.single)?;
    check_entries("multi", &config.multi)?;
    check_entries("reverse", &config.reverse)?;

    for (key, _) in &config.single {
        if key.chars().count() != 1 {
            return Err(GrammarConfigError::LongSingleKey(key.clone()));
        }
    }
    for (key, _) in &config.reverse {
        if key.chars().count() != 1 {
            return Err(GrammarConfigError::LongReverseKey(key.clone()));
        }
    }

    let starters: HashSet<char> = config
        .single
        .iter()
        .filter_map(|(k, _)| k.chars().next())
        .collect();
    let multi_keys: HashSet<&str> = config.multi.iter().map(|(k, _)| k.as_str()).collect();

    for (key, _) in &config.multi {
        if key.chars().count() < 2 {
            return Err(GrammarConfigError::ShortMultiKey(key.clone()));
        }
        // Checked non-empty above.
        let first = key.chars().next().unwrap_or_default();
        if !starters.contains(&first) {
            return Err(GrammarConfigError::MissingStarter {
                key: key.clone(),
                first,
            });
        }
        for variant in case_variants(key) {
            if !multi_keys.contains(variant.as_str()) {
                return Err(GrammarConfigError::MissingCaseVariant {
                    key: key.clone(),
                    variant,
                });
            }
        }
    }

    Ok(())
}

fn check_entries(
    table: &'static str,
    entries: &[(String, String)],
) -> Result<(), GrammarConfigError> {
    let mut seen = HashSet::new();
    for (key, value) in entries {
        if key.is_empty() {
            return Err(GrammarConfigError::EmptyKey { table });
        }
        if value.is_empty() {
            return Err(GrammarConfigError::EmptyValue(key.clone()));
        }
        if !seen.insert(key.as_str()) {
            return Err(GrammarConfigError::DuplicateKey {
                table,
                key: key.clone(),
            });
        }
    }
    Ok(())
}

/// lowercase, Titlecase and UPPERCASE forms of a key.
fn case_variants(key: &str) -> [String; 3] {
    let lower = key.to_lowercase();
    let mut chars = lower.chars();
    let title = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    [lower, title, key.to_uppercase()]
}
