//! UniFFI export layer: bindings for the host application.
//!
//! Each public type here maps to a generated class, record or enum. UniFFI
//! has no `char`, so single characters cross the boundary as strings and
//! only their first character is used.

mod session;
mod types;

pub use session::TranslitSession;
pub use types::{
    TranslitDirection, TranslitEdit, TranslitEditResponse, TranslitError, TranslitRevision,
    TranslitStats,
};

use std::path::Path;

use translit_core::Grammar;

fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}

fn read_config(path: &str) -> Result<String, TranslitError> {
    std::fs::read_to_string(path).map_err(|e| TranslitError::Io {
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
fn transliterate(text: String) -> String {
    translit_core::transliterate(&text)
}

#[uniffi::export]
fn reverse_transliterate(text: String) -> String {
    translit_core::reverse_transliterate(&text)
}

#[uniffi::export]
fn should_transliterate(ch: String) -> bool {
    first_char(&ch).is_some_and(translit_core::should_transliterate)
}

#[uniffi::export]
fn should_reverse_transliterate(ch: String) -> bool {
    first_char(&ch).is_some_and(translit_core::should_reverse_transliterate)
}

#[uniffi::export]
fn get_latin_from_cyrillic(cyrillic: String) -> Option<String> {
    first_char(&cyrillic)
        .and_then(translit_core::get_latin_from_cyrillic)
        .map(String::from)
}

#[uniffi::export]
fn can_form_multi_char(prev_cyrillic: String, new_latin: String) -> bool {
    match (first_char(&prev_cyrillic), first_char(&new_latin)) {
        (Some(prev), Some(new)) => translit_core::can_form_multi_char(prev, new),
        _ => false,
    }
}

#[uniffi::export]
fn try_multi_char_translit(prev_chars: String, new_char: String) -> Option<TranslitRevision> {
    let new_char = first_char(&new_char)?;
    translit_core::try_multi_char_translit(&prev_chars, new_char).map(Into::into)
}

#[uniffi::export]
fn text_stats(text: String) -> TranslitStats {
    translit_core::text_stats(&text).into()
}

#[uniffi::export]
fn grammar_load_config(path: String) -> Result<(), TranslitError> {
    let content = read_config(&path)?;
    Grammar::init_custom(content).map_err(|e| TranslitError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), TranslitError> {
    let content = read_config(&path)?;
    translit_core::settings::init_custom(content)
        .map_err(|e| TranslitError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn grammar_default_config() -> String {
    translit_core::grammar::default_toml().to_string()
}

#[uniffi::export]
fn settings_default_config() -> String {
    translit_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
