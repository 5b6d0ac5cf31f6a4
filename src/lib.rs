//! UniFFI library for host applications: transliteration, the editing
//! session and configuration loading, backed by `translit-core` and
//! `translit-session`.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;
