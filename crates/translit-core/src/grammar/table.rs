/// Default grammar, embedded at compile time (validated by `build.rs`).
pub const DEFAULT_TOML: &str = include_str!("default_grammar.toml");
