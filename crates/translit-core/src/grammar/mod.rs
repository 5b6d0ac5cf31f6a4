//! Transliteration grammar: the Latin→Cyrillic tables plus the read-only
//! indices derived from them.
//!
//! A `Grammar` is built once from a [`GrammarConfig`] and never mutated.
//! The process-wide instance is reached through [`Grammar::global`].

mod config;
mod table;

pub use config::{parse_grammar_toml, read_grammar_file, GrammarConfig, GrammarConfigError};
pub use table::DEFAULT_TOML;

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Grammar> = OnceLock::new();

/// Returns the embedded default grammar TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// One multi-character rule, e.g. `shch` → `щ`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MultiEntry {
    pub(crate) key: String,
    pub(crate) value: String,
}

pub struct Grammar {
    /// Multi entries in match priority: key length descending, then declaration order.
    pub(crate) multi: Vec<MultiEntry>,
    /// Exact key → position in `multi`.
    pub(crate) multi_index: HashMap<String, usize>,
    /// Lowercased key → positions in `multi` of all its case variants.
    pub(crate) case_variants: HashMap<String, Vec<usize>>,
    pub(crate) single: HashMap<char, String>,
    pub(crate) reverse_single: HashMap<char, char>,
    pub(crate) reverse_multi: HashMap<char, String>,
    pub(crate) continuation: HashMap<char, Vec<char>>,
    pub(crate) direct: HashMap<char, String>,
}

impl Grammar {
    /// Set custom TOML before first `global()` call. Fails with
    /// `AlreadyInitialized` once the global grammar has been built.
    pub fn init_custom(toml_content: String) -> Result<(), GrammarConfigError> {
        // Validate eagerly
        parse_grammar_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(GrammarConfigError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| GrammarConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Grammar {
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let config = parse_grammar_toml(toml_str).expect("grammar TOML must be valid");
            Grammar::build(&config)
        })
    }

    /// Build a grammar from an arbitrary config, validating it first.
    pub fn from_config(config: &GrammarConfig) -> Result<Grammar, GrammarConfigError> {
        config::validate(config)?;
        Ok(Grammar::build(config))
    }

    fn build(config: &GrammarConfig) -> Grammar {
        let mut multi: Vec<MultiEntry> = config
            .multi
            .iter()
            .map(|(key, value)| MultiEntry {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();
        // Stable: equal lengths keep declaration order.
        multi.sort_by_key(|e| std::cmp::Reverse(e.key.chars().count()));

        let mut multi_index = HashMap::with_capacity(multi.len());
        let mut case_variants: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, entry) in multi.iter().enumerate() {
            multi_index.insert(entry.key.clone(), i);
            case_variants
                .entry(entry.key.to_lowercase())
                .or_default()
                .push(i);
        }

        let mut single = HashMap::with_capacity(config.single.len());
        let mut reverse_single = HashMap::new();
        for (latin, cyrillic) in &config.single {
            let Some(l) = single_char(latin) else {
                continue;
            };
            single.insert(l, cyrillic.clone());
            if let Some(c) = single_char(cyrillic) {
                // Later entries override earlier ones (w wins over v for в).
                reverse_single.insert(c, l);
            }
        }

        // Keys keep their case, so Ш maps back to Sh rather than sh.
        let mut reverse_multi: HashMap<char, String> = HashMap::new();
        for entry in &multi {
            let Some(c) = single_char(&entry.value) else {
                continue;
            };
            let len = entry.key.chars().count();
            match reverse_multi.get(&c) {
                Some(existing) if existing.chars().count() <= len => {}
                _ => {
                    reverse_multi.insert(c, entry.key.clone());
                }
            }
        }

        let continuation = build_continuation(&config.multi, &single);

        let direct = config
            .reverse
            .iter()
            .filter_map(|(cyrillic, latin)| single_char(cyrillic).map(|c| (c, latin.clone())))
            .collect();

        debug!(
            multi = multi.len(),
            single = single.len(),
            reverse_single = reverse_single.len(),
            reverse_multi = reverse_multi.len(),
            "grammar built"
        );

        Grammar {
            multi,
            multi_index,
            case_variants,
            single,
            reverse_single,
            reverse_multi,
            continuation,
            direct,
        }
    }

    /// Longest multi key, in characters.
    pub fn max_key_len(&self) -> usize {
        self.multi
            .first()
            .map(|e| e.key.chars().count())
            .unwrap_or(1)
    }

    /// Latin source of a Cyrillic character produced by a single entry.
    pub fn latin_from_cyrillic(&self, cyrillic: char) -> Option<char> {
        self.reverse_single.get(&cyrillic).copied()
    }

    /// Shortest multi key producing `cyrillic`, if any.
    pub fn multi_latin_from_cyrillic(&self, cyrillic: char) -> Option<&str> {
        self.reverse_multi.get(&cyrillic).map(|s| s.as_str())
    }

    /// Whether `new_latin` can follow the committed `prev_cyrillic` to
    /// complete a multi entry.
    pub fn can_form_multi_char(&self, prev_cyrillic: char, new_latin: char) -> bool {
        self.continuation.get(&prev_cyrillic).is_some_and(|seconds| {
            seconds.contains(&new_latin)
                || new_latin
                    .to_lowercase()
                    .all(|lower| seconds.contains(&lower))
        })
    }

    /// Pick the case variant a case-insensitive match resolves to.
    ///
    /// An exact key wins. Otherwise the first declared variant whose leading
    /// character has the same case as `segment`'s, falling back to `matched`.
    pub(crate) fn resolve_variant(&self, segment: &str, matched: usize) -> usize {
        if let Some(&i) = self.multi_index.get(segment) {
            return i;
        }
        let upper = starts_uppercase(segment);
        self.case_variants
            .get(&segment.to_lowercase())
            .and_then(|ids| {
                ids.iter()
                    .copied()
                    .find(|&i| starts_uppercase(&self.multi[i].key) == upper)
            })
            .unwrap_or(matched)
    }
}

/// Continuation index: committed form of a multi key's first character →
/// second characters that extend it.
fn build_continuation(
    multi: &[(String, String)],
    single: &HashMap<char, String>,
) -> HashMap<char, Vec<char>> {
    let mut continuation: HashMap<char, Vec<char>> = HashMap::new();
    for (key, _) in multi {
        let mut chars = key.chars();
        let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
            continue;
        };
        let Some(first_cyrillic) = single.get(&first).and_then(|c| single_char(c)) else {
            // Starter expands to several characters (e.g. x → кс); never committed as one.
            continue;
        };
        let seconds = continuation.entry(first_cyrillic).or_default();
        if !seconds.contains(&second) {
            seconds.push(second);
        }
    }
    continuation
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}
