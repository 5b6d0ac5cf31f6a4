use crate::grammar::Grammar;

/// Batch Cyrillic→Latin transliteration with the global grammar.
pub fn reverse_transliterate(text: &str) -> String {
    Grammar::global().reverse_transliterate(text)
}

/// Latin single-character source of a committed Cyrillic character.
pub fn get_latin_from_cyrillic(cyrillic: char) -> Option<char> {
    Grammar::global().latin_from_cyrillic(cyrillic)
}

impl Grammar {
    /// One-pass substitution through the direct Cyrillic→Latin table.
    pub fn reverse_transliterate(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        for ch in text.chars() {
            match self.direct.get(&ch) {
                Some(latin) => result.push_str(latin),
                None => result.push(ch),
            }
        }
        result
    }
}
