use crate::grammar::Grammar;

/// Batch Latin→Cyrillic transliteration with the global grammar.
pub fn transliterate(text: &str) -> String {
    Grammar::global().transliterate(text)
}

impl Grammar {
    /// Longest-match-first transliteration of `text`.
    ///
    /// Multi keys match case-sensitively at each position; otherwise the
    /// single table is consulted and unmapped characters pass through.
    pub fn transliterate(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len() * 2);
        let mut i = 0;

        while i < text.len() {
            let rest = &text[i..];

            if let Some(entry) = self.multi.iter().find(|e| rest.starts_with(e.key.as_str())) {
                result.push_str(&entry.value);
                i += entry.key.len();
                continue;
            }

            let Some(ch) = rest.chars().next() else {
                break;
            };
            match self.single.get(&ch) {
                Some(cyrillic) => result.push_str(cyrillic),
                None => result.push(ch),
            }
            i += ch.len_utf8();
        }

        result
    }
}
