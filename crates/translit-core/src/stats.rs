//! Text statistics shown next to the editor.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub chars: usize,
    pub chars_no_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub lines: usize,
}

/// Count characters, words, sentences, paragraphs and lines of `text`.
pub fn text_stats(text: &str) -> TextStats {
    let trimmed = text.trim();
    TextStats {
        chars: text.chars().count(),
        chars_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        words: trimmed.split_whitespace().count(),
        sentences: trimmed
            .split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .count(),
        paragraphs: count_paragraphs(trimmed),
        lines: if text.is_empty() {
            0
        } else {
            text.split('\n').count()
        },
    }
}

/// Paragraphs are runs of non-blank lines separated by blank ones.
fn count_paragraphs(text: &str) -> usize {
    let mut count = 0;
    let mut in_paragraph = false;
    for line in text.split('\n') {
        let blank = line.trim().is_empty();
        if !blank && !in_paragraph {
            count += 1;
        }
        in_paragraph = !blank;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text() {
        assert_eq!(text_stats(""), TextStats::default());
        let blank = text_stats("  \n ");
        assert_eq!(blank.words, 0);
        assert_eq!(blank.paragraphs, 0);
        assert_eq!(blank.lines, 2);
        assert_eq!(blank.chars, 4);
        assert_eq!(blank.chars_no_spaces, 0);
    }

    #[test]
    fn words_and_chars() {
        let s = text_stats("Привет, мир!");
        assert_eq!(s.chars, 12);
        assert_eq!(s.chars_no_spaces, 11);
        assert_eq!(s.words, 2);
        assert_eq!(s.sentences, 1);
        assert_eq!(s.lines, 1);
        assert_eq!(s.paragraphs, 1);
    }

    #[test]
    fn sentences_split_on_terminators() {
        assert_eq!(text_stats("Да. Нет! Почему?").sentences, 3);
        assert_eq!(text_stats("Ну...   и?!").sentences, 2);
        assert_eq!(text_stats("без точки").sentences, 1);
    }

    #[test]
    fn paragraphs_need_blank_lines() {
        let s = text_stats("один\nдва\n\n  \nтри\n");
        assert_eq!(s.paragraphs, 2);
        assert_eq!(s.lines, 6);
        assert_eq!(text_stats("a\n b").paragraphs, 1);
    }
}
