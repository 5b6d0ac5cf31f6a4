use translit_core::{reverse_transliterate, text_stats, transliterate, TextStats};

use super::read_input;

pub fn convert(text: Option<String>) {
    let input = die!(read_input(text), "Error: {}");
    println!("{}", transliterate(&input));
}

pub fn reverse(text: Option<String>) {
    let input = die!(read_input(text), "Error: {}");
    println!("{}", reverse_transliterate(&input));
}

pub fn stats(text: Option<String>, json: bool) {
    let input = die!(read_input(text), "Error: {}");
    let stats = text_stats(&input);
    if json {
        let out = die!(serde_json::to_string_pretty(&stats), "Error: {}");
        println!("{out}");
    } else {
        print!("{}", format_stats(&stats));
    }
}

fn format_stats(stats: &TextStats) -> String {
    let rows = [
        ("Characters", stats.chars),
        ("Without spaces", stats.chars_no_spaces),
        ("Words", stats.words),
        ("Sentences", stats.sentences),
        ("Paragraphs", stats.paragraphs),
        ("Lines", stats.lines),
    ];
    rows.iter()
        .map(|(label, n)| format!("{:<16}{:>6}\n", format!("{label}:"), n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_table_is_aligned() {
        let out = format_stats(&text_stats("Da. Net!"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Characters:          8");
        assert_eq!(lines[2], "Words:               2");
        assert!(lines.iter().all(|l| l.len() == 22));
    }
}
