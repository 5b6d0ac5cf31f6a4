use std::io::{self, Read};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod convert_ops;
pub mod type_ops;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("reading stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("{path}: {source}")]
    File { path: String, source: io::Error },
}

/// The text argument when given, otherwise all of stdin minus one trailing newline.
pub fn read_input(text: Option<String>) -> Result<String, InputError> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(InputError::Stdin)?;
    Ok(strip_newline(buf))
}

pub fn read_file(path: &str) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::File {
        path: path.to_string(),
        source,
    })
}

fn strip_newline(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_trailing_newline() {
        assert_eq!(strip_newline("privet\n".into()), "privet");
        assert_eq!(strip_newline("privet\r\n".into()), "privet");
        assert_eq!(strip_newline("a\n\n".into()), "a\n");
        assert_eq!(strip_newline("a".into()), "a");
    }

    #[test]
    fn argument_wins_over_stdin() {
        assert_eq!(read_input(Some("da".into())).unwrap(), "da");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_file("/nonexistent/grammar.toml").unwrap_err();
        assert!(err.to_string().starts_with("/nonexistent/grammar.toml: "));
    }
}
