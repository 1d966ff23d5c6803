//! Input resolution for the `exec` command.
//!
//! The text to analyse comes from one of:
//! - the positional `TEXT` argument
//! - a file via `--file <path>`
//! - stdin via `--file -`

use std::io::Read;
use std::path::Path;

/// Resolves the text to analyse.
///
/// `--file` takes precedence over the positional argument. A single
/// trailing line break is dropped from file and stdin input; everything
/// else is passed through untouched.
pub fn resolve_text(text: Option<&str>, file: Option<&str>) -> anyhow::Result<String> {
    match (file, text) {
        (Some("-"), _) => read_from_stdin(),
        (Some(path), _) => read_from_file(path),
        (None, Some(text)) => Ok(text.to_string()),
        (None, None) => anyhow::bail!("no input: pass TEXT or --file <path|->"),
    }
}

fn read_from_file(path: &str) -> anyhow::Result<String> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        anyhow::bail!("input file not found: {path}");
    }
    let content = std::fs::read_to_string(file_path)
        .map_err(|e| anyhow::anyhow!("failed to read input file: {e}"))?;
    Ok(strip_line_break(content))
}

fn read_from_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("failed to read stdin: {e}"))?;
    Ok(strip_line_break(buffer))
}

fn strip_line_break(mut s: String) -> String {
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
    fn inline_text_passes_through() {
        let text = resolve_text(Some("  spaced  "), None).expect("resolve");
        assert_eq!(text, "  spaced  ");
    }

    #[test]
    fn file_wins_over_inline() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "from file\n").expect("write");

        let text = resolve_text(Some("inline"), Some(path.to_str().expect("utf8")))
            .expect("resolve");
        assert_eq!(text, "from file");
    }

    #[test]
    fn only_one_line_break_is_dropped() {
        assert_eq!(strip_line_break("a\r\n".into()), "a");
        assert_eq!(strip_line_break("a\n\n".into()), "a\n");
        assert_eq!(strip_line_break("a".into()), "a");
    }

    #[test]
    fn missing_file_is_reported() {
        let err = resolve_text(None, Some("/nonexistent/input.txt")).expect_err("missing");
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn no_input_is_an_error() {
        let err = resolve_text(None, None).expect_err("no input");
        assert!(err.to_string().contains("no input"));
    }
}
