/// Split raw source text into logical task lines.
///
/// Blank lines and lines whose first non-blank character is `#` are skipped. A line ending
/// with `\` continues on the next physical line; the pieces are joined with one space and
/// the reported line number is the first physical line (1-based).
pub fn logical_lines(text: &str) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (idx, raw) in text.lines().enumerate() {
        let number = idx + 1;

        if pending.is_none() {
            let trimmed = raw.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
        }

        let (body, continues) = match raw.trim_end().strip_suffix('\\') {
            Some(body) => (body, true),
            None => (raw, false),
        };

        let (start, mut line) = pending.take().unwrap_or((number, String::new()));
        if !line.is_empty() {
            line.push(' ');
            line.push_str(body.trim_start());
        } else {
            line.push_str(body);
        }

        if continues {
            pending = Some((start, line));
        } else {
            out.push((start, line));
        }
    }

    if let Some(last) = pending {
        out.push(last);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "# header\n\n  # indented comment\nA: first\n   \nB: second\n";
        let lines = logical_lines(text);
        assert_eq!(
            lines,
            vec![(4, "A: first".to_string()), (6, "B: second".to_string())]
        );
    }

    #[test]
    fn joins_continuation_lines() {
        let text = "A: long \\\n   description \\\n  deps:B\nB: other";
        let lines = logical_lines(text);
        assert_eq!(
            lines,
            vec![
                (1, "A: long  description  deps:B".to_string()),
                (4, "B: other".to_string()),
            ]
        );
    }

    #[test]
    fn trailing_continuation_is_kept() {
        let lines = logical_lines("A: dangling \\");
        assert_eq!(lines, vec![(1, "A: dangling ".to_string())]);
    }
}
