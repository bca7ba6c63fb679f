use tracing::{debug, trace};

use crate::regex::{CompileError, Pattern};

/// Compiles `pattern` and searches `input` with it.
pub fn matches(input: &str, pattern: &str) -> Result<bool, CompileError> {
    let pattern = Pattern::new(pattern)?;
    Ok(search_input(input, &pattern))
}

/// True if any line of `content` matches.
pub fn search_input(content: &str, pattern: &Pattern) -> bool {
    let lines = split_lines(content);

    if pattern.is_empty() {
        return !pattern.is_anchored() || content.is_empty() || lines.iter().any(|l| l.is_empty());
    }

    // Empty input still gets tested as one empty line.
    let lines = if lines.is_empty() { vec![""] } else { lines };
    for (number, line) in lines.iter().enumerate() {
        if pattern.is_match_line(line) {
            trace!(line = number + 1, "line matched");
            return true;
        }
    }

    // Patterns that can consume a line break get one pass over the whole input.
    if !pattern.is_anchored() {
        debug!("no single line matched, searching whole input");
        return pattern.is_match_line(content);
    }
    false
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits on universal newlines (`\r\n` counts once). A trailing break does
/// not produce a final empty line.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&content[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }

    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}
