use tracing::debug;

use crate::regex::ast::Sequence;
use crate::regex::error::CompileError;
use crate::regex::matcher::match_sequence;
use crate::regex::parser::parse_regex;

/// A compiled pattern together with its `^` / `$` anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    sequence: Sequence,
    anchored_start: bool,
    anchored_end: bool,
}

impl Pattern {
    /// Strips the anchors and compiles what is left.
    ///
    /// `^` is only recognised as the first char and `$` only as the last char
    /// of what remains; both are stripped before compiling, so `\$` at the end
    /// still counts as an anchor.
    pub fn new(pattern: &str) -> Result<Self, CompileError> {
        let (anchored_start, body) = match pattern.strip_prefix('^') {
            Some(body) => (true, body),
            None => (false, pattern),
        };
        let (anchored_end, body) = match body.strip_suffix('$') {
            Some(body) => (true, body),
            None => (false, body),
        };

        let sequence = parse_regex(body)?;
        debug!(
            pattern,
            tokens = sequence.len(),
            anchored_start,
            anchored_end,
            "compiled pattern"
        );

        Ok(Self {
            sequence,
            anchored_start,
            anchored_end,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn is_anchored(&self) -> bool {
        self.anchored_start || self.anchored_end
    }

    /// Whether `line` contains a match, honouring the anchors.
    pub fn is_match_line(&self, line: &str) -> bool {
        let text: Vec<char> = line.chars().collect();
        let len = text.len();

        let mut starts = if self.anchored_start { 0..=0 } else { 0..=len };
        starts.any(|start| {
            let ends = match_sequence(&self.sequence, start, &text);
            if self.anchored_end {
                ends.contains(&len)
            } else {
                !ends.is_empty()
            }
        })
    }
}
