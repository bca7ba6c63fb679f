use std::collections::BTreeSet;
use std::iter::Peekable;
use std::mem;
use std::str::CharIndices;

use crate::regex::ast::{ClassType, Quantifier, Sequence, Token, TokenKind};
use crate::regex::error::CompileError;

/// Compiles an anchor-free pattern into a single top-level sequence.
///
/// Unparenthesized `|` at the top level is folded into one implicit group so
/// the matcher always receives exactly one sequence.
pub fn parse_regex(pattern: &str) -> Result<Sequence, CompileError> {
    let mut parser = Parser {
        chars: pattern.char_indices().peekable(),
    };
    let mut alternatives = parser.parse_alternatives(None)?;

    if alternatives.len() > 1 {
        Ok(vec![Token::new(TokenKind::Group(alternatives), None)])
    } else {
        Ok(alternatives.pop().unwrap_or_default())
    }
}

struct Parser<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl Parser<'_> {
    /// Parses `|`-separated sequences. `open` is the offset of the `(` that
    /// started this group, or `None` at the top level.
    fn parse_alternatives(&mut self, open: Option<usize>) -> Result<Vec<Sequence>, CompileError> {
        let mut alternatives = Vec::new();
        let mut sequence = Vec::new();

        while let Some((pos, c)) = self.chars.next() {
            let kind = match c {
                ')' if open.is_some() => {
                    alternatives.push(sequence);
                    return Ok(alternatives);
                }
                '|' => {
                    alternatives.push(mem::take(&mut sequence));
                    continue;
                }
                '\\' => match self.chars.next() {
                    Some((_, 'd')) => TokenKind::Digit,
                    Some((_, 'w')) => TokenKind::Word,
                    Some((_, escaped)) => TokenKind::Literal(escaped),
                    None => TokenKind::Literal('\\'),
                },
                '[' => self.parse_class(pos)?,
                '(' => TokenKind::Group(self.parse_alternatives(Some(pos))?),
                '.' => TokenKind::Dot,
                _ => TokenKind::Literal(c),
            };

            let quantifier = self.parse_quantifier();
            sequence.push(Token::new(kind, quantifier));
        }

        match open {
            Some(pos) => Err(CompileError::UnterminatedGroup { pos }),
            None => {
                alternatives.push(sequence);
                Ok(alternatives)
            }
        }
    }

    // No escapes inside brackets; the first ']' always closes.
    fn parse_class(&mut self, open: usize) -> Result<TokenKind, CompileError> {
        let class_type = if self.chars.next_if(|&(_, c)| c == '^').is_some() {
            ClassType::Negative
        } else {
            ClassType::Positive
        };

        let mut members = BTreeSet::new();
        for (_, c) in self.chars.by_ref() {
            if c == ']' {
                return Ok(TokenKind::Class(members, class_type));
            }
            members.insert(c);
        }
        Err(CompileError::UnterminatedClass { pos: open })
    }

    // Only one slot per token: a second '+' or '?' is left for the next atom.
    fn parse_quantifier(&mut self) -> Option<Quantifier> {
        let quantifier = match self.chars.peek().map(|&(_, c)| c) {
            Some('+') => Quantifier::OneOrMore,
            Some('?') => Quantifier::ZeroOrOne,
            _ => return None,
        };
        self.chars.next();
        Some(quantifier)
    }
}
