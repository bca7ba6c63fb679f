use std::collections::BTreeSet;

use crate::regex::ast::{ClassType, Quantifier, Sequence, Token, TokenKind};

/// Every position the remaining tokens can stop at. Keeping the whole set
/// (instead of the first hit) is what lets quantifiers and alternation backtrack.
pub type EndPositions = BTreeSet<usize>;

fn matches_token(kind: &TokenKind, c: char) -> bool {
    match kind {
        TokenKind::Dot => c != '\n',
        TokenKind::Literal(l) => c == *l,
        TokenKind::Digit => c.is_ascii_digit(),
        TokenKind::Word => c.is_ascii_alphanumeric() || c == '_',
        TokenKind::Class(members, class_type) => {
            let found = members.contains(&c);
            match class_type {
                ClassType::Positive => found,
                ClassType::Negative => !found,
            }
        }
        TokenKind::Group(_) => false, // groups never consume a single char directly
    }
}

/// Matches `tokens` against `text` starting at `pos` and returns every end position reached.
pub fn match_sequence(tokens: &[Token], pos: usize, text: &[char]) -> EndPositions {
    let Some((token, rest)) = tokens.split_first() else {
        return EndPositions::from([pos]); // Pattern exhausted, we matched!
    };

    match &token.kind {
        TokenKind::Group(alternatives) => {
            match_group(alternatives, token.quantifier, rest, pos, text)
        }
        kind => match_single(kind, token.quantifier, rest, pos, text),
    }
}

fn match_single(
    kind: &TokenKind,
    quantifier: Option<Quantifier>,
    rest: &[Token],
    pos: usize,
    text: &[char],
) -> EndPositions {
    let hit = |at: usize| text.get(at).is_some_and(|&c| matches_token(kind, c));

    match quantifier {
        None => {
            if hit(pos) {
                match_sequence(rest, pos + 1, text)
            } else {
                EndPositions::new()
            }
        }
        Some(Quantifier::OneOrMore) => {
            let max_run = (pos..text.len()).take_while(|&at| hit(at)).count();
            // Longest run first, then give characters back one at a time.
            (1..=max_run)
                .rev()
                .flat_map(|k| match_sequence(rest, pos + k, text))
                .collect()
        }
        Some(Quantifier::ZeroOrOne) => {
            let mut ends = match_sequence(rest, pos, text);
            if hit(pos) {
                ends.extend(match_sequence(rest, pos + 1, text));
            }
            ends
        }
    }
}

fn match_group(
    alternatives: &[Sequence],
    quantifier: Option<Quantifier>,
    rest: &[Token],
    pos: usize,
    text: &[char],
) -> EndPositions {
    let once = match_alternatives(alternatives, pos, text);

    match quantifier {
        None => continue_from(&once, rest, text),
        Some(Quantifier::ZeroOrOne) => {
            let mut ends = match_sequence(rest, pos, text);
            ends.extend(continue_from(&once, rest, text));
            ends
        }
        Some(Quantifier::OneOrMore) => {
            if once.is_empty() {
                return EndPositions::new();
            }
            let reachable = repetition_closure(alternatives, once, text);
            continue_from(&reachable, rest, text)
        }
    }
}

/// Union of the end positions of every branch matched once at `pos`.
fn match_alternatives(alternatives: &[Sequence], pos: usize, text: &[char]) -> EndPositions {
    alternatives
        .iter()
        .flat_map(|alternative| match_sequence(alternative, pos, text))
        .collect()
}

// Greatest position first.
fn continue_from(starts: &EndPositions, rest: &[Token], text: &[char]) -> EndPositions {
    starts
        .iter()
        .rev()
        .flat_map(|&start| match_sequence(rest, start, text))
        .collect()
}

/// Every position reachable after one or more repetitions of the group.
///
/// A repetition landing on a position already seen adds nothing, so branches
/// that match the empty string reach a fixed point instead of looping.
fn repetition_closure(
    alternatives: &[Sequence],
    first: EndPositions,
    text: &[char],
) -> EndPositions {
    let mut frontier: Vec<usize> = first.iter().copied().collect();
    let mut reachable = first;

    while let Some(pos) = frontier.pop() {
        for end in match_alternatives(alternatives, pos, text) {
            if reachable.insert(end) {
                frontier.push(end);
            }
        }
    }
    reachable
}
