use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassType {
    Positive, // [abc]
    Negative, // [^abc]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    OneOrMore, // +
    ZeroOrOne, // ?
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Literal(char),
    Digit,
    Word,
    Dot,
    Class(BTreeSet<char>, ClassType),
    /// Alternation branches; always at least one, possibly empty.
    Group(Vec<Sequence>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub quantifier: Option<Quantifier>,
}

/// One alternation branch, matched left to right.
pub type Sequence = Vec<Token>;

impl Token {
    pub fn new(kind: TokenKind, quantifier: Option<Quantifier>) -> Self {
        Self { kind, quantifier }
    }
}
