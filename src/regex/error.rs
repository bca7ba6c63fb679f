/// Raised while compiling a pattern. Matching itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A `[` with no closing `]`.
    #[error("unterminated character class opened at offset {pos}")]
    UnterminatedClass { pos: usize },

    /// A `(` with no closing `)`.
    #[error("unterminated group opened at offset {pos}, expected ')'")]
    UnterminatedGroup { pos: usize },
}
