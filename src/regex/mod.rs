pub mod ast;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod pattern;

pub use error::CompileError;
pub use parser::parse_regex;
pub use pattern::Pattern;
