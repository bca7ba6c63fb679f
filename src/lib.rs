//! A small backtracking regular-expression engine with a grep-style driver.

pub mod regex;
pub mod search;

pub use regex::{CompileError, Pattern};
pub use search::{matches, search_input};
