//! Lexer module.
//!
//! The lexer implementation is split into small, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `number` - Digit runs
//! - `whitespace` - Whitespace runs
//! - `operator` - Operators, parentheses and unrecognized characters

mod core;
mod number;
mod operator;
mod whitespace;

pub use self::core::{tokenize, Lexer};
