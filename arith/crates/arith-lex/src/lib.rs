//! arith-lex - Lexical Analyzer for arithmetic expressions
//!
//! This crate turns one line of text into a sequence of classified tokens:
//! numbers, the four arithmetic operators, parentheses, whitespace runs,
//! unrecognized characters and a final end-of-input marker.
//!
//! # Example Usage
//!
//! ```
//! use arith_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("12+3");
//!
//! let number = lexer.next_token();
//! assert_eq!(number.kind(), TokenKind::Number);
//! assert_eq!(number.value(), Some(12));
//!
//! // Or iterate up to (but not including) the end-of-input token
//! let rest: Vec<_> = lexer.map(|t| t.kind()).collect();
//! assert_eq!(rest, [TokenKind::Plus, TokenKind::Number]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for line traversal
//!
//! # Token Categories
//!
//! - **Number**: maximal run of `0`-`9`
//! - **WhiteSpace**: maximal run of space, `\t`, `\n`, `\v`, `\f`, `\r`
//! - **Operators**: `+`, `-`, `*`, `/`
//! - **Grouping**: `(`, `)`
//! - **Bad**: any other single character
//! - **EndOfFile**: end of the line, returned forever once reached
//!
//! # Positions
//!
//! Number and WhiteSpace tokens record the offset where their text starts.
//! Operator, parenthesis and Bad tokens record the offset just past their
//! character, and the Minus token carries empty text. Both quirks are part
//! of the token stream's observable format.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
