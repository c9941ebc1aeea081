//! Whitespace lexing.
//!
//! Whitespace is not skipped: each maximal run becomes a token so callers
//! decide what to do with it.

use arith_util::{is_space, parse_int_or_zero};

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of whitespace.
    ///
    /// The value is the integer conversion of the run, which is always
    /// `Some(0)`.
    pub(crate) fn lex_whitespace(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.eat_while(is_space);

        let text = self.cursor.slice_from(start);
        let value = parse_int_or_zero(text);

        Token::new(TokenKind::WhiteSpace, start, text, Some(value))
    }
}
