//! Operator, parenthesis and unrecognized-character lexing.
//!
//! All of these consume exactly one character. The recorded position is the
//! cursor after that character, one past where the character sits.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes one character and returns a token of `kind` with fixed text.
    pub(crate) fn lex_single(&mut self, kind: TokenKind, text: &'static str) -> Token {
        self.cursor.advance();
        Token::new(kind, self.cursor.position(), text, None)
    }

    /// Consumes one unrecognized character and returns it as a Bad token.
    pub(crate) fn lex_bad(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        let text = self.cursor.slice_from(start);
        Token::new(TokenKind::Bad, self.cursor.position(), text, None)
    }
}
