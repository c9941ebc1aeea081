//! Number literal lexing.

use arith_util::parse_int_or_zero;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of decimal digits.
    ///
    /// Only base-10 digits are recognized; there are no prefixes, signs,
    /// separators or fractions. Runs too large for an `i64` saturate.
    pub(crate) fn lex_number(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.eat_while(|c| c.is_ascii_digit());

        let text = self.cursor.slice_from(start);
        let value = parse_int_or_zero(text);

        Token::new(TokenKind::Number, start, text, Some(value))
    }
}
