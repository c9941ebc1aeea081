//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch.

use arith_util::is_space;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for a single line of arithmetic input.
///
/// Each call to [`Lexer::next_token`] consumes one token's worth of input.
/// Once the line is exhausted every further call returns an EndOfFile
/// token at the same position.
pub struct Lexer<'a> {
    /// Character cursor for line traversal.
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `line`.
    pub fn new(line: &'a str) -> Self {
        Self {
            cursor: Cursor::new(line),
        }
    }

    /// Returns the character under the cursor, or '\0' past the end.
    pub fn peek(&self) -> char {
        self.cursor.current_char()
    }

    /// Returns the current byte position in the line.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the line being scanned.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Returns the next token from the line.
    ///
    /// Digit and whitespace runs are consumed greedily. Every other
    /// character becomes a one-character token, with unrecognized ones
    /// reported as [`TokenKind::Bad`]. This never fails.
    pub fn next_token(&mut self) -> Token {
        if self.cursor.is_at_end() {
            return Token::new(TokenKind::EndOfFile, self.cursor.position(), "\0", None);
        }

        match self.peek() {
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_space(c) => self.lex_whitespace(),
            '+' => self.lex_single(TokenKind::Plus, "+"),
            // Minus records empty text, unlike every other operator.
            '-' => self.lex_single(TokenKind::Minus, ""),
            '*' => self.lex_single(TokenKind::Star, "*"),
            '/' => self.lex_single(TokenKind::Slash, "/"),
            '(' => self.lex_single(TokenKind::OpenParen, "("),
            ')' => self.lex_single(TokenKind::CloseParen, ")"),
            _ => self.lex_bad(),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Lexes `line` to completion.
///
/// The returned vector always ends with exactly one EndOfFile token.
///
/// # Example
///
/// ```
/// use arith_lex::{tokenize, TokenKind};
///
/// let kinds: Vec<_> = tokenize("12+3").iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Number, TokenKind::Plus, TokenKind::Number, TokenKind::EndOfFile]
/// );
/// ```
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(line);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kinds(line: &str) -> Vec<TokenKind> {
        tokenize(line).iter().map(Token::kind).collect()
    }

    #[test]
    fn test_empty_line() {
        let tokens = tokenize("");
        assert_eq!(tokens, vec![Token::new(TokenKind::EndOfFile, 0, "\0", None)]);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let lexer = Lexer::new("7");
        assert_eq!(lexer.peek(), '7');
        assert_eq!(lexer.peek(), '7');
        assert_eq!(lexer.position(), 0);
    }

    #[test]
    fn test_peek_at_end_is_nul() {
        let mut lexer = Lexer::new("+");
        lexer.next_token();
        assert_eq!(lexer.peek(), '\0');
    }

    #[test]
    fn test_number_plus_number() {
        let tokens = tokenize("12+3");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Number, 0, "12", Some(12)),
                // Operators record the offset after the character.
                Token::new(TokenKind::Plus, 3, "+", None),
                Token::new(TokenKind::Number, 3, "3", Some(3)),
                Token::new(TokenKind::EndOfFile, 4, "\0", None),
            ]
        );
    }

    #[test]
    fn test_runs_are_not_split() {
        let tokens = tokenize("12 34");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Number, 0, "12", Some(12)),
                Token::new(TokenKind::WhiteSpace, 2, " ", Some(0)),
                Token::new(TokenKind::Number, 3, "34", Some(34)),
                Token::new(TokenKind::EndOfFile, 5, "\0", None),
            ]
        );
    }

    #[test]
    fn test_parenthesized_product() {
        assert_eq!(
            kinds("(1 * 2)"),
            vec![
                TokenKind::OpenParen,
                TokenKind::Number,
                TokenKind::WhiteSpace,
                TokenKind::Star,
                TokenKind::WhiteSpace,
                TokenKind::Number,
                TokenKind::CloseParen,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = Lexer::new("1");
        assert_eq!(lexer.next_token().kind(), TokenKind::Number);
        for _ in 0..3 {
            let token = lexer.next_token();
            assert_eq!(token.kind(), TokenKind::EndOfFile);
            assert_eq!(token.position(), 1);
        }
    }

    #[test]
    fn test_iterator_excludes_eof() {
        let tokens: Vec<_> = Lexer::new("1-2").collect();
        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| !t.is_eof()));
    }

    #[test]
    fn test_property_input_always_terminates() {
        proptest!(|(input in "\\PC{0,64}")| {
            let mut lexer = Lexer::new(&input);
            let mut steps = 0;
            while !lexer.next_token().is_eof() {
                steps += 1;
                prop_assert!(steps <= input.len());
            }
            let end = lexer.position();
            prop_assert_eq!(end, input.len());
            let again = lexer.next_token();
            prop_assert!(again.is_eof());
            prop_assert_eq!(again.position(), end);
        });
    }

    #[test]
    fn test_property_digit_strings() {
        proptest!(|(input in "[0-9]{1,18}")| {
            let tokens = tokenize(&input);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind(), TokenKind::Number);
            prop_assert_eq!(tokens[0].text(), input.as_str());
            prop_assert_eq!(tokens[0].value(), Some(input.parse::<i64>().unwrap()));
            prop_assert!(tokens[1].is_eof());
        });
    }

    #[test]
    fn test_property_whitespace_strings() {
        proptest!(|(input in "[ \t\n\r\x0B\x0C]{1,32}")| {
            let tokens = tokenize(&input);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind(), TokenKind::WhiteSpace);
            prop_assert_eq!(tokens[0].text(), input.as_str());
            prop_assert!(tokens[1].is_eof());
        });
    }

    #[test]
    fn test_property_text_covers_input() {
        // Concatenating token text rebuilds the line, except for the
        // characters swallowed by Minus tokens.
        proptest!(|(input in "[0-9 +*/()@x-]{0,40}")| {
            let rebuilt: String = Lexer::new(&input).map(|t| t.text().to_string()).collect();
            prop_assert_eq!(rebuilt, input.replace('-', ""));
        });
    }
}
