//! Token definitions.
//!
//! A [`Token`] is the immutable record produced by one call to
//! [`Lexer::next_token`](crate::Lexer::next_token). Its category is a
//! [`TokenKind`], drawn from a closed set of ten members.

use std::fmt;

/// Lexical category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A maximal run of decimal digits.
    Number,
    /// A maximal run of whitespace characters.
    WhiteSpace,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// Any character the lexer does not recognize.
    Bad,
    /// End of the input line.
    EndOfFile,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenKind; 10] = [
        TokenKind::Number,
        TokenKind::WhiteSpace,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::Bad,
        TokenKind::EndOfFile,
    ];

    /// Returns the human-readable label used for console display.
    ///
    /// # Example
    ///
    /// ```
    /// use arith_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Number.label(), "NumberToken");
    /// assert_eq!(TokenKind::EndOfFile.to_string(), "EndOfFileToken");
    /// ```
    pub const fn label(self) -> &'static str {
        match self {
            TokenKind::Number => "NumberToken",
            TokenKind::WhiteSpace => "WhiteSpaceToken",
            TokenKind::Plus => "PlusToken",
            TokenKind::Minus => "MinusToken",
            TokenKind::Star => "StarToken",
            TokenKind::Slash => "SlashToken",
            TokenKind::OpenParen => "OpenParenthesisToken",
            TokenKind::CloseParen => "CloseParenthesisToken",
            TokenKind::Bad => "BadToken",
            TokenKind::EndOfFile => "EndOfFileToken",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One classified slice of an input line.
///
/// The text is copied out of the source, so a token outlives the lexer
/// that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    position: usize,
    text: String,
    value: Option<i64>,
}

impl Token {
    /// Creates a token. No consistency checks are made between the fields.
    pub fn new(
        kind: TokenKind,
        position: usize,
        text: impl Into<String>,
        value: Option<i64>,
    ) -> Self {
        Self {
            kind,
            position,
            text: text.into(),
            value,
        }
    }

    /// The token's category.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Byte offset recorded for this token.
    ///
    /// Number, WhiteSpace and EndOfFile tokens record where their text
    /// starts. Operator, parenthesis and Bad tokens record the offset just
    /// past the consumed character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The text consumed by this token.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The integer payload.
    ///
    /// Set for Number tokens. WhiteSpace tokens also carry `Some(0)`, which
    /// has no meaning and should not be shown to users.
    pub fn value(&self) -> Option<i64> {
        self.value
    }

    /// Returns true for the end-of-input sentinel.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}
