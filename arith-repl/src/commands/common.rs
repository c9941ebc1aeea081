//! Token display shared by every command.
//!
//! The lexer hands back raw tokens; this module decides how they look on
//! the console and surfaces Bad tokens as warnings.

use std::io::Write;

use arith_lex::{Token, TokenKind};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::DisplayConfig;
use crate::error::Result;

// ============================================================================
// Output Format
// ============================================================================

/// Supported token listing formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per token
    #[default]
    Text,
    /// One JSON array per input line
    Json,
}

/// Effective display settings after merging config and command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Listing format.
    pub format: OutputFormat,
    /// Append recorded positions in text output.
    pub show_positions: bool,
    /// Print WhiteSpace tokens.
    pub show_whitespace: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from(&DisplayConfig::default())
    }
}

impl From<&DisplayConfig> for DisplayOptions {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            format: config.format,
            show_positions: config.show_positions,
            show_whitespace: config.show_whitespace,
        }
    }
}

impl DisplayOptions {
    fn shows(&self, token: &Token) -> bool {
        self.show_whitespace || token.kind() != TokenKind::WhiteSpace
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// JSON view of a token.
///
/// `value` is only filled in for Number tokens; the zero carried by
/// WhiteSpace tokens is dropped here.
#[derive(Debug, Serialize)]
pub struct TokenRecord<'t> {
    /// Display label of the token kind.
    pub kind: &'static str,
    /// Recorded position.
    pub position: usize,
    /// Consumed text.
    pub text: &'t str,
    /// Integer value of Number tokens.
    pub value: Option<i64>,
}

impl<'t> From<&'t Token> for TokenRecord<'t> {
    fn from(token: &'t Token) -> Self {
        Self {
            kind: token.kind().label(),
            position: token.position(),
            text: token.text(),
            value: number_value(token),
        }
    }
}

fn number_value(token: &Token) -> Option<i64> {
    match token.kind() {
        TokenKind::Number => token.value(),
        _ => None,
    }
}

/// Renders one token as a line of text.
///
/// ```text
/// NumberToken : 12 = 12
/// PlusToken : +
/// EndOfFileToken
/// ```
pub fn render_text(token: &Token, show_positions: bool) -> String {
    let mut line = token.kind().label().to_string();

    if !token.is_eof() {
        line.push_str(" : ");
        line.extend(token.text().chars().flat_map(char::escape_debug));
    }
    if let Some(value) = number_value(token) {
        line.push_str(&format!(" = {}", value));
    }
    if show_positions {
        line.push_str(&format!(" @{}", token.position()));
    }

    line
}

/// Writes a whole token sequence in the requested format.
pub fn write_tokens<W: Write>(
    out: &mut W,
    tokens: &[Token],
    options: &DisplayOptions,
) -> Result<()> {
    report_bad_tokens(tokens);

    match options.format {
        OutputFormat::Text => {
            for token in tokens.iter().filter(|t| options.shows(t)) {
                writeln!(out, "{}", render_text(token, options.show_positions))?;
            }
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens
                .iter()
                .filter(|t| options.shows(t))
                .map(TokenRecord::from)
                .collect();
            serde_json::to_writer(&mut *out, &records)?;
            writeln!(out)?;
        },
    }

    Ok(())
}

/// Emits a warning for every Bad token.
///
/// Bad tokens record the offset past their character, so the reported
/// offset steps back over the consumed text.
pub fn report_bad_tokens(tokens: &[Token]) {
    for token in tokens.iter().filter(|t| t.kind() == TokenKind::Bad) {
        let offset = token.position().saturating_sub(token.text().len());
        warn!(offset, "unrecognized character '{}'", token.text().escape_debug());
    }
}
