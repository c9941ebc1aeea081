//! One-shot lexing of a single line given on the command line.

use std::io::{self, Write};

use arith_lex::tokenize;
use tracing::debug;

use crate::commands::common::{write_tokens, DisplayOptions};
use crate::error::{ArithError, Result};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// The line to lex.
    pub line: String,
    /// Token display settings.
    pub display: DisplayOptions,
}

/// Lexes the line and prints its tokens to standard output.
pub fn run_lex(args: LexArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    lex_line(&mut out, &args)?;
    out.flush()?;
    Ok(())
}

/// Lexes `args.line` and writes the listing to `out`.
pub fn lex_line<W: Write>(out: &mut W, args: &LexArgs) -> Result<()> {
    validate_line(&args.line)?;

    let tokens = tokenize(&args.line);
    debug!(tokens = tokens.len(), "lexed line");
    write_tokens(out, &tokens, &args.display)
}

/// Rejects input spanning more than one line.
fn validate_line(line: &str) -> Result<()> {
    if line.contains('\n') {
        return Err(ArithError::Validation(
            "input must be a single line".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(line: &str) -> Result<String> {
        let args = LexArgs {
            line: line.to_string(),
            ..LexArgs::default()
        };
        let mut out = Vec::new();
        lex_line(&mut out, &args)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_lex_expression() {
        let output = lex("(1 * 2)").unwrap();
        let labels: Vec<_> = output
            .lines()
            .map(|l| l.split(' ').next().unwrap())
            .collect();
        assert_eq!(
            labels,
            vec![
                "OpenParenthesisToken",
                "NumberToken",
                "WhiteSpaceToken",
                "StarToken",
                "WhiteSpaceToken",
                "NumberToken",
                "CloseParenthesisToken",
                "EndOfFileToken",
            ]
        );
    }

    #[test]
    fn test_lex_empty_line() {
        assert_eq!(lex("").unwrap(), "EndOfFileToken\n");
    }

    #[test]
    fn test_minus_prints_empty_text() {
        let output = lex("-").unwrap();
        assert_eq!(output.lines().next(), Some("MinusToken : "));
    }

    #[test]
    fn test_rejects_multiple_lines() {
        let result = lex("1\n2");
        assert!(matches!(result, Err(ArithError::Validation(_))));
    }
}
