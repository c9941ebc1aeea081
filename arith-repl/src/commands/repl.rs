//! Interactive read loop.
//!
//! Prompts for a line, lexes it, prints the tokens and repeats. The loop
//! ends on a blank line or when input runs out.

use std::io::{self, BufRead, Write};

use arith_lex::tokenize;
use arith_util::is_null_or_whitespace;
use tracing::{debug, info};

use crate::commands::common::{write_tokens, DisplayOptions};
use crate::error::Result;

/// Arguments for the repl command.
#[derive(Debug, Clone)]
pub struct ReplArgs {
    /// Prompt printed before each line.
    pub prompt: String,
    /// Token display settings.
    pub display: DisplayOptions,
}

impl Default for ReplArgs {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            display: DisplayOptions::default(),
        }
    }
}

/// Runs the read loop on the process's standard input and output.
pub fn run_repl(args: ReplArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let lines = ReplSession::new(args).run(stdin.lock(), stdout.lock())?;
    info!(lines, "session finished");
    Ok(())
}

/// One interactive session over arbitrary input and output streams.
pub struct ReplSession {
    args: ReplArgs,
}

impl ReplSession {
    /// Create a new session.
    pub fn new(args: ReplArgs) -> Self {
        Self { args }
    }

    /// Runs until a blank line or end of input.
    ///
    /// Returns the number of lines that were lexed.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<usize> {
        let mut lexed = 0;
        let mut buffer = Vec::new();

        loop {
            write!(output, "{}", self.args.prompt)?;
            output.flush()?;

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                debug!("end of input");
                writeln!(output)?;
                return Ok(lexed);
            }

            // Invalid UTF-8 becomes U+FFFD, which the lexer reports as Bad.
            let text = String::from_utf8_lossy(&buffer);
            let line = strip_line_ending(&text);
            if is_null_or_whitespace(line) {
                debug!("blank line, leaving read loop");
                return Ok(lexed);
            }

            let tokens = tokenize(line);
            debug!(line, tokens = tokens.len(), "lexed line");
            write_tokens(&mut output, &tokens, &self.args.display)?;
            lexed += 1;
        }
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
