//! Command modules for the arith CLI.
//!
//! Each subcommand lives in its own file; token display shared between them
//! lives in `common`.

pub mod common;

pub mod init;
pub mod lex;
pub mod repl;

// Re-export command types and functions
pub use init::{run_init, InitArgs};
pub use lex::{run_lex, LexArgs};
pub use repl::{run_repl, ReplArgs};
