//! arith - interactive token viewer for arithmetic expressions.
//!
//! This is the main entry point for the arith CLI application. It uses clap
//! for argument parsing and dispatches to the read loop or to one-shot
//! lexing.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::{DisplayOptions, OutputFormat},
    run_init, run_lex, run_repl, InitArgs, LexArgs, ReplArgs,
};
use config::Config;
use error::{ArithError, Result};

/// arith - lex arithmetic expressions and show their tokens
///
/// Without a subcommand an interactive session is started: each line typed
/// is split into tokens until a blank line is entered.
#[derive(Parser, Debug)]
#[command(name = "arith")]
#[command(author = "Arith Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lex arithmetic expressions and show their tokens", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "ARITH_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ARITH_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "ARITH_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands for the arith CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive session (the default)
    ///
    /// Reads one line at a time and prints its tokens. A blank line or end
    /// of input ends the session.
    Repl(ReplCommand),

    /// Lex a single line and print its tokens
    Lex(LexCommand),

    /// Write a configuration file with the default settings
    Init(InitCommand),
}

/// Display flags shared by every subcommand.
#[derive(Args, Debug, Default)]
struct DisplayFlags {
    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Show the recorded position of each token
    #[arg(short, long)]
    positions: bool,

    /// Do not print whitespace tokens
    #[arg(long)]
    hide_whitespace: bool,
}

impl DisplayFlags {
    /// Merge the flags over the configured display settings.
    fn resolve(&self, config: &Config) -> DisplayOptions {
        let mut options = DisplayOptions::from(&config.display);

        if let Some(format) = self.format {
            options.format = format;
        }
        if self.positions {
            options.show_positions = true;
        }
        if self.hide_whitespace {
            options.show_whitespace = false;
        }

        options
    }
}

/// Arguments for the repl subcommand.
#[derive(Parser, Debug, Default)]
struct ReplCommand {
    /// Prompt printed before each line (default: from config)
    #[arg(long)]
    prompt: Option<String>,

    #[command(flatten)]
    display: DisplayFlags,
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// The expression to lex
    #[arg(allow_hyphen_values = true)]
    line: String,

    #[command(flatten)]
    display: DisplayFlags,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write arith.toml into (default: current directory)
    #[arg(long)]
    path: Option<PathBuf>,

    /// Overwrite an existing configuration file
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the arith CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token listings on stdout stay machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ArithError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Option<Commands>, config: Config) -> Result<()> {
    match command.unwrap_or_else(|| Commands::Repl(ReplCommand::default())) {
        Commands::Repl(args) => execute_repl(args, config),
        Commands::Lex(args) => execute_lex(args, config),
        Commands::Init(args) => execute_init(args),
    }
}

/// Execute the repl command.
fn execute_repl(args: ReplCommand, config: Config) -> Result<()> {
    let repl_args = ReplArgs {
        display: args.display.resolve(&config),
        prompt: args.prompt.unwrap_or(config.prompt),
    };
    run_repl(repl_args)
}

/// Execute the lex command.
fn execute_lex(args: LexCommand, config: Config) -> Result<()> {
    let lex_args = LexArgs {
        display: args.display.resolve(&config),
        line: args.line,
    };
    run_lex(lex_args)
}

/// Execute the init command.
fn execute_init(args: InitCommand) -> Result<()> {
    let init_args = InitArgs {
        force: args.force,
        path: args.path,
    };
    let written = run_init(init_args)?;
    println!("Created {}", written.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_command() {
        let cli = Cli::parse_from(["arith"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_repl_with_prompt() {
        let cli = Cli::parse_from(["arith", "repl", "--prompt", "calc> "]);
        if let Some(Commands::Repl(args)) = cli.command {
            assert_eq!(args.prompt, Some("calc> ".to_string()));
        } else {
            panic!("Expected Repl command");
        }
    }

    #[test]
    fn test_cli_parse_lex() {
        let cli = Cli::parse_from(["arith", "lex", "12+3"]);
        if let Some(Commands::Lex(args)) = cli.command {
            assert_eq!(args.line, "12+3");
            assert!(args.display.format.is_none());
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_leading_minus() {
        let cli = Cli::parse_from(["arith", "lex", "-1+2"]);
        if let Some(Commands::Lex(args)) = cli.command {
            assert_eq!(args.line, "-1+2");
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_display_flags() {
        let cli = Cli::parse_from([
            "arith",
            "lex",
            "1 2",
            "--format",
            "json",
            "--positions",
            "--hide-whitespace",
        ]);
        if let Some(Commands::Lex(args)) = cli.command {
            assert_eq!(args.display.format, Some(OutputFormat::Json));
            assert!(args.display.positions);
            assert!(args.display.hide_whitespace);
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "arith",
            "--verbose",
            "--no-color",
            "--config",
            "/tmp/arith.toml",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/arith.toml")));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["arith", "init", "--path", "/tmp/arith", "--force"]);
        if let Some(Commands::Init(args)) = cli.command {
            assert_eq!(args.path, Some(PathBuf::from("/tmp/arith")));
            assert!(args.force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.display.show_whitespace = true;
        config.display.format = OutputFormat::Json;

        let flags = DisplayFlags {
            format: Some(OutputFormat::Text),
            positions: true,
            hide_whitespace: true,
        };
        let options = flags.resolve(&config);

        assert_eq!(options.format, OutputFormat::Text);
        assert!(options.show_positions);
        assert!(!options.show_whitespace);
    }

    #[test]
    fn test_config_used_without_flags() {
        let mut config = Config::default();
        config.display.show_positions = true;

        let options = DisplayFlags::default().resolve(&config);
        assert!(options.show_positions);
        assert_eq!(options.format, OutputFormat::Text);
    }
}
