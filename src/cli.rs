//! Command-line definitions.
//!
//! Kept in the library so the man page generator can reuse them.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

const LONG_ABOUT: &str = "\
A terminal portfolio: a simulated shell with a scripted greeting,
seven color themes, section navigation and a contact form.

Run without a command to open the full-screen page.";

const AFTER_HELP: &str = "\
Examples:
  folio                         Open the portfolio
  folio run whoami skills       Run shell commands without the TUI
  echo neofetch | folio run     Read command lines from stdin
  folio theme set synthwave     Change the stored theme";

#[derive(Debug, Parser)]
#[command(name = "folio", version = crate::VERSION, about = "Terminal portfolio with a simulated shell")]
#[command(long_about = LONG_ABOUT, after_help = AFTER_HELP)]
pub struct Cli {
    /// Write diagnostic logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the full-screen portfolio (default)
    Open,

    /// Run command lines through the simulated shell and print the result
    #[command(long_about = "\
Run command lines through a fresh terminal and print every resulting
row: the echoed prompt, then the command's output or error.

With no LINE arguments, lines are read from stdin. Unknown commands
print an error row but still exit with status 0.")]
    Run {
        /// Command lines to run, in order
        #[arg(value_name = "LINE")]
        lines: Vec<String>,

        /// Print rows as a JSON array of {kind, text}
        #[arg(long)]
        json: bool,
    },

    /// Show or change the color theme
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Validate a contact message the way the page form does
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommands {
    /// List available themes
    List,
    /// Show the stored theme
    Show,
    /// Store a new theme
    Set {
        /// Theme name (dark, light, yellow-light, synthwave, miami, arcade, neon)
        name: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Add missing fields to the config file
    Migrate {
        /// Apply without asking
        #[arg(short, long)]
        yes: bool,
    },
}
