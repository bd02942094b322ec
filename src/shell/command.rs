//! Built-in terminal commands.
//!
//! The command set is closed: each command is a variant of [`Command`]
//! and dispatch is an exhaustive `match`. Name lookup is case-insensitive
//! and exact (no prefix or fuzzy matching).

use super::clock::Clock;
use super::error::ShellError;

/// Static listing returned by `help`.
pub const HELP_TEXT: &str =
    "Available commands: help, whoami, skills, contact, clear, date, echo [text], neofetch";

/// Identity line returned by `whoami`.
pub const WHOAMI_TEXT: &str = "Software Engineer @ Swimage | Full\u{2011}Stack Developer";

/// Skill summary returned by `skills`.
pub const SKILLS_TEXT: &str = "\
Frontend: React, Vue, TypeScript
Backend: Node.js, Python, FastAPI
DB: PostgreSQL, MS SQL
Tools: Git, Docker, AWS, VS Code";

/// Contact identifiers returned by `contact`.
pub const CONTACT_TEXT: &str = "\
\u{1f4e7} lukaskanopka@icloud.com
\u{1f419} github.com/LukasKanopka
\u{1f4bc} linkedin.com/in/laurynaskanopka
\u{1f4ac} Always open to interesting opportunities!";

/// Returned by `echo` when called without arguments.
pub const ECHO_USAGE: &str = "Usage: echo [text]";

/// Format used by `date`, modelled on a browser locale string.
pub const DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

const NEOFETCH_LOGO: &str = "    \u{2588}\u{2588}\u{2557}     \u{2588}\u{2588}\u{2557}   \u{2588}\u{2588}\u{2557}\u{2588}\u{2588}\u{2557}  \u{2588}\u{2588}\u{2557} \u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2557} \u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2557}
    \u{2588}\u{2588}\u{2551}     \u{2588}\u{2588}\u{2551}   \u{2588}\u{2588}\u{2551}\u{2588}\u{2588}\u{2551} \u{2588}\u{2588}\u{2554}\u{255d}\u{2588}\u{2588}\u{2554}\u{2550}\u{2550}\u{2588}\u{2588}\u{2557}\u{2588}\u{2588}\u{2554}\u{2550}\u{2550}\u{2550}\u{2550}\u{255d}
    \u{2588}\u{2588}\u{2551}     \u{2588}\u{2588}\u{2551}   \u{2588}\u{2588}\u{2551}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2554}\u{255d} \u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2551}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2557}
    \u{2588}\u{2588}\u{2551}     \u{2588}\u{2588}\u{2551}   \u{2588}\u{2588}\u{2551}\u{2588}\u{2588}\u{2554}\u{2550}\u{2588}\u{2588}\u{2557} \u{2588}\u{2588}\u{2554}\u{2550}\u{2550}\u{2588}\u{2588}\u{2551}\u{255a}\u{2550}\u{2550}\u{2550}\u{2550}\u{2588}\u{2588}\u{2551}
    \u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2557}\u{255a}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2554}\u{255d}\u{2588}\u{2588}\u{2551}  \u{2588}\u{2588}\u{2557}\u{2588}\u{2588}\u{2551}  \u{2588}\u{2588}\u{2551}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2551}
    \u{255a}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{255d} \u{255a}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{255d} \u{255a}\u{2550}\u{255d}  \u{255a}\u{2550}\u{255d}\u{255a}\u{2550}\u{255d}  \u{255a}\u{2550}\u{255d}\u{255a}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{255d}";

/// A built-in terminal command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    Whoami,
    Skills,
    Contact,
    Clear,
    Date,
    Echo,
    Neofetch,
}

/// What a command asks the widget to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Append the text as an output line (skipped when empty)
    Text(String),
    /// Remove every line except the input line
    ClearScreen,
}

impl Command {
    /// All commands in listing order.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Whoami,
        Command::Skills,
        Command::Contact,
        Command::Clear,
        Command::Date,
        Command::Echo,
        Command::Neofetch,
    ];

    /// The lowercase name the command is invoked by.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Whoami => "whoami",
            Command::Skills => "skills",
            Command::Contact => "contact",
            Command::Clear => "clear",
            Command::Date => "date",
            Command::Echo => "echo",
            Command::Neofetch => "neofetch",
        }
    }

    /// Resolve a command name, ignoring case.
    pub fn lookup(name: &str) -> Result<Command, ShellError> {
        let folded = name.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|cmd| cmd.name() == folded)
            .ok_or(ShellError::UnrecognizedCommand { name: folded })
    }

    /// Execute the command. Every command is total over its arguments.
    pub fn run(&self, args: &[&str], clock: &dyn Clock) -> Reply {
        match self {
            Command::Help => Reply::Text(HELP_TEXT.to_string()),
            Command::Whoami => Reply::Text(WHOAMI_TEXT.to_string()),
            Command::Skills => Reply::Text(SKILLS_TEXT.to_string()),
            Command::Contact => Reply::Text(CONTACT_TEXT.to_string()),
            Command::Clear => Reply::ClearScreen,
            Command::Date => Reply::Text(clock.now().format(DATE_FORMAT).to_string()),
            Command::Echo => Reply::Text(echo(args)),
            Command::Neofetch => Reply::Text(neofetch(clock.uptime().as_secs())),
        }
    }
}

/// Join arguments with single spaces, or return the usage hint.
pub fn echo(args: &[&str]) -> String {
    if args.is_empty() {
        ECHO_USAGE.to_string()
    } else {
        args.join(" ")
    }
}

/// Render the neofetch banner for the given uptime in whole seconds.
pub fn neofetch(uptime_secs: u64) -> String {
    format!(
        "{NEOFETCH_LOGO}

OS: Portfolio v2025.09.15
Host: Lukas Kanopka's Mac Mini
Kernel: 24.5.0
Uptime: {uptime_secs} seconds
Shell: PortfolioCLI v 1.2.1
Resolution: 720x360
CPU: Apple M4
Memory: 2485MiB / 16384MiB"
    )
}

/// A tokenised line of input.
///
/// Tokens are split on any run of whitespace, so repeated spaces
/// between arguments collapse to one when `echo` rejoins them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    /// First token, lowercased
    pub name: String,
    /// Remaining tokens
    pub args: Vec<&'a str>,
}

impl<'a> Invocation<'a> {
    /// Tokenise raw input. Returns `None` for blank input.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let mut tokens = raw.split_whitespace();
        let name = tokens.next()?.to_lowercase();
        Some(Self {
            name,
            args: tokens.collect(),
        })
    }
}
