//! folio - terminal portfolio
//!
//! Entry point: parses the command line and dispatches to the
//! subcommand handlers in `commands`.

mod commands;

use anyhow::Result;
use clap::Parser;

use folio::cli::{Cli, Commands, ConfigCommands, ThemeCommands};
use folio::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_file.as_deref()) {
        eprintln!("Warning: logging disabled: {:#}", err);
    }

    match cli.command {
        None | Some(Commands::Open) => commands::open::handle(),
        Some(Commands::Run { lines, json }) => commands::run::handle(lines, json),
        Some(Commands::Theme(command)) => match command {
            ThemeCommands::List => commands::theme::handle_list(),
            ThemeCommands::Show => commands::theme::handle_show(),
            ThemeCommands::Set { name } => commands::theme::handle_set(&name),
        },
        Some(Commands::Contact {
            name,
            email,
            message,
        }) => commands::contact::handle(name, email, message),
        Some(Commands::Config(command)) => match command {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(yes),
        },
        Some(Commands::Completions { shell }) => {
            commands::completions::handle(shell);
            Ok(())
        }
    }
}
