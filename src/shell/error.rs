//! Terminal shell errors.

/// Errors produced while resolving submitted input.
///
/// These are rendered as error lines inside the terminal and never
/// escape the widget.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error("Command not found: {name}. Type 'help' for available commands.")]
    UnrecognizedCommand { name: String },
}
