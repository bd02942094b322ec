//! Reusable UI components for the portfolio screen.

pub mod nav_bar;
pub mod page;
pub mod terminal_view;

pub use nav_bar::{render_nav_bar, render_nav_menu, NARROW_WIDTH};
pub use page::{section_height, section_lines};
pub use terminal_view::{render_terminal, TerminalView};
