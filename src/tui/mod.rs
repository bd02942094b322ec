//! TUI (Text User Interface) module
//!
//! The portfolio page rendered with ratatui/crossterm: nav bar, terminal
//! panel, static sections, modal overlays and notifications.

pub mod app;
pub mod portfolio_app;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::{App, TuiApp};
pub use portfolio_app::{Portfolio, PortfolioApp, PortfolioOptions};
pub use theme::Theme;
