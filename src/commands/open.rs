//! Full-screen portfolio

use anyhow::Result;

use folio::preferences::ConfigThemeStore;
use folio::tui::{PortfolioApp, TuiApp};
use folio::Config;

#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    let config = Config::load()?;
    let store = ConfigThemeStore::open_default()?;
    tracing::info!(path = %store.path().display(), "opening portfolio");

    let mut app = PortfolioApp::new(&config, Box::new(store))?;
    app.run()
}
