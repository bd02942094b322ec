//! Theme subcommands handler

use anyhow::Result;

use folio::preferences::{resolve_theme, ConfigThemeStore, ThemeName, ThemeStore};

use super::Output;

/// List every theme, marking the stored one.
pub fn handle_list() -> Result<()> {
    let store = ConfigThemeStore::open_default()?;
    let current = resolve_theme(&store);
    let out = Output::detect();

    for name in ThemeName::ALL {
        let line = format!("{:<14}{}", name.as_str(), name.label());
        if name == current {
            println!("{} {}", out.accent("*"), out.accent(&line));
        } else {
            println!("  {}", out.primary(&line));
        }
    }
    Ok(())
}

pub fn handle_show() -> Result<()> {
    let store = ConfigThemeStore::open_default()?;
    println!("{}", resolve_theme(&store));
    Ok(())
}

pub fn handle_set(name: &str) -> Result<()> {
    let theme: ThemeName = name.parse()?;
    let mut store = ConfigThemeStore::open_default()?;
    store.save(theme.as_str())?;
    tracing::info!(theme = theme.as_str(), "theme changed");

    let out = Output::detect();
    println!("{}", out.success(&format!("Theme set to {}", theme.label())));
    Ok(())
}
