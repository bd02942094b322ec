//! Theme preference storage.
//!
//! The preference is a single string (`theme.name` in the config file),
//! read once at startup and written whenever the user picks a theme.
//! Absent or unrecognized values fall back to [`ThemeName::Dark`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use toml_edit::{value, DocumentMut};

use crate::config::Config;

/// Errors for theme names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("Unknown theme '{0}'. Available themes: dark, light, yellow-light, synthwave, miami, arcade, neon")]
    Unknown(String),
}

/// The themes a visitor can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
    YellowLight,
    Synthwave,
    Miami,
    Arcade,
    Neon,
}

impl ThemeName {
    /// All themes in picker order.
    pub const ALL: [ThemeName; 7] = [
        ThemeName::Dark,
        ThemeName::Light,
        ThemeName::YellowLight,
        ThemeName::Synthwave,
        ThemeName::Miami,
        ThemeName::Arcade,
        ThemeName::Neon,
    ];

    /// Key used in storage and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Dark => "dark",
            ThemeName::Light => "light",
            ThemeName::YellowLight => "yellow-light",
            ThemeName::Synthwave => "synthwave",
            ThemeName::Miami => "miami",
            ThemeName::Arcade => "arcade",
            ThemeName::Neon => "neon",
        }
    }

    /// Human-readable label for pickers.
    pub fn label(&self) -> &'static str {
        match self {
            ThemeName::Dark => "Dark",
            ThemeName::Light => "Light",
            ThemeName::YellowLight => "Yellow Light",
            ThemeName::Synthwave => "Synthwave",
            ThemeName::Miami => "Miami",
            ThemeName::Arcade => "Arcade",
            ThemeName::Neon => "Neon",
        }
    }

    /// Light themes need dark text on their picker entries.
    pub fn is_light(&self) -> bool {
        matches!(self, ThemeName::Light | ThemeName::YellowLight)
    }

    /// Position in [`ThemeName::ALL`].
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| ThemeError::Unknown(s.to_string()))
    }
}

/// Persistent storage for the theme preference.
pub trait ThemeStore {
    /// The stored value, if any.
    fn load(&self) -> Result<Option<String>>;

    /// Persist a new value.
    fn save(&mut self, name: &str) -> Result<()>;
}

/// Stores the preference as `theme.name` in the config file.
///
/// Writes go through `toml_edit` so the rest of the file is untouched.
#[derive(Debug, Clone)]
pub struct ConfigThemeStore {
    path: PathBuf,
}

impl ConfigThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by the default config location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Config::config_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<DocumentMut> {
        if !self.path.exists() {
            return Ok(DocumentMut::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        content
            .parse()
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }
}

impl ThemeStore for ConfigThemeStore {
    fn load(&self) -> Result<Option<String>> {
        let doc = self.read_document()?;
        Ok(doc
            .get("theme")
            .and_then(|theme| theme.get("name"))
            .and_then(|name| name.as_str())
            .map(str::to_string))
    }

    fn save(&mut self, name: &str) -> Result<()> {
        let mut doc = self.read_document()?;
        if !doc.get("theme").is_some_and(|item| item.is_table_like()) {
            doc["theme"] = toml_edit::table();
        }
        doc["theme"]["name"] = value(name);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&self.path, doc.to_string())
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

/// In-memory store (tests, `--no-save` style sessions).
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

impl MemoryThemeStore {
    pub fn new(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value.clone())
    }

    fn save(&mut self, name: &str) -> Result<()> {
        self.value = Some(name.to_string());
        Ok(())
    }
}

/// Read the stored preference, falling back to the default theme.
pub fn resolve_theme(store: &dyn ThemeStore) -> ThemeName {
    match store.load() {
        Ok(Some(name)) => name.parse().unwrap_or_else(|err: ThemeError| {
            tracing::warn!(%err, "ignoring stored theme");
            ThemeName::default()
        }),
        Ok(None) => ThemeName::default(),
        Err(err) => {
            tracing::warn!(error = %err, "could not read theme preference");
            ThemeName::default()
        }
    }
}
