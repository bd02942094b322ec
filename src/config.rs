//! Configuration file handling.
//!
//! The config lives at `$FOLIO_CONFIG_DIR/config.toml`, falling back to
//! `<platform config dir>/folio/config.toml`. Every field has a default,
//! so a missing file or a partial file is always valid.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";

const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub terminal: TerminalConfig,
}

/// `[theme]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Stored theme preference
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "dark".to_string(),
        }
    }
}

/// `[terminal]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Marker printed before echoed input
    pub prompt_marker: String,
    /// Delay between characters of typed intro entries
    pub type_delay_ms: u64,
    /// Play the intro the first time the terminal is shown
    pub intro: bool,
    /// Delay before the input line takes focus on startup
    pub autofocus_delay_ms: u64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt_marker: "$".to_string(),
            type_delay_ms: 50,
            intro: true,
            autofocus_delay_ms: 2000,
        }
    }
}

impl Config {
    /// Directory holding the config file.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        dirs::config_dir()
            .map(|dir| dir.join("folio"))
            .context("Could not determine config directory")
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load the config, using defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }
}

/// Outcome of [`migrate_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateResult {
    /// Updated file content
    pub content: String,
    /// Added fields as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that did not exist at all
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add every field missing from `content` with its default value.
///
/// Existing values, comments and ordering are preserved.
pub fn migrate_config(content: &str) -> Result<MigrateResult> {
    let mut doc: DocumentMut = content.parse().context("Config file is not valid TOML")?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?.parse()?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        match doc.get_mut(section).and_then(|item| item.as_table_like_mut()) {
            Some(existing) => {
                for (key, value) in default_table.iter() {
                    if !existing.contains_key(key) {
                        existing.insert(key, value.clone());
                        added_fields.push(format!("{}.{}", section, key));
                    }
                }
            }
            None => {
                doc.insert(section, default_item.clone());
                sections_added.push(section.to_string());
                added_fields.extend(default_table.iter().map(|(key, _)| format!("{}.{}", section, key)));
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
