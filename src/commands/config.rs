//! Config subcommands handler

use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use folio::config::migrate_config;
use folio::Config;

use super::Output;

/// Print the effective configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let out = Output::detect();
    println!("{}", out.primary(&toml::to_string_pretty(&config)?));
    Ok(())
}

pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Add missing fields to the config file, creating it if needed.
///
/// Shows the additions and asks before writing unless `yes` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate(yes: bool) -> Result<()> {
    let out = Output::detect();
    let path = Config::config_path()?;
    let exists = path.exists();
    let content = if exists {
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;
    if !result.has_changes() {
        println!("{}", out.primary("Config is already up to date."));
        return Ok(());
    }

    if exists {
        println!(
            "{}",
            out.primary(&format!(
                "Found {} missing field(s) in {} new section(s):",
                result.added_fields.len(),
                result.sections_added.len()
            ))
        );
    } else {
        println!(
            "{}",
            out.primary("Config file does not exist. Will create with default settings.")
        );
    }
    println!();
    for line in added_lines(&result.content, &result.added_fields) {
        println!("{}", out.success(&format!("+ {}", line)));
    }
    println!();

    if !yes && !prompt_confirmation(&format!("Write {}?", path.display()), &out)? {
        println!("{}", out.primary("No changes made."));
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, &result.content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(fields = result.added_fields.len(), "config migrated");
    println!("{}", out.success("Config updated successfully."));
    Ok(())
}

/// Lines of `content` that carry one of `added_fields` (as
/// `section.key`), with the header of each section they appear in.
fn added_lines<'a>(content: &'a str, added_fields: &[String]) -> Vec<&'a str> {
    let mut lines = Vec::new();
    let mut section = "";
    let mut header: Option<&str> = None;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            section = &trimmed[1..trimmed.len() - 1];
            header = Some(line);
            continue;
        }
        let Some((key, _)) = trimmed.split_once('=') else {
            continue;
        };
        let field = format!("{}.{}", section, key.trim());
        if added_fields.contains(&field) {
            if let Some(header) = header.take() {
                lines.push(header);
            }
            lines.push(line);
        }
    }
    lines
}

/// Ask a yes/no question. Non-interactive stdin answers no.
fn prompt_confirmation(message: &str, out: &Output) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            out.secondary("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", out.primary(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
