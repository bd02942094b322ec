//! Development tasks: `cargo xtask <task>`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

use folio::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for folio")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for folio and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let command = Cli::command();
    write_page(out_dir, "folio.1", Man::new(command.clone()))?;

    for sub in command.get_subcommands() {
        let file = format!("folio-{}.1", sub.get_name());
        write_page(out_dir, &file, Man::new(sub.clone()))?;
    }

    println!("Man pages written to {}", out_dir.display());
    Ok(())
}

fn write_page(out_dir: &Path, file: &str, page: Man) -> Result<()> {
    let mut buffer = Vec::new();
    page.render(&mut buffer)?;
    let path = out_dir.join(file);
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))
}
