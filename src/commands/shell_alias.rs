use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::path::ConfigPaths;
use crate::models::Meetings;

/// Regenerate the shell alias file and print sourcing instructions.
pub fn generate(paths: &ConfigPaths, meetings: &Meetings) -> Result<()> {
    write_alias_file(paths, meetings)?;
    println!("---");
    println!("Create entry in .bash_profile or .profile");
    println!("source {}", paths.alias_file.display());
    println!("---");
    Ok(())
}

/// Overwrite the alias file in full, one `alias` line per stored entry.
/// Each alias re-invokes this program with `--alias_name <name>`.
pub fn write_alias_file(paths: &ConfigPaths, meetings: &Meetings) -> Result<()> {
    let program = env::current_exe().context("resolve program path")?;
    let entries = render_entries(&program, meetings);
    fs::write(&paths.alias_file, entries)
        .with_context(|| format!("write {}", paths.alias_file.display()))?;
    Ok(())
}

fn render_entries(program: &Path, meetings: &Meetings) -> String {
    let mut aliases: Vec<&String> = meetings.keys().collect();
    aliases.sort();

    let mut entries = String::new();
    for alias in aliases {
        entries.push_str(&format!(
            "alias {alias}='{} --alias_name {alias}'\n",
            program.display()
        ));
    }
    entries
}
