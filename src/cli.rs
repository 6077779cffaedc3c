//! CLI flag definitions and the dispatch pass.
use anyhow::Result;
use clap::Parser;

use crate::commands::{crud, join, list, shell_alias};
use crate::config::io::load_meetings;
use crate::config::path::ConfigPaths;
use crate::zoom::client::UrlOpener;

/// Utility to join Zoom from the command line.
#[derive(Debug, Clone, Parser)]
#[command(version, about = "Utility to join Zoom from the command line", long_about = None)]
pub struct Cli {
    /// Meeting ID from your Zoom invite
    #[arg(short, long = "meeting_id")]
    pub meeting_id: Option<u64>,

    /// A friendly short name easier to remember
    #[arg(short, long = "alias_name")]
    pub alias_name: Option<String>,

    /// Remove an entry from config
    #[arg(short, long = "remove_entry")]
    pub remove_entry: bool,

    /// Create a shell alias for every stored entry
    #[arg(short, long = "create_alias")]
    pub create_alias: bool,

    /// List all zoom meeting entries
    #[arg(short, long = "list_entry")]
    pub list_entry: bool,
}

/// Run one dispatch pass over the parsed flags. Branches are independently
/// gated and execute in order; the config file must already be initialized.
pub fn run(cli: &Cli, paths: &ConfigPaths, opener: &dyn UrlOpener) -> Result<()> {
    // Create shell alias file
    if cli.create_alias {
        let meetings = load_meetings(paths);
        if let Err(e) = shell_alias::generate(paths, &meetings) {
            println!("error creating aliases - {e}");
        }
    }

    // Delete a meeting entry
    if cli.remove_entry {
        match cli.alias_name.as_deref() {
            Some(alias) => crud::remove_meeting(paths, alias)?,
            None => println!("must provide an alias name for an entry removal"),
        }
    }

    // List meeting entries
    if cli.list_entry {
        list::list_meetings(&load_meetings(paths));
    }

    // Add a new entry, or join if the alias already maps to a meeting
    if let (Some(meeting_id), Some(alias)) = (cli.meeting_id, cli.alias_name.as_deref()) {
        let meetings = load_meetings(paths);
        match meetings.get(alias) {
            Some(&existing) => join::join_meeting(opener, existing)?,
            None => crud::add_meeting(paths, meeting_id, alias)?,
        }
    }

    // Join by alias name alone
    if cli.meeting_id.is_none() && !cli.remove_entry {
        if let Some(alias) = cli.alias_name.as_deref() {
            let meetings = load_meetings(paths);
            if let Some(&meeting_id) = meetings.get(alias) {
                join::join_meeting(opener, meeting_id)?;
            }
        }
    }

    Ok(())
}
