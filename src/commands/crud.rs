use anyhow::{bail, Result};

use crate::commands::shell_alias;
use crate::config::io::{load_meetings, save_meetings};
use crate::config::path::ConfigPaths;
use crate::models::MeetingId;

/// Insert a new alias -> meeting id entry and persist it.
/// An alias already in the mapping is rejected and the stored id keeps its
/// current value.
pub fn add_meeting(paths: &ConfigPaths, meeting_id: MeetingId, alias: &str) -> Result<()> {
    let mut meetings = load_meetings(paths);
    if meetings.contains_key(alias) {
        bail!("entry exists already.");
    }
    meetings.insert(alias.to_string(), meeting_id);
    save_meetings(paths, &meetings)?;
    println!("meeting id - {meeting_id} added with alias name: {alias}");
    Ok(())
}

/// Remove an entry by alias, regenerating the shell alias file to match.
/// A missing alias gets a message only; the mapping and alias file are left
/// untouched.
pub fn remove_meeting(paths: &ConfigPaths, alias: &str) -> Result<()> {
    let mut meetings = load_meetings(paths);
    if meetings.remove(alias).is_none() {
        println!("{alias} doesn't exist, create it!");
        return Ok(());
    }
    println!("removing alias entry for {alias}");
    shell_alias::write_alias_file(paths, &meetings)?;
    save_meetings(paths, &meetings)
}
