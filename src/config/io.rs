use std::collections::BTreeMap;
use std::fs;

use anyhow::{Context, Result};

use super::path::ConfigPaths;
use crate::models::{MeetingId, Meetings};

/// Load the alias -> meeting id mapping from disk.
///
/// The config file is expected to exist (created at startup). An unreadable
/// file yields an empty mapping with a message; invalid JSON is backed up
/// next to the config file and replaced by an empty mapping instead of
/// aborting the run.
pub fn load_meetings(paths: &ConfigPaths) -> Meetings {
    let content = match fs::read_to_string(&paths.config_file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Cannot open {}: {e}", paths.config_file.display());
            return Meetings::new();
        }
    };

    match serde_json::from_str::<Meetings>(&content) {
        Ok(meetings) => meetings,
        Err(_) => {
            let bak = paths.config_file.with_extension("json.bak");
            if let Err(be) = fs::write(&bak, content) {
                eprintln!("Failed to write backup {}: {be}", bak.display());
            } else {
                eprintln!("Config was invalid JSON. Backed up to {}.", bak.display());
            }
            Meetings::new()
        }
    }
}

/// Overwrite the config file with the full mapping (stable order for diffs).
pub fn save_meetings(paths: &ConfigPaths, meetings: &Meetings) -> Result<()> {
    let ordered: BTreeMap<&String, &MeetingId> = meetings.iter().collect();
    let json = serde_json::to_string_pretty(&ordered).context("serialize meetings")?;

    // Write to a temp file then rename (best-effort cross-platform)
    let tmp = paths.config_file.with_extension("json.tmp");
    fs::write(&tmp, &json).with_context(|| format!("write temp file {}", tmp.display()))?;
    if let Err(e) = fs::rename(&tmp, &paths.config_file) {
        eprintln!("Failed to move temp file into place: {e}");
        // fallback direct write
        fs::write(&paths.config_file, &json)
            .with_context(|| format!("write {}", paths.config_file.display()))?;
    }
    Ok(())
}
