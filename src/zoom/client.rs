use std::process::Command;

use anyhow::{Context, Result};

use crate::models::MeetingId;

/// zoommtg scheme understood by the Zoom desktop client.
const ZOOM_URL_PREFIX: &str = "zoommtg://zoom.us/join?action=join&confno=";

/// Format the join URL for a meeting id.
pub fn join_url(meeting_id: MeetingId) -> String {
    format!("{ZOOM_URL_PREFIX}{meeting_id}")
}

/// Capability to hand a URL to the platform's default handler.
pub trait UrlOpener {
    /// Spawn the opener detached (not waited on) and return the child pid.
    fn open(&self, url: &str) -> Result<u32>;
}

/// Opener backed by `xdg-open` on Linux, `open` everywhere else.
pub struct SystemOpener;

impl SystemOpener {
    fn program() -> &'static str {
        if cfg!(target_os = "linux") {
            "xdg-open"
        } else {
            "open"
        }
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<u32> {
        let child = Command::new(Self::program())
            .arg(url)
            .spawn()
            .with_context(|| format!("spawn {}", Self::program()))?;
        Ok(child.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_embeds_the_meeting_id() {
        assert_eq!(
            join_url(123),
            "zoommtg://zoom.us/join?action=join&confno=123"
        );
    }

    #[test]
    fn join_url_handles_long_ids() {
        assert_eq!(
            join_url(98765432101),
            "zoommtg://zoom.us/join?action=join&confno=98765432101"
        );
    }
}
