use anyhow::Result;

use crate::models::MeetingId;
use crate::zoom::client::{join_url, UrlOpener};

/// Hand the join URL for a meeting id to the platform opener.
/// The opener is fire-and-forget; only the spawn itself can fail.
pub fn join_meeting(opener: &dyn UrlOpener, meeting_id: MeetingId) -> Result<()> {
    println!("[Meeting ID: {meeting_id}] Joining Meeting...");
    let pid = opener.open(&join_url(meeting_id))?;
    println!("Started it with PID: {pid}, select audio type in Zoom client");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::cell::RefCell;

    struct FakeOpener {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl FakeOpener {
        fn new() -> Self {
            FakeOpener {
                opened: RefCell::new(Vec::new()),
                fail: false,
            }
        }
    }

    impl UrlOpener for FakeOpener {
        fn open(&self, url: &str) -> Result<u32> {
            if self.fail {
                bail!("spawn xdg-open");
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(4242)
        }
    }

    #[test]
    fn opens_the_join_url_for_the_id() {
        let opener = FakeOpener::new();
        join_meeting(&opener, 123).unwrap();
        assert_eq!(
            opener.opened.borrow().as_slice(),
            ["zoommtg://zoom.us/join?action=join&confno=123"]
        );
    }

    #[test]
    fn spawn_failure_propagates() {
        let opener = FakeOpener {
            opened: RefCell::new(Vec::new()),
            fail: true,
        };
        assert!(join_meeting(&opener, 123).is_err());
    }
}
