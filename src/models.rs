use std::collections::HashMap;

/// Numeric meeting identifier embedded in the Zoom join URL.
pub type MeetingId = u64;

/// Alias -> meeting id mapping, persisted as a single JSON object.
///
/// Alias names are the unique keys; iteration order carries no meaning.
pub type Meetings = HashMap<String, MeetingId>;
