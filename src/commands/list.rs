use prettytable::{row, Table};

use crate::models::{MeetingId, Meetings};

/// Print all alias -> meeting id pairs, or a message when there are none.
pub fn list_meetings(meetings: &Meetings) {
    match render(meetings) {
        Some(table) => table.printstd(),
        None => println!("no entry found"),
    }
}

fn render(meetings: &Meetings) -> Option<Table> {
    if meetings.is_empty() {
        return None;
    }
    let mut rows: Vec<(&String, &MeetingId)> = meetings.iter().collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));

    let mut table = Table::new();
    table.add_row(row!["Alias", "Meeting ID"]);
    for (alias, meeting_id) in rows {
        table.add_row(row![alias, meeting_id.to_string()]);
    }
    Some(table)
}
