//! Display formatting shared by every frontend.

use chrono::{DateTime, Datelike, FixedOffset};

use crate::config::InvitationMessage;
use crate::routes::Route;

/// Render an RFC 3339 timestamp as `HH:MM am/pm Day, Nth Mon`, e.g.
/// `20:23 pm Fri, 20th Sep`. The timestamp's own offset is kept.
/// Unparsable input is returned verbatim.
pub fn format_timestamp(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339.trim()) {
        Ok(timestamp) => format_datetime(&timestamp),
        Err(_) => rfc3339.to_string(),
    }
}

fn format_datetime(timestamp: &DateTime<FixedOffset>) -> String {
    let day = timestamp.day();
    format!(
        "{} {}, {}{} {}",
        timestamp.format("%H:%M %P"),
        timestamp.format("%a"),
        day,
        ordinal_suffix(day),
        timestamp.format("%b"),
    )
}

/// English ordinal suffix for a day of month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Guest-facing link for an invitation.
pub fn private_link(public_base_url: &str, private_id: &str) -> String {
    format!(
        "{}{}",
        public_base_url.trim_end_matches('/'),
        Route::Rsvp(Some(private_id.to_string())).path()
    )
}

/// Shareable invitation text.
pub fn share_message(
    greeting: &str,
    public_base_url: &str,
    private_id: &str,
    message: &InvitationMessage,
) -> String {
    format!(
        "Dear {greeting}, {}\nPlease find the RSVP form and further details at {}\n- {}",
        message.event_line,
        private_link(public_base_url, private_id),
        message.sign_off,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2019-09-20T20:23:00Z"), "20:23 pm Fri, 20th Sep");
        assert_eq!(format_timestamp("2019-09-01T08:05:00+08:00"), "08:05 am Sun, 1st Sep");
    }

    #[test]
    fn test_unparsable_timestamp_is_verbatim() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn test_ordinal_suffixes() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {day}");
        }
    }

    #[test]
    fn test_private_link() {
        assert_eq!(
            private_link("https://example.com/", "abc"),
            "https://example.com/rsvp/abc"
        );
    }

    #[test]
    fn test_share_message() {
        let message = InvitationMessage {
            event_line: "join us on 1 Dec.".into(),
            sign_off: "J & K".into(),
        };
        assert_eq!(
            share_message("Uncle Bob", "https://example.com", "p1", &message),
            "Dear Uncle Bob, join us on 1 Dec.\n\
             Please find the RSVP form and further details at https://example.com/rsvp/p1\n\
             - J & K"
        );
    }
}
