//! Text rendering of the rsvp-app view models.
//!
//! Every function returns a `String` so handlers decide where it goes and
//! tests can compare output directly.

use std::fmt::Write as _;

use serde::Serialize;

use rsvp_app::presentation::{
    CategoryRow, ControlPanelView, DeleteModal, FieldErrors, GuestPage, GuestView, InvitationRow,
    NoticeBanner, RsvpRow,
};

/// Pretty JSON for `--json` output.
pub fn json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn notice(banner: &NoticeBanner) -> String {
    let marker = if banner.success { "OK" } else { "ERROR" };
    format!("[{marker}] {}", banner.message)
}

pub fn field_errors(errors: &FieldErrors) -> String {
    let mut out = String::from("Please correct the following:\n");
    for (field, message) in errors.iter() {
        let _ = writeln!(out, "  {field}: {message}");
    }
    out
}

pub fn delete_modal(modal: &DeleteModal) -> String {
    format!("{}\nRe-run with --yes to confirm.", modal.prompt)
}

pub fn categories(rows: &[CategoryRow]) -> String {
    if rows.is_empty() {
        return "No categories.".to_string();
    }
    let mut out = format!("{:>5}  {:<30} {:>5}\n", "ID", "TAG", "TOTAL");
    for row in rows {
        let lock = if row.delete_enabled { "" } else { " *" };
        let _ = writeln!(out, "{:>5}  {:<30} {:>5}{lock}", row.id, row.tag, row.total);
    }
    out.push_str("* in use, cannot be deleted\n");
    out
}

pub fn invitations(rows: &[InvitationRow]) -> String {
    if rows.is_empty() {
        return "No invitations.".to_string();
    }
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(out, "#{} {} ({})", row.id, row.greeting, row.category);
        let _ = writeln!(
            out,
            "    guests: {}  status: {}  updated: {}",
            row.maximum_guest_count, row.status, row.updated
        );
        if !row.mobile_phone_number.is_empty() {
            let _ = writeln!(out, "    phone: {}", row.mobile_phone_number);
        }
        if !row.notes.is_empty() {
            let _ = writeln!(out, "    notes: {}", row.notes);
        }
        let _ = writeln!(out, "    link: {}", row.private_link);
    }
    out
}

pub fn rsvps(rows: &[RsvpRow]) -> String {
    if rows.is_empty() {
        return "No RSVPs.".to_string();
    }
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "#{} {}  attending: {}  guests: {}  special diet: {}",
            row.id, row.full_name, row.attending, row.guest_count, row.special_diet
        );
        if !row.remarks.is_empty() {
            let _ = writeln!(out, "    remarks: {}", row.remarks);
        }
        let _ = writeln!(
            out,
            "    phone: {}  invitation: {}  updated: {}",
            row.mobile_phone_number, row.invitation_private_id, row.updated
        );
    }
    out
}

pub fn control_panel(view: &ControlPanelView) -> String {
    let mut out = String::new();
    if let Some(user) = &view.user {
        let _ = writeln!(out, "Logged in as {user}\n");
    }
    out.push_str("== Categories ==\n");
    out.push_str(&categories(&view.categories));
    out.push_str("\n== Invitations ==\n");
    out.push_str(&invitations(&view.invitations));
    out.push_str("\n== RSVPs ==\n");
    out.push_str(&rsvps(&view.rsvps));
    out
}

pub fn guest(view: &GuestView) -> String {
    match &view.page {
        GuestPage::Landing => "Nothing to show yet.".to_string(),
        GuestPage::Acknowledgment(ack) => {
            let mut out = format!("{}\n{}\n", ack.salutation, ack.thanks);
            for (label, value) in &ack.details {
                let _ = writeln!(out, "  {label}: {value}");
            }
            out
        }
        GuestPage::Form { prompt, values } => {
            let mut out = format!("{prompt}\n");
            let _ = writeln!(out, "  Full name: {}", values.full_name);
            let _ = writeln!(out, "  Attending: {}", values.attending);
            let _ = writeln!(out, "  Guests: {}", values.guest_count);
            let _ = writeln!(out, "  Special diet: {}", values.special_diet);
            let _ = writeln!(out, "  Remarks: {}", values.remarks);
            let _ = writeln!(out, "  Phone: {}", values.mobile_phone_number);
            if !values.invitation_private_id.is_empty() {
                let _ = writeln!(out, "  Invitation: {}", values.invitation_private_id);
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsvp_app::views::GuestRsvp;

    #[test]
    fn test_notice_markers() {
        let ok = NoticeBanner {
            message: "Category was created successfully.".into(),
            success: true,
        };
        assert_eq!(notice(&ok), "[OK] Category was created successfully.");

        let err = NoticeBanner {
            message: "boom".into(),
            success: false,
        };
        assert_eq!(notice(&err), "[ERROR] boom");
    }

    #[test]
    fn test_categories_table_marks_locked_rows() {
        let rows = vec![
            CategoryRow {
                id: 1,
                tag: "Family".into(),
                total: 5,
                delete_enabled: false,
            },
            CategoryRow {
                id: 2,
                tag: "Friends".into(),
                total: 0,
                delete_enabled: true,
            },
        ];
        let text = categories(&rows);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].ends_with('*'));
        assert!(!lines[2].ends_with('*'));
        assert_eq!(categories(&[]), "No categories.");
    }

    #[test]
    fn test_guest_landing_and_form() {
        let landing = GuestView {
            notice: None,
            page: GuestPage::Landing,
        };
        assert_eq!(guest(&landing), "Nothing to show yet.");

        let form = GuestView {
            notice: None,
            page: GuestPage::Form {
                prompt: "Kindly complete the form to RSVP",
                values: GuestRsvp::unanswered(),
            },
        };
        let text = guest(&form);
        assert!(text.starts_with("Kindly complete the form to RSVP\n"));
        assert!(text.contains("Guests: 1"));
        assert!(!text.contains("Invitation:"));
    }
}
