//! # Invites
//!
//! [`Invite`] is the record both dashboards list. The server sends `date` in
//! whatever shape its serializer produces (plain `YYYY-MM-DD`, ISO-8601
//! date-time, or an RFC 2822 HTTP date), so it is kept as the raw string and
//! interpreted on demand by [`Invite::date_only`] and [`Invite::display_date`].
//!
//! Dates that carry an offset are shown in the viewer's local time; the
//! calendar date used to pre-fill the edit form stays the one the server
//! wrote.

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Invite lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

impl InviteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InviteStatus::Pending => "pending",
            InviteStatus::Accepted => "accepted",
            InviteStatus::Declined => "declined",
        }
    }

    /// Capitalized form shown in the organizer list.
    pub fn label(&self) -> &'static str {
        match self {
            InviteStatus::Pending => "Pending",
            InviteStatus::Accepted => "Accepted",
            InviteStatus::Declined => "Declined",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, InviteStatus::Pending)
    }
}

impl fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An invite as listed by `GET /guest/invites` or `GET /organizer/invites`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invite {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub organizer_id: Option<i64>,
    #[serde(default)]
    pub guest_id: Option<i64>,
    /// Present in the guest listing.
    #[serde(default)]
    pub organizer_username: Option<String>,
    /// Present in the organizer listing.
    #[serde(default)]
    pub guest_username: Option<String>,
    pub status: InviteStatus,
}

impl Invite {
    /// Calendar date as `YYYY-MM-DD`, the format a date input expects.
    pub fn date_only(&self) -> String {
        match parse_date(&self.date) {
            Some(date) => date.as_written().format("%Y-%m-%d").to_string(),
            None => self.date.split('T').next().unwrap_or_default().to_string(),
        }
    }

    /// Human-readable date and time for the guest list, in local time when
    /// the server sent an offset.
    pub fn display_date(&self) -> String {
        match parse_date(&self.date) {
            Some(date) => date.local().format("%b %-d, %Y, %H:%M").to_string(),
            None => self.date.clone(),
        }
    }

    pub fn organizer_label(&self) -> &str {
        self.organizer_username.as_deref().unwrap_or("Unknown")
    }

    pub fn guest_label(&self) -> &str {
        self.guest_username.as_deref().unwrap_or_default()
    }
}

enum ServerDate {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl ServerDate {
    fn as_written(&self) -> NaiveDateTime {
        match self {
            ServerDate::Zoned(dt) => dt.naive_local(),
            ServerDate::Naive(dt) => *dt,
        }
    }

    /// Naive values have no offset to convert from and are shown as sent.
    fn local(&self) -> NaiveDateTime {
        match self {
            ServerDate::Zoned(dt) => dt.with_timezone(&Local).naive_local(),
            ServerDate::Naive(dt) => *dt,
        }
    }
}

fn parse_date(raw: &str) -> Option<ServerDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(ServerDate::Zoned(dt));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ServerDate::Naive(dt));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(ServerDate::Naive(dt));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(ServerDate::Naive);
    }
    // Flask's default JSON encoding: "Thu, 01 May 2025 00:00:00 GMT"
    DateTime::parse_from_rfc2822(raw).ok().map(ServerDate::Zoned)
}

/// Body of `POST /organizer/invites` and `PUT /organizer/invites/{id}`.
///
/// Doubles as the organizer form's state: every field is the raw input text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InviteFields {
    pub title: String,
    pub description: String,
    pub date: String,
    #[serde(rename = "guestUsername")]
    pub guest_username: String,
}

impl InviteFields {
    /// Pre-populate from an existing invite for editing.
    pub fn from_invite(invite: &Invite) -> Self {
        Self {
            title: invite.title.clone(),
            description: invite.description.clone(),
            date: invite.date_only(),
            guest_username: invite.guest_label().to_string(),
        }
    }

    /// All four fields are filled in.
    pub fn is_complete(&self) -> bool {
        [&self.title, &self.description, &self.date, &self.guest_username]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}
