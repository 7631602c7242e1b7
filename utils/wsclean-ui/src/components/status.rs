use console::{Alignment, Style, pad_str};
use serde::Serialize;

use crate::Message;
use crate::message::json_line;

/// Width the status word is right-aligned to.
const STATUS_WIDTH: usize = 12;

/// What happened to a single path, e.g. `Removed build` or `Dry-run dist`.
///
/// In text mode the status word is bold, coloured and right-aligned so that paths line up.
/// In JSON mode it is lowercased: `{"status":"removed","message":"build"}`.
pub struct Status<'a> {
    status: &'a str,
    color: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct StatusLine<'a> {
    status: String,
    message: &'a str,
}

impl<'a> Status<'a> {
    /// A green status.
    pub fn new(status: &'a str, message: &'a str) -> Self {
        Self::with_color(status, "green", message)
    }

    /// `color` is a [`console`] dotted style string, e.g. `yellow`.
    pub fn with_color(status: &'a str, color: &'a str, message: &'a str) -> Self {
        Self {
            status,
            color,
            message,
        }
    }
}

impl Message for Status<'_> {
    fn text(&self) -> Option<String> {
        let status = pad_str(self.status, STATUS_WIDTH, Alignment::Right, None);
        Some(format!(
            "{} {}",
            Style::from_dotted_str(self.color).bold().apply_to(status),
            self.message
        ))
    }

    fn json(&self) -> Option<String> {
        Some(json_line(&StatusLine {
            status: self.status.to_lowercase(),
            message: self.message,
        }))
    }
}
