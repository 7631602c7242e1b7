use serde::Serialize;

#[cfg(doc)]
use super::Ui;

/// Something [`Ui`] can put on standard output.
///
/// Every message renders to at most one line per output format. Returning `None` hides the
/// message in that format, e.g. the cleaning report is only meaningful as JSON.
pub trait Message {
    /// Line shown to humans.
    fn text(&self) -> Option<String>;

    /// Line emitted in `--json` mode.
    fn json(&self) -> Option<String>;
}

/// Serialize `value` as a single JSON line.
///
/// Messages are built from strings and paths only, so a failure here is reported in-band as an
/// `error` line rather than aborting the run.
pub(crate) fn json_line(value: &impl Serialize) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        serde_json::json!({
            "type": "error",
            "message": format!("failed to serialize message: {err}"),
        })
        .to_string()
    })
}
