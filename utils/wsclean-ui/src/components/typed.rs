use console::Style;
use serde::Serialize;

use crate::Message;
use crate::message::json_line;

/// A diagnostic prefixed with its kind, like `warn: ...` or `error: ...`.
///
/// In JSON mode it is emitted as `{"type":"<kind>","message":"..."}`.
#[derive(Serialize)]
pub struct TypedMessage<'a> {
    r#type: &'a str,
    message: &'a str,
    #[serde(skip)]
    type_style: &'a str,
}

impl<'a> TypedMessage<'a> {
    /// `type_style` is a [`console`] dotted style applied to the kind prefix in text mode.
    pub fn styled(ty: &'a str, type_style: &'a str, message: &'a str) -> Self {
        Self {
            r#type: ty,
            message,
            type_style,
        }
    }
}

impl Message for TypedMessage<'_> {
    fn text(&self) -> Option<String> {
        let prefix = Style::from_dotted_str(self.type_style).apply_to(self.r#type);
        Some(format!("{prefix}: {}", self.message))
    }

    fn json(&self) -> Option<String> {
        Some(json_line(self))
    }
}
