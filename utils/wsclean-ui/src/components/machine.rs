use serde::Serialize;

use crate::Message;
use crate::message::json_line;

/// A serializable value which is only printed in JSON mode.
pub struct MachineMessage<T>(pub T);

impl<T: Serialize> Message for MachineMessage<T> {
    fn text(&self) -> Option<String> {
        None
    }

    fn json(&self) -> Option<String> {
        Some(json_line(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::MachineMessage;
    use crate::Message;

    #[test]
    fn hidden_in_text_mode() {
        let message = MachineMessage(["build", "dist"]);
        assert_eq!(message.text(), None);
        assert_eq!(message.json().as_deref(), Some(r#"["build","dist"]"#));
    }
}
