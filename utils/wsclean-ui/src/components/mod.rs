//! Reusable [`Message`][crate::Message] implementations.

pub use machine::*;
pub use status::*;
pub use typed::*;

mod machine;
mod status;
mod typed;
