//! Output formatting for CLI.

mod json;
mod text;

pub use json::{CartOutput, JsonFormatter, NavigationOutput, SessionOutput};
pub use text::TextFormatter;
