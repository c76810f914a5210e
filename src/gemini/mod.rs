//! Gemini CLI integration.

pub mod prompt;
pub mod subprocess;

pub use prompt::{DIFF_END_MARKER, DIFF_START_MARKER, build_prompt};
pub use subprocess::{gemini_invocation, generate_message};
