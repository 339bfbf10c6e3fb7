//! Output Line Model
//!
//! Represents a single line of the console transcript. Lines come from two
//! places: real program output returned by the remote service, and the echo
//! of a mid-run input prompt. Prompt echoes are transient; the session
//! controller removes them once the paused run resumes and produces real
//! output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single line of the console transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    /// The visible text content
    pub text: String,

    /// Whether this line is the echo of an input prompt. Prompt echoes are
    /// purged from the log before the next batch of real output is
    /// appended.
    pub is_prompt_echo: bool,

    /// When this line was appended
    pub timestamp: DateTime<Utc>,
}

impl OutputLine {
    /// Create a regular output line.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_prompt_echo: false,
            timestamp: Utc::now(),
        }
    }

    /// Create a prompt-echo line.
    pub fn prompt_echo(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_prompt_echo: true,
            timestamp: Utc::now(),
        }
    }
}

impl From<String> for OutputLine {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for OutputLine {
    fn from(text: &str) -> Self {
        Self::new(text.to_string())
    }
}
