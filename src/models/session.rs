//! Execution Session Model
//!
//! Represents one compile-or-execute interaction lifecycle, from the user
//! action that starts it to a terminal state. A fresh session is created
//! for every user-initiated compile or execute and discarded when it
//! completes; the session controller guarantees no two sessions are ever
//! in flight at once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// State of an execution session.
///
/// Compile path: `Idle → Compiling → Idle` (success and error both land
/// back in `Idle`; an error additionally marks the session failed).
/// Execute path: `Idle → Executing → {AwaitingInput ⇄ Executing} →
/// {Finished | Failed}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SessionState {
    /// No request in flight; ready for a new action
    #[default]
    Idle,
    /// A compile request is outstanding
    Compiling,
    /// An execute request is outstanding
    Executing,
    /// Execution is paused waiting for user input; keystrokes accumulate
    AwaitingInput,
    /// Execution completed and produced final output
    Finished,
    /// A compile or execute round trip failed
    Failed,
}

/// One compile-or-execute interaction lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier
    pub id: String,

    /// Current state
    pub state: SessionState,

    /// When the session was created
    pub started_at: DateTime<Utc>,

    /// When the session reached a terminal state, if it has
    pub ended_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create a new idle session.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            state: SessionState::Idle,
            started_at: Utc::now(),
            ended_at: None,
        }
    }

    /// Mark the session as compiling.
    pub fn mark_compiling(&mut self) {
        self.state = SessionState::Compiling;
    }

    /// Mark the session as executing.
    pub fn mark_executing(&mut self) {
        self.state = SessionState::Executing;
    }

    /// Mark the session as paused awaiting input.
    pub fn mark_awaiting_input(&mut self) {
        self.state = SessionState::AwaitingInput;
    }

    /// Mark the session as finished and stamp the end time.
    pub fn mark_finished(&mut self) {
        self.state = SessionState::Finished;
        self.ended_at = Some(Utc::now());
    }

    /// Mark the session as failed and stamp the end time.
    pub fn mark_failed(&mut self) {
        self.state = SessionState::Failed;
        self.ended_at = Some(Utc::now());
    }

    /// Return to idle after a compile round trip completes.
    pub fn mark_idle(&mut self) {
        self.state = SessionState::Idle;
    }

    /// Whether a network call is outstanding. `AwaitingInput` does not
    /// count: a paused run has no request on the wire.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, SessionState::Compiling | SessionState::Executing)
    }

    /// Whether the session is paused waiting for user input.
    pub fn is_awaiting_input(&self) -> bool {
        matches!(self.state, SessionState::AwaitingInput)
    }

    /// Whether the session reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self.state, SessionState::Finished | SessionState::Failed)
    }

    /// How long the session has run (to its end, or to now).
    pub fn duration(&self) -> std::time::Duration {
        let end = self.ended_at.unwrap_or_else(Utc::now);
        end.signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or_default()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
