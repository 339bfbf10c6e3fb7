//! Session Controller
//!
//! Orchestrates the remote compile/execute round trips and keeps the
//! console transcript consistent. One controller instance lives on one
//! logical task; the remote call inside [`SessionController::submit_compile`]
//! and [`SessionController::submit_execute`] is the only suspension point.
//! At most one request is ever outstanding - a second submission while one
//! is in flight is rejected with [`Error::RequestInFlight`].
//!
//! The interactive-input sub-protocol: an execute response carrying a
//! prompt pauses the session (`AwaitingInput`), echoes the prompt into the
//! log tagged as transient, and accumulates keystrokes in a pending buffer
//! that is rendered live but never enters the permanent log. Submitting the
//! buffer resumes execution with exactly one follow-up request; once the
//! run produces real output, every prompt echo is purged from the log
//! before the output is appended.

use crate::error::{Error, Result};
use crate::models::{OutputLine, Session, SessionState};
use crate::remote::{
    CompileAction, CompileRequest, CompileResult, ExecuteRequest, ExecuteResult, ExecutionService,
};
use crate::session::log::OutputLog;

/// Confirmation line for a successful `compile` action.
const COMPILE_OK_LINE: &str = "Compilación exitosa. Ahora puedes ejecutar el código.";

/// Keys the interactive-input sub-protocol observes. Everything else is
/// invisible to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// A printable character
    Char(char),
    /// Remove the last buffered character
    Backspace,
    /// Submit the buffered input
    Enter,
}

/// Drives compile/execute round trips and owns the console state.
#[derive(Debug)]
pub struct SessionController {
    /// Lifecycle of the current (or most recent) action
    session: Session,
    /// The console transcript
    log: OutputLog,
    /// Keystrokes accumulated while paused on a prompt
    pending_input: String,
    /// Source of the paused run, so resuming executes the same program
    /// even if the editor buffer has changed meanwhile
    program: Option<String>,
}

impl SessionController {
    /// Create a controller with an idle session and an empty log.
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            log: OutputLog::new(),
            pending_input: String::new(),
            program: None,
        }
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The current session state.
    pub fn state(&self) -> SessionState {
        self.session.state
    }

    /// The console transcript, oldest line first.
    pub fn lines(&self) -> &[OutputLine] {
        self.log.lines()
    }

    /// The live pending-input buffer (rendered as the "current input"
    /// line while paused on a prompt).
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Whether a remote call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.session.is_busy()
    }

    /// Whether the session is paused waiting for input.
    pub fn is_awaiting_input(&self) -> bool {
        self.session.is_awaiting_input()
    }

    /// Empty the output log. Session state is untouched.
    pub fn clear_output(&mut self) {
        self.log.clear();
    }

    /// Submit a compile request for `code` and fold the outcome into the
    /// log. Static-analysis actions render their payload as one log line;
    /// a plain compile confirms with a fixed line.
    pub async fn submit_compile(
        &mut self,
        service: &dyn ExecutionService,
        code: &str,
        action: CompileAction,
    ) -> Result<()> {
        self.begin(SessionState::Compiling)?;
        debug!(session = %self.session.id, action = action.as_str(), "submitting compile");

        let outcome = service
            .compile(CompileRequest {
                code: code.to_string(),
                action,
            })
            .await;

        match outcome {
            Ok(CompileResult::Tokens(tokens)) => {
                self.log
                    .push(OutputLine::new(format!("Tokens: {}", render_json(&tokens))));
                self.session.mark_idle();
            }
            Ok(CompileResult::Ast(ast)) => {
                self.log
                    .push(OutputLine::new(format!("AST: {}", render_json(&ast))));
                self.session.mark_idle();
            }
            Ok(CompileResult::Accepted) => {
                self.log.push(OutputLine::new(COMPILE_OK_LINE));
                self.session.mark_idle();
            }
            Ok(CompileResult::Error(message)) => self.fail(format!("Error: {}", message)),
            Err(err) => self.fail(format!("Error: {}", err)),
        }

        Ok(())
    }

    /// Submit an execute request. Pass `user_input` only when resuming a
    /// paused run; the first call of a run sends none.
    pub async fn submit_execute(
        &mut self,
        service: &dyn ExecutionService,
        code: &str,
        user_input: Option<String>,
    ) -> Result<()> {
        let resuming = user_input.is_some() && self.session.is_awaiting_input();
        if resuming {
            // Same session: the paused run continues
            self.session.mark_executing();
        } else {
            self.begin(SessionState::Executing)?;
            self.program = Some(code.to_string());
        }
        debug!(session = %self.session.id, resuming, "submitting execute");

        let outcome = service
            .execute(ExecuteRequest {
                code: code.to_string(),
                user_input,
            })
            .await;

        match outcome {
            Ok(ExecuteResult::Prompt(prompt)) => {
                self.log.push(OutputLine::prompt_echo(prompt));
                self.pending_input.clear();
                self.session.mark_awaiting_input();
            }
            Ok(ExecuteResult::Output(lines)) => {
                // The run is past its prompts; their echoes are stale now
                self.log.purge_prompt_echoes();
                self.log.extend(lines.into_iter().map(OutputLine::new));
                self.pending_input.clear();
                self.program = None;
                self.session.mark_finished();
            }
            Ok(ExecuteResult::Error(message)) => {
                self.fail(format!("Error en la ejecución: {}", message))
            }
            Err(err) => self.fail(format!("Error: {}", err)),
        }

        Ok(())
    }

    /// Feed one key into the interactive-input sub-protocol. Keystrokes
    /// outside `AwaitingInput` are dropped. `Enter` issues exactly one
    /// follow-up execute request carrying the buffered input.
    pub async fn on_key_press(
        &mut self,
        service: &dyn ExecutionService,
        key: InputKey,
    ) -> Result<()> {
        if !self.session.is_awaiting_input() {
            trace!(?key, state = ?self.session.state, "dropping keystroke outside AwaitingInput");
            return Ok(());
        }

        match key {
            InputKey::Char(c) => {
                self.pending_input.push(c);
                Ok(())
            }
            InputKey::Backspace => {
                self.pending_input.pop();
                Ok(())
            }
            InputKey::Enter => {
                let input = std::mem::take(&mut self.pending_input);
                let code = self.program.clone().unwrap_or_default();
                self.submit_execute(service, &code, Some(input)).await
            }
        }
    }

    /// Start a fresh session for a new user action. Rejected while a
    /// request is outstanding; allowed from any settled state (a paused
    /// run is abandoned).
    fn begin(&mut self, state: SessionState) -> Result<()> {
        if self.session.is_busy() {
            warn!(state = ?self.session.state, "submission rejected: request in flight");
            return Err(Error::RequestInFlight);
        }
        if self.session.is_awaiting_input() {
            info!(session = %self.session.id, "abandoning paused run");
        }

        self.session = Session::new();
        self.pending_input.clear();
        self.program = None;
        match state {
            SessionState::Compiling => self.session.mark_compiling(),
            SessionState::Executing => self.session.mark_executing(),
            _ => unreachable!("sessions begin compiling or executing"),
        }
        Ok(())
    }

    /// Surface a failure as a single console line and a failed session.
    /// Prior output is preserved; failures are additive.
    fn fail(&mut self, line: String) {
        warn!(session = %self.session.id, "{}", line);
        self.log.push(OutputLine::new(line));
        self.pending_input.clear();
        self.program = None;
        self.session.mark_failed();
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a JSON payload for a single console line. Strings render bare
/// (the service sends syntax trees as their text form); everything else
/// pretty-prints.
fn render_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}
