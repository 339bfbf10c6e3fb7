//! Remote compiler service interface
//!
//! BloodCode programs are compiled and executed by a remote service with
//! two endpoints: `POST /compile` (token listing, syntax tree, or full
//! compilation) and `POST /execute` (run, possibly pausing mid-run to
//! request input). This module owns the wire types and maps the service's
//! loosely-typed JSON into strict tagged unions at the boundary, so the
//! session controller never inspects untyped fields.
//!
//! The [`ExecutionService`] trait is the seam tests use to substitute a
//! scripted double for the HTTP client.

pub mod client;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use client::HttpExecutionService;

/// Static-analysis or compilation action for the `/compile` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompileAction {
    /// Return the token listing
    Tokens,
    /// Return the syntax tree
    Ast,
    /// Type-check and confirm
    Compile,
}

impl CompileAction {
    /// Wire name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompileAction::Tokens => "tokens",
            CompileAction::Ast => "ast",
            CompileAction::Compile => "compile",
        }
    }
}

/// Request body for `POST /compile`.
#[derive(Debug, Clone, Serialize)]
pub struct CompileRequest {
    /// Source text
    pub code: String,
    /// Requested action
    pub action: CompileAction,
}

/// Request body for `POST /execute`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteRequest {
    /// Source text
    pub code: String,
    /// Input supplied in response to a prompt, absent on the first call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_input: Option<String>,
}

/// Outcome of a compile round trip, strict-typed at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileResult {
    /// Token listing (`action = tokens`)
    Tokens(serde_json::Value),
    /// Syntax tree (`action = ast`)
    Ast(serde_json::Value),
    /// Compilation succeeded (`action = compile`)
    Accepted,
    /// The service returned an error payload
    Error(String),
}

/// Outcome of an execute round trip, strict-typed at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecuteResult {
    /// Execution paused; the program asked for input with this prompt
    Prompt(String),
    /// Execution finished with these output lines
    Output(Vec<String>),
    /// The service returned an error payload
    Error(String),
}

/// Raw success/failure body of `POST /compile`.
#[derive(Debug, Deserialize)]
pub(crate) struct CompileResponseBody {
    pub tokens: Option<serde_json::Value>,
    pub ast: Option<serde_json::Value>,
    pub error: Option<String>,
}

/// Raw success/failure body of `POST /execute`.
#[derive(Debug, Deserialize)]
pub(crate) struct ExecuteResponseBody {
    pub prompt: Option<String>,
    pub output: Option<Vec<String>>,
    pub error: Option<String>,
}

impl CompileResponseBody {
    /// Map a 2xx body into the tagged union for the requested action.
    pub(crate) fn into_result(self, action: CompileAction) -> Result<CompileResult> {
        if let Some(error) = self.error {
            return Ok(CompileResult::Error(error));
        }
        match action {
            CompileAction::Tokens => match self.tokens {
                Some(tokens) => Ok(CompileResult::Tokens(tokens)),
                None => Err(Error::MalformedResponse {
                    endpoint: "/compile".to_string(),
                }),
            },
            CompileAction::Ast => match self.ast {
                Some(ast) => Ok(CompileResult::Ast(ast)),
                None => Err(Error::MalformedResponse {
                    endpoint: "/compile".to_string(),
                }),
            },
            CompileAction::Compile => Ok(CompileResult::Accepted),
        }
    }
}

impl ExecuteResponseBody {
    /// Map a 2xx body into the tagged union. A `prompt` field wins over
    /// `output`; a body with neither is malformed.
    pub(crate) fn into_result(self) -> Result<ExecuteResult> {
        if let Some(error) = self.error {
            return Ok(ExecuteResult::Error(error));
        }
        if let Some(prompt) = self.prompt {
            return Ok(ExecuteResult::Prompt(prompt));
        }
        match self.output {
            Some(output) => Ok(ExecuteResult::Output(output)),
            None => Err(Error::MalformedResponse {
                endpoint: "/execute".to_string(),
            }),
        }
    }
}

/// The remote compile/execute service, behind a trait so the session
/// controller can be driven against a test double.
#[async_trait::async_trait]
pub trait ExecutionService: Send + Sync {
    /// Submit a compile request and return its typed outcome. `Err` means
    /// the transport failed; a reachable service that rejects the program
    /// comes back as `Ok(CompileResult::Error(..))`.
    async fn compile(&self, request: CompileRequest) -> Result<CompileResult>;

    /// Submit an execute (or resume-with-input) request.
    async fn execute(&self, request: ExecuteRequest) -> Result<ExecuteResult>;
}
