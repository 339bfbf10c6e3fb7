//! BloodStudio - A Rust GUI authoring environment for the BloodCode language
//!
//! This library provides the core functionality for BloodStudio, an
//! interactive editor and execution console for BloodCode, a small
//! instructional programming language. Programs are compiled and executed by
//! a remote service; this crate drives the editor, the syntax highlighting,
//! and the interactive execution protocol.
//!
//! ## Features
//!
//! - **Live Highlighting:** A total, deterministic token classifier runs on
//!   every keystroke and never fails on malformed input
//! - **Static Analysis:** Token listings and syntax trees fetched from the
//!   remote compiler on demand
//! - **Interactive Execution:** Programs may pause mid-run to request input;
//!   the session controller manages the prompt/resume round trips
//! - **Console Transcript:** An append-only output log with structural
//!   reconciliation of transient prompt lines
//! - **Configuration:** TOML-based configuration files
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`syntax`] - Token classifier and keyword registry
//! - [`session`] - Session controller, output log, execution protocol
//! - [`remote`] - Typed client for the remote compile/execute service
//! - [`editor`] - Editor buffer model and line numbering
//! - [`models`] - Data structures (Token, OutputLine, Session)
//! - [`mod@error`] - Error types and Result alias
//!
//! ### Utilities
//!
//! - [`config`] - Configuration loading and validation
//!
//! ## Architecture
//!
//! BloodStudio uses a two-task model:
//!
//! - **UI Thread:** Runs the `egui` loop; owns the editor buffer and calls
//!   the classifier synchronously so highlighting stays in sync with
//!   keystrokes
//! - **Controller Task:** Owns the [`session::SessionController`] and the
//!   HTTP client; processes compile/execute requests strictly one at a time
//!
//! Communication between the two happens via async channels
//! (`tokio::mpsc`). The output log and session state are mutated only by the
//! controller task; the classifier never touches them.

#[macro_use]
extern crate tracing;

pub mod config;
pub mod error;

// Core modules
pub mod editor;
pub mod models;
pub mod remote;
pub mod session;
pub mod syntax;

// Re-exports for core functionality
pub use config::{Config, ConfigLoader};
pub use error::{Error, Result};

// Convenience re-exports for common types
pub use editor::EditorBuffer;
pub use models::{OutputLine, Session, SessionState, Token, TokenCategory};
pub use remote::{CompileAction, CompileResult, ExecuteResult, ExecutionService};
pub use session::SessionController;
pub use syntax::classify;

// Version information
/// The current version of BloodStudio from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
