//! Integration tests for the compile side of the session protocol

#[path = "../test_utils/mock_service.rs"]
mod mock_service;

use bloodstudio::models::SessionState;
use bloodstudio::remote::{CompileAction, CompileResult};
use bloodstudio::session::SessionController;
use mock_service::MockService;

const PROGRAM: &str = "Hunter x: Maria => 10;\nPray(x);";

#[tokio::test]
async fn tokens_action_renders_one_log_line() {
    let service = MockService::new();
    service.script_compile(Ok(CompileResult::Tokens(serde_json::json!([
        {"type": "HUNTER", "value": "Hunter", "line_number": 1}
    ]))));

    let mut controller = SessionController::new();
    controller
        .submit_compile(&service, PROGRAM, CompileAction::Tokens)
        .await
        .unwrap();

    assert_eq!(controller.lines().len(), 1);
    assert!(controller.lines()[0].text.starts_with("Tokens:"));
    assert_eq!(controller.state(), SessionState::Idle);
    assert_eq!(service.compile_call_count(), 1);
}

#[tokio::test]
async fn ast_action_renders_the_tree() {
    let service = MockService::new();
    service.script_compile(Ok(CompileResult::Ast(serde_json::json!(
        "BlockNode([DeclarationNode(x)])"
    ))));

    let mut controller = SessionController::new();
    controller
        .submit_compile(&service, PROGRAM, CompileAction::Ast)
        .await
        .unwrap();

    assert_eq!(controller.lines().len(), 1);
    assert_eq!(controller.lines()[0].text, "AST: BlockNode([DeclarationNode(x)])");
    assert_eq!(controller.state(), SessionState::Idle);
}

#[tokio::test]
async fn compile_action_confirms_with_a_fixed_line() {
    let service = MockService::new();
    service.script_compile(Ok(CompileResult::Accepted));

    let mut controller = SessionController::new();
    controller
        .submit_compile(&service, PROGRAM, CompileAction::Compile)
        .await
        .unwrap();

    assert_eq!(controller.lines().len(), 1);
    assert!(controller.lines()[0].text.contains("Compilación exitosa"));
    assert_eq!(controller.state(), SessionState::Idle);
}

#[tokio::test]
async fn service_error_fails_the_session_with_one_line() {
    let service = MockService::new();
    service.script_compile(Ok(CompileResult::Error(
        "Se esperaba SEMICOLON, pero se encontró RBRACE".to_string(),
    )));

    let mut controller = SessionController::new();
    controller
        .submit_compile(&service, "Hunter x", CompileAction::Compile)
        .await
        .unwrap();

    assert_eq!(controller.lines().len(), 1);
    assert!(controller.lines()[0].text.starts_with("Error:"));
    assert!(controller.lines()[0].text.contains("Se esperaba SEMICOLON"));
    assert_eq!(controller.state(), SessionState::Failed);
}

#[tokio::test]
async fn network_failure_is_additive_and_recoverable() {
    let service = MockService::new();
    service.script_compile(Ok(CompileResult::Accepted));
    service.script_compile(Err(MockService::network_failure("/compile")));
    service.script_compile(Ok(CompileResult::Accepted));

    let mut controller = SessionController::new();

    controller
        .submit_compile(&service, PROGRAM, CompileAction::Compile)
        .await
        .unwrap();
    assert_eq!(controller.lines().len(), 1);

    // The failure appends one line; prior output is preserved
    controller
        .submit_compile(&service, PROGRAM, CompileAction::Compile)
        .await
        .unwrap();
    assert_eq!(controller.lines().len(), 2);
    assert!(controller.lines()[1].text.starts_with("Error:"));
    assert_eq!(controller.state(), SessionState::Failed);

    // A failed session never blocks the next attempt
    controller
        .submit_compile(&service, PROGRAM, CompileAction::Compile)
        .await
        .unwrap();
    assert_eq!(controller.state(), SessionState::Idle);
    assert_eq!(controller.lines().len(), 3);
}

#[tokio::test]
async fn clear_output_empties_log_and_preserves_state() {
    let service = MockService::new();
    service.script_compile(Ok(CompileResult::Error("mal".to_string())));

    let mut controller = SessionController::new();
    controller
        .submit_compile(&service, PROGRAM, CompileAction::Compile)
        .await
        .unwrap();
    assert_eq!(controller.state(), SessionState::Failed);

    controller.clear_output();

    assert!(controller.lines().is_empty());
    assert_eq!(controller.state(), SessionState::Failed);
}
