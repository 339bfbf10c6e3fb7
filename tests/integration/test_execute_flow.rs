//! Integration tests for the execute side of the session protocol:
//! prompts, keystroke accumulation, resume, and prompt-echo
//! reconciliation.

#[path = "../test_utils/mock_service.rs"]
mod mock_service;

use bloodstudio::models::SessionState;
use bloodstudio::remote::{CompileAction, CompileResult, ExecuteResult};
use bloodstudio::session::{InputKey, SessionController};
use mock_service::MockService;

const PROGRAM: &str = "Hunter valor: Maria;\nEyes(valor);\nPray(\"El valor es \" + valor);";

async fn type_keys(
    controller: &mut SessionController,
    service: &MockService,
    keys: impl IntoIterator<Item = InputKey>,
) {
    for key in keys {
        controller.on_key_press(service, key).await.unwrap();
    }
}

#[tokio::test]
async fn plain_run_appends_output_and_finishes() {
    let service = MockService::new();
    service.script_execute(Ok(ExecuteResult::Output(vec![
        "10".to_string(),
        "listo".to_string(),
    ])));

    let mut controller = SessionController::new();
    controller
        .submit_execute(&service, "Pray(10);", None)
        .await
        .unwrap();

    let texts: Vec<_> = controller.lines().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["10", "listo"]);
    assert_eq!(controller.state(), SessionState::Finished);
    assert_eq!(service.execute_call_count(), 1);
}

#[tokio::test]
async fn prompt_pauses_the_session_and_echoes_the_prompt() {
    let service = MockService::new();
    service.script_execute(Ok(ExecuteResult::Prompt("Ingrese valor para valor".to_string())));

    let mut controller = SessionController::new();
    controller
        .submit_execute(&service, PROGRAM, None)
        .await
        .unwrap();

    assert_eq!(controller.state(), SessionState::AwaitingInput);
    assert_eq!(controller.lines().len(), 1);
    assert!(controller.lines()[0].is_prompt_echo);
    assert_eq!(controller.lines()[0].text, "Ingrese valor para valor");
    assert!(controller.pending_input().is_empty());
}

#[tokio::test]
async fn submit_issues_exactly_one_follow_up_with_the_buffered_input() {
    let service = MockService::new();
    service.script_execute(Ok(ExecuteResult::Prompt("Ingrese valor".to_string())));
    service.script_execute(Ok(ExecuteResult::Output(vec!["El valor es 5".to_string()])));

    let mut controller = SessionController::new();
    controller
        .submit_execute(&service, PROGRAM, None)
        .await
        .unwrap();

    type_keys(&mut controller, &service, [InputKey::Char('5'), InputKey::Enter]).await;

    // Exactly one follow-up call, resuming the same program with the input
    assert_eq!(service.execute_call_count(), 2);
    let calls = service.execute_calls.lock().unwrap();
    assert_eq!(calls[1].user_input.as_deref(), Some("5"));
    assert_eq!(calls[1].code, PROGRAM);
    drop(calls);

    // The prompt echo is gone; only the real output remains
    let texts: Vec<_> = controller.lines().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["El valor es 5"]);
    assert!(controller.lines().iter().all(|l| !l.is_prompt_echo));
    assert_eq!(controller.state(), SessionState::Finished);
    assert!(controller.pending_input().is_empty());
}

#[tokio::test]
async fn backspace_edits_the_pending_buffer() {
    let service = MockService::new();
    service.script_execute(Ok(ExecuteResult::Prompt("Ingrese valor".to_string())));
    service.script_execute(Ok(ExecuteResult::Output(vec!["ok".to_string()])));

    let mut controller = SessionController::new();
    controller
        .submit_execute(&service, PROGRAM, None)
        .await
        .unwrap();

    type_keys(
        &mut controller,
        &service,
        [InputKey::Char('4'), InputKey::Char('2'), InputKey::Backspace],
    )
    .await;
    assert_eq!(controller.pending_input(), "4");

    type_keys(&mut controller, &service, [InputKey::Char('5'), InputKey::Enter]).await;

    let calls = service.execute_calls.lock().unwrap();
    assert_eq!(calls[1].user_input.as_deref(), Some("45"));
}

#[tokio::test]
async fn keystrokes_outside_awaiting_input_are_dropped() {
    let service = MockService::new();

    let mut controller = SessionController::new();
    type_keys(
        &mut controller,
        &service,
        [InputKey::Char('x'), InputKey::Backspace, InputKey::Enter],
    )
    .await;

    assert!(controller.pending_input().is_empty());
    assert_eq!(service.execute_call_count(), 0);
    assert_eq!(controller.state(), SessionState::Idle);
}

#[tokio::test]
async fn a_run_may_prompt_more_than_once() {
    let service = MockService::new();
    service.script_execute(Ok(ExecuteResult::Prompt("Ingrese valor para a".to_string())));
    service.script_execute(Ok(ExecuteResult::Prompt("Ingrese valor para b".to_string())));
    service.script_execute(Ok(ExecuteResult::Output(vec!["3".to_string()])));

    let mut controller = SessionController::new();
    controller
        .submit_execute(&service, PROGRAM, None)
        .await
        .unwrap();

    type_keys(&mut controller, &service, [InputKey::Char('1'), InputKey::Enter]).await;
    assert_eq!(controller.state(), SessionState::AwaitingInput);
    assert_eq!(controller.lines().len(), 2, "both prompts echoed so far");

    type_keys(&mut controller, &service, [InputKey::Char('2'), InputKey::Enter]).await;

    assert_eq!(service.execute_call_count(), 3);
    let texts: Vec<_> = controller.lines().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["3"], "every prompt echo was reconciled away");
    assert_eq!(controller.state(), SessionState::Finished);
}

#[tokio::test]
async fn execution_error_keeps_prior_output() {
    let service = MockService::new();
    service.script_execute(Ok(ExecuteResult::Output(vec!["antes".to_string()])));
    service.script_execute(Ok(ExecuteResult::Error("división por cero".to_string())));

    let mut controller = SessionController::new();
    controller
        .submit_execute(&service, PROGRAM, None)
        .await
        .unwrap();
    controller
        .submit_execute(&service, PROGRAM, None)
        .await
        .unwrap();

    let texts: Vec<_> = controller.lines().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0], "antes");
    assert!(texts[1].starts_with("Error en la ejecución:"));
    assert!(texts[1].contains("división por cero"));
    assert_eq!(controller.state(), SessionState::Failed);
}

#[tokio::test]
async fn network_failure_mid_prompt_fails_the_session() {
    let service = MockService::new();
    service.script_execute(Ok(ExecuteResult::Prompt("Ingrese valor".to_string())));
    service.script_execute(Err(MockService::network_failure("/execute")));

    let mut controller = SessionController::new();
    controller
        .submit_execute(&service, PROGRAM, None)
        .await
        .unwrap();
    type_keys(&mut controller, &service, [InputKey::Char('5'), InputKey::Enter]).await;

    assert_eq!(controller.state(), SessionState::Failed);
    let last = controller.lines().last().unwrap();
    assert!(last.text.starts_with("Error:"));
    // Subsequent keystrokes are dropped again
    type_keys(&mut controller, &service, [InputKey::Char('x')]).await;
    assert!(controller.pending_input().is_empty());
}

#[tokio::test]
async fn new_action_abandons_a_paused_run() {
    let service = MockService::new();
    service.script_execute(Ok(ExecuteResult::Prompt("Ingrese valor".to_string())));
    service.script_compile(Ok(CompileResult::Accepted));

    let mut controller = SessionController::new();
    controller
        .submit_execute(&service, PROGRAM, None)
        .await
        .unwrap();
    type_keys(&mut controller, &service, [InputKey::Char('9')]).await;
    assert_eq!(controller.pending_input(), "9");

    // A paused run has nothing on the wire, so a new action is legal
    controller
        .submit_compile(&service, PROGRAM, CompileAction::Compile)
        .await
        .unwrap();

    assert_eq!(controller.state(), SessionState::Idle);
    assert!(controller.pending_input().is_empty());
    assert_eq!(service.execute_call_count(), 1, "the paused run was never resumed");
}
