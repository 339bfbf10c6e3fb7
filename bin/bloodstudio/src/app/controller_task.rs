//! Controller Task
//!
//! Background task that owns the `SessionController` and the HTTP client.
//! Requests from the UI are processed strictly one at a time, so at most
//! one remote call is ever outstanding; after every mutation the task
//! publishes a fresh console snapshot for the UI to render.
//!
//! Controller errors (for example a submission racing an in-flight
//! request) are logged and otherwise ignored: the console transcript
//! already carries the user-visible outcome, and the UI disables the
//! action buttons while a request is pending.

use tokio::sync::mpsc;
use tracing::{info, warn};

use bloodstudio::remote::HttpExecutionService;
use bloodstudio::session::SessionController;

use super::{AppRequest, ConsoleSnapshot};

/// Run the controller loop until the UI side closes the request channel.
pub(crate) async fn run(
    mut request_rx: mpsc::UnboundedReceiver<AppRequest>,
    snapshot_tx: mpsc::UnboundedSender<ConsoleSnapshot>,
    service: HttpExecutionService,
) {
    info!("Starting session controller task");
    let mut controller = SessionController::new();

    while let Some(request) = request_rx.recv().await {
        let outcome = match request {
            AppRequest::Compile { code, action } => {
                controller.submit_compile(&service, &code, action).await
            }
            AppRequest::Execute { code } => controller.submit_execute(&service, &code, None).await,
            AppRequest::Key(key) => controller.on_key_press(&service, key).await,
            AppRequest::ClearOutput => {
                controller.clear_output();
                Ok(())
            }
        };

        if let Err(e) = outcome {
            warn!("Controller rejected request: {}", e);
        }

        let snapshot = ConsoleSnapshot {
            lines: controller.lines().to_vec(),
            state: controller.state(),
            pending_input: controller.pending_input().to_string(),
        };
        if snapshot_tx.send(snapshot).is_err() {
            // UI is gone; stop the task
            break;
        }
    }

    info!("Session controller task ended");
}
