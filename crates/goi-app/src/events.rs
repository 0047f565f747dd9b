use std::sync::Arc;

use goi_lookup::LookupOrchestrator;
use goi_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

use crate::extract::TextExtractor;
use crate::state::AppState;

pub mod process;
pub mod set_language;
pub mod text_input;
pub mod toggle_lookup;

/// App's main loop: receives UI actions, dispatches handlers, pushes
/// snapshots back. Lookup work is spawned per word so slow fetches never
/// block further expand actions.
pub async fn event_loop(
    state: Arc<AppState>,
    orchestrator: Arc<LookupOrchestrator>,
    extractor: Arc<dyn TextExtractor>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("event loop started");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("event loop stopping");
                return Ok(());
            }
            event = ui_to_app_rx.recv() => event?,
        };
        tracing::debug!(event = ?std::mem::discriminant(&event), "event received");

        handle_event(
            &state,
            orchestrator.clone(),
            extractor.clone(),
            &app_to_ui_tx,
            event,
        )
        .await?;
    }
}

async fn handle_event(
    state: &AppState,
    orchestrator: Arc<LookupOrchestrator>,
    extractor: Arc<dyn TextExtractor>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::SetPastedText(text) => text_input::handle_pasted_text(state, text).await,
        AppEvent::SelectFile(path) => text_input::handle_selected_file(state, path).await,
        AppEvent::SetInputMode(mode) => text_input::handle_input_mode(state, mode).await,
        AppEvent::SetLanguage(language) => {
            set_language::handle_set_language(state, orchestrator, language, app_to_ui_tx).await
        }
        AppEvent::Process => process::handle_process(state, extractor, app_to_ui_tx).await,
        AppEvent::ToggleLookup(word) => {
            toggle_lookup::handle_toggle_lookup(state, orchestrator, word, app_to_ui_tx).await
        }
        // Outbound notifications; nothing to do if they echo back.
        AppEvent::ShowResults(_)
        | AppEvent::LookupResolved { .. }
        | AppEvent::ExtractionFailed { .. } => Ok(()),
    }
}
