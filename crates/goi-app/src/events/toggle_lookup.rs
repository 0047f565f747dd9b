use std::sync::Arc;

use goi_lookup::LookupOrchestrator;
use goi_types::AppEvent;
use kanal::AsyncSender;

use crate::state::AppState;

/// Open or close a word's definition panel. Opening resolves definitions in
/// a spawned task; the orchestrator makes re-entry and cached pairs no-ops,
/// so hammering the button never duplicates a fetch.
pub async fn handle_toggle_lookup(
    state: &AppState,
    orchestrator: Arc<LookupOrchestrator>,
    word: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let session = state.session.clone();

    if !session.toggle_expansion(&word).await {
        // Closed. The cached entry stays; reopening will not re-fetch.
        tracing::debug!(word, "panel closed");
        return Ok(());
    }

    let language = session.language().await;
    let tx = app_to_ui_tx.clone();
    tokio::spawn(async move {
        orchestrator.resolve(&word, language).await;
        if let Err(e) = tx.send(AppEvent::LookupResolved { word }).await {
            tracing::error!("failed to notify UI of resolved lookup: {e}");
        }
    });
    Ok(())
}
