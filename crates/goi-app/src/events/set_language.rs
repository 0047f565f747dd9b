use std::sync::Arc;

use goi_lookup::LookupOrchestrator;
use goi_types::{AppEvent, Language};
use kanal::AsyncSender;

use crate::state::AppState;

/// Switch the session's lookup language and re-resolve every open panel for
/// the new language. Pairs already cached for it stay untouched; the other
/// language's cache is independent.
pub async fn handle_set_language(
    state: &AppState,
    orchestrator: Arc<LookupOrchestrator>,
    language: Language,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let session = &state.session;
    session.set_language(language).await;
    tracing::info!(lang = language.code(), "lookup language switched");

    for word in session.expanded_words().await {
        let orchestrator = orchestrator.clone();
        let tx = app_to_ui_tx.clone();
        tokio::spawn(async move {
            orchestrator.resolve(&word, language).await;
            if let Err(e) = tx.send(AppEvent::LookupResolved { word }).await {
                tracing::error!("failed to notify UI of resolved lookup: {e}");
            }
        });
    }
    Ok(())
}
