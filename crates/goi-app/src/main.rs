use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use goi_config::Config;
use goi_lookup::{EnglishProvider, JapaneseProvider, LookupOrchestrator};
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod extract;
pub mod sources;
pub mod state;


use self::controller::AppController;
use self::extract::{PlainTextExtractor, TextExtractor};
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::new();

    // Stopwords ship with the app; a missing file leaves the deny-list
    // empty but the session usable.
    let stopwords = match sources::load_stopwords(Path::new(&config.extraction.stopwords_path)) {
        Ok(words) => words,
        Err(e) => {
            tracing::error!("stopword load failed: {e}");
            HashSet::new()
        }
    };

    let dictionary_path = config.extraction.dictionary_path.clone();
    let session_language = config.lookup.language;
    let timeout = Duration::from_millis(config.lookup.timeout_ms);

    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let japanese = JapaneseProvider::new(client.clone(), &config.lookup);
    let english = EnglishProvider::new(client, &config.lookup);

    let state = Arc::new(AppState::new(config, stopwords));
    state.session.set_language(session_language).await;

    // Loaded once per session; failure is reported and the dictionary
    // stays empty.
    match sources::load_dictionary(Path::new(&dictionary_path)) {
        Ok(words) => {
            tracing::info!(words = words.len(), "dictionary loaded");
            state.session.replace_dictionary(words).await;
        }
        Err(e) => tracing::error!("dictionary load failed: {e}"),
    }

    let orchestrator = Arc::new(
        LookupOrchestrator::new(state.session.clone())
            .with_provider(Arc::new(japanese))
            .with_provider(Arc::new(english)),
    );
    let extractor: Arc<dyn TextExtractor> = Arc::new(PlainTextExtractor);

    let controller = AppController::new(Arc::clone(&state));
    let mut tasks = controller.spawn_tasks(orchestrator, extractor);

    // Log outbound snapshots until a UI embedding takes the handle over.
    let (_action_tx, notify_rx) = controller.ui_handle();
    tasks.spawn(async move {
        while let Ok(event) = notify_rx.recv().await {
            tracing::info!(?event, "notification");
        }
        Ok(())
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
