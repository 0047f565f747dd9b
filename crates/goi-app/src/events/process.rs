use std::sync::Arc;

use goi_core::error::ExtractError;
use goi_core::{filter, frequency, normalize};
use goi_types::{AppEvent, DisplayRow, InputMode};
use kanal::AsyncSender;

use crate::extract::TextExtractor;
use crate::state::AppState;

/// Run the extraction pipeline on the current input and replace the tally.
///
/// Extraction failures are absorbed: counts reset, flag cleared, failure
/// reported to the UI, loop keeps running.
pub async fn handle_process(
    state: &AppState,
    extractor: Arc<dyn TextExtractor>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let session = &state.session;

    let (min_word_len, dictionary_free) = {
        let config = state.config.read().await;
        (
            config.extraction.min_word_len,
            config.extraction.dictionary_free,
        )
    };

    let dictionary = session.dictionary().await;
    // A word count's keys must come from the dictionary snapshot; with
    // none loaded there is nothing to match against, so processing stays
    // disabled until a dictionary arrives (or dictionary-free mode is
    // chosen explicitly).
    if dictionary.is_empty() && !dictionary_free {
        tracing::warn!("no dictionary loaded; processing disabled");
        let _ = app_to_ui_tx
            .send(AppEvent::ExtractionFailed {
                reason: "no dictionary loaded".to_string(),
            })
            .await;
        return Ok(());
    }

    session.set_extracting(true).await;

    let text = match gather_input(state, extractor).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("text extraction failed: {e}");
            session.clear_word_counts().await;
            session.set_extracting(false).await;
            let _ = app_to_ui_tx
                .send(AppEvent::ExtractionFailed {
                    reason: e.to_string(),
                })
                .await;
            return Ok(());
        }
    };

    let dictionary = (!dictionary_free).then_some(&dictionary);

    let tokens = normalize::normalize(&text);
    let kept = filter::filter(tokens, dictionary, &state.stopwords, min_word_len);
    let counts = frequency::count(&kept);
    tracing::info!(unique = counts.len(), "extraction finished");

    session.replace_word_counts(counts.clone()).await;
    session.set_extracting(false).await;

    let rows = counts
        .iter()
        .map(|(word, count)| DisplayRow {
            word: word.clone(),
            count: *count,
        })
        .collect();
    app_to_ui_tx.send(AppEvent::ShowResults(rows)).await?;
    Ok(())
}

async fn gather_input(
    state: &AppState,
    extractor: Arc<dyn TextExtractor>,
) -> Result<String, ExtractError> {
    let session = &state.session;
    match session.input_mode().await {
        Some(InputMode::PastedText) => Ok(session.pasted_text().await),
        Some(InputMode::PdfFile) => {
            let path = session.selected_file().await.ok_or(ExtractError::NoInput)?;
            tokio::task::spawn_blocking(move || extractor.extract(&path))
                .await
                .map_err(|e| ExtractError::DecodeError(e.to_string()))?
        }
        None => Err(ExtractError::NoInput),
    }
}
