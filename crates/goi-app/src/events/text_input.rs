use std::path::PathBuf;

use goi_types::InputMode;

use crate::state::AppState;

pub async fn handle_pasted_text(state: &AppState, text: String) -> anyhow::Result<()> {
    tracing::debug!(len = text.len(), "pasted text updated");
    state.session.set_pasted_text(text).await;
    Ok(())
}

pub async fn handle_selected_file(state: &AppState, path: PathBuf) -> anyhow::Result<()> {
    tracing::debug!(path = %path.display(), "file selected");
    state.session.set_selected_file(path).await;
    Ok(())
}

pub async fn handle_input_mode(state: &AppState, mode: InputMode) -> anyhow::Result<()> {
    state.session.set_input_mode(mode).await;
    Ok(())
}
