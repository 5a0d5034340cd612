//! Dashboard page handler.
//!
//! Runs the client pipeline into a fresh snapshot on every request. A failed
//! stage is logged by the pipeline and the page is served with the panels
//! that did render.

use axum::extract::State;
use axum::response::Html;

use shelfdash_core::render::HtmlSnapshot;

use crate::app_state::AppState;
use crate::client;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let source = state.source();
    let mut sink = HtmlSnapshot::new();
    client::init(source.as_ref(), &mut sink).await;
    Html(sink.finish())
}
