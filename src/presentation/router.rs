use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{LlmClient, TranscriptionEngine};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, transcribe_and_merge_handler};
use crate::presentation::state::AppState;

pub fn create_router<E, L>(state: AppState<E, L>) -> Router
where
    E: TranscriptionEngine + 'static,
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit =
        usize::try_from(state.settings.server.max_upload_size_bytes).unwrap_or(usize::MAX);

    let mut router = Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/transcribe-and-merge",
            post(transcribe_and_merge_handler::<E, L>),
        )
        .layer(DefaultBodyLimit::max(body_limit));

    // The upload form and its assets.
    if let Some(static_dir) = state
        .settings
        .server
        .static_dir
        .as_deref()
        .filter(|d| !d.trim().is_empty())
    {
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    router
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
