use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use postfind_core::{CorpusError, FileSource, IndexStats, Outcome, Retriever, RetrieverConfig, Tokenizer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub source: FileSource,
    pub retriever: RetrieverConfig,
    /// Required in `X-ADMIN-TOKEN` for `/reload`; reloading is disabled when unset.
    pub admin_token: Option<String>,
}

impl ServerConfig {
    /// Config with the admin token taken from `ADMIN_TOKEN`.
    pub fn from_env(source: FileSource, retriever: RetrieverConfig) -> Self {
        Self { source, retriever, admin_token: std::env::var("ADMIN_TOKEN").ok() }
    }
}

#[derive(Deserialize)]
pub struct AskParams {
    pub q: String,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub query: String,
    pub outcome: Outcome,
    pub took_s: f64,
}

#[derive(Serialize)]
pub struct DocResponse {
    pub index: usize,
    pub text: String,
}

#[derive(Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: IndexStats,
    pub threshold: f64,
}

#[derive(Clone)]
pub struct AppState {
    pub retriever: Arc<Retriever>,
    pub source: Arc<FileSource>,
    pub admin_token: Option<String>,
}

pub fn build_app(config: ServerConfig) -> Result<Router> {
    // Load the corpus at startup; an unusable corpus is fatal.
    let retriever = Retriever::from_source(&config.source, Tokenizer::new(), config.retriever)?;
    let app_state = AppState {
        retriever: Arc::new(retriever),
        source: Arc::new(config.source),
        admin_token: config.admin_token,
    };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/ask", get(ask_handler))
        .route("/doc/:index", get(doc_handler))
        .route("/stats", get(stats_handler))
        .route("/reload", post(reload_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());
    Ok(app)
}

pub async fn ask_handler(State(state): State<AppState>, Query(params): Query<AskParams>) -> Json<AskResponse> {
    let start = std::time::Instant::now();
    let outcome = state.retriever.ask(&params.q);
    Json(AskResponse { query: params.q, outcome, took_s: start.elapsed().as_secs_f64() })
}

pub async fn doc_handler(State(state): State<AppState>, Path(index): Path<usize>) -> Result<Json<DocResponse>, (StatusCode, String)> {
    state
        .retriever
        .document(index)
        .map(|text| Json(DocResponse { index, text }))
        .ok_or((StatusCode::NOT_FOUND, "not found".into()))
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse { stats: state.retriever.stats(), threshold: state.retriever.threshold() })
}

async fn reload_handler(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<IndexStats>, (StatusCode, String)> {
    authorize(&state, &headers)?;
    let retriever = state.retriever.clone();
    let source = state.source.clone();
    // Re-reading and indexing is blocking work.
    let result = tokio::task::spawn_blocking(move || retriever.reload(&*source))
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    match result {
        Ok(stats) => Ok(Json(stats)),
        Err(e @ CorpusError::EmptyCorpus) => Err((StatusCode::UNPROCESSABLE_ENTITY, e.to_string())),
        Err(e) => Err((StatusCode::SERVICE_UNAVAILABLE, e.to_string())),
    }
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), (StatusCode, String)> {
    let required = match &state.admin_token {
        Some(t) => t,
        None => return Err((StatusCode::UNAUTHORIZED, "ADMIN_TOKEN not set".into())),
    };
    let provided = headers.get("X-ADMIN-TOKEN").and_then(|v| v.to_str().ok()).unwrap_or("");
    if provided == required {
        Ok(())
    } else {
        Err((StatusCode::UNAUTHORIZED, "invalid admin token".into()))
    }
}
