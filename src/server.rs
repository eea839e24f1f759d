//! HTTP query dispatcher.
//!
//! Each route extracts its parameters, validates them, and calls exactly one
//! `AggregationEngine` operation. Validation failures are reported as 422.

use crate::constants::{DEFAULT_NEWSFEED_LIMIT, DEFAULT_NEWSFEED_SKIP};
use crate::models::{
    AggregationEngine, ArticleSummary, ArticleTopWords, CategoryComparison, Dataset, DatasetMeta,
    EngineConfig, ServerConfig, WordCount, WordCountRecord,
};
use crate::Error;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Application state shared across handlers.
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub engine_config: EngineConfig,
}

impl AppState {
    fn engine(&self) -> AggregationEngine<'_> {
        AggregationEngine::new(&self.engine_config, &self.dataset)
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::InvalidArgument(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Build the API router over an already loaded dataset.
pub fn build_router(dataset: Arc<Dataset>, engine_config: EngineConfig) -> Router {
    let state = Arc::new(AppState {
        dataset,
        engine_config,
    });

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/newsfeed", get(newsfeed_handler))
        .route("/api/word-cloud", get(word_cloud_handler))
        .route("/api/article-counter", get(article_counter_handler))
        .route("/api/word-trend", get(word_trend_handler))
        .route("/api/comparative", get(comparative_handler))
        .route("/api/by-coin", get(by_coin_handler))
        .route("/api/meta", get(meta_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the API until Ctrl+C is received.
pub async fn run_server(
    dataset: Arc<Dataset>,
    engine_config: EngineConfig,
    server_config: &ServerConfig,
) -> Result<(), Error> {
    let app = build_router(dataset, engine_config);

    let addr = server_config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

// --- Parameter validation ---

fn require_param(name: &str, value: Option<String>) -> Result<String, Error> {
    value.ok_or_else(|| Error::InvalidArgument(format!("missing query parameter `{}`", name)))
}

fn parse_count_param(name: &str, value: Option<String>, default: usize) -> Result<usize, Error> {
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| {
            Error::InvalidArgument(format!(
                "query parameter `{}` must be a non-negative integer, got {:?}",
                name, raw
            ))
        }),
    }
}

fn reject(path: &str, err: Error) -> Error {
    warn!("Rejected {}: {}", path, err);
    err
}

/// Unwraps extracted query parameters, reporting a malformed query string
/// (e.g. a duplicated parameter) as an invalid argument.
fn query_params<T>(path: &str, query: Result<Query<T>, QueryRejection>) -> Result<T, Error> {
    match query {
        Ok(Query(params)) => Ok(params),
        Err(rejection) => Err(reject(path, Error::InvalidArgument(rejection.body_text()))),
    }
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

/// GET /api/health
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[derive(Deserialize)]
struct NewsfeedQuery {
    #[serde(default)]
    skip: Option<String>,
    #[serde(default)]
    limit: Option<String>,
}

/// GET /api/newsfeed?skip=&limit=
async fn newsfeed_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<NewsfeedQuery>, QueryRejection>,
) -> Result<Json<Vec<ArticleSummary>>, Error> {
    let query = query_params("/api/newsfeed", query)?;
    let skip = parse_count_param("skip", query.skip, DEFAULT_NEWSFEED_SKIP)
        .map_err(|e| reject("/api/newsfeed", e))?;
    let limit = parse_count_param("limit", query.limit, DEFAULT_NEWSFEED_LIMIT)
        .map_err(|e| reject("/api/newsfeed", e))?;

    Ok(Json(state.engine().newsfeed(skip, limit)))
}

/// GET /api/word-cloud
async fn word_cloud_handler(State(state): State<Arc<AppState>>) -> Json<Vec<WordCount>> {
    Json(state.engine().top_words())
}

/// GET /api/article-counter
async fn article_counter_handler(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<ArticleTopWords>> {
    Json(state.engine().article_top_words())
}

#[derive(Deserialize)]
struct WordTrendQuery {
    #[serde(default)]
    word: Option<String>,
}

/// GET /api/word-trend?word=
async fn word_trend_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<WordTrendQuery>, QueryRejection>,
) -> Result<Json<Vec<WordCountRecord>>, Error> {
    let query = query_params("/api/word-trend", query)?;
    let word = require_param("word", query.word).map_err(|e| reject("/api/word-trend", e))?;

    Ok(Json(state.engine().word_trend(&word)))
}

#[derive(Deserialize)]
struct ComparativeQuery {
    #[serde(default)]
    category1: Option<String>,
    #[serde(default)]
    category2: Option<String>,
}

/// GET /api/comparative?category1=&category2=
async fn comparative_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ComparativeQuery>, QueryRejection>,
) -> Result<Json<CategoryComparison>, Error> {
    let query = query_params("/api/comparative", query)?;
    let category1 =
        require_param("category1", query.category1).map_err(|e| reject("/api/comparative", e))?;
    let category2 =
        require_param("category2", query.category2).map_err(|e| reject("/api/comparative", e))?;

    Ok(Json(state.engine().compare_categories(&category1, &category2)))
}

#[derive(Deserialize)]
struct ByCoinQuery {
    #[serde(default)]
    coin: Option<String>,
}

/// GET /api/by-coin?coin=
async fn by_coin_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ByCoinQuery>, QueryRejection>,
) -> Result<Json<Vec<ArticleSummary>>, Error> {
    let query = query_params("/api/by-coin", query)?;
    let coin = require_param("coin", query.coin).map_err(|e| reject("/api/by-coin", e))?;

    Ok(Json(state.engine().articles_by_coin(&coin)))
}

/// GET /api/meta
async fn meta_handler(State(state): State<Arc<AppState>>) -> Json<DatasetMeta> {
    Json(state.engine().dataset_meta())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_param() {
        assert_eq!(
            require_param("word", Some("bitcoin".to_string())).unwrap(),
            "bitcoin"
        );
        assert!(matches!(
            require_param("word", None),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_count_param() {
        assert_eq!(parse_count_param("skip", None, 3).unwrap(), 3);
        assert_eq!(parse_count_param("skip", Some("7".to_string()), 0).unwrap(), 7);
        assert!(parse_count_param("skip", Some("-1".to_string()), 0).is_err());
        assert!(parse_count_param("limit", Some("ten".to_string()), 0).is_err());
    }

    #[test]
    fn test_invalid_argument_maps_to_unprocessable_entity() {
        let response = Error::InvalidArgument("missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = Error::ParserError("bad row".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
