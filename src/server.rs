use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{net::SocketAddr, sync::Arc};
use tracing::{info, warn};

use crate::api::{
    ApiHooksRequest, ApiHooksResponse, ApiScoreRequest, ApiScoreResponse, ApiStatsRequest,
};
use viral_stories::config::ScoringConfig;
use viral_stories::story::StoryStats;
use viral_stories::ViralScorer;

#[derive(Clone)]
struct AppState {
    config: Arc<ScoringConfig>,
    scorer: Arc<ViralScorer>,
}

pub async fn serve(args: crate::ServeArgs, config: ScoringConfig) -> anyhow::Result<()> {
    let state = AppState {
        scorer: Arc::new(ViralScorer::from_config(&config)),
        config: Arc::new(config),
    };

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/score", post(score_handler))
        .route("/api/hooks", post(hooks_handler))
        .route("/api/stats", post(stats_handler))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| anyhow::anyhow!("invalid bind address: {}", err))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| anyhow::anyhow!("failed to bind server: {}", err))?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .await
        .map_err(|err| anyhow::anyhow!("server error: {}", err))
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn score_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiScoreRequest>,
) -> Result<Json<ApiScoreResponse>, (StatusCode, String)> {
    let job = request.into_job(&state.config.hooks).map_err(|err| {
        warn!(error = %err, "rejected score request");
        (StatusCode::BAD_REQUEST, err)
    })?;
    let response = job.run(&state.scorer);
    info!(
        score = response.analysis.score,
        tier = %response.tier,
        hooks = response.hooks.len(),
        "scored story"
    );
    Ok(Json(response))
}

async fn hooks_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiHooksRequest>,
) -> Json<ApiHooksResponse> {
    Json(request.into_response(&state.config.hooks))
}

async fn stats_handler(Json(request): Json<ApiStatsRequest>) -> Json<StoryStats> {
    let stats = StoryStats::from_stories(&request.stories);
    info!(stories = stats.total_stories, "computed story stats");
    Json(stats)
}
