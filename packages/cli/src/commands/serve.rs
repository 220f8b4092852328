// ABOUTME: The serve command: wires storage, domain core, and router together
// ABOUTME: Runs the HTTP server with CORS and request tracing until shutdown

use std::sync::Arc;

use anyhow::Context;
use axum::extract::Request;
use axum::http::{header, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;
use todo_api::{create_todo_router, AppState};
use todo_items::{Core, SqliteStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{db, ServeArgs};

pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let pool = db::open_pool(&args.db_path)
        .await
        .context("failed to connect to database. Are your configs correct?")?;

    let core = Arc::new(Core::new(Arc::new(SqliteStore::new(pool))));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    let app = Router::new()
        .nest(&format!("{}/todo", args.prefix), create_todo_router())
        .layer(middleware::from_fn(require_json_content_type))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(core));

    let address = format!("{}:{}", args.addr, args.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!("starting todo restful api server on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("error running restful server")?;

    info!("shutting down todo restful api server");
    Ok(())
}

/// Requests carrying a body must declare a JSON content type
async fn require_json_content_type(req: Request, next: Next) -> Response {
    let method = req.method();
    let carries_body = method == Method::POST || method == Method::PATCH || method == Method::PUT;
    if carries_body {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().starts_with("application/json"))
            .unwrap_or(false);
        if !is_json {
            return StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response();
        }
    }
    next.run(req).await
}

async fn shutdown_signal() {
    // Shutdown on ctrl-c; errors installing the handler mean we just run until killed
    let _ = tokio::signal::ctrl_c().await;
}
