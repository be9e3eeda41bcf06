#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod assemble;
mod config;
mod error;
mod fetch;
mod menu;
mod parse;
mod window;

use std::{io::ErrorKind, path::Path, sync::Arc};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
};

use crate::{
    config::Config,
    fetch::{make_client, HttpFetcher, PageFetcher},
    menu::MenuCollection,
};

pub use error::Result;

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Debug)]
pub struct AppState<F> {
    fetcher: F,
    config: Config,
    /// Pre-built dataset served as is, if the file existed at startup.
    monitores: Option<Bytes>,
}

async fn greeting() -> &'static str {
    "Olá"
}

async fn monitores<F>(State(state): State<Arc<AppState<F>>>) -> Response {
    match &state.monitores {
        Some(data) => ([(header::CONTENT_TYPE, "application/json")], data.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "dataset not available" })),
        )
            .into_response(),
    }
}

async fn menus<F>(State(state): State<Arc<AppState<F>>>) -> Result<Json<MenuCollection>>
where
    F: PageFetcher + Send + Sync,
{
    let today = state.config.today();
    let menus = assemble::assemble(&state.fetcher, state.config.upstream(), today).await?;
    log::info!("served menus for {} dates starting {today}", menus.len());
    Ok(Json(menus))
}

fn app<F>(state: AppState<F>) -> Router
where
    F: PageFetcher + Send + Sync + 'static,
{
    let compression_layer: CompressionLayer = CompressionLayer::new()
        .br(true)
        .deflate(true)
        .gzip(true)
        .zstd(true);
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    Router::new()
        .route("/", get(greeting))
        .route("/monitores", get(monitores::<F>))
        .route("/cardapio", get(menus::<F>))
        .with_state(Arc::new(state))
        .layer(cors_layer)
        .layer(compression_layer)
}

/// Reads the static dataset, checking that it is JSON but keeping its bytes untouched.
async fn load_monitores(path: &Path) -> Result<Option<Bytes>> {
    match tokio::fs::read(path).await {
        Ok(data) => {
            serde_json::from_slice::<serde::de::IgnoredAny>(&data)?;
            Ok(Some(Bytes::from(data)))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("{} not found, /monitores will answer 404", path.display());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("shutting down");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let config = Config::from_env()?;
    log::info!("fetching menus from {}", config.upstream());
    let client = make_client(config.fetch_timeout())?;
    let monitores = load_monitores(config.monitores_path()).await?;
    let addr = config.addr();
    let state = AppState {
        fetcher: HttpFetcher::new(client),
        config,
        monitores,
    };

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("failed to listen on {addr}: {e}"))?;
    log::info!("listening on http://{addr}");
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
