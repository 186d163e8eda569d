//! Serves a repository listing fixture under the hosting API's path layout.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "folio-fixture-server")]
struct Args {
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Write the bound address here once listening
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// File whose bytes are returned for every listing request
    #[arg(long)]
    fixture: PathBuf,

    /// Log filter
    #[arg(long)]
    log: Option<String>,
}

struct AppState {
    body: Vec<u8>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    folio::logging::init(args.log.as_deref(), folio::logging::LogTarget::Stderr);

    let body = std::fs::read(&args.fixture)
        .with_context(|| format!("read fixture {}", args.fixture.display()))?;
    let state = Arc::new(AppState { body });

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/users/:account/repos", get(list_repos))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    tracing::info!(addr = %local_addr, "fixture server listening");
    eprintln!("folio-fixture-server listening on {}", local_addr);

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn healthz() -> &'static str {
    "ok"
}

async fn list_repos(State(state): State<Arc<AppState>>, Path(account): Path<String>) -> Response {
    tracing::debug!(%account, "listing request");
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
        .into_response()
}
