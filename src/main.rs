//! Project Info - condensed GitHub repository summaries over HTTP
//!
//! # Usage
//! ```bash
//! projectinfo                        # Serve on 127.0.0.1:8080
//! projectinfo --host 0.0.0.0 -p 80   # Serve on all interfaces
//! curl localhost:8080/projectinfo/v1/github.com/nothings/stb
//! ```

mod error;
mod github;
mod models;
mod routes;

use std::sync::Arc;

use axum::Router;
use clap::Parser;
use reqwest::Url;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use github::{GitHubApi, HttpFetcher, API_BASE};

/// Project Info - summarize GitHub repositories
#[derive(Parser, Debug)]
#[command(name = "projectinfo")]
#[command(about = "Serves condensed GitHub repository summaries", long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to run the server on
    #[arg(short, long, env = "PORT", default_value = "8080")]
    port: u16,

    /// Repository endpoint of the GitHub API, ending in '/'
    #[arg(long, env = "PROJECTINFO_API_BASE", default_value = API_BASE, value_parser = parse_api_base)]
    api_base: String,
}

fn parse_api_base(api_base: &str) -> Result<String, String> {
    if !(api_base.starts_with("https://") || api_base.starts_with("http://")) {
        return Err(format!("must be an http(s) URL, got {}", api_base));
    }
    if !api_base.ends_with('/') {
        return Err(format!("must end with '/', got {}", api_base));
    }
    // Upstream URLs are compared in normalized form, so the base must be too.
    Url::parse(api_base)
        .map(String::from)
        .map_err(|e| format!("invalid URL {}: {}", api_base, e))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api = Arc::new(GitHubApi::new(HttpFetcher::new()?, cli.api_base.clone()));

    let app = Router::new()
        .merge(routes::create_router(api))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to {}: {}", addr, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, api_base = %cli.api_base, "Serving project info");

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutting down");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
