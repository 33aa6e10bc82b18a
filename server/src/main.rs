use anyhow::Result;
use axum::Router;
use clap::Parser;
use postfind_core::{FileSource, RetrieverConfig, DEFAULT_THRESHOLD};
use server::{build_app, ServerConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Corpus file; defaults to posts.text, then posts.txt
    #[arg(long)]
    corpus: Option<PathBuf>,
    /// Minimum cosine score for an answer
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let source = match &args.corpus {
        Some(path) => FileSource::new(path),
        None => FileSource::default(),
    };
    let config = ServerConfig::from_env(source, RetrieverConfig { threshold: args.threshold });
    let app: Router = build_app(config)?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
