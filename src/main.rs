//! Helpline gateway binary: serves the support endpoint over HTTP.
//!
//! Logging: set `RUST_LOG=helpline_core=debug` (or `warn`, `info`) to adjust
//! log output on stderr.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use helpline_core::knowledge::FaqCatalog;
use helpline_core::server;
use helpline_core::session::InMemorySessionStore;
use helpline_core::turn::TurnHandler;

#[derive(Debug, Parser)]
#[command(name = "helpline-gateway", about = "HTTP gateway for the helpline intent-matching engine")]
struct Args {
    /// Address to bind the HTTP server on.
    #[arg(long, default_value = "127.0.0.1:8787", env = "HELPLINE_BIND")]
    bind: String,

    /// Path to a FAQ catalog JSON file; defaults to the built-in catalog.
    #[arg(long, env = "HELPLINE_FAQS")]
    faqs: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let catalog = match &args.faqs {
        Some(path) => FaqCatalog::load(path)?,
        None => FaqCatalog::builtin()?,
    };
    tracing::info!(entries = catalog.len(), "loaded FAQ catalog");

    let store = Arc::new(InMemorySessionStore::new());
    let handler = TurnHandler::new(catalog, store);

    server::serve(&args.bind, handler).await?;
    Ok(())
}
