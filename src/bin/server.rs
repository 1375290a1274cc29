//! RAG server binary
//!
//! Run with: cargo run --bin ragline-server [config.toml]

use ragline::{config::RagConfig, server::RagServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ragline=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => RagConfig::from_file(&path)?,
        None => RagConfig::default(),
    };

    tracing::info!("Configuration loaded");
    tracing::info!("  - Embedding model: {}", config.llm.embed_model);
    tracing::info!("  - Generation model: {}", config.llm.generate_model);
    tracing::info!(
        "  - Retrieval: top {} above {}",
        config.retrieval.max_results,
        config.retrieval.similarity_threshold
    );

    let server = RagServer::new(config)?;

    let seeded = server.state().seed_corpus().await?;
    tracing::info!("Corpus ready with {} passages", seeded);

    println!("\nServer starting...");
    println!("  Ask:    POST http://{}/ask", server.address());
    println!("  Health: GET  http://{}/health", server.address());
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
