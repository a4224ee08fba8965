use clap::Parser;
use contacts_service::config::Config;
use contacts_service::contacts::handlers::router;
use contacts_service::contacts::store::ContactStore;
use contacts_service::storage::backend::FileBackend;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // 1. Storage layer:
    let backend = Arc::new(FileBackend::new(&config.data_file));
    tracing::info!(
        "Contacts stored in {} ({:?} decoding)",
        backend.path().display(),
        config.decode_policy()
    );
    let store = Arc::new(ContactStore::new(backend, config.decode_policy()));

    // 2. HTTP Router:
    let app = router(store);

    // 3. Start HTTP server:
    tracing::info!("Server running at {}", config.bind);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
