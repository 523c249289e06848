use humanifesto::api::{create_router, AppState};
use humanifesto::config::Config;
use humanifesto::services::Corpus;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("humanifesto=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // A broken corpus still serves, just with empty catalogs
    let corpus = Corpus::load_or_empty(&config.corpus_path);
    let state = AppState::new(corpus, config.catalog_size);

    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Humanifesto addon listening on http://{}/manifest.json", address);
    axum::serve(listener, app).await?;

    Ok(())
}
