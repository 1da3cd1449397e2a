use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use tour_guide_site::config::Config;
use tour_guide_site::i18n::{BundleLoader, BundleStore, LocaleRegistry};
use tour_guide_site::server::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tour_guide_site=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting tour guide site");

    let config = Config::from_env()?;
    let registry = LocaleRegistry::standard();

    let bundles: Arc<dyn BundleLoader> = match &config.messages_dir {
        Some(dir) => {
            info!("Loading message bundles from {}", dir.display());
            Arc::new(
                BundleStore::from_dir(dir, &registry)
                    .with_context(|| format!("failed to load bundles from {}", dir.display()))?,
            )
        }
        None => Arc::new(BundleStore::embedded(&registry).context("embedded bundles are invalid")?),
    };

    info!(
        "Serving {} locales ({}), default {}",
        registry.len(),
        registry.codes().join(", "),
        registry.default_locale()
    );
    info!("Canonical base URL: {}", config.base_url);

    let addr = format!("0.0.0.0:{}", config.port);
    let state = AppState::new(config, registry, bundles);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("✓ Listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
