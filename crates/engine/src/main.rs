//! nrdbot engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use nrdbot_domain::ResponseMessages;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nrdbot_engine::api;
use nrdbot_engine::infrastructure::{config::EngineConfig, netrunnerdb::NetrunnerDbClient};
use nrdbot_engine::use_cases::LookupTables;
use nrdbot_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nrdbot_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting nrdbot engine");

    let config = EngineConfig::from_env();
    if config.post_token.is_empty() || config.get_token.is_empty() {
        tracing::warn!("POST_TOKEN or GET_TOKEN is unset, matching webhooks must send an empty token");
    }

    let tables = LookupTables {
        shorthands: config.load_shorthands()?,
        colours: config.load_colours()?,
        messages: ResponseMessages::default(),
    };
    tracing::info!(
        shorthands = tables.shorthands.len(),
        colours = tables.colours.len(),
        max_hits = config.max_hits,
        "Lookup tables loaded"
    );

    let source = Arc::new(NetrunnerDbClient::new(&config.nrdb_base_url)?);
    tracing::info!("Using card database at {}", source.base_url());

    let app = Arc::new(App::new(source, tables, &config));

    let router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
