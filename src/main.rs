//! Shift sheet HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use shift_sheet::api::{AppState, create_router};
use shift_sheet::config::ConfigLoader;

#[derive(Parser)]
#[command(name = "shift-sheet")]
#[command(author, version, about = "Monthly shift sheet export server", long_about = None)]
struct Cli {
    /// Configuration directory holding app.yaml and store.yaml
    #[arg(short, long, value_name = "DIR", env = "SHIFT_SHEET_CONFIG", default_value = "./config/default")]
    config: PathBuf,

    /// Address to listen on, overriding server.bind
    #[arg(short, long, value_name = "ADDR")]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut loader = ConfigLoader::load(&cli.config).expect("Failed to load configuration");
    if let Some(bind) = cli.bind {
        loader.app_mut().server.bind = bind;
    }
    let (app, store) = loader.into_parts();

    let state = AppState::from_config(&app, store).expect("Failed to build application state");
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(app.server.bind)
        .await
        .expect("Failed to bind listener");
    info!(bind = %app.server.bind, config = %cli.config.display(), "Listening");

    axum::serve(listener, router).await.expect("Server error");
}
