use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace, warn};

use crate::config::load_config;
use crate::router::create_router;
use crate::schemas::AppState;

pub async fn serve(
    config_file: Option<&Path>,
    bind_address: Option<String>,
    dist_dir: Option<PathBuf>,
) -> Result<()> {
    trace!("Entering serve function");
    info!("NextBanking preview server starting up");

    let mut config = match load_config(config_file) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };
    if let Some(bind_address) = bind_address {
        config.bind_address = bind_address;
    }
    if let Some(dist_dir) = dist_dir {
        config.dist_dir = dist_dir;
    }
    debug!("Effective configuration: {:?}", config);

    let state = AppState::from(&config);
    if !state.bundle_present() {
        warn!(
            "No index.html in {}; build the frontend with `trunk build` first",
            state.dist_dir.display()
        );
    }

    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    info!("Starting server on {}", config.bind_address);
    let listener = match TcpListener::bind(&config.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", config.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_address, e);
            return Err(e.into());
        }
    };

    info!("NextBanking dashboard available at http://{}", config.bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
