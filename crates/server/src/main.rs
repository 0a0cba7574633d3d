//! Podium server binary
//!
//! Lifecycle: construct → seed → serve. The index is built and seeded once,
//! handed to the periodic updater and the router, then the process serves
//! queries until it is killed.

mod config;
mod routes;
mod updater;

use std::net::SocketAddr;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use podium_index::{RankedIndex, SeedConfig};

use config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let seed = SeedConfig {
        population: config.population,
        ..SeedConfig::default()
    };
    let mut rng = StdRng::from_entropy();
    let index = Arc::new(RankedIndex::seed(&seed, &mut rng));
    index.verify_consistency()?;

    updater::spawn(
        Arc::clone(&index),
        config.update_interval,
        config.update_batch,
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = routes::router(index);
    info!(%addr, "podium server listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
