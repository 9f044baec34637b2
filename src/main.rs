mod actors;
mod config;
mod errors;
mod policies;
mod report;
mod simulation;

use crate::config::AppConfig;
use errors::ServiceError;
use simulation::Simulation;
use tracing_subscriber::EnvFilter;

#[actix::main]
async fn main() -> Result<(), ServiceError> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let simulation = Simulation::from_config(&config)?;
    let stdout = std::io::stdout();
    simulation.run(&mut stdout.lock()).await?;

    Ok(())
}
