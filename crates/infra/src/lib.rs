mod config;
mod repos;
mod system;

pub use config::Config;
use repos::Repos;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::info;

#[derive(Clone)]
pub struct AlmanacContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl AlmanacContext {
    async fn create(config: Config) -> Self {
        let repos = match &config.database_url {
            Some(connection_string) => Repos::create_postgres(connection_string)
                .await
                .expect("Postgres credentials must be valid"),
            None => {
                info!("DATABASE_URL not set. Using in-memory repositories.");
                Repos::create_inmemory()
            }
        };
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> AlmanacContext {
    AlmanacContext::create(Config::new()).await
}
