mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, NotifierBackend, StoreBackend};
pub use repos::{IReminderRepo, Repos, UpdateResult};
pub use services::*;
use sqlx::migrate::MigrateError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::info;

/// Everything a use case needs to do its work. Created once by the
/// process entry point and shared by every request.
#[derive(Clone)]
pub struct RemindersContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: Arc<dyn INotifier>,
}

impl RemindersContext {
    pub fn create_inmemory() -> Self {
        Self::create_inmemory_with_notifier(Arc::new(InMemoryNotifier::new()))
    }

    /// Lets the caller keep a handle to the `InMemoryNotifier` to inspect sent messages
    pub fn create_inmemory_with_notifier(notifier: Arc<InMemoryNotifier>) -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            notifier,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<RemindersContext> {
    setup_context_with(Config::new()).await
}

pub async fn setup_context_with(config: Config) -> anyhow::Result<RemindersContext> {
    let repos = match config.store {
        StoreBackend::Postgres => {
            let pool = connect_postgres(&config).await?;
            Repos::create_postgres(pool)
        }
        StoreBackend::InMemory => {
            info!("Using the in memory reminder store, nothing will be persisted");
            Repos::create_inmemory()
        }
    };
    let notifier: Arc<dyn INotifier> = match config.notifier {
        NotifierBackend::Twilio => Arc::new(TwilioNotifier::new(TwilioConfig::from_env()?)),
        NotifierBackend::InMemory => {
            info!("Using the in memory notifier, no text messages will be sent");
            Arc::new(InMemoryNotifier::new())
        }
    };

    Ok(RemindersContext {
        repos,
        config,
        sys: Arc::new(RealSys {}),
        notifier,
    })
}

fn get_psql_connection_string() -> anyhow::Result<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .map_err(|_| anyhow::anyhow!("{} env var to be present.", PSQL_CONNECTION_STRING))
}

async fn connect_postgres(config: &Config) -> anyhow::Result<PgPool> {
    info!("DB CHECKING CONNECTION ...");
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&get_psql_connection_string()?)
        .await?;
    info!("DB CHECKING CONNECTION ... [done]");
    Ok(pool)
}

pub async fn run_migration() -> anyhow::Result<()> {
    let pool = connect_postgres(&Config::new()).await?;
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e: MigrateError| anyhow::anyhow!("Migration failed: {}", e))
}
