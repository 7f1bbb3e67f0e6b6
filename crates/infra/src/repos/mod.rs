mod calendar;
mod event;
mod shared;
mod user;

use calendar::{ICalendarRepo, InMemoryCalendarRepo, PostgresCalendarRepo};
use event::{IEventRepo, InMemoryEventRepo, PostgresEventRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use user::{IUserRepo, InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
    pub calendars: Arc<dyn ICalendarRepo>,
    pub events: Arc<dyn IEventRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;

        // This is needed to make sure that the db is ready when opening
        // the server
        info!("DB CHECKING CONNECTION AND RUNNING MIGRATIONS ...");
        sqlx::migrate!("../../migrations").run(&pool).await?;
        info!("DB CHECKING CONNECTION AND RUNNING MIGRATIONS ... [done]");

        Ok(Self {
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            calendars: Arc::new(PostgresCalendarRepo::new(pool.clone())),
            events: Arc::new(PostgresEventRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepo::new()),
            calendars: Arc::new(InMemoryCalendarRepo::new()),
            events: Arc::new(InMemoryEventRepo::new()),
        }
    }
}
