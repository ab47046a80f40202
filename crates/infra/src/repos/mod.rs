mod reminder;
mod shared;

use reminder::{InMemoryReminderRepo, PostgresReminderRepo};
use sqlx::PgPool;
use std::sync::Arc;

pub use reminder::IReminderRepo;
pub use shared::repo::UpdateResult;

#[derive(Clone)]
pub struct Repos {
    pub reminders: Arc<dyn IReminderRepo>,
}

impl Repos {
    pub fn create_postgres(pool: PgPool) -> Self {
        Self {
            reminders: Arc::new(PostgresReminderRepo::new(pool)),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            reminders: Arc::new(InMemoryReminderRepo::new()),
        }
    }
}
