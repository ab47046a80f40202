mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;

use crate::repos::shared::repo::UpdateResult;
use text_reminders_domain::{Reminder, ID};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
    /// Ordered by creation time, newest first
    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>>;
    /// Ordered by creation time, newest first
    async fn find_by_phone_number(&self, phone_number: &str) -> anyhow::Result<Vec<Reminder>>;
    async fn set_completed(
        &self,
        reminder_id: &ID,
        completed: bool,
    ) -> anyhow::Result<Option<Reminder>>;
    /// Completes and stops every `Reminder` owned by the phone number in one statement
    async fn mark_done_by_phone_number(&self, phone_number: &str) -> anyhow::Result<UpdateResult>;
    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
}
