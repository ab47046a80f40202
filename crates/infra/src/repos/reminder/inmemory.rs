use super::IReminderRepo;
use crate::repos::shared::{inmemory_repo::*, repo::UpdateResult};
use text_reminders_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryReminderRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(find(reminder_id, &self.reminders))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        Ok(newest_first(find_by(&self.reminders, |_| true)))
    }

    async fn find_by_phone_number(&self, phone_number: &str) -> anyhow::Result<Vec<Reminder>> {
        Ok(newest_first(find_by(&self.reminders, |r| {
            r.belongs_to(phone_number)
        })))
    }

    async fn set_completed(
        &self,
        reminder_id: &ID,
        completed: bool,
    ) -> anyhow::Result<Option<Reminder>> {
        Ok(update_one(reminder_id, &self.reminders, |r| {
            r.completed = completed
        }))
    }

    async fn mark_done_by_phone_number(&self, phone_number: &str) -> anyhow::Result<UpdateResult> {
        Ok(update_many(
            &self.reminders,
            |r| r.belongs_to(phone_number),
            |r| r.mark_done(),
        ))
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(delete(reminder_id, &self.reminders))
    }
}

fn newest_first(mut reminders: Vec<Reminder>) -> Vec<Reminder> {
    reminders.sort_by(|r1, r2| r2.created_at.cmp(&r1.created_at));
    reminders
}
