use std::sync::Arc;
use text_reminders_domain::{Reminder, ID};
use text_reminders_infra::{IReminderRepo, InMemoryNotifier, RemindersContext, UpdateResult};

pub struct TestContext {
    pub ctx: RemindersContext,
    pub notifier: Arc<InMemoryNotifier>,
}

pub fn setup() -> TestContext {
    let notifier = Arc::new(InMemoryNotifier::new());
    let ctx = RemindersContext::create_inmemory_with_notifier(notifier.clone());
    TestContext { ctx, notifier }
}

/// Context whose reminder store fails every call
pub fn setup_with_failing_store() -> TestContext {
    let TestContext { mut ctx, notifier } = setup();
    ctx.repos.reminders = Arc::new(FailingReminderRepo);
    TestContext { ctx, notifier }
}

struct FailingReminderRepo;

fn storage_error<T>() -> anyhow::Result<T> {
    Err(anyhow::anyhow!("Connection refused"))
}

#[async_trait::async_trait]
impl IReminderRepo for FailingReminderRepo {
    async fn insert(&self, _reminder: &Reminder) -> anyhow::Result<()> {
        storage_error()
    }

    async fn find(&self, _reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        storage_error()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        storage_error()
    }

    async fn find_by_phone_number(&self, _phone_number: &str) -> anyhow::Result<Vec<Reminder>> {
        storage_error()
    }

    async fn set_completed(
        &self,
        _reminder_id: &ID,
        _completed: bool,
    ) -> anyhow::Result<Option<Reminder>> {
        storage_error()
    }

    async fn mark_done_by_phone_number(&self, _phone_number: &str) -> anyhow::Result<UpdateResult> {
        storage_error()
    }

    async fn delete(&self, _reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        storage_error()
    }
}
