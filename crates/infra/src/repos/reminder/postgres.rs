use super::IReminderRepo;
use crate::repos::shared::repo::UpdateResult;
use chrono::{DateTime, Utc};
use sqlx::{types::Uuid, FromRow, PgPool};
use text_reminders_domain::{Reminder, ID};
use tracing::error;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    text: String,
    date: DateTime<Utc>,
    phone_number: String,
    completed: bool,
    stop_reminders: bool,
    created_at: i64,
}

impl From<ReminderRaw> for Reminder {
    fn from(e: ReminderRaw) -> Self {
        Self {
            id: e.reminder_uid.into(),
            text: e.text,
            date: e.date,
            phone_number: e.phone_number,
            completed: e.completed,
            stop_reminders: e.stop_reminders,
            created_at: e.created_at,
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders
            (reminder_uid, "text", "date", phone_number, completed, stop_reminders, created_at)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(&reminder.text)
        .bind(reminder.date)
        .bind(&reminder.phone_number)
        .bind(reminder.completed)
        .bind(reminder.stop_reminders)
        .bind(reminder.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert reminder: {:?}. DB returned error: {:?}",
                reminder, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let res: Option<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminder with id: {:?} failed. DB returned error: {:?}",
                reminder_id, e
            );
            e
        })?;
        Ok(res.map(|r| r.into()))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let reminders: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all reminders failed. DB returned error: {:?}", e);
            e
        })?;
        Ok(reminders.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_phone_number(&self, phone_number: &str) -> anyhow::Result<Vec<Reminder>> {
        let reminders: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            WHERE phone_number = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(phone_number)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminders with phone number: {} failed. DB returned error: {:?}",
                phone_number, e
            );
            e
        })?;
        Ok(reminders.into_iter().map(|r| r.into()).collect())
    }

    async fn set_completed(
        &self,
        reminder_id: &ID,
        completed: bool,
    ) -> anyhow::Result<Option<Reminder>> {
        let res: Option<ReminderRaw> = sqlx::query_as(
            r#"
            UPDATE reminders
            SET completed = $2
            WHERE reminder_uid = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .bind(completed)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Set completed: {} on reminder with id: {:?} failed. DB returned error: {:?}",
                completed, reminder_id, e
            );
            e
        })?;
        Ok(res.map(|r| r.into()))
    }

    async fn mark_done_by_phone_number(&self, phone_number: &str) -> anyhow::Result<UpdateResult> {
        let res = sqlx::query(
            r#"
            UPDATE reminders
            SET completed = TRUE, stop_reminders = TRUE
            WHERE phone_number = $1
            "#,
        )
        .bind(phone_number)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Mark done reminders with phone number: {} failed. DB returned error: {:?}",
                phone_number, e
            );
            e
        })?;
        Ok(UpdateResult {
            updated_count: res.rows_affected(),
        })
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let res: Option<ReminderRaw> = sqlx::query_as(
            r#"
            DELETE FROM reminders
            WHERE reminder_uid = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete reminder with id: {:?} failed. DB returned error: {:?}",
                reminder_id, e
            );
            e
        })?;
        Ok(res.map(|r| r.into()))
    }
}
