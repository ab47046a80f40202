mod helpers;

use chrono::{TimeZone, Utc};
use helpers::setup::spawn_app;
use reqwest::StatusCode;
use text_reminders_sdk::{
    CreateReminderInput, ReceiveInboundSmsInput, Reminder, RemindersSDK, UpdateReminderInput, ID,
};

const OWNER: &str = "+15551234567";
const OTHER: &str = "+15559876543";

async fn create_reminder(sdk: &RemindersSDK, text: &str, phone_number: &str) -> Reminder {
    sdk.reminder
        .create(CreateReminderInput {
            text: text.into(),
            date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            phone_number: phone_number.into(),
        })
        .await
        .expect("Expected to create reminder")
}

fn sms(body: &str, from: &str) -> ReceiveInboundSmsInput {
    ReceiveInboundSmsInput {
        body: Some(body.into()),
        from: Some(from.into()),
    }
}

#[actix_web::test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::test]
async fn test_reminder_completed_by_text_message() {
    let (app, sdk, _) = spawn_app().await;

    let reminder = create_reminder(&sdk, "Buy milk", OWNER).await;
    assert!(!reminder.completed);
    assert!(!reminder.stop_reminders);
    assert_eq!(reminder.phone_number, OWNER);
    assert_eq!(
        reminder.date,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    );

    let sent = app.notifier.sent_to(OWNER);
    assert_eq!(sent.len(), 1);
    assert!(sent[0].body.contains("Buy milk"));

    let res = sdk
        .inbound_sms
        .receive(sms("COMPLETED", OWNER))
        .await
        .expect("Expected webhook to succeed");
    assert_eq!(res.message, "Task marked as completed");

    let reminders = sdk.reminder.list().await.expect("Expected to list reminders");
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].id, reminder.id);
    assert!(reminders[0].completed);
    assert!(reminders[0].stop_reminders);
}

#[actix_web::test]
async fn test_stop_only_affects_sender() {
    let (_, sdk, _) = spawn_app().await;
    create_reminder(&sdk, "Buy milk", OWNER).await;
    create_reminder(&sdk, "Walk the dog", OWNER).await;
    let other = create_reminder(&sdk, "Pay rent", OTHER).await;

    for _ in 0..2 {
        let res = sdk.inbound_sms.receive(sms("stop", OWNER)).await.unwrap();
        assert_eq!(res.message, "Task marked as completed");
    }

    let reminders = sdk.reminder.list().await.unwrap();
    assert_eq!(reminders.len(), 3);
    for reminder in reminders {
        if reminder.id == other.id {
            assert!(!reminder.completed);
            assert!(!reminder.stop_reminders);
        } else {
            assert!(reminder.completed);
            assert!(reminder.stop_reminders);
        }
    }
}

#[actix_web::test]
async fn test_unrecognized_text_message_is_acknowledged() {
    let (_, sdk, _) = spawn_app().await;
    create_reminder(&sdk, "Buy milk", OWNER).await;

    let res = sdk.inbound_sms.receive(sms("HELLO", OWNER)).await.unwrap();
    assert_eq!(res.message, "Webhook received");

    let reminders = sdk.reminder.list().await.unwrap();
    assert!(!reminders[0].completed);
    assert!(!reminders[0].stop_reminders);
}

#[actix_web::test]
async fn test_webhook_rejects_missing_fields() {
    let (_, sdk, address) = spawn_app().await;
    create_reminder(&sdk, "Buy milk", OWNER).await;

    let inputs = vec![
        ReceiveInboundSmsInput {
            body: None,
            from: Some(OWNER.into()),
        },
        ReceiveInboundSmsInput {
            body: Some("STOP".into()),
            from: None,
        },
        sms("STOP", ""),
    ];
    for input in inputs {
        let err = sdk.inbound_sms.receive(input).await.unwrap_err();
        assert_eq!(err.status_code(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(err.message, "Missing required fields");
    }

    // Not a form at all
    let res = reqwest::Client::new()
        .post(format!("{}/api/twilio/webhook", address))
        .json(&serde_json::json!({ "Body": "STOP", "From": OWNER }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let reminders = sdk.reminder.list().await.unwrap();
    assert!(!reminders[0].completed);
}

#[actix_web::test]
async fn test_list_is_newest_first() {
    let (_, sdk, _) = spawn_app().await;
    for text in ["first", "second", "third"] {
        create_reminder(&sdk, text, OWNER).await;
    }

    let reminders = sdk.reminder.list().await.unwrap();
    assert_eq!(reminders.len(), 3);
    for pair in reminders.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[actix_web::test]
async fn test_create_rejects_blank_fields() {
    let (app, sdk, _) = spawn_app().await;

    let err = sdk
        .reminder
        .create(CreateReminderInput {
            text: "  ".into(),
            date: Utc::now(),
            phone_number: OWNER.into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(err.message, "Missing required fields");

    assert!(sdk.reminder.list().await.unwrap().is_empty());
    assert!(app.notifier.sent().is_empty());
}

#[actix_web::test]
async fn test_create_rejects_malformed_body() {
    let (_, sdk, address) = spawn_app().await;
    let client = reqwest::Client::new();

    for body in [
        r#"{"text": "Buy milk""#,
        r#"{"text": "Buy milk", "phoneNumber": "+15551234567"}"#,
        r#"{"text": "Buy milk", "date": "tomorrow", "phoneNumber": "+15551234567"}"#,
    ] {
        let res = client
            .post(format!("{}/api/todos", address))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let res: serde_json::Value = res.json().await.unwrap();
        assert_eq!(res["error"], "Invalid request body");
    }

    assert!(sdk.reminder.list().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_create_rejects_absent_fields() {
    let (app, sdk, address) = spawn_app().await;
    let client = reqwest::Client::new();

    for body in [
        serde_json::json!({ "date": "2024-01-01T00:00:00Z", "phoneNumber": OWNER }),
        serde_json::json!({ "text": "Buy milk", "date": "2024-01-01T00:00:00Z" }),
    ] {
        let res = client
            .post(format!("{}/api/todos", address))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let res: serde_json::Value = res.json().await.unwrap();
        assert_eq!(res["error"], "Missing required fields");
    }

    assert!(sdk.reminder.list().await.unwrap().is_empty());
    assert!(app.notifier.sent().is_empty());
}

#[actix_web::test]
async fn test_create_fails_when_notification_fails() {
    let (app, sdk, _) = spawn_app().await;
    app.notifier.set_failing(true);

    let err = sdk
        .reminder
        .create(CreateReminderInput {
            text: "Buy milk".into(),
            date: Utc::now(),
            phone_number: OWNER.into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(err.message, "Failed to create todo");

    // The write is not rolled back
    let reminders = sdk.reminder.list().await.unwrap();
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].text, "Buy milk");
}

#[actix_web::test]
async fn test_update_reminder() {
    let (_, sdk, _) = spawn_app().await;
    let reminder = create_reminder(&sdk, "Buy milk", OWNER).await;

    let updated = sdk
        .reminder
        .update(UpdateReminderInput {
            reminder_id: reminder.id.clone(),
            completed: true,
        })
        .await
        .expect("Expected to update reminder");
    assert!(updated.completed);
    assert!(!updated.stop_reminders);

    let updated = sdk
        .reminder
        .update(UpdateReminderInput {
            reminder_id: reminder.id.clone(),
            completed: false,
        })
        .await
        .unwrap();
    assert!(!updated.completed);

    let err = sdk
        .reminder
        .update(UpdateReminderInput {
            reminder_id: ID::default(),
            completed: true,
        })
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(StatusCode::NOT_FOUND));
}

#[actix_web::test]
async fn test_delete_reminder() {
    let (_, sdk, address) = spawn_app().await;
    let reminder = create_reminder(&sdk, "Buy milk", OWNER).await;

    let deleted = sdk
        .reminder
        .delete(reminder.id.clone())
        .await
        .expect("Expected to delete reminder");
    assert_eq!(deleted.id, reminder.id);
    assert!(sdk.reminder.list().await.unwrap().is_empty());

    let err = sdk.reminder.delete(reminder.id).await.unwrap_err();
    assert_eq!(err.status_code(), Some(StatusCode::NOT_FOUND));

    let res = reqwest::Client::new()
        .delete(format!("{}/api/todos/not-a-uuid", address))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_stopped_owner_still_gets_notified() {
    let (app, sdk, _) = spawn_app().await;
    create_reminder(&sdk, "Buy milk", OWNER).await;
    sdk.inbound_sms.receive(sms("STOP", OWNER)).await.unwrap();

    create_reminder(&sdk, "Walk the dog", OWNER).await;

    assert_eq!(app.notifier.sent_to(OWNER).len(), 2);
}
