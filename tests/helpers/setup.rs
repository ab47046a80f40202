use std::sync::Arc;
use text_reminders_api::Application;
use text_reminders_infra::{InMemoryNotifier, RemindersContext};
use text_reminders_sdk::RemindersSDK;

pub struct TestApp {
    pub notifier: Arc<InMemoryNotifier>,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, RemindersSDK, String) {
    let notifier = Arc::new(InMemoryNotifier::new());
    let mut ctx = RemindersContext::create_inmemory_with_notifier(notifier.clone());
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { notifier };
    let sdk = RemindersSDK::new(address.clone());
    (app, sdk, address)
}
