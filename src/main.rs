mod telemetry;

use telemetry::{get_subscriber, init_subscriber};
use text_reminders_api::Application;
use text_reminders_infra::setup_context;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("text_reminders".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context().await?;

    let app = Application::new(context).await?;
    app.start().await?;
    Ok(())
}
