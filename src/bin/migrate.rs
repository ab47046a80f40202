use text_reminders_infra::run_migration;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    run_migration().await
}
