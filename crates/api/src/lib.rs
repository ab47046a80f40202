mod error;
mod inbound_sms;
mod reminder;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, error::InternalError, middleware, web, App, HttpResponse, HttpServer};
use error::RemindersError;
use std::net::TcpListener;
use text_reminders_infra::RemindersContext;
use tracing::warn;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    inbound_sms::configure_routes(cfg);
    reminder::configure_routes(cfg);
    status::configure_routes(cfg);
}

/// Malformed bodies are rejected with the same `{error}` shape as every other error
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected json body: {}", err);
        let res = RemindersError::BadClientData("Invalid request body".into());
        InternalError::from_response(err, HttpResponse::from_error(res)).into()
    }));
    cfg.app_data(web::FormConfig::default().error_handler(|err, _req| {
        warn!("Rejected form body: {}", err);
        let res = RemindersError::BadClientData("Missing required fields".into());
        InternalError::from_response(err, HttpResponse::from_error(res)).into()
    }));
    cfg.app_data(web::PathConfig::default().error_handler(|err, req| {
        warn!("Rejected path: {}", req.path());
        let res = RemindersError::NotFound(format!("No todo found at: {}", req.path()));
        InternalError::from_response(err, HttpResponse::from_error(res)).into()
    }));
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: RemindersContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context).await?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn configure_server(
        context: RemindersContext,
    ) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(
                    web::scope("/api")
                        .configure(configure_extractors)
                        .configure(configure_server_api),
                )
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
