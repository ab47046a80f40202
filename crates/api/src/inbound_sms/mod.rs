mod receive_inbound_sms;

use actix_web::web;
use receive_inbound_sms::receive_inbound_sms_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/twilio/webhook",
        web::post().to(receive_inbound_sms_controller),
    );
}
