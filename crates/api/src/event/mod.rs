use actix_web::web;

mod create_event;
mod delete_event;
mod get_event;
mod get_events;
mod update_event;

use create_event::create_event_controller;
use delete_event::delete_event_controller;
use get_event::get_event_controller;
use get_events::get_events_controller;
use update_event::update_event_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/event", web::post().to(create_event_controller));
    cfg.route("/event", web::get().to(get_events_controller));
    cfg.route("/event/{event_id}", web::get().to(get_event_controller));
    cfg.route("/event/{event_id}", web::put().to(update_event_controller));
    cfg.route(
        "/event/{event_id}",
        web::delete().to(delete_event_controller),
    );
}
