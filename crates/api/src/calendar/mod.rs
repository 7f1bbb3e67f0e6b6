use actix_web::web;

mod create_calendar;
mod delete_calendar;
mod get_calendar;
mod get_calendars;
mod update_calendar;

use create_calendar::create_calendar_controller;
use delete_calendar::delete_calendar_controller;
use get_calendar::get_calendar_controller;
use get_calendars::get_calendars_controller;
use update_calendar::update_calendar_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/calendar", web::post().to(create_calendar_controller));
    cfg.route("/calendar", web::get().to(get_calendars_controller));
    cfg.route(
        "/calendar/{calendar_id}",
        web::get().to(get_calendar_controller),
    );
    cfg.route(
        "/calendar/{calendar_id}",
        web::put().to(update_calendar_controller),
    );
    cfg.route(
        "/calendar/{calendar_id}",
        web::delete().to(delete_calendar_controller),
    );
}
