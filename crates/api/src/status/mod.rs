use crate::error::AlmanacError;
use actix_web::{web, HttpResponse};
use almanac_api_structs::get_service_health::*;
use almanac_infra::AlmanacContext;

async fn status(ctx: web::Data<AlmanacContext>) -> Result<HttpResponse, AlmanacError> {
    let users = ctx.repos.users.count().await;
    let calendars = ctx.repos.calendars.count().await;
    let events = ctx.repos.events.count().await;

    match (users, calendars, events) {
        (Ok(users), Ok(calendars), Ok(events)) => Ok(HttpResponse::Ok().json(APIResponse {
            message: "Yo! We are up!\r\n".into(),
            users,
            calendars,
            events,
            time: ctx.sys.get_timestamp_millis(),
        })),
        _ => Err(AlmanacError::InternalError),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(status));
}
