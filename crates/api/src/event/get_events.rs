use crate::error::AlmanacError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use almanac_api_structs::get_events::APIResponse;
use almanac_domain::{CalendarEvent, Entity, ID};
use almanac_infra::AlmanacContext;

pub async fn get_events_controller(
    http_req: HttpRequest,
    ctx: web::Data<AlmanacContext>,
) -> Result<HttpResponse, AlmanacError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetEventsUseCase { user_id: user.id };

    execute(usecase, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(AlmanacError::from)
}

#[derive(Debug)]
pub struct GetEventsUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for AlmanacError {
    fn from(_: UseCaseError) -> Self {
        Self::InternalError
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventsUseCase {
    type Response = Vec<CalendarEvent>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEvents";

    async fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        // Owned events plus everything visible through calendar
        // membership, deduplicated since both can yield the same event.
        let mut events = ctx.repos.events.find_by_user(&self.user_id).await;

        let calendars = ctx.repos.calendars.find_for_user(&self.user_id).await;
        let calendar_ids: Vec<ID> = calendars.into_iter().map(|c| c.id).collect();
        for event in ctx.repos.events.find_by_calendars(&calendar_ids).await {
            if !events.iter().any(|e| e.eq(&event)) {
                events.push(event);
            }
        }

        Ok(events)
    }
}
