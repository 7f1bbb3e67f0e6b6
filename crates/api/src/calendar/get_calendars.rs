use crate::error::AlmanacError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use almanac_api_structs::get_calendars::APIResponse;
use almanac_domain::{Calendar, ID};
use almanac_infra::AlmanacContext;

pub async fn get_calendars_controller(
    http_req: HttpRequest,
    ctx: web::Data<AlmanacContext>,
) -> Result<HttpResponse, AlmanacError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetCalendarsUseCase { user_id: user.id };

    execute(usecase, &ctx)
        .await
        .map(|calendars| HttpResponse::Ok().json(APIResponse::new(calendars)))
        .map_err(AlmanacError::from)
}

#[derive(Debug)]
pub struct GetCalendarsUseCase {
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
impl UseCase for GetCalendarsUseCase {
    type Response = Vec<Calendar>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCalendars";

    async fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.calendars.find_for_user(&self.user_id).await)
    }
}
