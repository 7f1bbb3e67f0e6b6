use crate::error::AlmanacError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use almanac_api_structs::get_calendar::{APIResponse, PathParams};
use almanac_domain::{AccessMode, Calendar, ID};
use almanac_infra::AlmanacContext;

pub async fn get_calendar_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<AlmanacContext>,
) -> Result<HttpResponse, AlmanacError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetCalendarUseCase {
        user_id: user.id,
        calendar_id: path_params.calendar_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|calendar| HttpResponse::Ok().json(APIResponse::new(calendar)))
        .map_err(AlmanacError::from)
}

#[derive(Debug)]
pub struct GetCalendarUseCase {
    pub user_id: ID,
    pub calendar_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for AlmanacError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(calendar_id) => Self::NotFound(format!(
                "The calendar with id: {}, was not found.",
                calendar_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCalendarUseCase {
    type Response = Calendar;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCalendar";

    async fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        // A calendar the caller has no relation to answers exactly like a
        // missing one, so existence is not leaked.
        match ctx.repos.calendars.find(&self.calendar_id).await {
            Some(calendar) if calendar.permits(&self.user_id, AccessMode::View) => Ok(calendar),
            _ => Err(UseCaseError::NotFound(self.calendar_id.clone())),
        }
    }
}
