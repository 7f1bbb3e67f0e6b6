use crate::error::AlmanacError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use almanac_api_structs::delete_calendar::{APIResponse, PathParams};
use almanac_domain::{Calendar, ID};
use almanac_infra::AlmanacContext;

pub async fn delete_calendar_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<AlmanacContext>,
) -> Result<HttpResponse, AlmanacError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteCalendarUseCase {
        user_id: user.id,
        calendar_id: path_params.calendar_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|calendar| HttpResponse::Ok().json(APIResponse::new(calendar)))
        .map_err(AlmanacError::from)
}

#[derive(Debug)]
pub struct DeleteCalendarUseCase {
    pub user_id: ID,
    pub calendar_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for AlmanacError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(calendar_id) => Self::NotFound(format!(
                "The calendar with id: {}, was not found.",
                calendar_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteCalendarUseCase {
    type Response = Calendar;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteCalendar";

    async fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        // Deletion is reserved for the owner, moderators only hold rights
        // on the content.
        match ctx.repos.calendars.find(&self.calendar_id).await {
            Some(calendar) if calendar.user_id == self.user_id => {
                ctx.repos
                    .events
                    .detach_calendar(&calendar.id)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;

                ctx.repos
                    .calendars
                    .delete(&calendar.id)
                    .await
                    .ok_or(UseCaseError::StorageError)
            }
            _ => Err(UseCaseError::NotFound(self.calendar_id.clone())),
        }
    }
}
