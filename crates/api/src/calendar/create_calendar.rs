use crate::error::AlmanacError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use almanac_api_structs::create_calendar::{APIResponse, RequestBody};
use almanac_domain::{Calendar, ID};
use almanac_infra::AlmanacContext;

pub async fn create_calendar_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AlmanacContext>,
) -> Result<HttpResponse, AlmanacError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = CreateCalendarUseCase {
        user_id: user.id,
        name: body.0.name,
    };

    execute(usecase, &ctx)
        .await
        .map(|calendar| HttpResponse::Created().json(APIResponse::new(calendar)))
        .map_err(AlmanacError::from)
}

#[derive(Debug)]
pub struct CreateCalendarUseCase {
    pub user_id: ID,
    pub name: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidName,
    RandomSourceFailure,
    StorageError,
}

impl From<UseCaseError> for AlmanacError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidName => {
                Self::BadClientData("The given calendar name is empty".into())
            }
            UseCaseError::RandomSourceFailure => Self::InternalError,
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateCalendarUseCase {
    type Response = Calendar;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateCalendar";

    async fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::InvalidName);
        }

        let calendar =
            Calendar::new(&self.user_id, name).map_err(|_| UseCaseError::RandomSourceFailure)?;

        ctx.repos
            .calendars
            .insert(&calendar)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(calendar)
    }
}
