use crate::error::AlmanacError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use almanac_api_structs::create_event::{APIResponse, RequestBody};
use almanac_domain::{AccessMode, CalendarEvent, User, ID};
use almanac_infra::AlmanacContext;

pub async fn create_event_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AlmanacContext>,
) -> Result<HttpResponse, AlmanacError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreateEventUseCase {
        user,
        name: body.name,
        description: body.description.unwrap_or_default(),
        timestamp: body.timestamp,
        calendar_ids: body.calendar_ids,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(AlmanacError::from)
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub user: User,
    pub name: String,
    pub description: String,
    pub timestamp: i64,
    pub calendar_ids: Vec<ID>,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidName,
    CalendarNotFound(ID),
    RandomSourceFailure,
    StorageError,
}

impl From<UseCaseError> for AlmanacError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidName => {
                Self::BadClientData("The given event name is empty".into())
            }
            UseCaseError::CalendarNotFound(calendar_id) => Self::NotFound(format!(
                "The calendar with id: {}, was not found.",
                calendar_id
            )),
            UseCaseError::RandomSourceFailure => Self::InternalError,
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = CalendarEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::InvalidName);
        }

        let mut calendar_ids: Vec<ID> = Vec::with_capacity(self.calendar_ids.len());
        for calendar_id in &self.calendar_ids {
            if !calendar_ids.contains(calendar_id) {
                calendar_ids.push(calendar_id.clone());
            }
        }

        // All target calendars must grant write access before anything is
        // inserted. A calendar the caller cannot write to answers like a
        // missing one.
        for calendar_id in &calendar_ids {
            match ctx.repos.calendars.find(calendar_id).await {
                Some(calendar) if calendar.permits(&self.user.id, AccessMode::Modify) => {}
                _ => return Err(UseCaseError::CalendarNotFound(calendar_id.clone())),
            }
        }

        let event = CalendarEvent::new(
            &self.user.id,
            name,
            &self.description,
            self.timestamp,
            calendar_ids,
            ctx.sys.get_timestamp_millis(),
        )
        .map_err(|_| UseCaseError::RandomSourceFailure)?;

        ctx.repos
            .events
            .insert(&event)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(event)
    }
}
