use crate::error::AlmanacError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use almanac_api_structs::update_event::{APIResponse, PathParams, RequestBody};
use almanac_domain::{event_permitted, AccessMode, CalendarEvent, ID};
use almanac_infra::AlmanacContext;

pub async fn update_event_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<AlmanacContext>,
) -> Result<HttpResponse, AlmanacError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdateEventUseCase {
        user_id: user.id,
        event_id: path_params.event_id.clone(),
        name: body.name,
        description: body.description,
        timestamp: body.timestamp,
        calendar_ids: body.calendar_ids,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(AlmanacError::from)
}

#[derive(Debug)]
pub struct UpdateEventUseCase {
    pub user_id: ID,
    pub event_id: ID,
    pub name: Option<String>,
    pub description: Option<String>,
    pub timestamp: Option<i64>,
    pub calendar_ids: Option<Vec<ID>>,
}

#[derive(Debug)]
pub enum UseCaseError {
    EventNotFound(ID),
    CalendarNotFound(ID),
    InvalidName,
    StorageError,
}

impl From<UseCaseError> for AlmanacError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EventNotFound(event_id) => {
                Self::NotFound(format!("The event with id: {}, was not found.", event_id))
            }
            UseCaseError::CalendarNotFound(calendar_id) => Self::NotFound(format!(
                "The calendar with id: {}, was not found.",
                calendar_id
            )),
            UseCaseError::InvalidName => {
                Self::BadClientData("The given event name is empty".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateEventUseCase {
    type Response = CalendarEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateEvent";

    async fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        let mut event = match ctx.repos.events.find(&self.event_id).await {
            Some(event) => event,
            None => return Err(UseCaseError::EventNotFound(self.event_id.clone())),
        };

        let calendars = ctx.repos.calendars.find_many(&event.calendar_ids).await;
        if !event_permitted(&self.user_id, &event, &calendars, AccessMode::Modify) {
            return Err(UseCaseError::EventNotFound(self.event_id.clone()));
        }

        if let Some(name) = &self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(UseCaseError::InvalidName);
            }
            event.name = name.to_string();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(timestamp) = self.timestamp {
            event.timestamp = timestamp;
        }

        if let Some(calendar_ids) = &self.calendar_ids {
            // Moving the event requires write access on every calendar in
            // the new list, checked before anything is written.
            let mut new_ids: Vec<ID> = Vec::with_capacity(calendar_ids.len());
            for calendar_id in calendar_ids {
                if new_ids.contains(calendar_id) {
                    continue;
                }
                match ctx.repos.calendars.find(calendar_id).await {
                    Some(calendar) if calendar.permits(&self.user_id, AccessMode::Modify) => {
                        new_ids.push(calendar_id.clone())
                    }
                    _ => return Err(UseCaseError::CalendarNotFound(calendar_id.clone())),
                }
            }
            event.calendar_ids = new_ids;
        }

        event.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .events
            .save(&event)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(event)
    }
}
