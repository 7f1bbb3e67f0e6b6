use crate::error::AlmanacError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use almanac_api_structs::delete_event::{APIResponse, PathParams};
use almanac_domain::{CalendarEvent, ID};
use almanac_infra::AlmanacContext;

pub async fn delete_event_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<AlmanacContext>,
) -> Result<HttpResponse, AlmanacError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteEventUseCase {
        user_id: user.id,
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(AlmanacError::from)
}

#[derive(Debug)]
pub struct DeleteEventUseCase {
    pub user_id: ID,
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for AlmanacError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => {
                Self::NotFound(format!("The event with id: {}, was not found.", event_id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteEventUseCase {
    type Response = CalendarEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEvent";

    async fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        // Deletion is reserved for the owner.
        match ctx.repos.events.find(&self.event_id).await {
            Some(event) if event.user_id == self.user_id => ctx
                .repos
                .events
                .delete(&event.id)
                .await
                .ok_or(UseCaseError::StorageError),
            _ => Err(UseCaseError::NotFound(self.event_id.clone())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use almanac_domain::Calendar;
    use almanac_infra::setup_context;

    #[actix_web::main]
    #[test]
    async fn only_the_owner_can_delete() {
        let ctx = setup_context().await;
        let owner = ID::random().unwrap();
        let moderator = ID::random().unwrap();

        let mut calendar = Calendar::new(&owner, "Family").unwrap();
        calendar.mod_users.push(moderator.clone());
        ctx.repos.calendars.insert(&calendar).await.unwrap();

        let event =
            CalendarEvent::new(&owner, "Dinner", "", 1000, vec![calendar.id.clone()], 0).unwrap();
        ctx.repos.events.insert(&event).await.unwrap();

        let mut usecase = DeleteEventUseCase {
            user_id: moderator,
            event_id: event.id.clone(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound(_))
        ));

        let mut usecase = DeleteEventUseCase {
            user_id: owner,
            event_id: event.id.clone(),
        };
        assert!(usecase.execute(&ctx).await.is_ok());
        assert!(ctx.repos.events.find(&event.id).await.is_none());
    }
}
