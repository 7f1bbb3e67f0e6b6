use crate::error::AlmanacError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use almanac_api_structs::get_event::{APIResponse, PathParams};
use almanac_domain::{event_permitted, AccessMode, CalendarEvent, ID};
use almanac_infra::AlmanacContext;

pub async fn get_event_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<AlmanacContext>,
) -> Result<HttpResponse, AlmanacError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetEventUseCase {
        user_id: user.id,
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(AlmanacError::from)
}

#[derive(Debug)]
pub struct GetEventUseCase {
    pub user_id: ID,
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for AlmanacError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => {
                Self::NotFound(format!("The event with id: {}, was not found.", event_id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventUseCase {
    type Response = CalendarEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEvent";

    async fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        let event = match ctx.repos.events.find(&self.event_id).await {
            Some(event) => event,
            None => return Err(UseCaseError::NotFound(self.event_id.clone())),
        };

        // View access is inherited from any calendar the event belongs to.
        let calendars = ctx.repos.calendars.find_many(&event.calendar_ids).await;
        if !event_permitted(&self.user_id, &event, &calendars, AccessMode::View) {
            return Err(UseCaseError::NotFound(self.event_id.clone()));
        }

        Ok(event)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use almanac_domain::{Calendar, User};
    use almanac_infra::setup_context;

    #[actix_web::main]
    #[test]
    async fn viewer_on_calendar_sees_event_transitively() {
        let ctx = setup_context().await;
        let alice = User::create("alice".into()).unwrap();
        let bob = User::create("bob".into()).unwrap();
        ctx.repos.users.insert(&alice).await.unwrap();
        ctx.repos.users.insert(&bob).await.unwrap();

        let mut calendar = Calendar::new(&alice.id, "Family").unwrap();
        ctx.repos.calendars.insert(&calendar).await.unwrap();
        let event =
            CalendarEvent::new(&alice.id, "Dinner", "", 1000, vec![calendar.id.clone()], 0)
                .unwrap();
        ctx.repos.events.insert(&event).await.unwrap();

        // bob has no relation yet
        let mut usecase = GetEventUseCase {
            user_id: bob.id.clone(),
            event_id: event.id.clone(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound(_))
        ));

        // alice adds bob as viewer on the calendar
        calendar.view_users.push(bob.id.clone());
        ctx.repos.calendars.save(&calendar).await.unwrap();

        let mut usecase = GetEventUseCase {
            user_id: bob.id,
            event_id: event.id.clone(),
        };
        assert!(usecase.execute(&ctx).await.is_ok());
    }
}
