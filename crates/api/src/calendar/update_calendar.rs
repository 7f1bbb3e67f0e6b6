use crate::error::AlmanacError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use almanac_api_structs::update_calendar::{APIResponse, PathParams, RequestBody};
use almanac_domain::{AccessMode, Calendar, ID};
use almanac_infra::AlmanacContext;

pub async fn update_calendar_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<AlmanacContext>,
) -> Result<HttpResponse, AlmanacError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdateCalendarUseCase {
        user_id: user.id,
        calendar_id: path_params.calendar_id.clone(),
        name: body.name,
        view_users: body.view_users,
        mod_users: body.mod_users,
    };

    execute(usecase, &ctx)
        .await
        .map(|calendar| HttpResponse::Ok().json(APIResponse::new(calendar)))
        .map_err(AlmanacError::from)
}

#[derive(Debug)]
pub struct UpdateCalendarUseCase {
    pub user_id: ID,
    pub calendar_id: ID,
    pub name: Option<String>,
    pub view_users: Option<Vec<ID>>,
    pub mod_users: Option<Vec<ID>>,
}

#[derive(Debug)]
pub enum UseCaseError {
    CalendarNotFound(ID),
    UserNotFound(ID),
    InvalidName,
    StorageError,
}

impl From<UseCaseError> for AlmanacError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::CalendarNotFound(calendar_id) => Self::NotFound(format!(
                "The calendar with id: {}, was not found.",
                calendar_id
            )),
            UseCaseError::UserNotFound(user_id) => {
                Self::NotFound(format!("The user with id: {}, was not found.", user_id))
            }
            UseCaseError::InvalidName => {
                Self::BadClientData("The given calendar name is empty".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateCalendarUseCase {
    type Response = Calendar;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateCalendar";

    async fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        let mut calendar = match ctx.repos.calendars.find(&self.calendar_id).await {
            Some(calendar) if calendar.permits(&self.user_id, AccessMode::Modify) => calendar,
            _ => return Err(UseCaseError::CalendarNotFound(self.calendar_id.clone())),
        };

        if let Some(name) = &self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(UseCaseError::InvalidName);
            }
            calendar.name = name.to_string();
        }

        let view_users = self
            .view_users
            .clone()
            .unwrap_or_else(|| calendar.view_users.clone());
        let mod_users = self
            .mod_users
            .clone()
            .unwrap_or_else(|| calendar.mod_users.clone());

        // Every referenced member must exist before any of the lists are
        // touched.
        for user_id in view_users.iter().chain(mod_users.iter()) {
            if ctx.repos.users.find(user_id).await.is_none() {
                return Err(UseCaseError::UserNotFound(user_id.clone()));
            }
        }

        calendar.set_members(view_users, mod_users);

        ctx.repos
            .calendars
            .save(&calendar)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(calendar)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use almanac_domain::User;
    use almanac_infra::setup_context;

    #[actix_web::main]
    #[test]
    async fn adds_viewer_to_calendar() {
        let ctx = setup_context().await;
        let alice = User::create("alice".into()).unwrap();
        let bob = User::create("bob".into()).unwrap();
        ctx.repos.users.insert(&alice).await.unwrap();
        ctx.repos.users.insert(&bob).await.unwrap();

        let calendar = Calendar::new(&alice.id, "Family").unwrap();
        ctx.repos.calendars.insert(&calendar).await.unwrap();

        let mut usecase = UpdateCalendarUseCase {
            user_id: alice.id.clone(),
            calendar_id: calendar.id.clone(),
            name: None,
            view_users: Some(vec![alice.id.clone(), bob.id.clone()]),
            mod_users: None,
        };

        let calendar = usecase.execute(&ctx).await.expect("To update calendar");
        assert!(calendar.view_users.contains(&bob.id));
        assert!(!calendar.mod_users.contains(&bob.id));
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_member() {
        let ctx = setup_context().await;
        let alice = User::create("alice".into()).unwrap();
        ctx.repos.users.insert(&alice).await.unwrap();

        let calendar = Calendar::new(&alice.id, "Family").unwrap();
        ctx.repos.calendars.insert(&calendar).await.unwrap();

        let ghost = ID::random().unwrap();
        let mut usecase = UpdateCalendarUseCase {
            user_id: alice.id.clone(),
            calendar_id: calendar.id.clone(),
            name: None,
            view_users: Some(vec![ghost.clone()]),
            mod_users: None,
        };

        match usecase.execute(&ctx).await {
            Err(UseCaseError::UserNotFound(user_id)) => assert_eq!(user_id, ghost),
            res => panic!("Expected unknown member error, got: {:?}", res),
        }
    }

    #[actix_web::main]
    #[test]
    async fn viewer_cannot_update() {
        let ctx = setup_context().await;
        let alice = User::create("alice".into()).unwrap();
        let bob = User::create("bob".into()).unwrap();
        ctx.repos.users.insert(&alice).await.unwrap();
        ctx.repos.users.insert(&bob).await.unwrap();

        let mut calendar = Calendar::new(&alice.id, "Family").unwrap();
        calendar.view_users.push(bob.id.clone());
        ctx.repos.calendars.insert(&calendar).await.unwrap();

        let mut usecase = UpdateCalendarUseCase {
            user_id: bob.id.clone(),
            calendar_id: calendar.id.clone(),
            name: Some("Hijacked".into()),
            view_users: None,
            mod_users: None,
        };

        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::CalendarNotFound(_))
        ));
    }
}
