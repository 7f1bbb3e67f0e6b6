use crate::error::AlmanacError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use almanac_api_structs::create_user::{APIResponse, RequestBody};
use almanac_domain::User;
use almanac_infra::AlmanacContext;

pub async fn create_user_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<AlmanacContext>,
) -> Result<HttpResponse, AlmanacError> {
    let usecase = CreateUserUseCase {
        username: body.0.username,
    };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Created().json(APIResponse::new(user)))
        .map_err(AlmanacError::from)
}

#[derive(Debug)]
pub struct CreateUserUseCase {
    pub username: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidUsername,
    UsernameTaken(String),
    RandomSourceFailure,
    StorageError,
}

impl From<UseCaseError> for AlmanacError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidUsername => {
                Self::BadClientData("The given username is empty".into())
            }
            UseCaseError::UsernameTaken(username) => Self::Conflict(format!(
                "The username: {}, is already taken.",
                username
            )),
            UseCaseError::RandomSourceFailure => Self::InternalError,
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateUserUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateUser";

    async fn execute(&mut self, ctx: &AlmanacContext) -> Result<Self::Response, Self::Error> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(UseCaseError::InvalidUsername);
        }

        if ctx.repos.users.find_by_username(username).await.is_some() {
            return Err(UseCaseError::UsernameTaken(username.to_string()));
        }

        // The random source has no fallback, a failure aborts the whole
        // creation.
        let user = User::create(username.to_string())
            .map_err(|_| UseCaseError::RandomSourceFailure)?;

        ctx.repos
            .users
            .insert(&user)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(user)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use almanac_infra::setup_context;
    use almanac_utils::ALPHABET;

    #[actix_web::main]
    #[test]
    async fn creates_user_with_label_and_token() {
        let ctx = setup_context().await;

        let mut usecase = CreateUserUseCase {
            username: "alice".into(),
        };

        let user = usecase.execute(&ctx).await.expect("To create user");
        assert_eq!(user.username, "alice");
        assert_eq!(user.id.as_str().len(), 8);
        assert_eq!(user.token.as_str().len(), 64);
        assert!(user.id.as_str().bytes().all(|b| ALPHABET.contains(&b)));
        assert!(user.token.as_str().bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[actix_web::main]
    #[test]
    async fn rejects_duplicate_username() {
        let ctx = setup_context().await;

        let mut usecase = CreateUserUseCase {
            username: "alice".into(),
        };
        assert!(usecase.execute(&ctx).await.is_ok());

        let mut usecase = CreateUserUseCase {
            username: "alice".into(),
        };
        match usecase.execute(&ctx).await {
            Err(UseCaseError::UsernameTaken(username)) => assert_eq!(username, "alice"),
            res => panic!("Expected username conflict, got: {:?}", res),
        }
    }

    #[actix_web::main]
    #[test]
    async fn rejects_empty_username() {
        let ctx = setup_context().await;

        let mut usecase = CreateUserUseCase {
            username: "   ".into(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidUsername)
        ));
    }
}
