use serde::{Deserialize, Serialize};

use crate::dtos::UserDTO;
use almanac_domain::User;

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user: UserDTO,
}

impl UserResponse {
    pub fn new(user: User) -> Self {
        Self {
            user: UserDTO::new(user),
        }
    }
}

pub mod create_user {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub username: String,
    }

    /// The only response that ever carries the bearer token.
    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub user: UserDTO,
        pub token: String,
    }

    impl APIResponse {
        pub fn new(user: User) -> Self {
            let token = user.token.as_str().to_string();
            Self {
                user: UserDTO::new(user),
                token,
            }
        }
    }
}

pub mod get_me {
    use super::*;

    pub type APIResponse = UserResponse;
}
