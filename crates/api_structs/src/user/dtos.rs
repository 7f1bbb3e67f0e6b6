use almanac_domain::{User, ID};
use serde::{Deserialize, Serialize};

/// Public view of a `User`. The bearer token is deliberately not part of
/// this DTO, it is only revealed once in the create user response.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: ID,
    pub username: String,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}
