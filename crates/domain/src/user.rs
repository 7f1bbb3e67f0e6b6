use crate::shared::entity::{Entity, ID};
use almanac_utils::{create_random_secret, RandomSourceError};
use serde::{Deserialize, Serialize};

/// Length of the opaque bearer credential issued to every `User`.
pub const TOKEN_LEN: usize = 64;

/// Opaque bearer credential proving user identity. Issued once at user
/// creation, immutable, never rotated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token(String);

impl Token {
    pub fn generate() -> Result<Self, RandomSourceError> {
        create_random_secret(TOKEN_LEN).map(Self)
    }

    /// Wraps the raw header value presented by a caller. No validation:
    /// the token is opaque and only ever compared byte for byte against
    /// stored credentials.
    pub fn from_raw(raw: &str) -> Self {
        Self(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    pub token: Token,
    pub username: String,
}

impl User {
    pub fn create(username: String) -> Result<Self, RandomSourceError> {
        Ok(Self {
            id: ID::random()?,
            token: Token::generate()?,
            username,
        })
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}
