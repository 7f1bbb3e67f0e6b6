mod inmemory;
mod postgres;

use almanac_domain::{Token, User, ID};
pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    /// Exact, case-sensitive match on the stored credential.
    async fn find_by_token(&self, token: &Token) -> Option<User>;
    async fn find_by_username(&self, username: &str) -> Option<User>;
    async fn delete(&self, user_id: &ID) -> Option<User>;
    async fn count(&self) -> anyhow::Result<i64>;
}
