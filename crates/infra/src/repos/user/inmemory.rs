use super::IUserRepo;
use crate::repos::shared::inmemory_repo::*;
use almanac_domain::{Token, User, ID};

pub struct InMemoryUserRepo {
    users: std::sync::Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        insert(user, &self.users);
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        find(user_id, &self.users)
    }

    async fn find_by_token(&self, token: &Token) -> Option<User> {
        let mut users = find_by(&self.users, |u: &User| u.token == *token);
        if users.is_empty() {
            return None;
        }
        Some(users.remove(0))
    }

    async fn find_by_username(&self, username: &str) -> Option<User> {
        let mut users = find_by(&self.users, |u: &User| u.username == username);
        if users.is_empty() {
            return None;
        }
        Some(users.remove(0))
    }

    async fn delete(&self, user_id: &ID) -> Option<User> {
        delete(user_id, &self.users)
    }

    async fn count(&self) -> anyhow::Result<i64> {
        Ok(count(&self.users))
    }
}
