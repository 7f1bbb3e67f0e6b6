use super::IUserRepo;
use almanac_domain::{Token, User, ID};
use sqlx::{FromRow, PgPool};

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    user_uid: String,
    token: String,
    username: String,
}

impl From<UserRaw> for User {
    fn from(e: UserRaw) -> Self {
        Self {
            id: e.user_uid.parse().unwrap(),
            token: Token::from_raw(&e.token),
            username: e.username,
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users(user_uid, token, username)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(user.id.as_str())
        .bind(user.token.as_str())
        .bind(&user.username)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        let user: UserRaw = match sqlx::query_as(
            r#"
            SELECT * FROM users
            WHERE user_uid = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_one(&self.pool)
        .await
        {
            Ok(user) => user,
            Err(_) => return None,
        };
        Some(user.into())
    }

    async fn find_by_token(&self, token: &Token) -> Option<User> {
        let user: UserRaw = match sqlx::query_as(
            r#"
            SELECT * FROM users
            WHERE token = $1
            "#,
        )
        .bind(token.as_str())
        .fetch_one(&self.pool)
        .await
        {
            Ok(user) => user,
            Err(_) => return None,
        };
        Some(user.into())
    }

    async fn find_by_username(&self, username: &str) -> Option<User> {
        let user: UserRaw = match sqlx::query_as(
            r#"
            SELECT * FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        {
            Ok(user) => user,
            Err(_) => return None,
        };
        Some(user.into())
    }

    async fn delete(&self, user_id: &ID) -> Option<User> {
        let user: UserRaw = match sqlx::query_as(
            r#"
            DELETE FROM users
            WHERE user_uid = $1
            RETURNING *
            "#,
        )
        .bind(user_id.as_str())
        .fetch_one(&self.pool)
        .await
        {
            Ok(user) => user,
            Err(_) => return None,
        };
        Some(user.into())
    }

    async fn count(&self) -> anyhow::Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
