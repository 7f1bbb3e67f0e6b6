use super::ICalendarRepo;
use almanac_domain::{Calendar, ID};
use sqlx::{FromRow, PgPool};
use tracing::error;

pub struct PostgresCalendarRepo {
    pool: PgPool,
}

impl PostgresCalendarRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CalendarRaw {
    calendar_uid: String,
    user_uid: String,
    name: String,
    view_users: Vec<String>,
    mod_users: Vec<String>,
}

fn to_ids(raw: Vec<String>) -> Vec<ID> {
    raw.into_iter().map(|id| id.parse().unwrap()).collect()
}

fn to_strings(ids: &[ID]) -> Vec<String> {
    ids.iter().map(|id| id.as_str().to_string()).collect()
}

impl From<CalendarRaw> for Calendar {
    fn from(e: CalendarRaw) -> Self {
        Self {
            id: e.calendar_uid.parse().unwrap(),
            user_id: e.user_uid.parse().unwrap(),
            name: e.name,
            view_users: to_ids(e.view_users),
            mod_users: to_ids(e.mod_users),
        }
    }
}

#[async_trait::async_trait]
impl ICalendarRepo for PostgresCalendarRepo {
    async fn insert(&self, calendar: &Calendar) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO calendars(calendar_uid, user_uid, name, view_users, mod_users)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(calendar.id.as_str())
        .bind(calendar.user_id.as_str())
        .bind(&calendar.name)
        .bind(to_strings(&calendar.view_users))
        .bind(to_strings(&calendar.mod_users))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, calendar: &Calendar) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE calendars
            SET name = $2,
            view_users = $3,
            mod_users = $4
            WHERE calendar_uid = $1
            "#,
        )
        .bind(calendar.id.as_str())
        .bind(&calendar.name)
        .bind(to_strings(&calendar.view_users))
        .bind(to_strings(&calendar.mod_users))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to update calendar: {:?}", e);
            e
        })?;
        Ok(())
    }

    async fn find(&self, calendar_id: &ID) -> Option<Calendar> {
        let calendar: CalendarRaw = match sqlx::query_as(
            r#"
            SELECT * FROM calendars
            WHERE calendar_uid = $1
            "#,
        )
        .bind(calendar_id.as_str())
        .fetch_one(&self.pool)
        .await
        {
            Ok(cal) => cal,
            Err(_) => return None,
        };
        Some(calendar.into())
    }

    async fn find_many(&self, calendar_ids: &[ID]) -> Vec<Calendar> {
        let calendars: Vec<CalendarRaw> = sqlx::query_as(
            r#"
            SELECT * FROM calendars
            WHERE calendar_uid = ANY($1)
            "#,
        )
        .bind(to_strings(calendar_ids))
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        calendars.into_iter().map(|c| c.into()).collect()
    }

    async fn find_for_user(&self, user_id: &ID) -> Vec<Calendar> {
        let calendars: Vec<CalendarRaw> = sqlx::query_as(
            r#"
            SELECT * FROM calendars
            WHERE user_uid = $1
                OR $1 = ANY(view_users)
                OR $1 = ANY(mod_users)
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        calendars.into_iter().map(|c| c.into()).collect()
    }

    async fn delete(&self, calendar_id: &ID) -> Option<Calendar> {
        let calendar: CalendarRaw = match sqlx::query_as(
            r#"
            DELETE FROM calendars
            WHERE calendar_uid = $1
            RETURNING *
            "#,
        )
        .bind(calendar_id.as_str())
        .fetch_one(&self.pool)
        .await
        {
            Ok(cal) => cal,
            Err(_) => return None,
        };
        Some(calendar.into())
    }

    async fn count(&self) -> anyhow::Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM calendars")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
