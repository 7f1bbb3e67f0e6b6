use super::IEventRepo;
use almanac_domain::{CalendarEvent, ID};
use sqlx::{FromRow, PgPool};
use tracing::error;

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: String,
    user_uid: String,
    name: String,
    description: String,
    timestamp: i64,
    calendar_uids: Vec<String>,
    created: i64,
    updated: i64,
}

fn to_strings(ids: &[ID]) -> Vec<String> {
    ids.iter().map(|id| id.as_str().to_string()).collect()
}

impl From<EventRaw> for CalendarEvent {
    fn from(e: EventRaw) -> Self {
        Self {
            id: e.event_uid.parse().unwrap(),
            user_id: e.user_uid.parse().unwrap(),
            name: e.name,
            description: e.description,
            timestamp: e.timestamp,
            calendar_ids: e
                .calendar_uids
                .into_iter()
                .map(|id| id.parse().unwrap())
                .collect(),
            created: e.created,
            updated: e.updated,
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn insert(&self, event: &CalendarEvent) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO events(event_uid, user_uid, name, description, timestamp, calendar_uids, created, updated)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(event.id.as_str())
        .bind(event.user_id.as_str())
        .bind(&event.name)
        .bind(&event.description)
        .bind(event.timestamp)
        .bind(to_strings(&event.calendar_ids))
        .bind(event.created)
        .bind(event.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, event: &CalendarEvent) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE events
            SET name = $2,
            description = $3,
            timestamp = $4,
            calendar_uids = $5,
            updated = $6
            WHERE event_uid = $1
            "#,
        )
        .bind(event.id.as_str())
        .bind(&event.name)
        .bind(&event.description)
        .bind(event.timestamp)
        .bind(to_strings(&event.calendar_ids))
        .bind(event.updated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to update event: {:?}", e);
            e
        })?;
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<CalendarEvent> {
        let event: EventRaw = match sqlx::query_as(
            r#"
            SELECT * FROM events
            WHERE event_uid = $1
            "#,
        )
        .bind(event_id.as_str())
        .fetch_one(&self.pool)
        .await
        {
            Ok(event) => event,
            Err(_) => return None,
        };
        Some(event.into())
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<CalendarEvent> {
        let events: Vec<EventRaw> = sqlx::query_as(
            r#"
            SELECT * FROM events
            WHERE user_uid = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        events.into_iter().map(|e| e.into()).collect()
    }

    async fn find_by_calendars(&self, calendar_ids: &[ID]) -> Vec<CalendarEvent> {
        let events: Vec<EventRaw> = sqlx::query_as(
            r#"
            SELECT * FROM events
            WHERE calendar_uids && $1
            "#,
        )
        .bind(to_strings(calendar_ids))
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        events.into_iter().map(|e| e.into()).collect()
    }

    async fn detach_calendar(&self, calendar_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE events
            SET calendar_uids = array_remove(calendar_uids, $1)
            WHERE $1 = ANY(calendar_uids)
            "#,
        )
        .bind(calendar_id.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, event_id: &ID) -> Option<CalendarEvent> {
        let event: EventRaw = match sqlx::query_as(
            r#"
            DELETE FROM events
            WHERE event_uid = $1
            RETURNING *
            "#,
        )
        .bind(event_id.as_str())
        .fetch_one(&self.pool)
        .await
        {
            Ok(event) => event,
            Err(_) => return None,
        };
        Some(event.into())
    }

    async fn count(&self) -> anyhow::Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
