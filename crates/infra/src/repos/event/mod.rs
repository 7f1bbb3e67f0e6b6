mod inmemory;
mod postgres;

use almanac_domain::{CalendarEvent, ID};
pub use inmemory::InMemoryEventRepo;
pub use postgres::PostgresEventRepo;

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, event: &CalendarEvent) -> anyhow::Result<()>;
    async fn save(&self, event: &CalendarEvent) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> Option<CalendarEvent>;
    /// Events owned by the user.
    async fn find_by_user(&self, user_id: &ID) -> Vec<CalendarEvent>;
    /// Events attached to any of the given calendars.
    async fn find_by_calendars(&self, calendar_ids: &[ID]) -> Vec<CalendarEvent>;
    /// Removes the calendar from every event that references it. The
    /// events themselves survive.
    async fn detach_calendar(&self, calendar_id: &ID) -> anyhow::Result<()>;
    async fn delete(&self, event_id: &ID) -> Option<CalendarEvent>;
    async fn count(&self) -> anyhow::Result<i64>;
}
