mod inmemory;
mod postgres;

use almanac_domain::{Calendar, ID};
pub use inmemory::InMemoryCalendarRepo;
pub use postgres::PostgresCalendarRepo;

#[async_trait::async_trait]
pub trait ICalendarRepo: Send + Sync {
    async fn insert(&self, calendar: &Calendar) -> anyhow::Result<()>;
    async fn save(&self, calendar: &Calendar) -> anyhow::Result<()>;
    async fn find(&self, calendar_id: &ID) -> Option<Calendar>;
    async fn find_many(&self, calendar_ids: &[ID]) -> Vec<Calendar>;
    /// Calendars the user owns or appears in as viewer or moderator.
    async fn find_for_user(&self, user_id: &ID) -> Vec<Calendar>;
    async fn delete(&self, calendar_id: &ID) -> Option<Calendar>;
    async fn count(&self) -> anyhow::Result<i64>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use almanac_domain::{Calendar, Entity, ID};

    #[tokio::test]
    async fn create_and_delete() {
        let ctx = setup_context().await;
        let user_id = ID::random().unwrap();
        let calendar = Calendar::new(&user_id, "Family").unwrap();

        // Insert
        assert!(ctx.repos.calendars.insert(&calendar).await.is_ok());

        // Different find methods
        let res = ctx.repos.calendars.find(&calendar.id).await.unwrap();
        assert!(res.eq(&calendar));
        let res = ctx.repos.calendars.find_for_user(&user_id).await;
        assert!(res[0].eq(&calendar));

        // Delete
        let res = ctx.repos.calendars.delete(&calendar.id).await;
        assert!(res.is_some());
        assert!(res.unwrap().eq(&calendar));

        // Find
        assert!(ctx.repos.calendars.find(&calendar.id).await.is_none());
    }

    #[tokio::test]
    async fn update() {
        let ctx = setup_context().await;
        let user_id = ID::random().unwrap();
        let viewer_id = ID::random().unwrap();
        let mut calendar = Calendar::new(&user_id, "Family").unwrap();

        // Insert
        assert!(ctx.repos.calendars.insert(&calendar).await.is_ok());

        calendar.view_users.push(viewer_id.clone());

        // Save
        assert!(ctx.repos.calendars.save(&calendar).await.is_ok());

        // Find
        assert!(ctx
            .repos
            .calendars
            .find(&calendar.id)
            .await
            .unwrap()
            .eq(&calendar));

        // Membership makes the calendar visible to the viewer
        let res = ctx.repos.calendars.find_for_user(&viewer_id).await;
        assert!(res[0].eq(&calendar));
    }
}
