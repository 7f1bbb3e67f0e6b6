use super::ICalendarRepo;
use crate::repos::shared::inmemory_repo::*;
use almanac_domain::{Calendar, ID};

pub struct InMemoryCalendarRepo {
    calendars: std::sync::Mutex<Vec<Calendar>>,
}

impl InMemoryCalendarRepo {
    pub fn new() -> Self {
        Self {
            calendars: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl ICalendarRepo for InMemoryCalendarRepo {
    async fn insert(&self, calendar: &Calendar) -> anyhow::Result<()> {
        insert(calendar, &self.calendars);
        Ok(())
    }

    async fn save(&self, calendar: &Calendar) -> anyhow::Result<()> {
        save(calendar, &self.calendars);
        Ok(())
    }

    async fn find(&self, calendar_id: &ID) -> Option<Calendar> {
        find(calendar_id, &self.calendars)
    }

    async fn find_many(&self, calendar_ids: &[ID]) -> Vec<Calendar> {
        find_by(&self.calendars, |c: &Calendar| {
            calendar_ids.contains(&c.id)
        })
    }

    async fn find_for_user(&self, user_id: &ID) -> Vec<Calendar> {
        find_by(&self.calendars, |c: &Calendar| {
            c.user_id == *user_id
                || c.view_users.contains(user_id)
                || c.mod_users.contains(user_id)
        })
    }

    async fn delete(&self, calendar_id: &ID) -> Option<Calendar> {
        delete(calendar_id, &self.calendars)
    }

    async fn count(&self) -> anyhow::Result<i64> {
        Ok(count(&self.calendars))
    }
}
