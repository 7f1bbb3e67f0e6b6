use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use almanac_domain::{CalendarEvent, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<CalendarEvent>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, event: &CalendarEvent) -> anyhow::Result<()> {
        insert(event, &self.events);
        Ok(())
    }

    async fn save(&self, event: &CalendarEvent) -> anyhow::Result<()> {
        save(event, &self.events);
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<CalendarEvent> {
        find(event_id, &self.events)
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<CalendarEvent> {
        find_by(&self.events, |e: &CalendarEvent| e.user_id == *user_id)
    }

    async fn find_by_calendars(&self, calendar_ids: &[ID]) -> Vec<CalendarEvent> {
        find_by(&self.events, |e: &CalendarEvent| {
            e.calendar_ids.iter().any(|id| calendar_ids.contains(id))
        })
    }

    async fn detach_calendar(&self, calendar_id: &ID) -> anyhow::Result<()> {
        let mut events = self.events.lock().unwrap();
        for event in events.iter_mut() {
            event.remove_calendar(calendar_id);
        }
        Ok(())
    }

    async fn delete(&self, event_id: &ID) -> Option<CalendarEvent> {
        delete(event_id, &self.events)
    }

    async fn count(&self) -> anyhow::Result<i64> {
        Ok(count(&self.events))
    }
}
