use crate::shared::entity::{Entity, ID};
use almanac_utils::RandomSourceError;

#[derive(Debug, Clone)]
pub struct CalendarEvent {
    pub id: ID,
    /// Owner of the event, implicitly holds full rights.
    pub user_id: ID,
    pub name: String,
    pub description: String,
    /// Unix timestamp in millis.
    pub timestamp: i64,
    /// Calendars this event belongs to. Set semantics, an event may be
    /// attached to several calendars.
    pub calendar_ids: Vec<ID>,
    pub created: i64,
    pub updated: i64,
}

impl CalendarEvent {
    pub fn new(
        user_id: &ID,
        name: &str,
        description: &str,
        timestamp: i64,
        calendar_ids: Vec<ID>,
        now: i64,
    ) -> Result<Self, RandomSourceError> {
        Ok(Self {
            id: ID::random()?,
            user_id: user_id.clone(),
            name: name.to_string(),
            description: description.to_string(),
            timestamp,
            calendar_ids,
            created: now,
            updated: now,
        })
    }

    pub fn remove_calendar(&mut self, calendar_id: &ID) {
        self.calendar_ids.retain(|id| id != calendar_id);
    }
}

impl Entity for CalendarEvent {
    fn id(&self) -> &ID {
        &self.id
    }
}
