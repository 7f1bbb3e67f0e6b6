use almanac_domain::{CalendarEvent, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventDTO {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub description: String,
    pub timestamp: i64,
    pub calendar_ids: Vec<ID>,
    pub created: i64,
    pub updated: i64,
}

impl EventDTO {
    pub fn new(event: CalendarEvent) -> Self {
        Self {
            id: event.id,
            user_id: event.user_id,
            name: event.name,
            description: event.description,
            timestamp: event.timestamp,
            calendar_ids: event.calendar_ids,
            created: event.created,
            updated: event.updated,
        }
    }
}
