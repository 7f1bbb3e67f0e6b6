use almanac_domain::{Calendar, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDTO {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub view_users: Vec<ID>,
    pub mod_users: Vec<ID>,
}

impl CalendarDTO {
    pub fn new(calendar: Calendar) -> Self {
        Self {
            id: calendar.id,
            user_id: calendar.user_id,
            name: calendar.name,
            view_users: calendar.view_users,
            mod_users: calendar.mod_users,
        }
    }
}
