use serde::{Deserialize, Serialize};

pub mod get_service_health {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        pub users: i64,
        pub calendars: i64,
        pub events: i64,
        /// Server time as unix millis.
        pub time: i64,
    }
}
