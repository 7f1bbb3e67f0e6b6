mod access;
mod calendar;
mod event;
mod shared;
mod user;

pub use access::{event_permitted, AccessMode};
pub use calendar::Calendar;
pub use event::CalendarEvent;
pub use shared::entity::{Entity, InvalidIDError, ID, LABEL_LEN};
pub use user::{Token, User, TOKEN_LEN};
