use crate::calendar::Calendar;
use crate::event::CalendarEvent;
use crate::shared::entity::ID;

/// The two kinds of access a caller can request on a resource.
///
/// Resolution is owner first: the owner of a `Calendar` or `CalendarEvent`
/// holds both modes regardless of the membership lists. Moderators hold
/// `Modify` and implicitly `View`, viewers hold `View` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    View,
    Modify,
}

/// Resolves whether `user_id` may perform `mode` on `event`.
///
/// Event permissions are derived transitively: holding `mode` on *any*
/// calendar the event belongs to is sufficient. `calendars` are the resolved
/// records for `event.calendar_ids`, callers pass whatever subset storage
/// could find.
pub fn event_permitted(
    user_id: &ID,
    event: &CalendarEvent,
    calendars: &[Calendar],
    mode: AccessMode,
) -> bool {
    if event.user_id == *user_id {
        return true;
    }
    calendars
        .iter()
        .filter(|c| event.calendar_ids.contains(&c.id))
        .any(|c| c.permits(user_id, mode))
}
