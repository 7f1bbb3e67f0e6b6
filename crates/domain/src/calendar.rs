use crate::access::AccessMode;
use crate::shared::entity::{Entity, ID};
use almanac_utils::RandomSourceError;

#[derive(Debug, Clone)]
pub struct Calendar {
    pub id: ID,
    /// Owner of the calendar, implicitly holds full rights.
    pub user_id: ID,
    pub name: String,
    /// Users granted read access. Set semantics, persisted order is
    /// irrelevant.
    pub view_users: Vec<ID>,
    /// Users granted read-write access. Moderators may also view.
    pub mod_users: Vec<ID>,
}

impl Calendar {
    pub fn new(user_id: &ID, name: &str) -> Result<Self, RandomSourceError> {
        Ok(Self {
            id: ID::random()?,
            user_id: user_id.clone(),
            name: name.to_string(),
            view_users: vec![user_id.clone()],
            mod_users: vec![user_id.clone()],
        })
    }

    /// Resolves whether `user_id` may perform `mode` on this calendar.
    /// Owner first, then the membership sets.
    pub fn permits(&self, user_id: &ID, mode: AccessMode) -> bool {
        if self.user_id == *user_id {
            return true;
        }
        match mode {
            AccessMode::Modify => self.mod_users.contains(user_id),
            AccessMode::View => {
                self.view_users.contains(user_id) || self.mod_users.contains(user_id)
            }
        }
    }

    /// Replaces both membership lists, deduplicating them. The owner keeps
    /// full rights whether or not the new lists mention them.
    pub fn set_members(&mut self, view_users: Vec<ID>, mod_users: Vec<ID>) {
        self.view_users = dedup(view_users);
        self.mod_users = dedup(mod_users);
    }
}

fn dedup(mut ids: Vec<ID>) -> Vec<ID> {
    let mut seen = Vec::with_capacity(ids.len());
    ids.retain(|id| {
        if seen.contains(id) {
            false
        } else {
            seen.push(id.clone());
            true
        }
    });
    ids
}

impl Entity for Calendar {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn membership_lists_are_deduplicated() {
        let owner = ID::random().unwrap();
        let viewer = ID::random().unwrap();
        let mut calendar = Calendar::new(&owner, "Family").unwrap();

        calendar.set_members(
            vec![viewer.clone(), viewer.clone(), owner.clone()],
            vec![owner.clone()],
        );

        assert_eq!(calendar.view_users, vec![viewer, owner.clone()]);
        assert_eq!(calendar.mod_users, vec![owner]);
    }

    #[test]
    fn owner_rights_survive_list_replacement() {
        let owner = ID::random().unwrap();
        let mut calendar = Calendar::new(&owner, "Family").unwrap();

        calendar.set_members(Vec::new(), Vec::new());

        assert!(calendar.permits(&owner, AccessMode::View));
        assert!(calendar.permits(&owner, AccessMode::Modify));
    }
}
