use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::member::Member;

/// A top-level invitee unit. Owns its members outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub id: Id<Family>,
    pub name: String,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Family {
    pub fn create(name: String) -> Self {
        Self {
            id: Id::generate(),
            name,
            members: Vec::new(),
        }
    }

    pub fn member_mut(&mut self, member_id: &Id<Member>) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| &m.id == member_id)
    }
}
