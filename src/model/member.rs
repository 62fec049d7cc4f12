use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::ids::Id;

/// Per-person participation state. Any state may move to any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Invited,
    Swapping,
    Attending,
    NotComing,
}

impl MemberStatus {
    pub const ALL: [MemberStatus; 4] = [
        MemberStatus::Invited,
        MemberStatus::Swapping,
        MemberStatus::Attending,
        MemberStatus::NotComing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Invited => "invited",
            MemberStatus::Swapping => "swapping",
            MemberStatus::Attending => "attending",
            MemberStatus::NotComing => "notcoming",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Whether this member counts toward the guest total.
    pub fn is_guest(&self) -> bool {
        matches!(self, MemberStatus::Attending | MemberStatus::Swapping)
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person belonging to exactly one family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: Id<Member>,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: MemberStatus,
}

impl Member {
    pub fn create(name: String, status: MemberStatus) -> Self {
        Self {
            id: Id::generate(),
            name,
            status,
        }
    }
}

// Stored documents may carry a null or unknown status; those read as `invited`.
fn lenient_status<'de, D>(deserializer: D) -> Result<MemberStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(MemberStatus::parse)
        .unwrap_or_default())
}
