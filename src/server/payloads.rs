//! Request and response bodies for the JSON API.
//!
//! Fields are optional so that a missing value surfaces as a validation
//! error from the ops layer rather than a deserialization rejection.
//! Unknown fields (such as a family-level `status`) are ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct NewFamily {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FamilyPatch {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewMember {
    pub name: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFood {
    pub family_id: Option<String>,
    pub item: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Success {
    pub success: bool,
}

impl Success {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
