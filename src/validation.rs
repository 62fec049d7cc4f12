use crate::error::{PartyError, PartyResult};
use crate::model::MemberStatus;

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> PartyResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(PartyError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Like `non_blank`, but a missing value counts as blank.
pub fn required(value: Option<&str>, field: &str) -> PartyResult<String> {
    non_blank(value.unwrap_or_default(), field)
}

/// Parses a member status, rejecting anything outside the four known states.
pub fn member_status(value: &str) -> PartyResult<MemberStatus> {
    MemberStatus::parse(value.trim()).ok_or_else(|| PartyError::InvalidStatus {
        value: value.to_string(),
    })
}

/// Parses an optional member status; `None` stays `None`.
pub fn optional_member_status(value: Option<&str>) -> PartyResult<Option<MemberStatus>> {
    match value {
        None => Ok(None),
        Some(s) => member_status(s).map(Some),
    }
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
