use tracing::info;

use crate::db::{family_repo, Store};
use crate::error::{PartyError, PartyResult};
use crate::model::{Family, Id, Member, MemberStatus};
use crate::validation;

pub fn add_member(
    store: &Store,
    family_id: &Id<Family>,
    name: &str,
    status: Option<MemberStatus>,
) -> PartyResult<Member> {
    let valid_name = validation::non_blank(name, "name")?;
    let member = Member::create(valid_name, status.unwrap_or_default());

    family_repo::modify(store, family_id, |family| {
        family.members.push(member.clone());
        Ok(())
    })?;

    info!(family_id = %family_id, member_id = %member.id, "member added");
    Ok(member)
}

/// Merges the supplied fields into the member.
pub fn update_member(
    store: &Store,
    family_id: &Id<Family>,
    member_id: &Id<Member>,
    name: Option<&str>,
    status: Option<MemberStatus>,
) -> PartyResult<Member> {
    let name = name.map(|n| validation::non_blank(n, "name")).transpose()?;

    let updated = family_repo::modify(store, family_id, |family| {
        let member = family
            .member_mut(member_id)
            .ok_or_else(|| PartyError::not_found("Member", member_id))?;

        if let Some(n) = name {
            member.name = n;
        }
        if let Some(s) = status {
            member.status = s;
        }
        Ok(member.clone())
    })?;

    info!(family_id = %family_id, member_id = %member_id, status = %updated.status, "member updated");
    Ok(updated)
}

pub fn update_member_status(
    store: &Store,
    family_id: &Id<Family>,
    member_id: &Id<Member>,
    status: MemberStatus,
) -> PartyResult<Member> {
    update_member(store, family_id, member_id, None, Some(status))
}

/// Removes a member from an existing family. The family must exist; an
/// unknown member id succeeds without changing anything.
pub fn remove_member(
    store: &Store,
    family_id: &Id<Family>,
    member_id: &Id<Member>,
) -> PartyResult<()> {
    let removed = family_repo::modify(store, family_id, |family| {
        let before = family.members.len();
        family.members.retain(|m| &m.id != member_id);
        Ok(family.members.len() != before)
    })?;

    if removed {
        info!(family_id = %family_id, member_id = %member_id, "member removed");
    }
    Ok(())
}
