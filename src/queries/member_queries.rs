use indexmap::IndexMap;

use crate::model::{Family, Member, MemberStatus};

/// Members of one family bucketed by status. Every status has a bucket,
/// in `MemberStatus::ALL` order.
pub type StatusGroups = IndexMap<MemberStatus, Vec<Member>>;

pub fn group_members_by_status(family: &Family) -> StatusGroups {
    let mut groups: StatusGroups = MemberStatus::ALL
        .into_iter()
        .map(|status| (status, Vec::new()))
        .collect();

    for member in &family.members {
        groups.entry(member.status).or_default().push(member.clone());
    }

    groups
}
