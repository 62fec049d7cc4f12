use serde::Serialize;

use crate::model::{Family, MemberStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceCounts {
    /// Members attending, including those joining the gift swap.
    pub guest_count: usize,
    pub swapper_count: usize,
}

pub fn count_attendance(families: &[Family]) -> AttendanceCounts {
    families
        .iter()
        .flat_map(|f| &f.members)
        .fold(AttendanceCounts::default(), |mut counts, member| {
            if member.status.is_guest() {
                counts.guest_count += 1;
            }
            if member.status == MemberStatus::Swapping {
                counts.swapper_count += 1;
            }
            counts
        })
}
