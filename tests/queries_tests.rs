use ::party::db::*;
use ::party::model::*;
use ::party::ops::*;
use ::party::queries::food_queries::{self, UNKNOWN_FAMILY};
use ::party::queries::member_queries;
use ::party::queries::stats_queries::{self, AttendanceCounts};
use ::party::queries::PartySnapshot;
use tempfile::TempDir;

fn setup() -> (TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();
    (dir, store)
}

fn family_with(name: &str, statuses: &[MemberStatus]) -> Family {
    let mut family = Family::create(name.into());
    for (i, status) in statuses.iter().enumerate() {
        family
            .members
            .push(Member::create(format!("{name} {i}"), *status));
    }
    family
}

// ==========================================================================
// MEMBER QUERIES
// ==========================================================================

#[test]
fn group_members_has_every_bucket() {
    let family = family_with("Smiths", &[]);
    let groups = member_queries::group_members_by_status(&family);

    let keys: Vec<MemberStatus> = groups.keys().copied().collect();
    assert_eq!(keys, MemberStatus::ALL.to_vec());
    assert!(groups.values().all(|members| members.is_empty()));
}

#[test]
fn group_members_partitions_and_keeps_order() {
    let family = family_with(
        "Smiths",
        &[
            MemberStatus::Attending,
            MemberStatus::Invited,
            MemberStatus::Attending,
            MemberStatus::NotComing,
        ],
    );
    let groups = member_queries::group_members_by_status(&family);

    let attending: Vec<&str> = groups[&MemberStatus::Attending]
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(attending, vec!["Smiths 0", "Smiths 2"]);
    assert_eq!(groups[&MemberStatus::Invited].len(), 1);
    assert_eq!(groups[&MemberStatus::NotComing].len(), 1);
    assert!(groups[&MemberStatus::Swapping].is_empty());
}

#[test]
fn unset_status_groups_as_invited() {
    let family: Family = serde_json::from_str(
        r#"{"id":"f1","name":"Smiths","members":[{"id":"m1","name":"Ann"}]}"#,
    )
    .unwrap();
    let groups = member_queries::group_members_by_status(&family);
    assert_eq!(groups[&MemberStatus::Invited].len(), 1);
}

// ==========================================================================
// ATTENDANCE
// ==========================================================================

#[test]
fn count_attendance_counts_guests_and_swappers() {
    let families = vec![
        family_with("A", &[MemberStatus::Attending, MemberStatus::Swapping]),
        family_with("B", &[MemberStatus::Invited]),
    ];
    assert_eq!(
        stats_queries::count_attendance(&families),
        AttendanceCounts {
            guest_count: 2,
            swapper_count: 1
        }
    );
}

#[test]
fn count_attendance_ignores_not_coming() {
    let families = vec![family_with("A", &[MemberStatus::NotComing, MemberStatus::NotComing])];
    assert_eq!(
        stats_queries::count_attendance(&families),
        AttendanceCounts::default()
    );
}

// ==========================================================================
// FOOD QUERIES
// ==========================================================================

#[test]
fn group_food_by_family_name_in_first_appearance_order() {
    let smiths = Family::create("Smiths".into());
    let joneses = Family::create("Joneses".into());
    let families = vec![smiths.clone(), joneses.clone()];
    let food = vec![
        FoodItem::create(joneses.id.clone(), "Punch".into()),
        FoodItem::create(smiths.id.clone(), "Pie".into()),
        FoodItem::create(joneses.id.clone(), "Chips".into()),
    ];

    let groups = food_queries::group_food_by_family_name(&families, &food);
    let names: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Joneses", "Smiths"]);
    assert_eq!(groups["Joneses"].len(), 2);
    assert_eq!(groups["Smiths"][0].item, "Pie");
}

#[test]
fn unresolved_food_goes_to_unknown_family() {
    let smiths = Family::create("Smiths".into());
    let food = vec![
        FoodItem::create(Id::new("gone"), "Punch".into()),
        FoodItem::create(smiths.id.clone(), "Pie".into()),
    ];

    let groups = food_queries::group_food_by_family_name(&[smiths], &food);
    assert_eq!(groups.get_index(0).map(|(k, _)| k.as_str()), Some(UNKNOWN_FAMILY));
    assert_eq!(groups[UNKNOWN_FAMILY][0].item, "Punch");
}

#[test]
fn orphaned_food_lists_unresolved_items() {
    let smiths = Family::create("Smiths".into());
    let stray = FoodItem::create(Id::new("gone"), "Punch".into());
    let food = vec![FoodItem::create(smiths.id.clone(), "Pie".into()), stray.clone()];

    assert_eq!(food_queries::orphaned_food(&[smiths], &food), vec![stray]);
}

#[test]
fn food_for_family_matches_by_id() {
    let smiths = Family::create("Smiths".into());
    let pie = FoodItem::create(smiths.id.clone(), "Pie".into());
    let food = vec![pie.clone(), FoodItem::create(Id::new("x"), "Punch".into())];

    assert_eq!(food_queries::food_for_family(&food, &smiths.id), vec![pie]);
}

// ==========================================================================
// SNAPSHOT
// ==========================================================================

#[test]
fn snapshot_reflects_deleted_family_as_orphaned_food() {
    let (_dir, store) = setup();
    let smiths = family_ops::create_family(&store, "Smiths").unwrap();
    let joneses = family_ops::create_family(&store, "Joneses").unwrap();
    member_ops::add_member(&store, &smiths.id, "Ann", Some(MemberStatus::Swapping)).unwrap();
    member_ops::add_member(&store, &joneses.id, "Bob", Some(MemberStatus::Attending)).unwrap();
    let pie = food_ops::add_food(&store, smiths.id.as_str(), "Pie").unwrap();
    food_ops::add_food(&store, joneses.id.as_str(), "Punch").unwrap();

    family_ops::delete_family(&store, &smiths.id).unwrap();

    let snapshot = PartySnapshot::load(&store).unwrap();
    assert_eq!(
        snapshot.attendance(),
        AttendanceCounts {
            guest_count: 1,
            swapper_count: 0
        }
    );
    assert_eq!(snapshot.orphaned_food(), vec![pie.clone()]);
    assert_eq!(snapshot.food_by_family_name()[UNKNOWN_FAMILY], vec![pie]);
    assert_eq!(snapshot.food.len(), 2);
}

#[test]
fn summary_serializes_derived_views() {
    let smiths = family_with("Smiths", &[MemberStatus::Swapping, MemberStatus::Attending]);
    let food = vec![FoodItem::create(smiths.id.clone(), "Pie".into())];
    let snapshot = PartySnapshot::new(vec![smiths], food);

    let json = serde_json::to_value(snapshot.summary()).unwrap();
    assert_eq!(json["guestCount"], 2);
    assert_eq!(json["swapperCount"], 1);
    assert_eq!(json["families"][0]["memberCount"], 2);
    assert_eq!(json["families"][0]["membersByStatus"]["swapping"][0]["name"], "Smiths 0");
    assert_eq!(json["families"][0]["food"][0]["item"], "Pie");
    assert_eq!(json["foodByFamily"]["Smiths"][0]["item"], "Pie");
    assert_eq!(json["orphanedFood"], serde_json::json!([]));
}
