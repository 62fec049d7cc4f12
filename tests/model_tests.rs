use ::party::model::*;

// ==========================================================================
// ID TESTS
// ==========================================================================

#[test]
fn id_generate_creates_unique_ids() {
    let id1 = Id::<Family>::generate();
    let id2 = Id::<Family>::generate();
    assert_ne!(id1, id2);
}

#[test]
fn id_is_type_safe() {
    let family_id = Id::<Family>::generate();
    let member_id = Id::<Member>::generate();
    // Different types at compile time; the generated values differ too
    assert_ne!(family_id.value, member_id.value);
}

// ==========================================================================
// FAMILY TESTS
// ==========================================================================

#[test]
fn family_create_starts_without_members() {
    let family = Family::create("Smiths".into());
    assert_eq!(family.name, "Smiths");
    assert!(family.members.is_empty());
}

#[test]
fn family_member_lookup() {
    let mut family = Family::create("Smiths".into());
    let ann = Member::create("Ann".into(), MemberStatus::Attending);
    family.members.push(ann.clone());

    assert!(family.member_mut(&Id::generate()).is_none());

    family.member_mut(&ann.id).unwrap().status = MemberStatus::NotComing;
    assert_eq!(family.members[0].status, MemberStatus::NotComing);
}

#[test]
fn family_serializes_to_wire_shape() {
    let mut family = Family {
        id: Id::new("f1"),
        name: "Smiths".into(),
        members: Vec::new(),
    };
    family.members.push(Member {
        id: Id::new("m1"),
        name: "Ann".into(),
        status: MemberStatus::Swapping,
    });

    let json = serde_json::to_value(&family).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "f1",
            "name": "Smiths",
            "members": [{ "id": "m1", "name": "Ann", "status": "swapping" }]
        })
    );
}

#[test]
fn legacy_family_status_is_ignored() {
    let family: Family = serde_json::from_str(
        r#"{"id":"1733097600000","name":"Smiths","status":"confirmed","members":[]}"#,
    )
    .unwrap();
    assert_eq!(family.id.as_str(), "1733097600000");
    assert!(family.members.is_empty());
}

#[test]
fn family_without_members_field_reads_empty() {
    let family: Family = serde_json::from_str(r#"{"id":"1","name":"Smiths"}"#).unwrap();
    assert!(family.members.is_empty());
}

// ==========================================================================
// MEMBER TESTS
// ==========================================================================

#[test]
fn member_status_defaults_to_invited() {
    assert_eq!(MemberStatus::default(), MemberStatus::Invited);
}

#[test]
fn member_status_display_matches_wire_value() {
    assert_eq!(MemberStatus::NotComing.to_string(), "notcoming");
    assert_eq!(MemberStatus::Attending.to_string(), "attending");
}

// ==========================================================================
// FOOD TESTS
// ==========================================================================

#[test]
fn food_item_uses_camel_case_family_id() {
    let item = FoodItem {
        id: Id::new("x1"),
        family_id: Id::new("f1"),
        item: "Pie".into(),
    };
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "id": "x1", "familyId": "f1", "item": "Pie" })
    );
}

#[test]
fn food_item_owner_resolves_optionally() {
    let smiths = Family::create("Smiths".into());
    let pie = FoodItem::create(smiths.id.clone(), "Pie".into());
    let stray = FoodItem::create(Id::generate(), "Punch".into());
    let families = vec![smiths.clone()];

    assert_eq!(pie.owner(&families).map(|f| &f.name), Some(&smiths.name));
    assert!(stray.owner(&families).is_none());
}

// ==========================================================================
// PARTY DETAILS TESTS
// ==========================================================================

#[test]
fn party_details_serialize_camel_case() {
    let details = PartyDetails::default();
    let json = serde_json::to_value(&details).unwrap();
    assert_eq!(json["date"], "2025-12-13T18:00:00");
    assert_eq!(json["giftSwap"]["name"], "Yankee Swap");
    assert!(json["giftSwap"]["rules"].as_array().unwrap().len() > 1);
    assert!(json.get("location").is_none());
}
