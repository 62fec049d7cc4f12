use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::payloads::{FamilyPatch, MemberPatch, NewFamily, NewFood, NewMember, Success};
use super::state::AppState;
use crate::error::PartyResult;
use crate::model::{Family, FoodItem, Id, Member, PartyDetails};
use crate::ops::{family_ops, food_ops, member_ops};
use crate::queries::{PartySnapshot, PartySummary};
use crate::validation;

// ==========================================================================
// FAMILIES
// ==========================================================================

pub async fn list_families(State(state): State<AppState>) -> PartyResult<Json<Vec<Family>>> {
    state
        .run("list families", family_ops::list_families)
        .await
        .map(Json)
}

pub async fn create_family(
    State(state): State<AppState>,
    payload: Result<Json<NewFamily>, JsonRejection>,
) -> PartyResult<Json<Family>> {
    let Json(payload) = payload?;
    let name = validation::required(payload.name.as_deref(), "name")?;

    state
        .run("create family", move |store| {
            family_ops::create_family(store, &name)
        })
        .await
        .map(Json)
}

pub async fn update_family(
    State(state): State<AppState>,
    Path(family_id): Path<String>,
    patch: Result<Json<FamilyPatch>, JsonRejection>,
) -> PartyResult<Json<Family>> {
    let Json(patch) = patch?;
    let family_id = Id::new(family_id);

    state
        .run("update family", move |store| {
            family_ops::update_family(store, &family_id, patch.name.as_deref())
        })
        .await
        .map(Json)
}

pub async fn delete_family(
    State(state): State<AppState>,
    Path(family_id): Path<String>,
) -> PartyResult<Json<Success>> {
    let family_id = Id::new(family_id);

    state
        .run("delete family", move |store| {
            family_ops::delete_family(store, &family_id)
        })
        .await?;
    Ok(Json(Success::ok()))
}

// ==========================================================================
// MEMBERS
// ==========================================================================

pub async fn add_member(
    State(state): State<AppState>,
    Path(family_id): Path<String>,
    payload: Result<Json<NewMember>, JsonRejection>,
) -> PartyResult<Json<Member>> {
    let Json(payload) = payload?;
    let family_id = Id::new(family_id);
    let name = validation::required(payload.name.as_deref(), "name")?;
    let status = validation::optional_member_status(payload.status.as_deref())?;

    state
        .run("add member", move |store| {
            member_ops::add_member(store, &family_id, &name, status)
        })
        .await
        .map(Json)
}

pub async fn update_member(
    State(state): State<AppState>,
    Path((family_id, member_id)): Path<(String, String)>,
    patch: Result<Json<MemberPatch>, JsonRejection>,
) -> PartyResult<Json<Member>> {
    let Json(patch) = patch?;
    let family_id = Id::new(family_id);
    let member_id = Id::new(member_id);
    let status = validation::optional_member_status(patch.status.as_deref())?;

    state
        .run("update member", move |store| {
            member_ops::update_member(store, &family_id, &member_id, patch.name.as_deref(), status)
        })
        .await
        .map(Json)
}

pub async fn remove_member(
    State(state): State<AppState>,
    Path((family_id, member_id)): Path<(String, String)>,
) -> PartyResult<Json<Success>> {
    let family_id = Id::new(family_id);
    let member_id = Id::new(member_id);

    state
        .run("remove member", move |store| {
            member_ops::remove_member(store, &family_id, &member_id)
        })
        .await?;
    Ok(Json(Success::ok()))
}

// ==========================================================================
// FOOD
// ==========================================================================

pub async fn list_food(State(state): State<AppState>) -> PartyResult<Json<Vec<FoodItem>>> {
    state.run("list food", food_ops::list_food).await.map(Json)
}

pub async fn add_food(
    State(state): State<AppState>,
    payload: Result<Json<NewFood>, JsonRejection>,
) -> PartyResult<Json<FoodItem>> {
    let Json(payload) = payload?;
    let family_id = validation::required(payload.family_id.as_deref(), "familyId")?;
    let item = validation::required(payload.item.as_deref(), "item")?;

    state
        .run("add food", move |store| {
            food_ops::add_food(store, &family_id, &item)
        })
        .await
        .map(Json)
}

pub async fn remove_food(
    State(state): State<AppState>,
    Path(food_id): Path<String>,
) -> PartyResult<Json<Success>> {
    let food_id = Id::new(food_id);

    state
        .run("remove food", move |store| food_ops::remove_food(store, &food_id))
        .await?;
    Ok(Json(Success::ok()))
}

// ==========================================================================
// PARTY
// ==========================================================================

pub async fn party_config(State(state): State<AppState>) -> Json<PartyDetails> {
    Json(state.party.as_ref().clone())
}

pub async fn party_summary(State(state): State<AppState>) -> PartyResult<Json<PartySummary>> {
    state
        .run("summarize party", |store| {
            PartySnapshot::load(store).map(|snapshot| snapshot.summary())
        })
        .await
        .map(Json)
}
