use tracing::info;

use crate::db::{family_repo, Store};
use crate::error::{PartyError, PartyResult};
use crate::model::{Family, Id};
use crate::validation;

pub fn list_families(store: &Store) -> PartyResult<Vec<Family>> {
    family_repo::find_all(store)
}

pub fn find_family(store: &Store, family_id: &Id<Family>) -> PartyResult<Family> {
    family_repo::find_by_id(store, family_id)?
        .ok_or_else(|| PartyError::not_found("Family", family_id))
}

pub fn create_family(store: &Store, name: &str) -> PartyResult<Family> {
    let valid_name = validation::non_blank(name, "name")?;

    let family = Family::create(valid_name);
    family_repo::insert(store, &family)?;

    info!(family_id = %family.id, name = %family.name, "family created");
    Ok(family)
}

/// Merges the supplied fields into the family. `id` and `members` are never
/// replaced by an update.
pub fn update_family(
    store: &Store,
    family_id: &Id<Family>,
    name: Option<&str>,
) -> PartyResult<Family> {
    let name = name.map(|n| validation::non_blank(n, "name")).transpose()?;

    let updated = family_repo::modify(store, family_id, |family| {
        if let Some(n) = name {
            family.name = n;
        }
        Ok(family.clone())
    })?;

    info!(family_id = %family_id, "family updated");
    Ok(updated)
}

/// Removes the family and all of its members. Food items pledged by the
/// family are left in place. Deleting an unknown id succeeds.
pub fn delete_family(store: &Store, family_id: &Id<Family>) -> PartyResult<()> {
    if family_repo::delete(store, family_id)? {
        info!(family_id = %family_id, "family deleted");
    }
    Ok(())
}
