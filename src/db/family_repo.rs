use crate::error::{PartyError, PartyResult};
use crate::model::{Family, Id};

use super::store::Store;

pub fn find_all(store: &Store) -> PartyResult<Vec<Family>> {
    store.families().load()
}

pub fn find_by_id(store: &Store, id: &Id<Family>) -> PartyResult<Option<Family>> {
    Ok(find_all(store)?.into_iter().find(|f| &f.id == id))
}

pub fn insert(store: &Store, family: &Family) -> PartyResult<()> {
    store.families().modify(|families| {
        families.push(family.clone());
        Ok(())
    })
}

/// Applies `f` to the stored family with the given id and persists the
/// whole collection. Fails with `NotFound` (writing nothing) if absent.
pub fn modify<R>(
    store: &Store,
    id: &Id<Family>,
    f: impl FnOnce(&mut Family) -> PartyResult<R>,
) -> PartyResult<R> {
    store.families().modify(|families| {
        let family = families
            .iter_mut()
            .find(|fam| &fam.id == id)
            .ok_or_else(|| PartyError::not_found("Family", id))?;
        f(family)
    })
}

/// Removes the family (and with it, its members). Returns whether a record
/// was removed.
pub fn delete(store: &Store, id: &Id<Family>) -> PartyResult<bool> {
    store.families().modify(|families| {
        let before = families.len();
        families.retain(|f| &f.id != id);
        Ok(families.len() != before)
    })
}
