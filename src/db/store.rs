use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::collection::JsonCollection;
use crate::error::PartyResult;
use crate::model::{Family, FoodItem};

pub const FAMILIES_FILE: &str = "families.json";
pub const FOOD_FILE: &str = "food.json";

/// The two persisted collections, each backed by its own document in the
/// data directory.
pub struct Store {
    data_dir: PathBuf,
    families: JsonCollection<Family>,
    food: JsonCollection<FoodItem>,
}

impl Store {
    /// Opens the store rooted at `data_dir`, creating the directory if needed.
    /// Collection documents are created lazily on first write.
    pub fn open(data_dir: impl Into<PathBuf>) -> PartyResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        info!(data_dir = %data_dir.display(), "store opened");

        Ok(Self {
            families: JsonCollection::new(data_dir.join(FAMILIES_FILE)),
            food: JsonCollection::new(data_dir.join(FOOD_FILE)),
            data_dir,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn families(&self) -> &JsonCollection<Family> {
        &self.families
    }

    pub fn food(&self) -> &JsonCollection<FoodItem> {
        &self.food
    }
}
