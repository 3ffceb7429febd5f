//! The ledger store.
//!
//! `LedgerStore` owns the in-memory snapshot (foods, entries, settings) and
//! keeps a durable copy synchronized through a [`BlobStore`]. Mutations take
//! `&mut self`, so exclusive access is enforced by ownership; a
//! multithreaded embedder wraps the whole store in a single coarse `Mutex`
//! (settings, foods, and entries persist together as one document, so there
//! is nothing to lock at a finer grain).
//!
//! The in-memory snapshot is the source of truth for a running session. A
//! failed save is reported through the returned `Result`, but the mutation
//! it followed stays applied and is never rolled back.

use chrono::Utc;
use uuid::Uuid;

use crate::error::{LedgerError, Result};
use crate::parse::{clamp_non_negative, clamp_quantity};
use crate::seed::seed_snapshot;
use crate::storage::BlobStore;
use crate::types::{Food, FoodEntry, LedgerSnapshot, MealType, NewFood, SettingsUpdate, UserSettings};

/// Fixed key the ledger document is stored under.
pub const DOCUMENT_KEY: &str = "food-storage";

/// Today's calendar day in the ledger's fixed YYYY-MM-DD encoding (UTC).
pub fn today_string() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// The nutrition ledger: canonical collections plus synchronized
/// persistence.
pub struct LedgerStore<S: BlobStore> {
    snapshot: LedgerSnapshot,
    store: S,
}

impl<S: BlobStore> LedgerStore<S> {
    /// Open the ledger backed by `store`.
    ///
    /// Loads the document under [`DOCUMENT_KEY`]. An absent document, a
    /// load failure, or an undeserializable document all fall back to the
    /// default seed snapshot; the corrupt data is treated as lost rather
    /// than crashing.
    pub fn open(store: S) -> Self {
        let snapshot = match store.load(DOCUMENT_KEY) {
            Ok(Some(document)) => {
                serde_json::from_str(&document).unwrap_or_else(|_| seed_snapshot())
            }
            _ => seed_snapshot(),
        };
        Self { snapshot, store }
    }

    /// Open with an explicit starting snapshot, skipping the load. Useful
    /// for embedders that already hold a snapshot (e.g., historical views).
    pub fn with_snapshot(store: S, snapshot: LedgerSnapshot) -> Self {
        Self { snapshot, store }
    }

    /// Serialize the full snapshot and hand it to the blob store.
    ///
    /// Called after every mutation, from the single mutation path, so
    /// writes land in mutation order.
    fn persist(&mut self) -> Result<()> {
        let document = serde_json::to_string(&self.snapshot)?;
        self.store.save(DOCUMENT_KEY, &document)
    }

    // --- Mutations ---

    /// Add a food to the catalog.
    ///
    /// Numeric fields are clamped non-negative (the tolerant-input policy:
    /// bad values become 0, never an error). The food gets a fresh unique
    /// id and is appended in insertion order; names are not deduplicated.
    ///
    /// # Errors
    ///
    /// Only a persistence failure. The food is in the catalog either way.
    pub fn add_food(&mut self, draft: NewFood) -> Result<Food> {
        let food = Food {
            id: generate_id(),
            name: draft.name,
            calories: clamp_non_negative(draft.calories),
            protein: clamp_non_negative(draft.protein),
            carbs: clamp_non_negative(draft.carbs),
            fat: clamp_non_negative(draft.fat),
            serving_size: draft.serving_size,
            image: draft.image,
        };
        self.snapshot.foods.push(food.clone());
        self.persist()?;
        Ok(food)
    }

    /// Log a food against a meal, stamped with today's date.
    ///
    /// `food_id` is not validated against the catalog; aggregation treats a
    /// dangling reference as zero contribution. Quantity is clamped
    /// positive (bad values become 1).
    ///
    /// # Errors
    ///
    /// Only a persistence failure. The entry is in the ledger either way.
    pub fn add_entry(
        &mut self,
        food_id: impl Into<String>,
        meal_type: MealType,
        quantity: f64,
    ) -> Result<FoodEntry> {
        let entry = FoodEntry {
            id: generate_id(),
            food_id: food_id.into(),
            date: today_string(),
            meal_type,
            quantity: clamp_quantity(quantity),
            timestamp: Utc::now().timestamp_millis(),
        };
        self.snapshot.entries.push(entry.clone());
        self.persist()?;
        Ok(entry)
    }

    /// Remove the entry with the given id.
    ///
    /// Returns whether an entry was removed. Removing an unknown id is a
    /// no-op, not an error, and skips the persistence write.
    ///
    /// # Errors
    ///
    /// Only a persistence failure. The entry is gone from the snapshot
    /// either way.
    pub fn remove_entry(&mut self, entry_id: &str) -> Result<bool> {
        let before = self.snapshot.entries.len();
        self.snapshot.entries.retain(|entry| entry.id != entry_id);
        if self.snapshot.entries.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Merge the set fields of `update` into the goal settings.
    ///
    /// Unset fields keep their prior values. An empty update still
    /// persists; the write is harmless and keeps the path uniform.
    ///
    /// # Errors
    ///
    /// Only a persistence failure. The settings are updated either way.
    pub fn update_settings(&mut self, update: &SettingsUpdate) -> Result<UserSettings> {
        update.apply_to(&mut self.snapshot.user_settings);
        self.persist()?;
        Ok(self.snapshot.user_settings.clone())
    }

    // --- Reads ---

    /// All entries whose date equals `date` exactly, in insertion order.
    pub fn entries_by_date(&self, date: &str) -> Vec<FoodEntry> {
        self.snapshot
            .entries
            .iter()
            .filter(|entry| entry.date == date)
            .cloned()
            .collect()
    }

    /// Look up a food by id.
    pub fn food(&self, food_id: &str) -> Option<&Food> {
        self.snapshot.foods.iter().find(|food| food.id == food_id)
    }

    /// Look up a food by id, failing with `NotFound` when absent.
    pub fn require_food(&self, food_id: &str) -> Result<&Food> {
        self.food(food_id)
            .ok_or_else(|| LedgerError::NotFound(format!("No food with id {}", food_id)))
    }

    /// The food catalog, in insertion order.
    pub fn foods(&self) -> &[Food] {
        &self.snapshot.foods
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[FoodEntry] {
        &self.snapshot.entries
    }

    /// The goal settings singleton.
    pub fn settings(&self) -> &UserSettings {
        &self.snapshot.user_settings
    }

    /// The full current snapshot.
    pub fn snapshot(&self) -> &LedgerSnapshot {
        &self.snapshot
    }

    /// Consume the store, returning the underlying blob store.
    pub fn into_store(self) -> S {
        self.store
    }
}
