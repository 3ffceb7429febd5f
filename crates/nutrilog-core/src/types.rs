//! Core data types for the nutrition ledger.
//!
//! The persisted types serialize with camelCase field names so the snapshot
//! document keeps the original `food-storage` wire shape.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// A reusable nutrition record.
///
/// Nutrition values are per serving; entries scale them by quantity.
/// Foods are append-only: once created they are never edited or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    /// Unique identifier, opaque, immutable after creation
    pub id: String,

    /// User-facing name
    pub name: String,

    /// Calories per serving
    pub calories: f64,

    /// Protein per serving, grams
    pub protein: f64,

    /// Carbohydrates per serving, grams
    pub carbs: f64,

    /// Fat per serving, grams
    pub fat: f64,

    /// Free-text serving descriptor (e.g., "100g", "1 cup")
    pub serving_size: String,

    /// Optional image URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Draft for creating a new food; the ledger assigns the id.
///
/// Numeric fields are clamped non-negative when the draft is accepted, so
/// callers may pass raw values straight from tolerant parsing.
#[derive(Debug, Clone)]
pub struct NewFood {
    /// User-facing name
    pub name: String,

    /// Calories per serving
    pub calories: f64,

    /// Protein per serving, grams
    pub protein: f64,

    /// Carbohydrates per serving, grams
    pub carbs: f64,

    /// Fat per serving, grams
    pub fat: f64,

    /// Free-text serving descriptor
    pub serving_size: String,

    /// Optional image URI
    pub image: Option<String>,
}

impl NewFood {
    pub fn new(name: impl Into<String>, serving_size: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            serving_size: serving_size.into(),
            image: None,
        }
    }

    pub fn with_nutrition(mut self, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        self.calories = calories;
        self.protein = protein;
        self.carbs = carbs;
        self.fat = fat;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Coarse time-of-day bucket for logged entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// All meal types in display order.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    /// The lowercase wire name (`breakfast`, `lunch`, `dinner`, `snack`).
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" | "snacks" => Ok(MealType::Snack),
            other => Err(LedgerError::InvalidInput(format!(
                "Unknown meal type: {} (use breakfast/lunch/dinner/snack)",
                other
            ))),
        }
    }
}

/// A record of a quantity of a food consumed at a meal on a date.
///
/// Entries are never edited in place; correcting one means removing it and
/// logging a replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    /// Unique identifier
    pub id: String,

    /// Reference to a food. Not validated at insert; aggregation treats a
    /// dangling reference as contributing zero nutrition.
    pub food_id: String,

    /// Calendar day in fixed YYYY-MM-DD encoding, no time component
    pub date: String,

    /// Meal bucket
    pub meal_type: MealType,

    /// Multiplier on the food's per-serving values, always positive
    pub quantity: f64,

    /// Creation instant, Unix milliseconds; ordering and audit only
    pub timestamp: i64,
}

/// Singleton goal configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Daily calorie goal
    pub calorie_goal: f64,

    /// Daily protein goal, grams
    pub protein_goal: f64,

    /// Daily carbohydrate goal, grams
    pub carbs_goal: f64,

    /// Daily fat goal, grams
    pub fat_goal: f64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            calorie_goal: 2000.0,
            protein_goal: 150.0,
            carbs_goal: 200.0,
            fat_goal: 65.0,
        }
    }
}

/// Explicit field-update set for [`UserSettings`].
///
/// Only the fields set to `Some` are merged; the rest keep their prior
/// values.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub calorie_goal: Option<f64>,
    pub protein_goal: Option<f64>,
    pub carbs_goal: Option<f64>,
    pub fat_goal: Option<f64>,
}

impl SettingsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calorie_goal(mut self, goal: f64) -> Self {
        self.calorie_goal = Some(goal);
        self
    }

    pub fn protein_goal(mut self, goal: f64) -> Self {
        self.protein_goal = Some(goal);
        self
    }

    pub fn carbs_goal(mut self, goal: f64) -> Self {
        self.carbs_goal = Some(goal);
        self
    }

    pub fn fat_goal(mut self, goal: f64) -> Self {
        self.fat_goal = Some(goal);
        self
    }

    /// True when no field is set (merging would be a no-op).
    pub fn is_empty(&self) -> bool {
        self.calorie_goal.is_none()
            && self.protein_goal.is_none()
            && self.carbs_goal.is_none()
            && self.fat_goal.is_none()
    }

    /// Merge the set fields into `settings`, field by field.
    pub fn apply_to(&self, settings: &mut UserSettings) {
        if let Some(goal) = self.calorie_goal {
            settings.calorie_goal = goal;
        }
        if let Some(goal) = self.protein_goal {
            settings.protein_goal = goal;
        }
        if let Some(goal) = self.carbs_goal {
            settings.carbs_goal = goal;
        }
        if let Some(goal) = self.fat_goal {
            settings.fat_goal = goal;
        }
    }
}

/// Derived nutrition totals for one date or meal. Never persisted; always
/// recomputed from the ledger so it cannot go stale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DailyNutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl DailyNutrition {
    /// True when nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.calories == 0.0 && self.protein == 0.0 && self.carbs == 0.0 && self.fat == 0.0
    }
}

/// The full persisted state of the ledger, serialized as one JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    pub foods: Vec<Food>,
    pub entries: Vec<FoodEntry>,
    pub user_settings: UserSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&MealType::Breakfast).unwrap(),
            "\"breakfast\""
        );
        let parsed: MealType = serde_json::from_str("\"snack\"").unwrap();
        assert_eq!(parsed, MealType::Snack);
    }

    #[test]
    fn test_meal_type_from_str() {
        assert_eq!("Dinner".parse::<MealType>().unwrap(), MealType::Dinner);
        assert_eq!("snacks".parse::<MealType>().unwrap(), MealType::Snack);
        assert!("brunch".parse::<MealType>().is_err());
    }

    #[test]
    fn test_default_goals() {
        let settings = UserSettings::default();
        assert_eq!(settings.calorie_goal, 2000.0);
        assert_eq!(settings.protein_goal, 150.0);
        assert_eq!(settings.carbs_goal, 200.0);
        assert_eq!(settings.fat_goal, 65.0);
    }

    #[test]
    fn test_settings_update_partial_merge() {
        let mut settings = UserSettings::default();
        SettingsUpdate::new().protein_goal(180.0).apply_to(&mut settings);

        assert_eq!(settings.protein_goal, 180.0);
        assert_eq!(settings.calorie_goal, 2000.0);
        assert_eq!(settings.carbs_goal, 200.0);
        assert_eq!(settings.fat_goal, 65.0);
    }

    #[test]
    fn test_new_food_builder() {
        let draft = NewFood::new("Oatmeal", "40g dry")
            .with_nutrition(150.0, 5.0, 27.0, 2.5)
            .with_image("https://example.com/oatmeal.jpg");

        assert_eq!(draft.name, "Oatmeal");
        assert_eq!(draft.calories, 150.0);
        assert!(draft.image.is_some());
    }

    #[test]
    fn test_entry_wire_shape_is_camel_case() {
        let entry = FoodEntry {
            id: "e1".to_string(),
            food_id: "f1".to_string(),
            date: "2026-08-30".to_string(),
            meal_type: MealType::Lunch,
            quantity: 1.5,
            timestamp: 1_700_000_000_000,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["foodId"], "f1");
        assert_eq!(json["mealType"], "lunch");
        assert!(json.get("food_id").is_none());
    }
}
