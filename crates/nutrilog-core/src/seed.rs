//! Default seed data.
//!
//! A fixed starter catalog of common foods, used only when no persisted
//! ledger document exists (first run, or an unreadable document). Ids are
//! stable slugs so they stay referenceable across installs.

use crate::types::{Food, LedgerSnapshot, UserSettings};

fn food(
    id: &str,
    name: &str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    serving_size: &str,
) -> Food {
    Food {
        id: id.to_string(),
        name: name.to_string(),
        calories,
        protein,
        carbs,
        fat,
        serving_size: serving_size.to_string(),
        image: None,
    }
}

/// The starter food catalog.
pub fn seed_foods() -> Vec<Food> {
    vec![
        food("chicken-breast", "Chicken Breast", 165.0, 31.0, 0.0, 3.6, "100g"),
        food("brown-rice", "Brown Rice", 216.0, 5.0, 45.0, 1.8, "1 cup cooked"),
        food("broccoli", "Broccoli", 55.0, 3.7, 11.2, 0.6, "1 cup chopped"),
        food("whole-egg", "Whole Egg", 78.0, 6.3, 0.6, 5.3, "1 large"),
        food("oatmeal", "Oatmeal", 150.0, 5.0, 27.0, 2.5, "40g dry"),
        food("banana", "Banana", 105.0, 1.3, 27.0, 0.4, "1 medium"),
        food("greek-yogurt", "Greek Yogurt", 100.0, 17.0, 6.0, 0.7, "170g"),
        food("almonds", "Almonds", 164.0, 6.0, 6.1, 14.2, "28g"),
        food("salmon-fillet", "Salmon Fillet", 208.0, 20.0, 0.0, 13.0, "100g"),
        food("sweet-potato", "Sweet Potato", 103.0, 2.3, 23.6, 0.2, "1 medium"),
    ]
}

/// A fresh first-run snapshot: seed catalog, no entries, default goals.
pub fn seed_snapshot() -> LedgerSnapshot {
    LedgerSnapshot {
        foods: seed_foods(),
        entries: Vec::new(),
        user_settings: UserSettings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let foods = seed_foods();
        let ids: HashSet<_> = foods.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), foods.len());
    }

    #[test]
    fn test_seed_values_are_well_formed() {
        for food in seed_foods() {
            assert!(!food.name.is_empty());
            assert!(food.calories >= 0.0);
            assert!(food.protein >= 0.0);
            assert!(food.carbs >= 0.0);
            assert!(food.fat >= 0.0);
            assert!(!food.serving_size.is_empty());
        }
    }

    #[test]
    fn test_seed_snapshot_starts_empty() {
        let snapshot = seed_snapshot();
        assert!(snapshot.entries.is_empty());
        assert_eq!(snapshot.user_settings, UserSettings::default());
        assert!(!snapshot.foods.is_empty());
    }
}
