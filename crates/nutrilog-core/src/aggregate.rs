//! Aggregation engine.
//!
//! Pure, stateless functions deriving display-ready nutrition summaries
//! from a ledger snapshot. Nothing here mutates or caches; every call
//! recomputes from scratch, so results can never go stale relative to the
//! ledger.

use crate::types::{DailyNutrition, Food, FoodEntry, MealType};

fn find_food<'a>(foods: &'a [Food], food_id: &str) -> Option<&'a Food> {
    foods.iter().find(|food| food.id == food_id)
}

fn accumulate<'a>(
    entries: impl Iterator<Item = &'a FoodEntry>,
    foods: &[Food],
) -> DailyNutrition {
    entries.fold(DailyNutrition::default(), |mut total, entry| {
        if let Some(food) = find_food(foods, &entry.food_id) {
            total.calories += food.calories * entry.quantity;
            total.protein += food.protein * entry.quantity;
            total.carbs += food.carbs * entry.quantity;
            total.fat += food.fat * entry.quantity;
        }
        total
    })
}

/// Sum nutrition across `entries`, scaling each food's per-serving values
/// by the entry quantity.
///
/// An entry whose `food_id` matches no food contributes nothing; a dangling
/// reference is not an error. An empty entry set yields all zeros.
pub fn daily_nutrition(entries: &[FoodEntry], foods: &[Food]) -> DailyNutrition {
    accumulate(entries.iter(), foods)
}

/// Same accumulation as [`daily_nutrition`], restricted to entries of one
/// meal.
pub fn meal_total(entries: &[FoodEntry], foods: &[Food], meal_type: MealType) -> DailyNutrition {
    accumulate(
        entries.iter().filter(|entry| entry.meal_type == meal_type),
        foods,
    )
}

/// Running calorie figure for one meal section.
pub fn meal_calories(entries: &[FoodEntry], foods: &[Food], meal_type: MealType) -> f64 {
    meal_total(entries, foods, meal_type).calories
}

/// Progress toward a goal as a whole percentage, clamped to 0..=100.
///
/// A goal of zero (or anything non-positive or non-finite, for either
/// argument) reads as 0%: there is no meaningful target to measure against.
pub fn goal_percentage(current: f64, goal: f64) -> u32 {
    if !current.is_finite() || !goal.is_finite() || current <= 0.0 || goal <= 0.0 {
        return 0;
    }
    let percentage = (current / goal * 100.0).round();
    if percentage >= 100.0 {
        100
    } else {
        percentage as u32
    }
}

/// Calories left before the goal is reached; never negative.
pub fn calories_remaining(current: f64, goal: f64) -> f64 {
    (goal - current).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Food;

    fn test_food(id: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> Food {
        Food {
            id: id.to_string(),
            name: id.to_string(),
            calories,
            protein,
            carbs,
            fat,
            serving_size: "100g".to_string(),
            image: None,
        }
    }

    fn entry(food_id: &str, meal_type: MealType, quantity: f64) -> FoodEntry {
        FoodEntry {
            id: format!("entry-{}", food_id),
            food_id: food_id.to_string(),
            date: "2026-08-30".to_string(),
            meal_type,
            quantity,
            timestamp: 0,
        }
    }

    #[test]
    fn test_empty_entries_yield_zeros() {
        let foods = vec![test_food("f1", 100.0, 10.0, 20.0, 5.0)];
        let total = daily_nutrition(&[], &foods);
        assert_eq!(total, DailyNutrition::default());
        assert!(total.is_empty());
    }

    #[test]
    fn test_quantity_scales_all_fields() {
        let foods = vec![test_food("f1", 100.0, 10.0, 20.0, 5.0)];
        let entries = vec![entry("f1", MealType::Lunch, 2.0)];

        let total = daily_nutrition(&entries, &foods);
        assert_eq!(total.calories, 200.0);
        assert_eq!(total.protein, 20.0);
        assert_eq!(total.carbs, 40.0);
        assert_eq!(total.fat, 10.0);
    }

    #[test]
    fn test_dangling_reference_contributes_zero() {
        let foods = vec![test_food("f1", 100.0, 10.0, 20.0, 5.0)];
        let entries = vec![
            entry("f1", MealType::Lunch, 1.0),
            entry("gone", MealType::Lunch, 3.0),
        ];

        let total = daily_nutrition(&entries, &foods);
        assert_eq!(total.calories, 100.0);
        assert_eq!(total.protein, 10.0);
    }

    #[test]
    fn test_meal_total_filters_by_meal() {
        let foods = vec![
            test_food("f1", 100.0, 10.0, 20.0, 5.0),
            test_food("f2", 50.0, 2.0, 8.0, 1.0),
        ];
        let entries = vec![
            entry("f1", MealType::Breakfast, 1.0),
            entry("f2", MealType::Dinner, 2.0),
        ];

        let breakfast = meal_total(&entries, &foods, MealType::Breakfast);
        assert_eq!(breakfast.calories, 100.0);

        let dinner = meal_total(&entries, &foods, MealType::Dinner);
        assert_eq!(dinner.calories, 100.0);
        assert_eq!(dinner.carbs, 16.0);

        assert!(meal_total(&entries, &foods, MealType::Snack).is_empty());
        assert_eq!(meal_calories(&entries, &foods, MealType::Breakfast), 100.0);
    }

    #[test]
    fn test_goal_percentage_rounds_and_clamps() {
        assert_eq!(goal_percentage(250.0, 2000.0), 13);
        assert_eq!(goal_percentage(3000.0, 2000.0), 100);
        assert_eq!(goal_percentage(2000.0, 2000.0), 100);
        assert_eq!(goal_percentage(0.0, 2000.0), 0);
    }

    #[test]
    fn test_goal_percentage_zero_goal_is_zero() {
        assert_eq!(goal_percentage(500.0, 0.0), 0);
        assert_eq!(goal_percentage(500.0, -10.0), 0);
        assert_eq!(goal_percentage(f64::NAN, 2000.0), 0);
    }

    #[test]
    fn test_calories_remaining_never_negative() {
        assert_eq!(calories_remaining(500.0, 2000.0), 1500.0);
        assert_eq!(calories_remaining(2500.0, 2000.0), 0.0);
    }
}
