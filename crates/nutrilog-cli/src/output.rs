//! Output formatting helpers for the CLI.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use owo_colors::OwoColorize;

use nutrilog_core::aggregate::{
    calories_remaining, daily_nutrition, goal_percentage, meal_calories,
};
use nutrilog_core::types::{Food, FoodEntry, MealType, UserSettings};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Render the food catalog as a table.
pub fn foods_table(foods: &[Food]) -> Table {
    let mut table = new_table(vec!["ID", "Name", "Serving", "Cal", "Protein", "Carbs", "Fat"]);
    for food in foods {
        table.add_row(vec![
            food.id.clone(),
            food.name.clone(),
            food.serving_size.clone(),
            format!("{:.0}", food.calories),
            format!("{:.1}g", food.protein),
            format!("{:.1}g", food.carbs),
            format!("{:.1}g", food.fat),
        ]);
    }
    table
}

/// Render entries as a table, resolving food names where possible.
pub fn entries_table(entries: &[FoodEntry], foods: &[Food]) -> Table {
    let mut table = new_table(vec!["ID", "Meal", "Food", "Qty", "Cal"]);
    for entry in entries {
        let food = foods.iter().find(|f| f.id == entry.food_id);
        let (name, calories) = match food {
            Some(food) => (
                food.name.clone(),
                format!("{:.0}", food.calories * entry.quantity),
            ),
            // Dangling reference: shown, but contributes nothing.
            None => (format!("{} (unknown)", entry.food_id), "-".to_string()),
        };
        table.add_row(vec![
            entry.id.clone(),
            entry.meal_type.to_string(),
            name,
            format!("{}", entry.quantity),
            calories,
        ]);
    }
    table
}

/// Print a single food in detail.
pub fn print_food(food: &Food) {
    println!("{} ({})", food.name.bold(), food.serving_size);
    println!("ID: {}", food.id);
    println!("Calories: {:.0}", food.calories);
    println!("Protein: {:.1}g", food.protein);
    println!("Carbs: {:.1}g", food.carbs);
    println!("Fat: {:.1}g", food.fat);
    if let Some(image) = &food.image {
        println!("Image: {}", image);
    }
}

/// Convert entries to JSON for `--json` output.
pub fn entries_json(entries: &[FoodEntry]) -> serde_json::Value {
    serde_json::to_value(entries).unwrap_or(serde_json::Value::Null)
}

/// Convert foods to JSON for `--json` output.
pub fn foods_json(foods: &[Food]) -> serde_json::Value {
    serde_json::to_value(foods).unwrap_or(serde_json::Value::Null)
}

fn meal_label(meal: MealType) -> &'static str {
    match meal {
        MealType::Breakfast => "Breakfast",
        MealType::Lunch => "Lunch",
        MealType::Dinner => "Dinner",
        MealType::Snack => "Snacks",
    }
}

/// Print the daily summary: totals, goal progress, and per-meal calories.
pub fn print_summary(
    date: &str,
    entries: &[FoodEntry],
    foods: &[Food],
    settings: &UserSettings,
    quiet: bool,
) {
    let totals = daily_nutrition(entries, foods);

    if quiet {
        println!(
            "{:.0} {:.1} {:.1} {:.1}",
            totals.calories, totals.protein, totals.carbs, totals.fat
        );
        return;
    }

    println!("{}", format!("Summary for {}", date).bold());
    println!();

    let remaining = calories_remaining(totals.calories, settings.calorie_goal);
    println!(
        "Calories: {} / {:.0} ({}%), {} remaining",
        format!("{:.0}", totals.calories).green(),
        settings.calorie_goal,
        goal_percentage(totals.calories, settings.calorie_goal),
        format!("{:.0}", remaining).cyan(),
    );
    println!(
        "Protein:  {:.1}g / {:.0}g ({}%)",
        totals.protein,
        settings.protein_goal,
        goal_percentage(totals.protein, settings.protein_goal),
    );
    println!(
        "Carbs:    {:.1}g / {:.0}g ({}%)",
        totals.carbs,
        settings.carbs_goal,
        goal_percentage(totals.carbs, settings.carbs_goal),
    );
    println!(
        "Fat:      {:.1}g / {:.0}g ({}%)",
        totals.fat,
        settings.fat_goal,
        goal_percentage(totals.fat, settings.fat_goal),
    );

    println!();
    for meal in MealType::ALL {
        println!(
            "{:<10} {:.0} cal",
            meal_label(meal),
            meal_calories(entries, foods, meal)
        );
    }

    if entries.is_empty() {
        println!();
        println!("{}", "Nothing logged for this day.".dimmed());
    }
}

/// Print the current goal settings.
pub fn print_goals(settings: &UserSettings) {
    println!("Calorie goal: {:.0}", settings.calorie_goal);
    println!("Protein goal: {:.0}g", settings.protein_goal);
    println!("Carbs goal:   {:.0}g", settings.carbs_goal);
    println!("Fat goal:     {:.0}g", settings.fat_goal);
}
