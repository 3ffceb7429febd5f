//! End-to-end persistence tests through the JSON file store.

use nutrilog_core::ledger::{today_string, LedgerStore, DOCUMENT_KEY};
use nutrilog_core::seed::seed_snapshot;
use nutrilog_core::storage::JsonFileStore;
use nutrilog_core::types::{MealType, NewFood, SettingsUpdate};

use tempfile::tempdir;

#[test]
fn test_populated_ledger_round_trips() {
    let dir = tempdir().unwrap();

    let (food_id, entry_id, original) = {
        let blobs = JsonFileStore::open(dir.path()).unwrap();
        let mut store = LedgerStore::open(blobs);

        let food = store
            .add_food(
                NewFood::new("Lentil Soup", "1 bowl").with_nutrition(180.0, 12.0, 30.0, 1.5),
            )
            .unwrap();
        let entry = store.add_entry(food.id.clone(), MealType::Dinner, 1.5).unwrap();
        store.add_entry("banana", MealType::Snack, 1.0).unwrap();
        store
            .update_settings(&SettingsUpdate::new().calorie_goal(2200.0).fat_goal(70.0))
            .unwrap();

        (food.id, entry.id, store.snapshot().clone())
    };

    let blobs = JsonFileStore::open(dir.path()).unwrap();
    let reopened = LedgerStore::open(blobs);

    // Structurally equal, order preserved.
    assert_eq!(*reopened.snapshot(), original);
    assert_eq!(reopened.foods().last().unwrap().id, food_id);
    assert_eq!(reopened.entries()[0].id, entry_id);
    assert_eq!(reopened.settings().calorie_goal, 2200.0);
    assert_eq!(reopened.settings().protein_goal, 150.0);

    let today = reopened.entries_by_date(&today_string());
    assert_eq!(today.len(), 2);
}

#[test]
fn test_absent_document_yields_seed_data() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::open(JsonFileStore::open(dir.path()).unwrap());

    assert_eq!(*store.snapshot(), seed_snapshot());
}

#[test]
fn test_corrupt_document_yields_seed_data() {
    let dir = tempdir().unwrap();
    let file = dir.path().join(format!("{}.json", DOCUMENT_KEY));
    std::fs::write(&file, "{\"foods\": [{\"id\":").unwrap();

    let store = LedgerStore::open(JsonFileStore::open(dir.path()).unwrap());
    assert_eq!(*store.snapshot(), seed_snapshot());
}

#[test]
fn test_document_shape_matches_wire_contract() {
    let dir = tempdir().unwrap();
    {
        let mut store = LedgerStore::open(JsonFileStore::open(dir.path()).unwrap());
        store.add_entry("oatmeal", MealType::Breakfast, 1.0).unwrap();
    }

    let raw = std::fs::read_to_string(dir.path().join(format!("{}.json", DOCUMENT_KEY))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert!(value["foods"].is_array());
    assert!(value["entries"].is_array());
    assert!(value["userSettings"]["calorieGoal"].is_number());
    let entry = &value["entries"][0];
    assert_eq!(entry["foodId"], "oatmeal");
    assert_eq!(entry["mealType"], "breakfast");
    assert!(entry["date"].as_str().unwrap().len() == 10);
}
