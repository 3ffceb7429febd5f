//! Nutrilog CLI - a personal nutrition log.
//!
//! Thin command-line surface over `nutrilog-core`: manage the food
//! catalog, log entries against meals, and view daily summaries against
//! goals.

mod cli;
mod config;
mod helpers;
mod output;

use clap::Parser;

use nutrilog_core::ledger::LedgerStore;
use nutrilog_core::parse;
use nutrilog_core::storage::JsonFileStore;
use nutrilog_core::types::{NewFood, SettingsUpdate};
use nutrilog_core::LedgerError;

use cli::{Cli, Commands, FoodCommands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref())?;
    let blobs = JsonFileStore::open(&data_dir)
        .map_err(|e| anyhow::anyhow!("Cannot open data directory {}: {}", data_dir.display(), e))?;
    let mut store = LedgerStore::open(blobs);

    match cli.command {
        Commands::Food { command } => match command {
            FoodCommands::Add(args) => {
                let draft = NewFood::new(args.name, args.serving).with_nutrition(
                    parse::non_negative(args.calories.as_deref().unwrap_or("")),
                    parse::non_negative(args.protein.as_deref().unwrap_or("")),
                    parse::non_negative(args.carbs.as_deref().unwrap_or("")),
                    parse::non_negative(args.fat.as_deref().unwrap_or("")),
                );
                let draft = match args.image {
                    Some(image) => draft.with_image(image),
                    None => draft,
                };
                match store.add_food(draft) {
                    Ok(food) => {
                        if cli.quiet {
                            println!("{}", food.id);
                        } else {
                            println!("Added {} ({})", food.name, food.id);
                        }
                    }
                    Err(e) => warn_not_saved("Food added", &e),
                }
            }
            FoodCommands::List { json } => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&output::foods_json(store.foods()))?);
                } else {
                    println!("{}", output::foods_table(store.foods()));
                }
            }
            FoodCommands::Show { id } => {
                let food = store
                    .require_food(&id)
                    .map_err(|_| anyhow::anyhow!("No food with id {}", id))?;
                output::print_food(food);
            }
        },

        Commands::Log(args) => {
            let meal = helpers::parse_meal(&args.meal)?;
            let quantity = parse::quantity(args.quantity.as_deref().unwrap_or("1"));
            if store.food(&args.food_id).is_none() && !cli.quiet {
                // Logged anyway: the ledger accepts dangling references.
                eprintln!("Note: no food with id {} in the catalog", args.food_id);
            }
            match store.add_entry(args.food_id, meal, quantity) {
                Ok(entry) => {
                    if cli.quiet {
                        println!("{}", entry.id);
                    } else {
                        println!("Logged {} x{} for {} ({})", entry.food_id, entry.quantity, meal, entry.id);
                    }
                }
                Err(e) => warn_not_saved("Entry logged", &e),
            }
        }

        Commands::Unlog { entry_id } => match store.remove_entry(&entry_id) {
            Ok(true) => {
                if !cli.quiet {
                    println!("Removed entry {}", entry_id);
                }
            }
            Ok(false) => {
                if !cli.quiet {
                    println!("No entry with id {}", entry_id);
                }
            }
            Err(e) => warn_not_saved("Entry removed", &e),
        },

        Commands::Entries(args) => {
            let date = helpers::resolve_date(args.date.as_deref())?;
            let entries = store.entries_by_date(&date);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&output::entries_json(&entries))?);
            } else if entries.is_empty() {
                if !cli.quiet {
                    println!("No entries for {}", date);
                }
            } else {
                println!("{}", output::entries_table(&entries, store.foods()));
            }
        }

        Commands::Summary(args) => {
            let date = helpers::resolve_date(args.date.as_deref())?;
            let entries = store.entries_by_date(&date);
            output::print_summary(&date, &entries, store.foods(), store.settings(), cli.quiet);
        }

        Commands::Goals(args) => {
            let update = SettingsUpdate {
                calorie_goal: args.calories,
                protein_goal: args.protein,
                carbs_goal: args.carbs,
                fat_goal: args.fat,
            };
            if update.is_empty() {
                output::print_goals(store.settings());
            } else {
                match store.update_settings(&update) {
                    Ok(settings) => {
                        if !cli.quiet {
                            output::print_goals(&settings);
                        }
                    }
                    Err(e) => warn_not_saved("Goals updated", &e),
                }
            }
        }
    }

    Ok(())
}

/// A persistence failure does not undo the mutation; report it and keep
/// the exit status clean.
fn warn_not_saved(action: &str, err: &LedgerError) {
    eprintln!("Warning: {} in memory, but saving failed: {}", action, err);
}
