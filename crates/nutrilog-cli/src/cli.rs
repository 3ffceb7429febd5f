//! Command-line definitions.

use clap::{Args, Parser, Subcommand};

use nutrilog_core::VERSION;

/// Nutrilog - a personal nutrition log
#[derive(Parser)]
#[command(name = "nutrilog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the ledger data
    #[arg(short, long, global = true, env = "NUTRILOG_DATA_DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the food catalog
    Food {
        #[command(subcommand)]
        command: FoodCommands,
    },

    /// Log a food against a meal for today
    Log(LogArgs),

    /// Remove a logged entry
    Unlog {
        /// Entry ID
        #[arg(value_name = "ID")]
        entry_id: String,
    },

    /// List logged entries
    Entries(EntriesArgs),

    /// Show the daily nutrition summary
    Summary(SummaryArgs),

    /// Show or update goal settings
    Goals(GoalsArgs),
}

#[derive(Subcommand)]
pub enum FoodCommands {
    /// Add a food to the catalog
    Add(FoodAddArgs),

    /// List the food catalog
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a food by ID
    Show {
        /// Food ID
        #[arg(value_name = "ID")]
        id: String,
    },
}

/// Arguments for `food add`.
///
/// Nutrition values are free text on purpose: the ledger's tolerant-input
/// policy turns anything unparsable into 0 instead of rejecting it.
#[derive(Args)]
pub struct FoodAddArgs {
    /// Food name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Serving descriptor (e.g., "100g", "1 cup")
    #[arg(long, default_value = "1 serving")]
    pub serving: String,

    /// Calories per serving
    #[arg(long)]
    pub calories: Option<String>,

    /// Protein per serving, grams
    #[arg(long)]
    pub protein: Option<String>,

    /// Carbohydrates per serving, grams
    #[arg(long)]
    pub carbs: Option<String>,

    /// Fat per serving, grams
    #[arg(long)]
    pub fat: Option<String>,

    /// Image URI
    #[arg(long)]
    pub image: Option<String>,
}

/// Arguments for the `log` command
#[derive(Args)]
pub struct LogArgs {
    /// Food ID to log
    #[arg(value_name = "FOOD_ID")]
    pub food_id: String,

    /// Meal (breakfast, lunch, dinner, snack)
    #[arg(short, long, default_value = "snack")]
    pub meal: String,

    /// Serving multiplier (defaults to 1 when unparsable)
    #[arg(long)]
    pub quantity: Option<String>,
}

/// Arguments for the `entries` command
#[derive(Args)]
pub struct EntriesArgs {
    /// Day to list (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `summary` command
#[derive(Args)]
pub struct SummaryArgs {
    /// Day to summarize (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `goals` command; with no options it shows the
/// current goals.
#[derive(Args)]
pub struct GoalsArgs {
    /// Daily calorie goal
    #[arg(long)]
    pub calories: Option<f64>,

    /// Daily protein goal, grams
    #[arg(long)]
    pub protein: Option<f64>,

    /// Daily carbohydrate goal, grams
    #[arg(long)]
    pub carbs: Option<f64>,

    /// Daily fat goal, grams
    #[arg(long)]
    pub fat: Option<f64>,
}
