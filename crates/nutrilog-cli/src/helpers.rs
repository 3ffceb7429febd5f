//! Argument parsing helpers.

use chrono::NaiveDate;

use nutrilog_core::ledger::today_string;
use nutrilog_core::types::MealType;

/// Resolve an optional date argument: `None` means today, `Some` must be a
/// valid `YYYY-MM-DD` day.
pub fn resolve_date(date: Option<&str>) -> anyhow::Result<String> {
    match date {
        None => Ok(today_string()),
        Some(raw) => {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| anyhow::anyhow!("Invalid date (expected YYYY-MM-DD): {}", raw))?;
            Ok(raw.to_string())
        }
    }
}

/// Parse a meal argument with a hint on failure.
pub fn parse_meal(raw: &str) -> anyhow::Result<MealType> {
    raw.parse()
        .map_err(|_| anyhow::anyhow!("Unknown meal \"{}\". Use breakfast, lunch, dinner, or snack.", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_date_defaults_to_today() {
        assert_eq!(resolve_date(None).unwrap(), today_string());
    }

    #[test]
    fn test_resolve_date_validates_format() {
        assert_eq!(resolve_date(Some("2026-08-30")).unwrap(), "2026-08-30");
        assert!(resolve_date(Some("30/08/2026")).is_err());
        assert!(resolve_date(Some("2026-13-01")).is_err());
    }

    #[test]
    fn test_parse_meal() {
        assert_eq!(parse_meal("lunch").unwrap(), MealType::Lunch);
        assert!(parse_meal("elevenses").is_err());
    }
}
