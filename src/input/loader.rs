use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{TrendHistory, WeightEntry};

/// Load weigh-ins from a CSV file with `week,value` headers.
pub fn load_weight_entries<P: AsRef<Path>>(path: P) -> Result<Vec<WeightEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let entries = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<WeightEntry>, csv::Error>>()?;

    info!(count = entries.len(), "loaded weight entries");
    Ok(entries)
}

/// Load a trend history document from a JSON file.
pub fn load_history<P: AsRef<Path>>(path: P) -> Result<TrendHistory> {
    let content = fs::read_to_string(path)?;
    let history: TrendHistory = serde_json::from_str(&content)?;

    info!(
        weeks = history.weekly_averages.len(),
        calorie_weeks = history.calorie_history.len(),
        "loaded trend history"
    );
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_weight_entries() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"week,value\n1, 90.5\n1,90.3\n2,89.8\n").unwrap();

        let entries = load_weight_entries(file.path()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].week, 1);
        assert!((entries[0].value - 90.5).abs() < 1e-9);
    }

    #[test]
    fn test_load_weight_entries_rejects_bad_rows() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"week,value\none,90.5\n").unwrap();

        assert!(load_weight_entries(file.path()).is_err());
    }

    #[test]
    fn test_load_history_with_untracked_weeks() {
        let json = r#"{
            "weekly_averages": [{"week": 1, "avg_weight": 90.0}, {"week": 2, "avg_weight": 89.5}],
            "calorie_history": [{"week": 1, "avg_calories": 2000}, {"week": 2, "avg_calories": null}],
            "recommended_calories": 2200
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let history = load_history(file.path()).unwrap();
        assert_eq!(history.weekly_averages.len(), 2);
        assert_eq!(history.calorie_history[0].avg_calories, Some(2000.0));
        assert_eq!(history.calorie_history[1].avg_calories, None);
        assert_eq!(history.recommended_calories, 2200.0);
    }
}
