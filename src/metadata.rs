use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreplanMetadata {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Default for PreplanMetadata {
    fn default() -> Self {
        Self {
            name: "New Preplan".to_string(),
            description: "No description".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 4).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 26).unwrap(),
        }
    }
}
