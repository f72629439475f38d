use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Intake and expenditure for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRow {
    pub date: String,
    #[serde(rename = "in")]
    pub intake: i64,
    #[serde(rename = "out")]
    pub expenditure: i64,
}

/// View-data for GET /reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportView {
    pub title: String,
    pub total_in: i64,
    pub total_out: i64,
    pub net: i64,
    pub daily_goal: i64,
    pub today_in: i64,
    /// Share of the daily goal eaten today, 0..=200.
    pub progress: i64,
    /// Always seven rows, oldest first, ending today.
    pub daily_rows: Vec<DailyRow>,
    pub labels: Vec<String>,
    pub in_data: Vec<i64>,
    pub out_data: Vec<i64>,
}

/// Query params for GET /reports.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    /// Day the report ends on (ISO 8601). Defaults to the local today.
    pub date: Option<NaiveDate>,
}
