use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Exported score report. Holds exactly the country name, the export date
/// and the four scalar scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScoreReport {
    pub country: String,
    pub date: NaiveDate,
    pub democracy_score: u8,
    pub freedom_score: u8,
    pub authoritarian_score: u8,
    pub press_freedom_score: u8,
}

/// A report rendered to its downloadable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}
