use chrono::NaiveDate;

use crate::constants::REPORT_MIME_TYPE;
use crate::error::ExportError;
use crate::types::{CountryProfile, ReportFile, ScoreReport};

pub struct ReportBuilder;

impl ReportBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Copies the scores out of `profile`; the report owns its data and does
    /// not follow later selection changes.
    pub fn build(&self, profile: &CountryProfile, date: NaiveDate) -> ScoreReport {
        ScoreReport {
            country: profile.name.to_string(),
            date,
            democracy_score: profile.democracy,
            freedom_score: profile.freedom,
            authoritarian_score: profile.authoritarian,
            press_freedom_score: profile.press_freedom,
        }
    }

    pub fn render(&self, profile: &CountryProfile, report: &ScoreReport) -> Result<ReportFile, ExportError> {
        Ok(ReportFile {
            file_name: format!(
                "polity-report-{}-{}.json",
                profile.code.as_str().to_ascii_lowercase(),
                report.date.format("%Y-%m-%d")
            ),
            mime_type: REPORT_MIME_TYPE,
            contents: serde_json::to_string_pretty(report)?,
        })
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
