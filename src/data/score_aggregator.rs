use tracing::debug;

use crate::types::{CountryCode, FascismScore, IndicatorScores};

use super::indicator_table;

/// Arithmetic mean rounded half up, matching how the page has always
/// rounded these averages. Empty input averages to 0.
pub fn rounded_mean(values: &[u8]) -> u8 {
    if values.is_empty() {
        return 0;
    }
    let n = values.len() as u32;
    let sum: u32 = values.iter().map(|&v| u32::from(v)).sum();
    // floor(sum / n + 1/2) without leaving integers
    ((2 * sum + n) / (2 * n)) as u8
}

pub struct ScoreAggregator {
    default_country: CountryCode,
}

impl ScoreAggregator {
    pub fn new(default_country: CountryCode) -> Self {
        Self { default_country }
    }

    pub fn default_country(&self) -> CountryCode {
        self.default_country
    }

    /// Checklist row for `code`, or the default country's row when the
    /// tables have nothing for it.
    pub fn row_for(&self, code: CountryCode) -> &'static IndicatorScores {
        match indicator_table::find(code) {
            Some(row) => row,
            None => {
                debug!(requested = %code, fallback = %self.default_country, "no checklist row, using default");
                indicator_table::find(self.default_country).unwrap_or(&indicator_table::INDICATOR_SCORES[0])
            }
        }
    }

    pub fn aggregate(&self, code: CountryCode) -> FascismScore {
        Self::aggregate_row(self.row_for(code))
    }

    pub fn aggregate_row(row: &IndicatorScores) -> FascismScore {
        let britt_average = rounded_mean(&row.britt);
        let eco_average = rounded_mean(&row.eco);
        FascismScore {
            country: row.country,
            britt_average,
            eco_average,
            overall: rounded_mean(&[britt_average, eco_average]),
        }
    }
}
