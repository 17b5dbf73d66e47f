use serde::{Deserialize, Serialize};

/// Severity band of a 0-100 score. Ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Low,
    Moderate,
    High,
    Critical,
}

impl ScoreBand {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Low => "Low",
            ScoreBand::Moderate => "Moderate",
            ScoreBand::High => "High",
            ScoreBand::Critical => "Critical",
        }
    }
}

/// Whether a larger value of a metric is desirable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Polarity {
    HigherIsBetter,
    HigherIsWorse,
}

/// Color family the page renders a value with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Good,
    Warning,
    Danger,
}

/// A score together with its band and tone, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatedScore {
    pub value: u8,
    pub band: ScoreBand,
    pub tone: Tone,
}
