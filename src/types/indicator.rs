use serde::{Deserialize, Serialize};

use crate::constants::INDICATOR_COUNT;

use super::country::CountryCode;

/// The two 14-point checklists scored per country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Taxonomy {
    /// Lawrence Britt's fourteen characteristics of fascism
    Britt,
    /// Umberto Eco's "Ur-Fascism" features
    Eco,
}

impl Taxonomy {
    pub const ALL: [Taxonomy; 2] = [Taxonomy::Britt, Taxonomy::Eco];

    pub fn title(&self) -> &'static str {
        match self {
            Taxonomy::Britt => "14 characteristics of fascism (Lawrence Britt)",
            Taxonomy::Eco => "Ur-Fascism (Umberto Eco)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndicatorDefinition {
    pub id: u8,
    pub name: &'static str,
    pub description: &'static str,
}

/// Per-country checklist scores. Fixed-size arrays keep every row aligned
/// with the definition lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndicatorScores {
    pub country: CountryCode,
    pub britt: [u8; INDICATOR_COUNT],
    pub eco: [u8; INDICATOR_COUNT],
}

impl IndicatorScores {
    pub fn for_taxonomy(&self, taxonomy: Taxonomy) -> &[u8; INDICATOR_COUNT] {
        match taxonomy {
            Taxonomy::Britt => &self.britt,
            Taxonomy::Eco => &self.eco,
        }
    }
}

/// Aggregated checklist result for one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FascismScore {
    /// Row the numbers came from; differs from the request on fallback
    pub country: CountryCode,
    pub britt_average: u8,
    pub eco_average: u8,
    pub overall: u8,
}
