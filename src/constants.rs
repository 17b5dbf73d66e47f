// Shared dashboard constants

use crate::types::{CountryCode, ScoreBand};

// Entries per checklist taxonomy
pub const INDICATOR_COUNT: usize = 14;

// Band cut points, highest first. A score belongs to the first band whose
// lower bound it reaches; anything below the last bound is Low.
pub const BAND_CUT_POINTS: [(u8, ScoreBand); 3] = [
    (80, ScoreBand::Critical),
    (70, ScoreBand::High),
    (40, ScoreBand::Moderate),
];

pub const DEFAULT_COUNTRY: CountryCode = CountryCode::from_static("US"); // Row used for unknown codes
pub const INITIAL_COUNTRY: CountryCode = CountryCode::from_static("RU"); // Selected on page load

// Score shown on the map for codes without a profile row
pub const NEUTRAL_MAP_SCORE: u8 = 50;

// Profiles listed in the comparison panel
pub const COMPARISON_SIZE: usize = 5;

pub const DEFAULT_NEWS_ENDPOINT: &str = "/backend/news-collector";
pub const DEFAULT_NEWS_LIMIT: u32 = 20;
pub const MAX_NEWS_LIMIT: u32 = 100;

pub const REPORT_MIME_TYPE: &str = "application/json";
// Object URL outlives the click by this long before it is revoked
pub const DOWNLOAD_REVOKE_DELAY_MS: i32 = 1_000;
