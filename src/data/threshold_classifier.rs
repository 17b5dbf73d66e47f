use crate::constants::BAND_CUT_POINTS;
use crate::types::{Polarity, RatedScore, ScoreBand, Tone};

/// Maps a 0-100 score onto its band. Every call site goes through here.
pub fn classify(score: u8) -> ScoreBand {
    BAND_CUT_POINTS
        .iter()
        .find(|(lower, _)| score >= *lower)
        .map(|(_, band)| *band)
        .unwrap_or(ScoreBand::Low)
}

pub fn tone(band: ScoreBand, polarity: Polarity) -> Tone {
    match (band, polarity) {
        (ScoreBand::Moderate, _) => Tone::Warning,
        (ScoreBand::High | ScoreBand::Critical, Polarity::HigherIsBetter) => Tone::Good,
        (ScoreBand::High | ScoreBand::Critical, Polarity::HigherIsWorse) => Tone::Danger,
        (ScoreBand::Low, Polarity::HigherIsBetter) => Tone::Danger,
        (ScoreBand::Low, Polarity::HigherIsWorse) => Tone::Good,
    }
}

pub fn rate(value: u8, polarity: Polarity) -> RatedScore {
    let band = classify(value);
    RatedScore {
        value,
        band,
        tone: tone(band, polarity),
    }
}
