use crate::constants::{COMPARISON_SIZE, NEUTRAL_MAP_SCORE};
use crate::types::{
    ChartPeriod, ChecklistView, ComparisonRow, CountryCode, CountryOption, CountryProfile,
    CountryView, DynamicsPoint, DynamicsView, FascismScore, FascismView, IndicatorRow,
    IndicatorScores, MapMarker, Polarity, Taxonomy, Trend, TrendSummary,
};

use super::country_table::{self, DYNAMICS_SERIES, MAP_CODES, PROFILES};
use super::indicator_table;
use super::threshold_classifier::{classify, rate, tone};

pub struct ViewBuilder;

impl ViewBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn country_options(&self) -> Vec<CountryOption> {
        PROFILES
            .iter()
            .map(|p| CountryOption {
                code: p.code,
                name: p.name,
            })
            .collect()
    }

    pub fn country_view(&self, profile: &CountryProfile) -> CountryView {
        CountryView {
            code: profile.code,
            name: profile.name,
            democracy: rate(profile.democracy, Polarity::HigherIsBetter),
            freedom: rate(profile.freedom, Polarity::HigherIsBetter),
            authoritarian: rate(profile.authoritarian, Polarity::HigherIsWorse),
            press_freedom: rate(profile.press_freedom, Polarity::HigherIsBetter),
            trend: profile.trend,
            trend_label: profile.trend.label(),
            trend_tone: profile.trend.tone(),
        }
    }

    pub fn fascism_view(&self, row: &IndicatorScores, score: FascismScore) -> FascismView {
        let checklists = Taxonomy::ALL
            .iter()
            .map(|&taxonomy| {
                let average = match taxonomy {
                    Taxonomy::Britt => score.britt_average,
                    Taxonomy::Eco => score.eco_average,
                };
                let rows = indicator_table::definitions(taxonomy)
                    .iter()
                    .zip(row.for_taxonomy(taxonomy).iter())
                    .map(|(definition, &value)| IndicatorRow {
                        definition: *definition,
                        score: rate(value, Polarity::HigherIsWorse),
                    })
                    .collect();
                ChecklistView {
                    taxonomy,
                    title: taxonomy.title(),
                    average: rate(average, Polarity::HigherIsWorse),
                    rows,
                }
            })
            .collect();

        FascismView {
            score,
            overall: rate(score.overall, Polarity::HigherIsWorse),
            checklists,
        }
    }

    pub fn comparison(&self) -> Vec<ComparisonRow> {
        PROFILES
            .iter()
            .take(COMPARISON_SIZE)
            .map(|p| ComparisonRow {
                code: p.code,
                name: p.name,
                democracy: rate(p.democracy, Polarity::HigherIsBetter),
            })
            .collect()
    }

    pub fn map_markers(&self, selected: CountryCode) -> Vec<MapMarker> {
        MAP_CODES
            .iter()
            .map(|raw| CountryCode::from_static(raw))
            .map(|code| {
                let profile = country_table::find(code);
                let democracy = profile.map(|p| p.democracy).unwrap_or(NEUTRAL_MAP_SCORE);
                MapMarker {
                    code,
                    democracy,
                    tone: tone(classify(democracy), Polarity::HigherIsBetter),
                    known: profile.is_some(),
                    selected: code == selected,
                }
            })
            .collect()
    }

    pub fn trend_summary(&self) -> TrendSummary {
        PROFILES
            .iter()
            .fold(TrendSummary::default(), |mut summary, p| {
                match p.trend {
                    Trend::Up => summary.improving += 1,
                    Trend::Down => summary.declining += 1,
                    Trend::Stable => summary.stable += 1,
                }
                summary
            })
    }

    pub fn dynamics(&self, period: ChartPeriod) -> DynamicsView {
        DynamicsView {
            period,
            points: DYNAMICS_SERIES
                .iter()
                .map(|&(label, value)| DynamicsPoint { label, value })
                .collect(),
        }
    }
}

impl Default for ViewBuilder {
    fn default() -> Self {
        Self::new()
    }
}
