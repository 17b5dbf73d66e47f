use serde::{Deserialize, Serialize};

use super::band::{RatedScore, Tone};
use super::country::{CountryCode, Trend};
use super::indicator::{FascismScore, IndicatorDefinition, Taxonomy};
use super::news::{NewsFilter, NewsItem};

// Read-only views handed to the page. Built fresh from the state container
// on every request; the page never mutates them.

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryOption {
    pub code: CountryCode,
    pub name: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryView {
    pub code: CountryCode,
    pub name: &'static str,
    pub democracy: RatedScore,
    pub freedom: RatedScore,
    pub authoritarian: RatedScore,
    pub press_freedom: RatedScore,
    pub trend: Trend,
    pub trend_label: &'static str,
    pub trend_tone: Tone,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorRow {
    pub definition: IndicatorDefinition,
    pub score: RatedScore,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistView {
    pub taxonomy: Taxonomy,
    pub title: &'static str,
    pub average: RatedScore,
    pub rows: Vec<IndicatorRow>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FascismView {
    pub score: FascismScore,
    pub overall: RatedScore,
    pub checklists: Vec<ChecklistView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub code: CountryCode,
    pub name: &'static str,
    pub democracy: RatedScore,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub code: CountryCode,
    pub democracy: u8,
    pub tone: Tone,
    pub known: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub improving: usize,
    pub declining: usize,
    pub stable: usize,
}

/// Window picked in the indicator dynamics selector. The series shown does
/// not depend on it yet; the page only echoes the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartPeriod {
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[default]
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DynamicsPoint {
    pub label: &'static str,
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicsView {
    pub period: ChartPeriod,
    pub points: Vec<DynamicsPoint>,
}

/// Where the items on the news panel came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum NewsStatus {
    Idle,
    Loading,
    Live,
    Fallback { reason: String },
    Unavailable { reason: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPanelView {
    pub country: CountryCode,
    #[serde(flatten)]
    pub status: NewsStatus,
    pub filter: NewsFilter,
    pub items: Vec<NewsItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub country: CountryView,
    pub fascism: FascismView,
    pub comparison: Vec<ComparisonRow>,
    pub map: Vec<MapMarker>,
    pub trends: TrendSummary,
    pub dynamics: DynamicsView,
    pub news: NewsPanelView,
}
