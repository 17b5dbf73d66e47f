pub mod band;
pub mod country;
pub mod indicator;
pub mod news;
pub mod report;
pub mod snapshot;

pub use band::{Polarity, RatedScore, ScoreBand, Tone};
pub use country::{CountryCode, CountryProfile, Trend};
pub use indicator::{FascismScore, IndicatorDefinition, IndicatorScores, Taxonomy};
pub use news::{NewsFilter, NewsId, NewsItem, NewsResponse, Sentiment, SourceType};
pub use report::{ReportFile, ScoreReport};
pub use snapshot::{
    ChartPeriod, ChecklistView, ComparisonRow, CountryOption, CountryView, DashboardView,
    DynamicsPoint, DynamicsView, FascismView, IndicatorRow, MapMarker, NewsPanelView, NewsStatus,
    TrendSummary,
};
