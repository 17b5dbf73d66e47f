use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{DashboardConfig, FallbackPolicy};
use crate::data::{
    country_table, fallback_items, DashboardData, NewsRequest, ReportBuilder, ScoreAggregator,
    ViewBuilder,
};
use crate::error::{ExportError, NewsError};
use crate::types::{
    ChartPeriod, CountryCode, CountryOption, CountryProfile, CountryView, DashboardView,
    DynamicsView, FascismScore, FascismView, NewsFilter, NewsItem, NewsPanelView, NewsStatus,
    ReportFile,
};

/// What happened to a completed news fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplyOutcome {
    Applied,
    /// A newer request was issued meanwhile; the panel was left alone.
    Stale,
}

pub struct DashboardLogic {
    config: DashboardConfig,
    data: DashboardData,
    aggregator: ScoreAggregator,
    reports: ReportBuilder,
    views: ViewBuilder,
}

impl DashboardLogic {
    pub fn new(config: DashboardConfig) -> Self {
        let default_country = config.default_country;
        let initial = country_table::resolve(config.initial_country, default_country).code;
        Self {
            data: DashboardData::new(initial),
            aggregator: ScoreAggregator::new(default_country),
            reports: ReportBuilder::new(),
            views: ViewBuilder::new(),
            config,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn selected(&self) -> CountryCode {
        self.data.selected()
    }

    /// Selects the country named by `raw`. Malformed or unknown codes select
    /// the default country without reporting an error.
    pub fn select_country(&mut self, raw: &str) -> CountryCode {
        match CountryCode::parse(raw) {
            Ok(code) => self.select(code),
            Err(err) => {
                debug!(%err, "unreadable country code, using default");
                self.select(self.aggregator.default_country())
            }
        }
    }

    pub fn select(&mut self, code: CountryCode) -> CountryCode {
        let profile = country_table::resolve(code, self.aggregator.default_country());
        if profile.code != code {
            debug!(requested = %code, fallback = %profile.code, "no profile row, using default");
        }
        self.data.set_selected(profile.code);
        info!(country = %profile.code, "country selected");
        profile.code
    }

    pub fn selected_profile(&self) -> &'static CountryProfile {
        country_table::resolve(self.data.selected(), self.aggregator.default_country())
    }

    /// Marks the panel as loading and returns the fetch to perform for the
    /// current selection.
    pub fn begin_news_request(&mut self) -> NewsRequest {
        let request = self.data.issue_news_request(self.config.news_limit);
        debug!(token = request.token.value(), country = %request.country, "news request issued");
        request
    }

    pub fn apply_news(
        &mut self,
        request: NewsRequest,
        result: Result<Vec<NewsItem>, NewsError>,
    ) -> ApplyOutcome {
        if !self.data.is_current(request.token) {
            debug!(
                token = request.token.value(),
                country = %request.country,
                "dropping news for superseded request"
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(items) => {
                info!(country = %request.country, count = items.len(), "news loaded");
                self.data.set_news(NewsStatus::Live, items);
            }
            Err(err) => {
                warn!(country = %request.country, error = %err, "news fetch failed");
                let reason = err.to_string();
                match self.config.fallback_policy {
                    FallbackPolicy::ShowFallback => {
                        self.data.set_news(NewsStatus::Fallback { reason }, fallback_items())
                    }
                    FallbackPolicy::ShowUnavailable => {
                        self.data.set_news(NewsStatus::Unavailable { reason }, Vec::new())
                    }
                }
            }
        }
        ApplyOutcome::Applied
    }

    pub fn set_news_filter(&mut self, filter: NewsFilter) {
        self.data.set_news_filter(filter);
    }

    pub fn set_chart_period(&mut self, period: ChartPeriod) {
        self.data.set_chart_period(period);
    }

    pub fn dynamics_view(&self) -> DynamicsView {
        self.views.dynamics(self.data.chart_period())
    }

    pub fn country_options(&self) -> Vec<CountryOption> {
        self.views.country_options()
    }

    pub fn country_view(&self) -> CountryView {
        self.views.country_view(self.selected_profile())
    }

    pub fn fascism_score(&self) -> FascismScore {
        self.aggregator.aggregate(self.data.selected())
    }

    pub fn fascism_view(&self) -> FascismView {
        let row = self.aggregator.row_for(self.data.selected());
        self.views.fascism_view(row, ScoreAggregator::aggregate_row(row))
    }

    pub fn news_panel(&self) -> NewsPanelView {
        self.data.build_news_panel()
    }

    pub fn dashboard_view(&self) -> DashboardView {
        DashboardView {
            country: self.country_view(),
            fascism: self.fascism_view(),
            comparison: self.views.comparison(),
            map: self.views.map_markers(self.data.selected()),
            trends: self.views.trend_summary(),
            dynamics: self.dynamics_view(),
            news: self.news_panel(),
        }
    }

    /// Renders the report for the country selected right now, stamped with
    /// `date`.
    pub fn export_report(&self, date: NaiveDate) -> Result<ReportFile, ExportError> {
        let profile = self.selected_profile();
        let report = self.reports.build(profile, date);
        self.reports.render(profile, &report)
    }
}
