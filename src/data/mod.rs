pub mod country_table;
pub mod indicator_table;
mod fallback_news;
mod report_builder;
mod score_aggregator;
mod threshold_classifier;
mod view_builder;

pub use fallback_news::fallback_items;
pub use report_builder::ReportBuilder;
pub use score_aggregator::{rounded_mean, ScoreAggregator};
pub use threshold_classifier::{classify, rate, tone};
pub use view_builder::ViewBuilder;

use serde::Serialize;

use crate::types::{ChartPeriod, CountryCode, NewsFilter, NewsItem, NewsPanelView, NewsStatus};

/// Identifies one news fetch. Tokens only grow, so a smaller token is an
/// older request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A fetch the caller is expected to perform and hand back with its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsRequest {
    pub token: RequestToken,
    pub country: CountryCode,
    pub limit: u32,
}

/// The only mutable state of the dashboard: the selection, the news panel
/// and the newest issued fetch token.
pub struct DashboardData {
    selected: CountryCode,
    news_country: CountryCode,
    news_status: NewsStatus,
    news_items: Vec<NewsItem>,
    news_filter: NewsFilter,
    chart_period: ChartPeriod,
    last_token: u64,
}

impl DashboardData {
    pub fn new(initial: CountryCode) -> Self {
        Self {
            selected: initial,
            news_country: initial,
            news_status: NewsStatus::Idle,
            news_items: Vec::new(),
            news_filter: NewsFilter::All,
            chart_period: ChartPeriod::default(),
            last_token: 0,
        }
    }

    pub fn selected(&self) -> CountryCode {
        self.selected
    }

    pub fn set_selected(&mut self, code: CountryCode) {
        self.selected = code;
    }

    /// Issues a fetch for the current selection and marks the panel as
    /// loading. Any earlier request becomes stale and the panel holds no items
    /// until this one is answered.
    pub fn issue_news_request(&mut self, limit: u32) -> NewsRequest {
        self.last_token = self.last_token.wrapping_add(1);
        self.news_country = self.selected;
        self.news_status = NewsStatus::Loading;
        self.news_items.clear();
        NewsRequest {
            token: RequestToken(self.last_token),
            country: self.selected,
            limit,
        }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.last_token
    }

    pub fn last_token(&self) -> Option<RequestToken> {
        (self.last_token > 0).then_some(RequestToken(self.last_token))
    }

    pub fn set_news(&mut self, status: NewsStatus, items: Vec<NewsItem>) {
        self.news_status = status;
        self.news_items = items;
    }

    pub fn news_status(&self) -> &NewsStatus {
        &self.news_status
    }

    pub fn news_items(&self) -> &[NewsItem] {
        &self.news_items
    }

    pub fn news_filter(&self) -> NewsFilter {
        self.news_filter
    }

    pub fn set_news_filter(&mut self, filter: NewsFilter) {
        self.news_filter = filter;
    }

    pub fn chart_period(&self) -> ChartPeriod {
        self.chart_period
    }

    pub fn set_chart_period(&mut self, period: ChartPeriod) {
        self.chart_period = period;
    }

    pub fn build_news_panel(&self) -> NewsPanelView {
        NewsPanelView {
            country: self.news_country,
            status: self.news_status.clone(),
            filter: self.news_filter,
            items: self
                .news_items
                .iter()
                .filter(|item| self.news_filter.matches(item))
                .cloned()
                .collect(),
        }
    }
}
