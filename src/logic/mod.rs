mod dashboard_logic;
mod news_flow;

pub use dashboard_logic::{ApplyOutcome, DashboardLogic};
pub use news_flow::{collect_and_refresh, refresh_news, select_and_refresh};
