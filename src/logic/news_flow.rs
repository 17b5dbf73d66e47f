use std::cell::RefCell;

use tracing::{info, warn};

use crate::dependency::NewsSource;

use super::{ApplyOutcome, DashboardLogic};

// No `RefCell` borrow is held across an `.await`: the page may start another
// flow while this one waits on the network.

/// Fetches news for the current selection and applies the result if no newer
/// request was issued while waiting.
pub async fn refresh_news<S: NewsSource>(logic: &RefCell<DashboardLogic>, source: &S) -> ApplyOutcome {
    let request = logic.borrow_mut().begin_news_request();
    let result = source.fetch_news(request.country, request.limit).await;
    logic.borrow_mut().apply_news(request, result)
}

pub async fn select_and_refresh<S: NewsSource>(
    logic: &RefCell<DashboardLogic>,
    source: &S,
    raw: &str,
) -> ApplyOutcome {
    logic.borrow_mut().select_country(raw);
    refresh_news(logic, source).await
}

/// Asks the backend to collect articles for the selected country, then
/// reloads the panel for whatever country is selected once that returns.
pub async fn collect_and_refresh<S: NewsSource>(
    logic: &RefCell<DashboardLogic>,
    source: &S,
) -> ApplyOutcome {
    let country = logic.borrow().selected();
    match source.collect_news(country).await {
        Ok(()) => info!(%country, "news collection requested"),
        Err(err) => warn!(%country, error = %err, "news collection failed"),
    }
    refresh_news(logic, source).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use tokio::sync::oneshot;

    use crate::config::DashboardConfig;
    use crate::data::fallback_items;
    use crate::dependency::{FetchNewsClient, NewsEndpoint};
    use crate::error::NewsError;
    use crate::types::{CountryCode, NewsItem, NewsStatus};

    type NewsResult = Result<Vec<NewsItem>, NewsError>;

    fn titled(title: &str) -> Vec<NewsItem> {
        vec![serde_json::from_value(serde_json::json!({ "id": 1, "title": title })).unwrap()]
    }

    fn new_logic() -> RefCell<DashboardLogic> {
        RefCell::new(DashboardLogic::new(DashboardConfig::default()))
    }

    /// Answers every fetch with the same result and records the calls.
    struct FixedSource {
        result: NewsResult,
        collect: Result<(), NewsError>,
        fetched: RefCell<Vec<CountryCode>>,
        collected: RefCell<Vec<CountryCode>>,
    }

    impl FixedSource {
        fn new(result: NewsResult) -> Self {
            Self {
                result,
                collect: Ok(()),
                fetched: RefCell::new(Vec::new()),
                collected: RefCell::new(Vec::new()),
            }
        }
    }

    impl NewsSource for FixedSource {
        async fn fetch_news(&self, country: CountryCode, _limit: u32) -> NewsResult {
            self.fetched.borrow_mut().push(country);
            self.result.clone()
        }

        async fn collect_news(&self, country: CountryCode) -> Result<(), NewsError> {
            self.collected.borrow_mut().push(country);
            self.collect.clone()
        }
    }

    /// Holds each fetch open until the test sends its answer.
    struct ScriptedSource {
        pending: RefCell<HashMap<CountryCode, oneshot::Receiver<NewsResult>>>,
    }

    impl NewsSource for ScriptedSource {
        async fn fetch_news(&self, country: CountryCode, _limit: u32) -> NewsResult {
            let receiver = self.pending.borrow_mut().remove(&country);
            match receiver {
                Some(receiver) => receiver
                    .await
                    .unwrap_or_else(|_| Err(NewsError::Decode("answer dropped".into()))),
                None => Err(NewsError::Unsupported),
            }
        }

        async fn collect_news(&self, _country: CountryCode) -> Result<(), NewsError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn successful_fetch_goes_live() {
        let logic = new_logic();
        let source = FixedSource::new(Ok(titled("live")));

        let outcome = select_and_refresh(&logic, &source, "de").await;

        assert_eq!(outcome, ApplyOutcome::Applied);
        assert_eq!(source.fetched.borrow().as_slice(), [CountryCode::from_static("DE")]);
        let panel = logic.borrow().news_panel();
        assert_eq!(panel.status, NewsStatus::Live);
        assert_eq!(panel.country.as_str(), "DE");
        assert_eq!(panel.items[0].title, "live");
    }

    #[tokio::test]
    async fn failed_fetch_shows_fallback() {
        let logic = new_logic();
        let source = FixedSource::new(Err(NewsError::Transport {
            endpoint: "https://news.example.org/fn".into(),
            reason: "TypeError: Failed to fetch".into(),
        }));

        refresh_news(&logic, &source).await;

        let panel = logic.borrow().news_panel();
        assert!(matches!(panel.status, NewsStatus::Fallback { ref reason } if reason.contains("Failed to fetch")));
        assert_eq!(panel.items, fallback_items());
    }

    #[tokio::test]
    async fn native_client_falls_back_without_panicking() {
        let logic = new_logic();
        let endpoint = NewsEndpoint::parse("https://news.example.org/fn", None).unwrap();
        let client = FetchNewsClient::new(endpoint);

        select_and_refresh(&logic, &client, "BY").await;

        let panel = logic.borrow().news_panel();
        assert_eq!(panel.country.as_str(), "BY");
        assert_eq!(panel.items.len(), 4);
    }

    #[tokio::test]
    async fn collect_failure_still_refreshes_current_selection() {
        let logic = new_logic();
        let mut source = FixedSource::new(Ok(titled("fresh")));
        source.collect = Err(NewsError::Status {
            endpoint: "https://news.example.org/fn".into(),
            status: 500,
        });

        logic.borrow_mut().select_country("FR");
        let outcome = collect_and_refresh(&logic, &source).await;

        assert_eq!(outcome, ApplyOutcome::Applied);
        assert_eq!(source.collected.borrow().as_slice(), [CountryCode::from_static("FR")]);
        assert_eq!(source.fetched.borrow().as_slice(), [CountryCode::from_static("FR")]);
        assert_eq!(logic.borrow().news_panel().status, NewsStatus::Live);
    }

    #[tokio::test]
    async fn late_answer_for_earlier_selection_is_discarded() {
        let logic = new_logic();
        let (ru_tx, ru_rx) = oneshot::channel();
        let (de_tx, de_rx) = oneshot::channel();
        let mut senders = HashMap::from([("RU", ru_tx), ("DE", de_tx)]);
        let source = ScriptedSource {
            pending: RefCell::new(HashMap::from([
                (CountryCode::from_static("RU"), ru_rx),
                (CountryCode::from_static("DE"), de_rx),
            ])),
        };

        let driver = async {
            // Both fetches are in flight once their receivers are taken.
            while !source.pending.borrow().is_empty() {
                tokio::task::yield_now().await;
            }
            // Answer the newest selection first, then the superseded one.
            let winner = logic.borrow().selected();
            let loser = if winner.as_str() == "RU" { "DE" } else { "RU" };
            if let Some(tx) = senders.remove(winner.as_str()) {
                let _ = tx.send(Ok(titled(winner.as_str())));
            }
            tokio::task::yield_now().await;
            if let Some(tx) = senders.remove(loser) {
                let _ = tx.send(Ok(titled(loser)));
            }
            winner
        };

        let (first, second, winner) = tokio::join!(
            select_and_refresh(&logic, &source, "RU"),
            select_and_refresh(&logic, &source, "DE"),
            driver,
        );

        let mut outcomes = [first, second];
        outcomes.sort_by_key(|o| *o == ApplyOutcome::Stale);
        assert_eq!(outcomes, [ApplyOutcome::Applied, ApplyOutcome::Stale]);

        let panel = logic.borrow().news_panel();
        assert_eq!(panel.country, winner);
        assert_eq!(logic.borrow().selected(), winner);
        assert_eq!(panel.items[0].title, winner.as_str());
    }
}
