use crate::error::NewsError;
use crate::types::{CountryCode, NewsItem, NewsResponse};

use super::NewsEndpoint;

/// Where the dashboard gets its news from. The browser build talks to the
/// news service; tests plug in their own sources.
#[allow(async_fn_in_trait)]
pub trait NewsSource {
    async fn fetch_news(&self, country: CountryCode, limit: u32) -> Result<Vec<NewsItem>, NewsError>;

    /// Asks the backend to gather fresh articles for `country`.
    async fn collect_news(&self, country: CountryCode) -> Result<(), NewsError>;
}

pub fn parse_news_body(body: &str) -> Result<Vec<NewsItem>, NewsError> {
    serde_json::from_str::<NewsResponse>(body)
        .map(|response| response.news)
        .map_err(|e| NewsError::Decode(e.to_string()))
}

pub struct FetchNewsClient {
    endpoint: NewsEndpoint,
}

impl FetchNewsClient {
    pub fn new(endpoint: NewsEndpoint) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &NewsEndpoint {
        &self.endpoint
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    use crate::error::NewsError;

    fn reason(value: JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }

    /// Sends one request and returns the body text of a 2xx response.
    pub async fn send(url: &str, method: &str, body: Option<&str>) -> Result<String, NewsError> {
        let transport = |value: JsValue| NewsError::Transport {
            endpoint: url.to_string(),
            reason: reason(value),
        };
        let window = web_sys::window().ok_or(NewsError::Unsupported)?;

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(transport)?;
        if body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(transport)?;
        }

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport)?;
        let response: Response = response.dyn_into().map_err(transport)?;
        if !response.ok() {
            return Err(NewsError::Status {
                endpoint: url.to_string(),
                status: response.status(),
            });
        }

        let text = JsFuture::from(response.text().map_err(transport)?)
            .await
            .map_err(transport)?;
        text.as_string()
            .ok_or_else(|| NewsError::Decode("response body is not text".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl NewsSource for FetchNewsClient {
    async fn fetch_news(&self, country: CountryCode, limit: u32) -> Result<Vec<NewsItem>, NewsError> {
        let url = self.endpoint.fetch_url(country, limit);
        tracing::debug!(%url, "fetching news");
        let body = browser::send(&url, "GET", None).await?;
        parse_news_body(&body)
    }

    async fn collect_news(&self, country: CountryCode) -> Result<(), NewsError> {
        let url = self.endpoint.collect_url();
        tracing::debug!(%url, %country, "requesting news collection");
        browser::send(&url, "POST", Some(&NewsEndpoint::collect_body(country)))
            .await
            .map(|_| ())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl NewsSource for FetchNewsClient {
    async fn fetch_news(&self, _country: CountryCode, _limit: u32) -> Result<Vec<NewsItem>, NewsError> {
        Err(NewsError::Unsupported)
    }

    async fn collect_news(&self, _country: CountryCode) -> Result<(), NewsError> {
        Err(NewsError::Unsupported)
    }
}
