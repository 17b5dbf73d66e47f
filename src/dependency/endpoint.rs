use url::Url;

use crate::error::NewsError;
use crate::types::CountryCode;

/// Base URL of the news service. The same URL answers the GET listing and
/// the POST that asks the backend to collect fresh articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsEndpoint {
    base: Url,
}

impl NewsEndpoint {
    /// Parses `raw`, joining it onto `origin` when it is a path such as
    /// `/backend/news-collector`.
    pub fn parse(raw: &str, origin: Option<&str>) -> Result<Self, NewsError> {
        let raw = raw.trim();
        let invalid = |reason: String| NewsError::Endpoint {
            endpoint: raw.to_string(),
            reason,
        };

        let base = match Url::parse(raw) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let origin =
                    origin.ok_or_else(|| invalid("relative endpoint without a page origin".into()))?;
                Url::parse(origin)
                    .and_then(|origin| origin.join(raw))
                    .map_err(|e| invalid(e.to_string()))?
            }
            Err(e) => return Err(invalid(e.to_string())),
        };

        match base.scheme() {
            "http" | "https" => Ok(Self { base }),
            other => Err(invalid(format!("unsupported scheme {other}"))),
        }
    }

    pub fn as_str(&self) -> &str {
        self.base.as_str()
    }

    pub fn fetch_url(&self, country: CountryCode, limit: u32) -> String {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("country", country.as_str())
            .append_pair("limit", &limit.to_string());
        url.into()
    }

    pub fn collect_url(&self) -> String {
        self.base.to_string()
    }

    pub fn collect_body(country: CountryCode) -> String {
        serde_json::json!({ "country": country.as_str() }).to_string()
    }
}

/// Origin of the page hosting the module, used to resolve relative endpoints.
#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ORIGIN: &str = "https://dash.example.org";

    #[test]
    fn relative_path_joins_page_origin() {
        let endpoint = NewsEndpoint::parse("/backend/news-collector", Some(ORIGIN)).unwrap();
        assert_eq!(
            endpoint.fetch_url(CountryCode::from_static("RU"), 20),
            "https://dash.example.org/backend/news-collector?country=RU&limit=20"
        );
        assert_eq!(
            endpoint.collect_url(),
            "https://dash.example.org/backend/news-collector"
        );
    }

    #[test]
    fn absolute_url_ignores_origin() {
        let endpoint =
            NewsEndpoint::parse("https://fn.example.net/v1/news-collector", Some(ORIGIN)).unwrap();
        assert_eq!(
            endpoint.fetch_url(CountryCode::parse("de").unwrap(), 5),
            "https://fn.example.net/v1/news-collector?country=DE&limit=5"
        );
    }

    #[test]
    fn relative_path_needs_origin() {
        let err = NewsEndpoint::parse("/backend/news-collector", None).unwrap_err();
        assert!(matches!(err, NewsError::Endpoint { .. }));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = NewsEndpoint::parse("ftp://files.example.org/news", None).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme ftp"));
    }

    #[test]
    fn collect_body_names_only_the_country() {
        let body = NewsEndpoint::collect_body(CountryCode::from_static("BY"));
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value, serde_json::json!({ "country": "BY" }));
    }
}
