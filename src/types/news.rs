use serde::{Deserialize, Deserializer, Serialize};

/// Backend ids are database integers; hand-written fallback items may use text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NewsId {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceType {
    Gov,
    Opposition,
    Independent,
    Other(String),
}

impl From<String> for SourceType {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "gov" | "government" | "state" => SourceType::Gov,
            "opposition" => SourceType::Opposition,
            "independent" => SourceType::Independent,
            _ => SourceType::Other(raw),
        }
    }
}

impl From<SourceType> for String {
    fn from(source: SourceType) -> Self {
        match source {
            SourceType::Gov => "gov".to_string(),
            SourceType::Opposition => "opposition".to_string(),
            SourceType::Independent => "independent".to_string(),
            SourceType::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    #[serde(other)]
    Unknown,
}

// Rows written by hand on the backend sometimes carry `null` text columns.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A news record as the news service returns it. Everything past
/// id/title/source is optional and read defensively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: NewsId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source: String,
    #[serde(default, rename = "type", alias = "source_type", alias = "sourceType")]
    pub source_type: Option<SourceType>,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, alias = "published_at")]
    pub published_at: Option<String>,
    #[serde(default, alias = "is_fake")]
    pub is_fake: Option<bool>,
    #[serde(default, alias = "credibility_score")]
    pub credibility: Option<f32>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, alias = "fake_check_reason")]
    pub fake_check_reason: Option<String>,
    #[serde(default, alias = "bias_score")]
    pub bias_score: Option<f32>,
    #[serde(default, alias = "manipulation_detected")]
    pub manipulation_detected: Option<bool>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl NewsItem {
    /// `date` when present, otherwise `publishedAt`.
    pub fn display_date(&self) -> Option<&str> {
        self.date.as_deref().or(self.published_at.as_deref())
    }
}

/// Body of a successful GET against the news endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsResponse {
    #[serde(default)]
    pub news: Vec<NewsItem>,
}

/// Source tabs of the news panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsFilter {
    #[default]
    All,
    Gov,
    Opposition,
}

impl NewsFilter {
    pub fn matches(&self, item: &NewsItem) -> bool {
        match self {
            NewsFilter::All => true,
            NewsFilter::Gov => item.source_type == Some(SourceType::Gov),
            NewsFilter::Opposition => item.source_type == Some(SourceType::Opposition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_row_with_snake_case_fields() {
        let raw = r#"{
            "id": 17,
            "title": "Parliament passes media bill",
            "content": "Details",
            "source": "Wire",
            "source_type": "independent",
            "url": "https://example.org/a",
            "published_at": "2025-12-22 09:30:00",
            "is_fake": false,
            "fake_check_reason": null,
            "sentiment": "negative",
            "bias_score": 40,
            "credibility_score": 72.5,
            "manipulation_detected": true,
            "summary": "Short"
        }"#;
        let item: NewsItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.id, NewsId::Number(17));
        assert_eq!(item.source_type, Some(SourceType::Independent));
        assert_eq!(item.sentiment, Some(Sentiment::Negative));
        assert_eq!(item.display_date(), Some("2025-12-22 09:30:00"));
        assert_eq!(item.is_fake, Some(false));
        assert_eq!(item.credibility, Some(72.5));
        assert_eq!(item.manipulation_detected, Some(true));
    }

    #[test]
    fn decodes_sparse_item() {
        let item: NewsItem = serde_json::from_str(r#"{"id":"a1","title":"t"}"#).unwrap();
        assert_eq!(item.id, NewsId::Text("a1".into()));
        assert_eq!(item.source, "");
        assert!(item.display_date().is_none());
        assert!(item.sentiment.is_none());
    }

    #[test]
    fn null_text_fields_read_as_empty() {
        let item: NewsItem =
            serde_json::from_str(r#"{"id":2,"title":null,"source":null,"sentiment":null}"#).unwrap();
        assert_eq!(item.title, "");
        assert_eq!(item.source, "");
        assert!(item.sentiment.is_none());
    }

    #[test]
    fn unknown_sentiment_and_source_type_are_kept_soft() {
        let item: NewsItem =
            serde_json::from_str(r#"{"id":1,"sentiment":"mixed","type":"blog"}"#).unwrap();
        assert_eq!(item.sentiment, Some(Sentiment::Unknown));
        assert_eq!(item.source_type, Some(SourceType::Other("blog".into())));
    }

    #[test]
    fn date_wins_over_published_at() {
        let item: NewsItem = serde_json::from_str(
            r#"{"id":1,"date":"2025-12-23","publishedAt":"2025-12-20T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(item.display_date(), Some("2025-12-23"));
    }

    #[test]
    fn filter_selects_by_source_type() {
        let gov: NewsItem = serde_json::from_str(r#"{"id":1,"type":"gov"}"#).unwrap();
        let opp: NewsItem = serde_json::from_str(r#"{"id":2,"type":"opposition"}"#).unwrap();
        let bare: NewsItem = serde_json::from_str(r#"{"id":3}"#).unwrap();

        assert!(NewsFilter::All.matches(&bare));
        assert!(NewsFilter::Gov.matches(&gov));
        assert!(!NewsFilter::Gov.matches(&opp));
        assert!(NewsFilter::Opposition.matches(&opp));
        assert!(!NewsFilter::Opposition.matches(&bare));
    }
}
