use crate::types::{NewsId, NewsItem, Sentiment, SourceType};

fn item(
    id: i64,
    title: &str,
    source: &str,
    source_type: SourceType,
    sentiment: Sentiment,
    date: &str,
) -> NewsItem {
    NewsItem {
        id: NewsId::Number(id),
        title: title.to_string(),
        source: source.to_string(),
        source_type: Some(source_type),
        sentiment: Some(sentiment),
        date: Some(date.to_string()),
        published_at: None,
        is_fake: None,
        credibility: None,
        content: None,
        url: None,
        fake_check_reason: None,
        bias_score: None,
        manipulation_detected: None,
        summary: None,
    }
}

/// Illustrative items shown when the news service cannot be reached.
pub fn fallback_items() -> Vec<NewsItem> {
    vec![
        item(
            1,
            "Parliament passes new media freedom bill",
            "State source",
            SourceType::Gov,
            Sentiment::Positive,
            "2025-12-23",
        ),
        item(
            2,
            "Opposition reports irregularities in the electoral process",
            "Independent outlet",
            SourceType::Opposition,
            Sentiment::Negative,
            "2025-12-22",
        ),
        item(
            3,
            "Economic reforms show positive momentum",
            "State source",
            SourceType::Gov,
            Sentiment::Positive,
            "2025-12-21",
        ),
        item(
            4,
            "Human rights groups alarmed by new protest law",
            "International organization",
            SourceType::Opposition,
            Sentiment::Negative,
            "2025-12-20",
        ),
    ]
}
