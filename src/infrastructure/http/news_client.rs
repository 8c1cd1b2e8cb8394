use crate::domain::errors::{DataError, NetworkResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::Timestamp;
use crate::domain::news::{FeedAnalysis, NewsFeed, RawNewsEntry};
use gloo_net::http::Request;

#[derive(Debug, serde::Deserialize)]
struct NewsEntryDto {
    message_id: u64,
    text: String,
    timestamp: serde_json::Value,
}

#[derive(Debug, Default, serde::Deserialize)]
struct AnalysisSectionDto {
    #[serde(default)]
    news_related_to: Vec<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct AnalysisDto {
    #[serde(default)]
    political_sentiment: AnalysisSectionDto,
    #[serde(default)]
    technical_analysis: AnalysisSectionDto,
    #[serde(default)]
    new_coins: AnalysisSectionDto,
}

#[derive(Debug, serde::Deserialize)]
struct NewsResponseDto {
    news: Vec<NewsEntryDto>,
    #[serde(default)]
    analysis: AnalysisDto,
}

/// The feed serves timestamps either as epoch milliseconds or as a date
/// string the browser can parse; unparseable values sort last.
fn entry_timestamp(value: &serde_json::Value) -> Timestamp {
    match value {
        serde_json::Value::Number(n) => Timestamp::from_millis(n.as_u64().unwrap_or(0)),
        serde_json::Value::String(s) => {
            let parsed = js_sys::Date::parse(s);
            if parsed.is_nan() {
                Timestamp::from_millis(0)
            } else {
                Timestamp::from_millis(parsed as u64)
            }
        }
        _ => Timestamp::from_millis(0),
    }
}

impl From<NewsResponseDto> for NewsFeed {
    fn from(dto: NewsResponseDto) -> Self {
        NewsFeed {
            entries: dto
                .news
                .iter()
                .map(|entry| RawNewsEntry {
                    message_id: entry.message_id,
                    text: entry.text.clone(),
                    timestamp: entry_timestamp(&entry.timestamp),
                })
                .collect(),
            analysis: FeedAnalysis {
                political_titles: dto.analysis.political_sentiment.news_related_to,
                technical_titles: dto.analysis.technical_analysis.news_related_to,
                new_coin_titles: dto.analysis.new_coins.news_related_to,
            },
        }
    }
}

/// Client for the news-aggregation microservice.
pub struct NewsClient {
    base_url: String,
}

impl NewsClient {
    pub fn new() -> Self {
        Self { base_url: crate::infrastructure::http::ServiceEndpoints::default().news }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn news_url(&self) -> String {
        format!("{}/news", self.base_url)
    }

    pub async fn fetch_feed(&self) -> NetworkResult<NewsFeed> {
        let url = self.news_url();
        get_logger().info(
            LogComponent::Infrastructure("NewsAPI"),
            &format!("Fetching news feed from: {}", url),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| DataError::NetworkError(format!("{e:?}")))?;

        if !response.ok() {
            return Err(DataError::HttpStatus(response.status()));
        }

        let dto: NewsResponseDto =
            response.json().await.map_err(|e| DataError::ParseError(format!("{e:?}")))?;

        Ok(dto.into())
    }
}

impl Default for NewsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_converts_entries_and_analysis() {
        let raw = r#"{
            "news": [
                {"message_id": 7, "text": "**Title**\nSummary line", "timestamp": 1700000000000}
            ],
            "analysis": {
                "political_sentiment": {"news_related_to": ["Title"]},
                "technical_analysis": {"news_related_to": []},
                "new_coins": {"news_related_to": []}
            }
        }"#;
        let dto: NewsResponseDto = serde_json::from_str(raw).unwrap();
        let feed: NewsFeed = dto.into();

        assert_eq!(feed.entries.len(), 1);
        assert_eq!(feed.entries[0].message_id, 7);
        assert_eq!(feed.entries[0].timestamp, Timestamp::from_millis(1700000000000));
        assert_eq!(feed.analysis.political_titles, vec!["Title".to_string()]);
    }

    #[test]
    fn missing_analysis_defaults_to_empty_sections() {
        let raw = r#"{"news": []}"#;
        let dto: NewsResponseDto = serde_json::from_str(raw).unwrap();
        let feed: NewsFeed = dto.into();
        assert!(feed.analysis.technical_titles.is_empty());
    }
}
