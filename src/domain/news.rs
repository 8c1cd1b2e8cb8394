//! News feed domain: title cleanup, topic tagging and ordering.

use crate::domain::market_data::Timestamp;
use strum::Display as StrumDisplay;

/// Topic tag assigned from the feed's analysis sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum NewsTag {
    #[strum(serialize = "Politics")]
    Politics,
    #[strum(serialize = "Technical")]
    Technical,
    #[strum(serialize = "New Coins")]
    NewCoins,
}

/// One processed news entry, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub id: u64,
    pub title: String,
    pub published_at: Timestamp,
    pub summary: String,
    pub content: String,
    pub tags: Vec<NewsTag>,
}

/// Raw feed entry as the news service delivers it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawNewsEntry {
    pub message_id: u64,
    pub text: String,
    pub timestamp: Timestamp,
}

/// Analysis sections of the feed; each lists the clean titles it covers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedAnalysis {
    pub political_titles: Vec<String>,
    pub technical_titles: Vec<String>,
    pub new_coin_titles: Vec<String>,
}

/// A raw feed plus its analysis, before processing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsFeed {
    pub entries: Vec<RawNewsEntry>,
    pub analysis: FeedAnalysis,
}

/// First line of the text with bold markers stripped.
fn clean_title(text: &str) -> String {
    text.lines().next().unwrap_or("").replace("**", "").trim().to_string()
}

/// Second line of the text, if present.
fn summary_line(text: &str) -> String {
    text.lines().nth(1).unwrap_or("").to_string()
}

/// Turn a raw feed into display-ready items, newest first.
///
/// Tags come from membership of the cleaned title in the analysis lists;
/// an item can carry several tags or none.
pub fn process_feed(feed: NewsFeed) -> Vec<NewsItem> {
    let analysis = &feed.analysis;
    let mut items: Vec<NewsItem> = feed
        .entries
        .iter()
        .map(|entry| {
            let title = clean_title(&entry.text);

            let mut tags = Vec::new();
            if analysis.political_titles.contains(&title) {
                tags.push(NewsTag::Politics);
            }
            if analysis.technical_titles.contains(&title) {
                tags.push(NewsTag::Technical);
            }
            if analysis.new_coin_titles.contains(&title) {
                tags.push(NewsTag::NewCoins);
            }

            NewsItem {
                id: entry.message_id,
                summary: summary_line(&entry.text),
                content: entry.text.replace("**", ""),
                published_at: entry.timestamp,
                title,
                tags,
            }
        })
        .collect();

    items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    items
}
