//! News domain — crypto headlines shown on the news page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One news headline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub link: String,
    pub pub_date: DateTime<Utc>,
}

impl NewsArticle {
    /// `"Oct 19, 2026"`.
    pub fn date_label(&self) -> String {
        self.pub_date.format("%b %-d, %Y").to_string()
    }
}

/// Newest first.
pub fn sort_newest_first(articles: &mut [NewsArticle]) {
    articles.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, date: &str) -> NewsArticle {
        NewsArticle {
            title: title.to_string(),
            description: String::new(),
            link: format!("https://news.example/{title}"),
            pub_date: date.parse().unwrap(),
        }
    }

    #[test]
    fn test_deserialize_and_label() {
        let a: NewsArticle = serde_json::from_str(
            r#"{"title":"BTC up","link":"https://x","pubDate":"2026-10-19T08:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(a.description, "");
        assert_eq!(a.date_label(), "Oct 19, 2026");
    }

    #[test]
    fn test_sort_newest_first() {
        let mut list = vec![
            article("a", "2026-01-01T00:00:00Z"),
            article("b", "2026-03-01T00:00:00Z"),
        ];
        sort_newest_first(&mut list);
        assert_eq!(list[0].title, "b");
    }
}
