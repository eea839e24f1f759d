use crate::types::{ArticleLink, ArticleTitle};
use serde::Serialize;

/// A single news article. Identity is its row position in the loaded table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: ArticleTitle,
    pub link: ArticleLink,
    pub content: String,
}

impl Article {
    pub fn new(title: &str, link: &str, content: &str) -> Self {
        Article {
            title: title.to_string(),
            link: link.to_string(),
            content: content.to_string(),
        }
    }

    /// Length of the content in Unicode scalar values.
    pub fn content_length(&self) -> usize {
        self.content.chars().count()
    }
}
