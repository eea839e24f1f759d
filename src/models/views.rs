//! Derived views computed per request from the loaded tables. None of these
//! are cached.

use crate::types::{ArticleLink, ArticleTitle, RankedWordMap, Word, WordFrequency};
use serde::Serialize;

/// A `{word, count}` pair, as returned by the word cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: Word,
    pub count: WordFrequency,
}

/// A `{title, link}` pair, as returned by the newsfeed and coin filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSummary {
    pub title: ArticleTitle,
    pub link: ArticleLink,
}

/// The most frequent non-stopword tokens of one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleTopWords {
    pub title: ArticleTitle,
    pub top_words: RankedWordMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryComparison {
    pub category1: usize,
    pub category2: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatasetMeta {
    pub total_articles: usize,
    /// Mean content length in characters; `0.0` when there are no articles.
    pub average_article_length: f64,
}
