use crate::models::{
    ArticleSummary, ArticleTopWords, CategoryComparison, Dataset, DatasetMeta, EngineConfig,
    Tokenizer, WordCount, WordCountRecord,
};
use crate::types::{Word, WordFrequency};
use crate::utils::{count_token_frequencies, paginate, sort_results};
use log::debug;
use std::collections::HashMap;

/// Computes read-only views over a `Dataset`.
///
/// Every operation is a pure function of the dataset and the configuration:
/// nothing is cached between calls, and empty tables produce empty or zeroed
/// results rather than errors.
pub struct AggregationEngine<'a> {
    config: &'a EngineConfig,
    dataset: &'a Dataset,
    article_tokenizer: Tokenizer,
}

impl<'a> AggregationEngine<'a> {
    pub fn new(config: &'a EngineConfig, dataset: &'a Dataset) -> Self {
        AggregationEngine {
            config,
            dataset,
            article_tokenizer: Tokenizer::article_content_parser(&config.stop_words),
        }
    }

    /// The `[skip, skip + limit)` slice of the article table as `{title, link}` pairs.
    pub fn newsfeed(&self, skip: usize, limit: usize) -> Vec<ArticleSummary> {
        debug!("Building newsfeed (skip: {}, limit: {})", skip, limit);

        paginate(self.dataset.articles(), skip, limit)
            .iter()
            .map(|article| ArticleSummary {
                title: article.title.clone(),
                link: article.link.clone(),
            })
            .collect()
    }

    /// The most frequent words across the word counts table, using the
    /// configured limit.
    pub fn top_words(&self) -> Vec<WordCount> {
        self.top_words_with_limit(self.config.top_words_limit)
    }

    /// Sums counts per word and returns the `limit` highest, ordered by
    /// descending count and then ascending word. Sums saturate at `u64::MAX`.
    pub fn top_words_with_limit(&self, limit: usize) -> Vec<WordCount> {
        debug!(
            "Summing {} word count records",
            self.dataset.word_counts().len()
        );

        let mut totals: HashMap<Word, WordFrequency> = HashMap::new();
        for record in self.dataset.word_counts() {
            let total = totals.entry(record.word.clone()).or_insert(0);
            *total = total.saturating_add(record.count);
        }

        sort_results(totals)
            .into_iter()
            .take(limit)
            .map(|(word, count)| WordCount { word, count })
            .collect()
    }

    /// The most frequent non-stopword tokens of every article, using the
    /// configured stopwords and limit.
    pub fn article_top_words(&self) -> Vec<ArticleTopWords> {
        self.rank_article_words(&self.article_tokenizer, self.config.article_top_words_limit)
    }

    /// Same as `article_top_words`, with an explicit stopword set and limit.
    pub fn article_top_words_with<S: AsRef<str>>(
        &self,
        stop_words: &[S],
        limit: usize,
    ) -> Vec<ArticleTopWords> {
        self.rank_article_words(&Tokenizer::article_content_parser(stop_words), limit)
    }

    fn rank_article_words(&self, tokenizer: &Tokenizer, limit: usize) -> Vec<ArticleTopWords> {
        debug!(
            "Ranking words for {} articles",
            self.dataset.articles().len()
        );

        self.dataset
            .articles()
            .iter()
            .map(|article| {
                let tokens = tokenizer.tokenize_filtered(&article.content);
                let mut top_words = count_token_frequencies(&tokens);

                // Stable: equal counts keep first-encountered order
                top_words.sort_by(|_, a, _, b| b.cmp(a));
                top_words.truncate(limit);

                ArticleTopWords {
                    title: article.title.clone(),
                    top_words,
                }
            })
            .collect()
    }

    /// Word count records whose word matches `word` exactly, by descending
    /// count. Records with equal counts keep table order.
    pub fn word_trend(&self, word: &str) -> Vec<WordCountRecord> {
        debug!("Collecting trend for {:?}", word);

        let mut records: Vec<WordCountRecord> = self
            .dataset
            .word_counts()
            .iter()
            .filter(|record| record.word == word)
            .cloned()
            .collect();

        records.sort_by(|a, b| b.count.cmp(&a.count));

        records
    }

    /// Counts articles whose link contains each category (case-sensitive).
    /// An article may count toward both.
    pub fn compare_categories(&self, category1: &str, category2: &str) -> CategoryComparison {
        debug!("Comparing categories {:?} and {:?}", category1, category2);

        let count_matching = |category: &str| {
            self.dataset
                .articles()
                .iter()
                .filter(|article| article.link.contains(category))
                .count()
        };

        CategoryComparison {
            category1: count_matching(category1),
            category2: count_matching(category2),
        }
    }

    /// Articles whose content mentions `coin`, ignoring case, in table order.
    pub fn articles_by_coin(&self, coin: &str) -> Vec<ArticleSummary> {
        debug!("Filtering articles by coin {:?}", coin);

        let coin = coin.to_lowercase();

        self.dataset
            .articles()
            .iter()
            .filter(|article| article.content.to_lowercase().contains(&coin))
            .map(|article| ArticleSummary {
                title: article.title.clone(),
                link: article.link.clone(),
            })
            .collect()
    }

    pub fn dataset_meta(&self) -> DatasetMeta {
        let articles = self.dataset.articles();
        let total_articles = articles.len();
        debug!("Computing metadata for {} articles", total_articles);

        let average_article_length = if total_articles == 0 {
            0.0
        } else {
            let total_length: usize = articles.iter().map(|a| a.content_length()).sum();
            total_length as f64 / total_articles as f64
        };

        DatasetMeta {
            total_articles,
            average_article_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;
    use crate::DEFAULT_ENGINE_CONFIG;

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                Article::new("One", "https://news.io/media/1", "Bitcoin surges"),
                Article::new("Two", "https://news.io/politics/2", "no mention"),
                Article::new("Three", "https://news.io/media/3", "BITCOIN dips, BitCoin"),
            ],
            vec![
                WordCountRecord::with_period("bitcoin", 4, "2024-01-01"),
                WordCountRecord::with_period("ether", 9, "2024-01-01"),
                WordCountRecord::with_period("bitcoin", 7, "2024-01-02"),
                WordCountRecord::with_period("Bitcoin", 1, "2024-01-02"),
            ],
        )
    }

    #[test]
    fn test_top_words_sums_per_word() {
        let dataset = dataset();
        let engine = AggregationEngine::new(&DEFAULT_ENGINE_CONFIG, &dataset);

        assert_eq!(
            engine.top_words(),
            vec![
                WordCount {
                    word: "bitcoin".to_string(),
                    count: 11
                },
                WordCount {
                    word: "ether".to_string(),
                    count: 9
                },
                WordCount {
                    word: "Bitcoin".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_top_words_saturates_instead_of_overflowing() {
        let dataset = Dataset::from_csv_strings(
            "title,link,content\n",
            "word,count\nbitcoin,18446744073709551615\nbitcoin,1\nether,2\n",
        )
        .unwrap();
        let engine = AggregationEngine::new(&DEFAULT_ENGINE_CONFIG, &dataset);

        assert_eq!(
            engine.top_words(),
            vec![
                WordCount {
                    word: "bitcoin".to_string(),
                    count: u64::MAX
                },
                WordCount {
                    word: "ether".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_top_words_respects_limit() {
        let dataset = dataset();
        let engine = AggregationEngine::new(&DEFAULT_ENGINE_CONFIG, &dataset);

        assert_eq!(engine.top_words_with_limit(1).len(), 1);
        assert!(engine.top_words_with_limit(0).is_empty());
    }

    #[test]
    fn test_article_top_words_tie_break_is_first_encountered() {
        let dataset = Dataset::new(
            vec![Article::new(
                "Ties",
                "https://news.io/1",
                "zeta alpha The zeta beta alpha gamma delta epsilon the THE",
            )],
            vec![],
        );
        let engine = AggregationEngine::new(&DEFAULT_ENGINE_CONFIG, &dataset);

        let results = engine.article_top_words();
        let words: Vec<(&str, u64)> = results[0]
            .top_words
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();

        assert_eq!(
            words,
            vec![
                ("zeta", 2),
                ("alpha", 2),
                ("beta", 1),
                ("gamma", 1),
                ("delta", 1)
            ]
        );
    }

    #[test]
    fn test_article_top_words_with_custom_stop_words() {
        let dataset = dataset();
        let engine = AggregationEngine::new(&DEFAULT_ENGINE_CONFIG, &dataset);

        let results = engine.article_top_words_with(&["bitcoin"], 5);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].top_words.len(), 1);
        assert_eq!(results[0].top_words.get("surges"), Some(&1));
        assert_eq!(results[2].top_words.get("dips,"), Some(&1));
        assert_eq!(results[2].top_words.len(), 1);
    }

    #[test]
    fn test_word_trend_is_exact_and_sorted_by_count() {
        let dataset = dataset();
        let engine = AggregationEngine::new(&DEFAULT_ENGINE_CONFIG, &dataset);

        assert_eq!(
            engine.word_trend("bitcoin"),
            vec![
                WordCountRecord::with_period("bitcoin", 7, "2024-01-02"),
                WordCountRecord::with_period("bitcoin", 4, "2024-01-01"),
            ]
        );
        assert!(engine.word_trend("dogecoin").is_empty());
    }

    #[test]
    fn test_compare_categories_is_case_sensitive() {
        let dataset = dataset();
        let engine = AggregationEngine::new(&DEFAULT_ENGINE_CONFIG, &dataset);

        assert_eq!(
            engine.compare_categories("media", "Media"),
            CategoryComparison {
                category1: 2,
                category2: 0
            }
        );
    }

    #[test]
    fn test_compare_categories_counts_overlapping_matches() {
        let dataset = dataset();
        let engine = AggregationEngine::new(&DEFAULT_ENGINE_CONFIG, &dataset);

        assert_eq!(
            engine.compare_categories("news.io", "media"),
            CategoryComparison {
                category1: 3,
                category2: 2
            }
        );
    }

    #[test]
    fn test_articles_by_coin_ignores_case() {
        let dataset = dataset();
        let engine = AggregationEngine::new(&DEFAULT_ENGINE_CONFIG, &dataset);

        for coin in ["bitcoin", "BITCOIN", "BitCoin"] {
            let titles: Vec<String> = engine
                .articles_by_coin(coin)
                .into_iter()
                .map(|summary| summary.title)
                .collect();
            assert_eq!(titles, vec!["One", "Three"]);
        }
    }

    #[test]
    fn test_dataset_meta() {
        let dataset = dataset();
        let engine = AggregationEngine::new(&DEFAULT_ENGINE_CONFIG, &dataset);

        let meta = engine.dataset_meta();
        assert_eq!(meta.total_articles, 3);
        // 14 + 10 + 21 characters
        assert_eq!(meta.average_article_length, 15.0);
    }

    #[test]
    fn test_empty_dataset_yields_empty_views() {
        let dataset = Dataset::default();
        let engine = AggregationEngine::new(&DEFAULT_ENGINE_CONFIG, &dataset);

        assert!(engine.newsfeed(0, 10).is_empty());
        assert!(engine.top_words().is_empty());
        assert!(engine.article_top_words().is_empty());
        assert!(engine.word_trend("bitcoin").is_empty());
        assert!(engine.articles_by_coin("bitcoin").is_empty());
        assert_eq!(
            engine.compare_categories("media", "politics"),
            CategoryComparison {
                category1: 0,
                category2: 0
            }
        );
        assert_eq!(
            engine.dataset_meta(),
            DatasetMeta {
                total_articles: 0,
                average_article_length: 0.0
            }
        );
    }
}
