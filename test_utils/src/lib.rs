pub mod constants;

use constants::{TEST_ARTICLES_CSV_PATH, TEST_WORD_COUNTS_CSV_PATH};
use cryptoboard::{Article, Dataset};
use csv::Reader;
use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

/// Loads the fixture dataset shared by integration tests and benchmarks.
pub fn load_test_dataset() -> Dataset {
    Dataset::from_paths(&TEST_ARTICLES_CSV_PATH, &TEST_WORD_COUNTS_CSV_PATH)
        .expect("Failed to load test dataset")
}

/// Builds a dataset of articles from `(title, link, content)` triples.
pub fn dataset_from_articles(articles: &[(&str, &str, &str)]) -> Dataset {
    Dataset::new(
        articles
            .iter()
            .map(|(title, link, content)| Article::new(title, link, content))
            .collect(),
        Vec::new(),
    )
}

/// Independently sums the `count` column per word of a word counts CSV file.
pub fn sum_word_counts_from_file(file_path: &Path) -> Result<HashMap<String, u64>, Box<dyn Error>> {
    let mut totals = HashMap::new();
    let mut reader = Reader::from_path(file_path)?;

    let headers = reader.headers()?.clone();
    let word_index = headers
        .iter()
        .position(|h| h == "word")
        .ok_or("Missing 'word' column")?;
    let count_index = headers
        .iter()
        .position(|h| h == "count")
        .ok_or("Missing 'count' column")?;

    for record in reader.records() {
        let record = record?;
        let word = record.get(word_index).ok_or("Missing word")?.to_string();
        let count: u64 = record.get(count_index).ok_or("Missing count")?.parse()?;
        *totals.entry(word).or_insert(0) += count;
    }

    Ok(totals)
}

/// Counts occurrences of `word` among the whitespace tokens of `content`.
pub fn recount_token(content: &str, word: &str) -> u64 {
    content
        .split_whitespace()
        .filter(|token| *token == word)
        .count() as u64
}
