//! Prints every aggregate view of a dataset as pretty JSON, without starting
//! the server.
//!
//! Usage: `dev [articles.csv] [word_counts.csv]`

use cryptoboard::{
    default_articles_path, default_word_counts_path, AggregationEngine, Dataset,
    DEFAULT_ENGINE_CONFIG,
};
use log::error;
use serde::Serialize;
use std::path::PathBuf;

fn print_section<T: Serialize>(name: &str, value: &T) -> Result<(), serde_json::Error> {
    println!("== {}", name);
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let articles_path = args.next().map(PathBuf::from).unwrap_or_else(default_articles_path);
    let word_counts_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(default_word_counts_path);

    let dataset = Dataset::from_paths(&articles_path, &word_counts_path).map_err(|e| {
        error!("Failed to load dataset: {}", e);
        e
    })?;

    let engine = AggregationEngine::new(&DEFAULT_ENGINE_CONFIG, &dataset);

    print_section("meta", &engine.dataset_meta())?;
    print_section("word-cloud", &engine.top_words())?;
    print_section("article-counter", &engine.article_top_words())?;

    if let Some(top) = engine.top_words().first() {
        print_section(
            &format!("word-trend ({})", top.word),
            &engine.word_trend(&top.word),
        )?;
    }

    print_section(
        "comparative (media vs politics)",
        &engine.compare_categories("media", "politics"),
    )?;
    print_section("by-coin (bitcoin)", &engine.articles_by_coin("bitcoin"))?;

    Ok(())
}
