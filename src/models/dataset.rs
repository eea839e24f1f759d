use crate::models::{Article, WordCountRecord};
use crate::utils::{open_dataset_file, read_articles, read_word_counts};
use crate::Error;
use log::info;
use std::io::{Cursor, Read};
use std::path::Path;

/// The immutable in-memory tables the API serves from.
///
/// A `Dataset` is fully populated at construction and never mutated
/// afterwards; consumers share it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    articles: Vec<Article>,
    word_counts: Vec<WordCountRecord>,
}

impl Dataset {
    pub fn new(articles: Vec<Article>, word_counts: Vec<WordCountRecord>) -> Self {
        Dataset {
            articles,
            word_counts,
        }
    }

    /// Loads both tables from CSV files. Files ending in `.gz` are
    /// decompressed on the fly.
    pub fn from_paths(articles_path: &Path, word_counts_path: &Path) -> Result<Self, Error> {
        info!(
            "Loading dataset from {} and {}",
            articles_path.display(),
            word_counts_path.display()
        );

        let dataset = Self::from_readers(
            open_dataset_file(articles_path)?,
            open_dataset_file(word_counts_path)?,
        )?;

        info!(
            "Loaded {} articles and {} word count records",
            dataset.articles.len(),
            dataset.word_counts.len()
        );

        Ok(dataset)
    }

    pub fn from_readers<A: Read, W: Read>(articles: A, word_counts: W) -> Result<Self, Error> {
        Ok(Dataset {
            articles: read_articles(articles)?,
            word_counts: read_word_counts(word_counts)?,
        })
    }

    pub fn from_csv_strings(articles_csv: &str, word_counts_csv: &str) -> Result<Self, Error> {
        Self::from_readers(Cursor::new(articles_csv), Cursor::new(word_counts_csv))
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn word_counts(&self) -> &[WordCountRecord] {
        &self.word_counts
    }
}
