use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

/// Words excluded from the per-article top words ranking. Compared against
/// the lowercased token.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "to", "in", "of", "for", "with", "on", "at",
];

pub const DEFAULT_TOP_WORDS_LIMIT: usize = 10;

pub const DEFAULT_ARTICLE_TOP_WORDS_LIMIT: usize = 5;

pub const DEFAULT_NEWSFEED_SKIP: usize = 0;

pub const DEFAULT_NEWSFEED_LIMIT: usize = 10;

pub static DEFAULT_DATA_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "news"));

pub static ARTICLES_FILE_NAME: &str = "articles.csv";

pub static WORD_COUNTS_FILE_NAME: &str = "word_counts.csv";

/// Column names, in priority order, recognized as the time dimension of the
/// word counts table.
pub const PERIOD_COLUMN_NAMES: &[&str] = &["date", "period", "timestamp", "time"];

pub static GZIP_EXTENSION: &str = "gz";
