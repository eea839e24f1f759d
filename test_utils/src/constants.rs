use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_DATA_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!(env!("CARGO_MANIFEST_DIR"), "..", "tests", "test_data_files"));

pub static TEST_ARTICLES_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| TEST_DATA_FILES_DIRECTORY.join("articles.csv"));

pub static TEST_WORD_COUNTS_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| TEST_DATA_FILES_DIRECTORY.join("word_counts.csv"));

pub static TEST_MALFORMED_WORD_COUNTS_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| TEST_DATA_FILES_DIRECTORY.join("malformed_word_counts.csv"));
