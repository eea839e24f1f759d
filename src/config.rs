use crate::constants::{
    ARTICLES_FILE_NAME, DEFAULT_ARTICLE_TOP_WORDS_LIMIT, DEFAULT_DATA_DIRECTORY,
    DEFAULT_TOP_WORDS_LIMIT, STOP_WORDS, WORD_COUNTS_FILE_NAME,
};
use crate::models::EngineConfig;
use std::path::PathBuf;
use std::sync::LazyLock;

pub static DEFAULT_ENGINE_CONFIG: LazyLock<EngineConfig> = LazyLock::new(|| EngineConfig {
    top_words_limit: DEFAULT_TOP_WORDS_LIMIT,
    article_top_words_limit: DEFAULT_ARTICLE_TOP_WORDS_LIMIT,
    stop_words: STOP_WORDS.iter().map(|word| word.to_string()).collect(),
});

pub fn default_articles_path() -> PathBuf {
    DEFAULT_DATA_DIRECTORY.join(ARTICLES_FILE_NAME)
}

pub fn default_word_counts_path() -> PathBuf {
    DEFAULT_DATA_DIRECTORY.join(WORD_COUNTS_FILE_NAME)
}
