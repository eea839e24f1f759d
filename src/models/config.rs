use crate::constants::{ARTICLES_FILE_NAME, DEFAULT_DATA_DIRECTORY, WORD_COUNTS_FILE_NAME};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Limits and stopwords used by the `AggregationEngine`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub top_words_limit: usize,
    pub article_top_words_limit: usize,
    pub stop_words: Vec<String>,
}

impl EngineConfig {
    pub fn with_extra_stop_words<S: AsRef<str>>(mut self, stop_words: &[S]) -> Self {
        for stop_word in stop_words {
            let stop_word = stop_word.as_ref().to_lowercase();
            if !self.stop_words.contains(&stop_word) {
                self.stop_words.push(stop_word);
            }
        }
        self
    }
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory the dataset files are resolved against.
    pub data_dir: PathBuf,
    pub articles_path: PathBuf,
    pub word_counts_path: PathBuf,
}

impl ServerConfig {
    /// Points both dataset files at their default names inside `data_dir`.
    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.articles_path = data_dir.join(ARTICLES_FILE_NAME);
        self.word_counts_path = data_dir.join(WORD_COUNTS_FILE_NAME);
        self.data_dir = data_dir;
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
            data_dir: DEFAULT_DATA_DIRECTORY.clone(),
            articles_path: crate::config::default_articles_path(),
            word_counts_path: crate::config::default_word_counts_path(),
        }
    }
}
