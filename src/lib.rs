mod config;
pub use config::{default_articles_path, default_word_counts_path, DEFAULT_ENGINE_CONFIG};
pub mod constants;
pub mod models;
pub use models::{
    AggregationEngine, Article, ArticleSummary, ArticleTopWords, CategoryComparison, Dataset,
    DatasetMeta, EngineConfig, Error, ServerConfig, Tokenizer, WordCount, WordCountRecord,
};
pub mod server;
pub use server::{build_router, run_server};
pub mod types;
mod utils;
pub use utils::paginate;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
