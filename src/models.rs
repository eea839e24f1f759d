pub mod aggregation_engine;
pub use aggregation_engine::AggregationEngine;

pub mod article;
pub use article::Article;

pub mod config;
pub use config::{EngineConfig, ServerConfig};

pub mod dataset;
pub use dataset::Dataset;

pub mod error;
pub use error::Error;

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod views;
pub use views::{ArticleSummary, ArticleTopWords, CategoryComparison, DatasetMeta, WordCount};

pub mod word_count_record;
pub use word_count_record::WordCountRecord;
