use crate::types::{Period, Word, WordFrequency};
use serde::Serialize;

/// One row of the word counts table. Several records may share a word, one
/// per time bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCountRecord {
    pub word: Word,
    pub count: WordFrequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

impl WordCountRecord {
    pub fn new(word: &str, count: WordFrequency) -> Self {
        WordCountRecord {
            word: word.to_string(),
            count,
            period: None,
        }
    }

    pub fn with_period(word: &str, count: WordFrequency, period: &str) -> Self {
        WordCountRecord {
            word: word.to_string(),
            count,
            period: Some(period.to_string()),
        }
    }
}
