use crate::types::{Token, TokenRef};
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct Tokenizer {
    pub stop_words: HashSet<String>,
}

impl Tokenizer {
    /// Configuration for article content parsing, with the given stopwords.
    ///
    /// Stopwords are stored lowercased and matched against the lowercased token.
    pub fn article_content_parser<S: AsRef<str>>(stop_words: &[S]) -> Self {
        Self {
            stop_words: stop_words
                .iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Configuration that keeps every token.
    pub fn passthrough() -> Self {
        Self {
            stop_words: HashSet::new(),
        }
    }

    /// Splits the text on whitespace.
    ///
    /// Note: This explicitly does not modify the case of the text, nor strip
    /// punctuation; `"Bitcoin"` and `"bitcoin,"` are distinct tokens.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a TokenRef> {
        text.split_whitespace().collect()
    }

    pub fn is_stop_word(&self, token: &TokenRef) -> bool {
        !self.stop_words.is_empty() && self.stop_words.contains(&token.to_lowercase())
    }

    /// Tokenizes the text and drops any stopwords.
    pub fn tokenize_filtered(&self, text: &str) -> Vec<Token> {
        self.tokenize(text)
            .into_iter()
            .filter(|token| !self.is_stop_word(token))
            .map(|token| token.to_string())
            .collect()
    }
}
