use indexmap::IndexMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a whitespace-delimited token as an owned `String`. Tokens keep their original case.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents a word as it appears in the word counts table.
pub type Word = String;

/// The number of occurrences of a word or token.
pub type WordFrequency = u64;

/// Represents an ordered map of words to their frequency counts.
///
/// Iteration order is rank order (highest frequency first), which is also
/// the order the entries are serialized in.
pub type RankedWordMap = IndexMap<Word, WordFrequency>;

/// Represents the title of an article.
pub type ArticleTitle = String;

/// Represents the link (URL) of an article.
pub type ArticleLink = String;

/// The optional time bucket a word count belongs to (e.g. a date string).
pub type Period = String;
