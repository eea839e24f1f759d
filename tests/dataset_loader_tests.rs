use cryptoboard::{Dataset, Error};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use test_utils::constants::{
    TEST_ARTICLES_CSV_PATH, TEST_DATA_FILES_DIRECTORY, TEST_MALFORMED_WORD_COUNTS_CSV_PATH,
    TEST_WORD_COUNTS_CSV_PATH,
};
use test_utils::load_test_dataset;

/// Writes a gzipped copy of `source` into the temp directory.
fn gzip_to_temp(source: &Path, name: &str) -> PathBuf {
    let bytes = fs::read(source).expect("Failed to read fixture");

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&bytes).expect("Failed to compress fixture");
    let compressed = encoder.finish().expect("Failed to finalize compression");

    let path = std::env::temp_dir().join(format!("cryptoboard-{}-{}", std::process::id(), name));
    fs::write(&path, compressed).expect("Failed to write compressed fixture");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_fixture_dataset() {
        let dataset = load_test_dataset();

        assert_eq!(dataset.articles().len(), 5);
        assert_eq!(dataset.word_counts().len(), 16);

        let first = &dataset.articles()[0];
        assert_eq!(first.title, "Bitcoin rallies past resistance");
        assert_eq!(
            first.link,
            "https://cryptonews.example/media/bitcoin-rallies"
        );
        assert!(first.content.starts_with("Bitcoin rallies as traders"));

        let first_count = &dataset.word_counts()[0];
        assert_eq!(first_count.word, "bitcoin");
        assert_eq!(first_count.count, 12);
        assert_eq!(first_count.period.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn test_load_gzipped_dataset() {
        let articles_path = gzip_to_temp(&TEST_ARTICLES_CSV_PATH, "articles.csv.gz");
        let word_counts_path = gzip_to_temp(&TEST_WORD_COUNTS_CSV_PATH, "word_counts.csv.gz");

        let dataset =
            Dataset::from_paths(&articles_path, &word_counts_path).expect("Failed to load gzip");

        assert_eq!(dataset, load_test_dataset());

        let _ = fs::remove_file(articles_path);
        let _ = fs::remove_file(word_counts_path);
    }

    #[test]
    fn test_malformed_row_is_fatal() {
        let result = Dataset::from_paths(
            &TEST_ARTICLES_CSV_PATH,
            &TEST_MALFORMED_WORD_COUNTS_CSV_PATH,
        );

        match result {
            Err(Error::ParserError(msg)) => assert!(msg.contains("row 2"), "{}", msg),
            other => panic!("Expected a parser error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = Dataset::from_paths(
            &TEST_DATA_FILES_DIRECTORY.join("no_such_articles.csv"),
            &TEST_WORD_COUNTS_CSV_PATH,
        );

        let err = result.expect_err("Expected a missing file to fail");
        assert!(err.is_fatal_load_error());
        assert!(err.to_string().contains("no_such_articles.csv"));
    }
}
