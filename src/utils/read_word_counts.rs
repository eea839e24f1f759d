use crate::constants::PERIOD_COLUMN_NAMES;
use crate::models::WordCountRecord;
use crate::types::WordFrequency;
use crate::utils::find_column;
use crate::Error;
use csv::ReaderBuilder;
use std::io::Read;

pub fn read_word_counts<R: Read>(reader: R) -> Result<Vec<WordCountRecord>, Error> {
    let mut word_counts = Vec::new();

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read word count headers: {}", e)))?
        .clone();

    let word_index = find_column(&headers, "word")?;
    let count_index = find_column(&headers, "count")?;
    let period_index = PERIOD_COLUMN_NAMES
        .iter()
        .find_map(|name| headers.iter().position(|h| h.trim() == *name));

    for (row_index, record) in reader.records().enumerate() {
        let row_number = row_index + 1;
        let record = record.map_err(|e| {
            Error::ParserError(format!(
                "Failed to read word count row {}: {}",
                row_number, e
            ))
        })?;

        let word = record.get(word_index).ok_or_else(|| {
            Error::ParserError(format!("Missing 'word' field in row {}", row_number))
        })?;

        let raw_count = record.get(count_index).ok_or_else(|| {
            Error::ParserError(format!("Missing 'count' field in row {}", row_number))
        })?;

        let count: WordFrequency = raw_count.trim().parse().map_err(|_| {
            Error::ParserError(format!(
                "Invalid count '{}' in row {}: expected a non-negative integer",
                raw_count, row_number
            ))
        })?;

        let period = match period_index {
            Some(index) => record.get(index).map(|period| period.to_string()),
            None => None,
        };

        word_counts.push(WordCountRecord {
            word: word.to_string(),
            count,
            period,
        });
    }

    Ok(word_counts)
}
