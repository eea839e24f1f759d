use crate::Error;
use csv::StringRecord;

/// Returns the position of the named column in the header row.
pub fn find_column(headers: &StringRecord, name: &str) -> Result<usize, Error> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", name)))
}
