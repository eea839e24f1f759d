use crate::models::Article;
use crate::utils::find_column;
use crate::Error;
use csv::ReaderBuilder;
use std::io::Read;

pub fn read_articles<R: Read>(reader: R) -> Result<Vec<Article>, Error> {
    let mut articles = Vec::new();

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read article headers: {}", e)))?
        .clone();

    let title_index = find_column(&headers, "title")?;
    let link_index = find_column(&headers, "link")?;
    let content_index = find_column(&headers, "content")?;

    for (row_index, record) in reader.records().enumerate() {
        let row_number = row_index + 1;
        let record = record.map_err(|e| {
            Error::ParserError(format!("Failed to read article row {}: {}", row_number, e))
        })?;

        let field = |index: usize, name: &str| {
            record.get(index).ok_or_else(|| {
                Error::ParserError(format!(
                    "Missing '{}' field in article row {}",
                    name, row_number
                ))
            })
        };

        articles.push(Article::new(
            field(title_index, "title")?,
            field(link_index, "link")?,
            field(content_index, "content")?,
        ));
    }

    Ok(articles)
}
