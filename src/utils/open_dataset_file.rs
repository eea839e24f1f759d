use crate::constants::GZIP_EXTENSION;
use crate::Error;
use flate2::read::GzDecoder;
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Opens a dataset file for reading, transparently decompressing it if the
/// file name ends in `.gz`.
pub fn open_dataset_file(path: &Path) -> Result<Box<dyn Read>, Error> {
    let file = File::open(path).map_err(|e| {
        Error::IoError(std::io::Error::new(
            e.kind(),
            format!("Failed to open {}: {}", path.display(), e),
        ))
    })?;

    let is_gzipped = path
        .extension()
        .map_or(false, |extension| extension == GZIP_EXTENSION);

    if is_gzipped {
        debug!("Decompressing {}", path.display());
        Ok(Box::new(GzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
