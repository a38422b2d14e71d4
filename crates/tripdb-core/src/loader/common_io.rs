// crates/tripdb-core/src/loader/common_io.rs
use crate::error::{Result, TripDbError};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a mock file, buffers it, and unwraps gzip when the name ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        TripDbError::NotFound(format!("{}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(TripDbError::InvalidData(format!(
                "{} is gzip-compressed but 'compact' is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Reads an object keyed by id and converts every value into `T`.
///
/// Entries are returned in file order.
pub fn read_keyed<T: DeserializeOwned>(path: &Path) -> Result<Vec<(String, T)>> {
    let file = path.display().to_string();
    let reader = open_stream(path)?;
    let entries: Map<String, Value> =
        serde_json::from_reader(reader).map_err(|source| TripDbError::Parse {
            file: file.clone(),
            source,
        })?;

    entries
        .into_iter()
        .map(|(key, value)| match serde_json::from_value(value) {
            Ok(item) => Ok((key, item)),
            Err(e) => Err(TripDbError::Shape {
                file: file.clone(),
                key,
                reason: e.to_string(),
            }),
        })
        .collect()
}
