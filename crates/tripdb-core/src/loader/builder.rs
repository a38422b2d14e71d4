// crates/tripdb-core/src/loader/builder.rs
use super::MockSource;
use crate::common::DbStats;
use crate::config::NormalizeConfig;
use crate::error::{Result, TripDbError};
use crate::model::Database;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

// -----------------------------------------------------------------------------
// BUILDER (mocks -> db.json)
// -----------------------------------------------------------------------------

/// Reads the mocks under `source`, normalizes them and writes `out_path`.
///
/// The document is fully serialized before `out_path` is touched, so a
/// failing run leaves any previous output in place.
pub fn build_database(
    source: &MockSource,
    out_path: &Path,
    config: &NormalizeConfig,
) -> Result<DbStats> {
    let db = Database::load_from_source(source, config)?;
    db.save_as(out_path)?;
    Ok(db.stats())
}

impl Database {
    /// Pretty JSON, two-space indent, non-ASCII kept literal, no trailing newline.
    pub fn to_pretty_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(TripDbError::Json)
    }

    /// Writes the document to `path`, replacing any existing file.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_pretty_json()?;

        let file = File::create(path).map_err(TripDbError::Io)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&bytes).map_err(TripDbError::Io)?;
        writer.flush().map_err(TripDbError::Io)?;

        info!(path = %path.display(), bytes = bytes.len(), "wrote database");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Country, Database};
    use serde_json::Value;

    #[test]
    fn pretty_json_has_twelve_keys_in_order() {
        let db = Database::default();
        let text = String::from_utf8(db.to_pretty_json().unwrap()).unwrap();

        let doc: Value = serde_json::from_str(&text).unwrap();
        let keys: Vec<&str> = doc.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "trips",
                "plans",
                "countries",
                "seasons",
                "places",
                "routes",
                "visits",
                "traverses",
                "activities",
                "place_notes",
                "country_notes",
                "route_notes",
            ]
        );
        assert!(text.starts_with("{\n  \"trips\": []"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn non_ascii_is_written_literally() {
        let db = Database {
            countries: vec![Country {
                id: "ci".into(),
                name: Value::String("Côte d’Ivoire".into()),
            }],
            ..Database::default()
        };
        let text = String::from_utf8(db.to_pretty_json().unwrap()).unwrap();
        assert!(text.contains("Côte d’Ivoire"));
        assert!(!text.contains("\\u"));
    }
}
