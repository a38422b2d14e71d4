// crates/tripdb-core/src/loader/mod.rs

//! # Mock Loader
//!
//! Resolves the mock files on disk, parses each one into its raw shape and
//! hands the result to the normalizer. Reading is strictly sequential and the
//! first failure aborts the whole load.

use crate::config::NormalizeConfig;
use crate::error::Result;
use crate::model::{convert, Database};
use crate::raw::RawMocks;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod builder;
pub mod common_io;

pub const DEFAULT_MOCK_DIR: &str = "public/mocks";
pub const DEFAULT_OUTPUT: &str = "db.json";

/// The nine input files, in read order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFile {
    Countries,
    Seasons,
    Places,
    Routes,
    Visits,
    Activities,
    PlaceNotes,
    CountryNotes,
    RouteNotes,
}

impl MockFile {
    pub const ALL: [MockFile; 9] = [
        MockFile::Countries,
        MockFile::Seasons,
        MockFile::Places,
        MockFile::Routes,
        MockFile::Visits,
        MockFile::Activities,
        MockFile::PlaceNotes,
        MockFile::CountryNotes,
        MockFile::RouteNotes,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            MockFile::Countries => "countries.json",
            MockFile::Seasons => "seasons.json",
            MockFile::Places => "places.json",
            MockFile::Routes => "routes.json",
            MockFile::Visits => "visits2.json",
            MockFile::Activities => "activities.json",
            MockFile::PlaceNotes => "place_notes.json",
            MockFile::CountryNotes => "country_notes.json",
            MockFile::RouteNotes => "route_notes.json",
        }
    }
}

/// Directory holding the mock files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockSource {
    dir: PathBuf,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_DIR)
    }
}

impl MockSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of `file` inside the directory.
    ///
    /// With `compact` enabled a missing `<name>` falls back to `<name>.gz`.
    pub fn resolve(&self, file: MockFile) -> PathBuf {
        let plain = self.dir.join(file.file_name());

        #[cfg(feature = "compact")]
        if !plain.exists() {
            let gz = self.dir.join(format!("{}.gz", file.file_name()));
            if gz.exists() {
                return gz;
            }
        }

        plain
    }

    /// Parses every mock file, in [`MockFile::ALL`] order.
    pub fn read_all(&self) -> Result<RawMocks> {
        Ok(RawMocks {
            countries: self.read(MockFile::Countries)?,
            seasons: self.read(MockFile::Seasons)?,
            places: self.read(MockFile::Places)?,
            routes: self.read(MockFile::Routes)?,
            visits: self.read(MockFile::Visits)?,
            activities: self.read(MockFile::Activities)?,
            place_notes: self.read(MockFile::PlaceNotes)?,
            country_notes: self.read(MockFile::CountryNotes)?,
            route_notes: self.read(MockFile::RouteNotes)?,
        })
    }

    fn read<T: DeserializeOwned>(&self, file: MockFile) -> Result<Vec<(String, T)>> {
        let path = self.resolve(file);
        let entries = common_io::read_keyed(&path)?;
        debug!(path = %path.display(), entries = entries.len(), "read mock file");
        Ok(entries)
    }
}

impl Database {
    /// **Standard Loader:** reads every mock file and normalizes it.
    pub fn load_from_source(source: &MockSource, config: &NormalizeConfig) -> Result<Self> {
        let raw = source.read_all()?;
        Ok(convert::from_raw(raw, config))
    }

    /// Loads from a mock directory with the default trip and plan.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::load_from_source(&MockSource::new(dir.as_ref()), &NormalizeConfig::default())
    }
}
