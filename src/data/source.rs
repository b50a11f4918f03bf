use std::{collections::HashMap, path::Path, sync::Arc};

use anyhow::{anyhow, Context, Result};
use tracing::{debug, info};

use crate::{
    data::{join, JoinSummary, MigrationTable, StateFeature},
    io::{geojson::read_boundaries_from_bytes, json::read_migration_from_bytes},
};

/// Read-only access to dataset bytes by location (path or URL).
pub trait DatasetSource: Send + Sync {
    fn get(&self, location: &str) -> Result<Vec<u8>>;
}

/// Reads datasets from the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiskSource;

impl DatasetSource for DiskSource {
    fn get(&self, location: &str) -> Result<Vec<u8>> {
        std::fs::read(Path::new(location)).with_context(|| format!("[DiskSource] Failed to read {location}"))
    }
}

/// Simple in-memory source, keyed by location.
#[derive(Clone, Debug, Default)]
pub struct MemSource {
    files: HashMap<String, Arc<[u8]>>,
}

impl MemSource {
    pub fn insert(&mut self, location: impl Into<String>, bytes: impl Into<Arc<[u8]>>) {
        self.files.insert(location.into(), bytes.into());
    }
}

impl DatasetSource for MemSource {
    fn get(&self, location: &str) -> Result<Vec<u8>> {
        self.files.get(location)
            .map(|bytes| bytes.to_vec())
            .ok_or_else(|| anyhow!("no in-memory dataset at {location:?}"))
    }
}

/// Fetches datasets over HTTP(S) with a blocking client.
#[cfg(feature = "download")]
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "download")]
impl HttpSource {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("migramap/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .context("build HTTP client")?;
        Ok(Self { client })
    }
}

#[cfg(feature = "download")]
impl DatasetSource for HttpSource {
    fn get(&self, location: &str) -> Result<Vec<u8>> {
        let resp = self.client.get(location).send()
            .with_context(|| format!("GET {location}"))?
            .error_for_status()
            .with_context(|| format!("GET {location} returned error status"))?;
        Ok(resp.bytes().with_context(|| format!("read body of {location}"))?.to_vec())
    }
}

#[inline]
fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Routes `http(s)://` locations to the network and everything else to disk.
pub struct AutoSource {
    #[cfg(feature = "download")]
    http: HttpSource,
}

impl AutoSource {
    pub fn new() -> Result<Self> {
        Ok(Self {
            #[cfg(feature = "download")]
            http: HttpSource::new()?,
        })
    }
}

impl DatasetSource for AutoSource {
    fn get(&self, location: &str) -> Result<Vec<u8>> {
        if is_url(location) { self.get_remote(location) } else { DiskSource.get(location) }
    }
}

impl AutoSource {
    #[cfg(feature = "download")]
    fn get_remote(&self, location: &str) -> Result<Vec<u8>> { self.http.get(location) }

    #[cfg(not(feature = "download"))]
    fn get_remote(&self, location: &str) -> Result<Vec<u8>> {
        Err(anyhow!("cannot fetch {location}: built without the `download` feature"))
    }
}

/// A dataset failed to load or parse; nothing should be rendered.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to load boundary dataset {location}: {source}")]
    Boundaries {
        location: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to load migration dataset {location}: {source}")]
    Migration {
        location: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl LoadError {
    fn boundaries(location: &str, err: anyhow::Error) -> Self {
        Self::Boundaries { location: location.to_string(), source: err.into() }
    }

    fn migration(location: &str, err: anyhow::Error) -> Self {
        Self::Migration { location: location.to_string(), source: err.into() }
    }
}

const MEMORY_LOCATION: &str = "<memory>";

/// Both parsed datasets, available only once both loads have succeeded.
#[derive(Clone, Debug)]
pub struct Datasets {
    pub features: Vec<StateFeature>,
    pub migration: MigrationTable,
}

impl Datasets {
    /// Fetch and parse both datasets concurrently. Returns only after both have settled;
    /// if either fails there is no partial result.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(source: &dyn DatasetSource, boundaries: &str, migration: &str) -> Result<Self, LoadError> {
        info!(boundaries, migration, "loading datasets");

        let (features, table) = rayon::join(
            || source.get(boundaries).and_then(|bytes| read_boundaries_from_bytes(&bytes)),
            || source.get(migration).and_then(|bytes| read_migration_from_bytes(&bytes)),
        );

        let features = features.map_err(|e| LoadError::boundaries(boundaries, e))?;
        let migration_table = table.map_err(|e| LoadError::migration(migration, e))?;

        debug!(features = features.len(), records = migration_table.len(), "datasets loaded");
        Ok(Self { features, migration: migration_table })
    }

    /// Parse both datasets from bytes already in memory.
    pub fn from_slices(boundaries: &[u8], migration: &[u8]) -> Result<Self, LoadError> {
        let features = read_boundaries_from_bytes(boundaries)
            .map_err(|e| LoadError::boundaries(MEMORY_LOCATION, e))?;
        let migration = read_migration_from_bytes(migration)
            .map_err(|e| LoadError::migration(MEMORY_LOCATION, e))?;
        Ok(Self { features, migration })
    }

    /// Join migration records onto the features and hand the features back.
    pub fn into_joined(self) -> (Vec<StateFeature>, JoinSummary) {
        let Self { mut features, migration } = self;
        let summary = join(&mut features, &migration);
        (features, summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOJSON: &str = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"name":"Texas"},
         "geometry":{"type":"Polygon","coordinates":[[[-100,30],[-98,30],[-98,32],[-100,32],[-100,30]]]}}
    ]}"#;

    const MIGRATION: &str = r#"{"Texas":{"coming_from_california":"50000","going_to_california":"30000"}}"#;

    fn mem() -> MemSource {
        let mut mem = MemSource::default();
        mem.insert("us-states.geojson", GEOJSON.as_bytes());
        mem.insert("2008_data.json", MIGRATION.as_bytes());
        mem
    }

    #[test]
    fn load_joins_both_datasets() {
        let datasets = Datasets::load(&mem(), "us-states.geojson", "2008_data.json").unwrap();
        let (features, summary) = datasets.into_joined();
        assert_eq!(summary.matched, 1);
        assert_eq!(features[0].flow.unwrap().difference, 20_000.0);
    }

    #[test]
    fn missing_migration_dataset_is_reported() {
        let err = Datasets::load(&mem(), "us-states.geojson", "missing.json").unwrap_err();
        assert!(matches!(err, LoadError::Migration { ref location, .. } if location == "missing.json"));
    }

    #[test]
    fn broken_boundaries_are_reported() {
        let mut mem = mem();
        mem.insert("broken.geojson", &b"{ not json"[..]);
        let err = Datasets::load(&mem, "broken.geojson", "2008_data.json").unwrap_err();
        assert!(matches!(err, LoadError::Boundaries { .. }));
        assert!(err.to_string().contains("broken.geojson"));
    }

    #[test]
    fn disk_source_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, MIGRATION).unwrap();
        let bytes = DiskSource.get(path.to_str().unwrap()).unwrap();
        assert_eq!(bytes, MIGRATION.as_bytes());
        let err = DiskSource.get(dir.path().join("nope.json").to_str().unwrap()).unwrap_err();
        assert!(err.to_string().starts_with("[DiskSource] Failed to read"));
    }

    #[test]
    fn from_slices_reports_memory_location() {
        let err = Datasets::from_slices(GEOJSON.as_bytes(), b"[]").unwrap_err();
        assert!(matches!(err, LoadError::Migration { ref location, .. } if location == "<memory>"));
    }
}
