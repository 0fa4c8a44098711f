//! Region boundary dataset.
//!
//! The dataset is a GeoJSON feature collection. Each feature carries the
//! region identifier in `properties.name`. It is read once at startup and kept
//! verbatim so the map widget can draw it.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{BoundaryError, Result};

/// Feature property holding the region identifier.
pub const REGION_FIELD: &str = "name";

/// Dataset location, relative to the working directory.
pub const DEFAULT_GEOJSON_PATH: &str = "polska-wojewodztwa.geojson";

/// One administrative region, identified by its dataset name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    /// Create a region from its identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identifier exactly as spelled in the dataset.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A loaded feature collection and the regions it names, in file order.
#[derive(Debug, Clone)]
pub struct Boundaries {
    collection: Value,
    regions: Vec<Region>,
}

impl Boundaries {
    /// Read and parse the dataset at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| BoundaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let boundaries = Self::from_json(&text)?;
        debug!(path = %path.display(), regions = boundaries.len(), "Loaded boundaries");
        Ok(boundaries)
    }

    /// Parse a feature collection from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Extract regions from an already parsed feature collection.
    ///
    /// Every feature must carry a string `properties.name`; the first one
    /// that does not fails the whole load.
    pub fn from_value(collection: Value) -> Result<Self> {
        let features = collection
            .get("features")
            .and_then(Value::as_array)
            .ok_or(BoundaryError::MissingFeatures)?;

        let regions = features
            .iter()
            .enumerate()
            .map(|(index, feature)| {
                feature
                    .get("properties")
                    .and_then(|props| props.get(REGION_FIELD))
                    .and_then(Value::as_str)
                    .map(Region::new)
                    .ok_or(BoundaryError::MissingProperty {
                        index,
                        field: REGION_FIELD,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            collection,
            regions,
        })
    }

    /// Region identifiers in file order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// The raw feature collection, as read.
    pub fn collection(&self) -> &Value {
        &self.collection
    }

    /// Whether any feature is named `name` (exact match).
    pub fn contains(&self, name: &str) -> bool {
        self.regions.iter().any(|region| region.name() == name)
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the collection has no features.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
