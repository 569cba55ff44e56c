//! Feature model shared by the TopoJSON and GeoJSON decoders.

use fnv::FnvHashMap;
use glam::DVec2;
use thiserror::Error;

/// Closed ring of `(lon, lat)` pairs in degrees. First and last points match.
pub type Ring = Vec<DVec2>;

/// Outer ring followed by any holes.
pub type Polygon = Vec<Ring>;

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("malformed geometry document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("topology has no object named `{0}`")]
    MissingObject(String),
    #[error("arc index {index} out of range ({len} arcs)")]
    ArcOutOfRange { index: i64, len: usize },
    #[error("unsupported document type `{0}`")]
    UnsupportedType(String),
}

/// One country boundary.
#[derive(Clone, Debug)]
pub struct GeoFeature {
    pub id: String,
    pub name: String,
    pub polygons: Vec<Polygon>,
}

impl GeoFeature {
    pub fn new(id: Option<String>, name: Option<String>, polygons: Vec<Polygon>) -> Self {
        let name = name.unwrap_or_default();
        // Some world-atlas features (disputed areas) carry no id.
        let id = id.filter(|s| !s.is_empty()).unwrap_or_else(|| name.clone());
        Self { id, name, polygons }
    }

    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.polygons.iter().flatten()
    }

    pub fn vertices(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.rings().flatten().copied()
    }

    pub fn matches(&self, id: &str, name: &str) -> bool {
        self.id == id || self.name == name
    }
}

/// Named, immutable set of features with an id index.
#[derive(Clone, Debug, Default)]
pub struct GeoCollection {
    pub name: String,
    features: Vec<GeoFeature>,
    index: FnvHashMap<String, usize>,
}

impl GeoCollection {
    pub fn new(name: impl Into<String>, features: Vec<GeoFeature>) -> Self {
        let mut index = FnvHashMap::default();
        for (i, f) in features.iter().enumerate() {
            if index.contains_key(&f.id) {
                log::warn!("[geo] duplicate feature id {:?} ({}); keeping first", f.id, f.name);
                continue;
            }
            index.insert(f.id.clone(), i);
        }
        Self {
            name: name.into(),
            features,
            index,
        }
    }

    /// Decode either a TopoJSON topology (reading `object`) or a GeoJSON
    /// FeatureCollection, dispatching on the top-level `type`.
    pub fn from_json_str(text: &str, object: &str) -> Result<Self, GeoError> {
        #[derive(serde::Deserialize)]
        struct Probe {
            #[serde(rename = "type")]
            kind: String,
        }
        let probe: Probe = serde_json::from_str(text)?;
        match probe.kind.as_str() {
            "Topology" => crate::core::topojson::decode(text, object),
            "FeatureCollection" => crate::core::geojson::decode(text),
            other => Err(GeoError::UnsupportedType(other.to_string())),
        }
    }

    pub fn features(&self) -> &[GeoFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&GeoFeature> {
        self.index.get(id).map(|&i| &self.features[i])
    }

    /// Index of the first feature matching by id or by name.
    pub fn position_of(&self, id: &str, name: &str) -> Option<usize> {
        self.index
            .get(id)
            .copied()
            .or_else(|| self.features.iter().position(|f| f.name == name))
    }
}
