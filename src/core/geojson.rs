//! GeoJSON `FeatureCollection` → features. Non-areal geometries are skipped.

use super::geo::{GeoCollection, GeoError, GeoFeature, Polygon};
use super::topojson::id_string;
use glam::DVec2;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    properties: Option<Value>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
    #[serde(other)]
    Other,
}

pub fn decode(text: &str) -> Result<GeoCollection, GeoError> {
    let collection: FeatureCollection = serde_json::from_str(text)?;
    let features = collection
        .features
        .into_iter()
        .filter_map(|f| {
            let polygons = match f.geometry? {
                Geometry::Polygon { coordinates } => vec![polygon(coordinates)],
                Geometry::MultiPolygon { coordinates } => {
                    coordinates.into_iter().map(polygon).collect()
                }
                Geometry::Other => return None,
            };
            let name = f
                .properties
                .as_ref()
                .and_then(|p| p.get("name"))
                .and_then(Value::as_str)
                .map(str::to_string);
            Some(GeoFeature::new(f.id.as_ref().and_then(id_string), name, polygons))
        })
        .collect();
    Ok(GeoCollection::new("features", features))
}

fn polygon(rings: Vec<Vec<Vec<f64>>>) -> Polygon {
    rings
        .into_iter()
        .map(|ring| {
            ring.into_iter()
                .filter(|p| p.len() >= 2)
                .map(|p| DVec2::new(p[0], p[1]))
                .collect()
        })
        .collect()
}
