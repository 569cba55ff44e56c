//! TopoJSON → features (the subset world-atlas uses: quantised arcs,
//! `GeometryCollection` of `Polygon` / `MultiPolygon`).

use super::geo::{GeoCollection, GeoError, GeoFeature, Polygon, Ring};
use fnv::FnvHashMap;
use glam::DVec2;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct Topology {
    #[serde(default)]
    transform: Option<Transform>,
    arcs: Vec<Vec<Vec<f64>>>,
    objects: FnvHashMap<String, TopoGeometry>,
}

#[derive(Deserialize, Clone, Copy)]
struct Transform {
    scale: [f64; 2],
    translate: [f64; 2],
}

#[derive(Deserialize, Default)]
struct Properties {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum TopoGeometry {
    GeometryCollection {
        geometries: Vec<TopoGeometry>,
    },
    Polygon {
        arcs: Vec<Vec<i64>>,
        #[serde(default)]
        id: Option<Value>,
        #[serde(default)]
        properties: Option<Properties>,
    },
    MultiPolygon {
        arcs: Vec<Vec<Vec<i64>>>,
        #[serde(default)]
        id: Option<Value>,
        #[serde(default)]
        properties: Option<Properties>,
    },
    #[serde(other)]
    Other,
}

pub fn decode(text: &str, object: &str) -> Result<GeoCollection, GeoError> {
    let topology: Topology = serde_json::from_str(text)?;
    let root = topology
        .objects
        .get(object)
        .ok_or_else(|| GeoError::MissingObject(object.to_string()))?;
    let arcs = absolute_arcs(&topology.arcs, topology.transform);

    let mut features = Vec::new();
    collect_features(root, &arcs, &mut features)?;
    Ok(GeoCollection::new(object, features))
}

fn collect_features(
    geometry: &TopoGeometry,
    arcs: &[Vec<DVec2>],
    out: &mut Vec<GeoFeature>,
) -> Result<(), GeoError> {
    match geometry {
        TopoGeometry::GeometryCollection { geometries } => {
            for g in geometries {
                collect_features(g, arcs, out)?;
            }
        }
        TopoGeometry::Polygon {
            arcs: rings,
            id,
            properties,
        } => {
            let polygon = polygon(rings, arcs)?;
            out.push(feature(id, properties, vec![polygon]));
        }
        TopoGeometry::MultiPolygon {
            arcs: polygons,
            id,
            properties,
        } => {
            let polygons = polygons
                .iter()
                .map(|p| polygon(p, arcs))
                .collect::<Result<Vec<_>, _>>()?;
            out.push(feature(id, properties, polygons));
        }
        TopoGeometry::Other => {}
    }
    Ok(())
}

fn feature(id: &Option<Value>, properties: &Option<Properties>, polygons: Vec<Polygon>) -> GeoFeature {
    let name = properties.as_ref().and_then(|p| p.name.clone());
    GeoFeature::new(id.as_ref().and_then(id_string), name, polygons)
}

pub(crate) fn id_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Undo quantisation and delta encoding.
fn absolute_arcs(arcs: &[Vec<Vec<f64>>], transform: Option<Transform>) -> Vec<Vec<DVec2>> {
    arcs.iter()
        .map(|arc| {
            let mut acc = DVec2::ZERO;
            arc.iter()
                .filter(|p| p.len() >= 2)
                .map(|p| match transform {
                    Some(t) => {
                        acc += DVec2::new(p[0], p[1]);
                        acc * DVec2::from(t.scale) + DVec2::from(t.translate)
                    }
                    None => DVec2::new(p[0], p[1]),
                })
                .collect()
        })
        .collect()
}

fn polygon(rings: &[Vec<i64>], arcs: &[Vec<DVec2>]) -> Result<Polygon, GeoError> {
    rings.iter().map(|r| ring(r, arcs)).collect()
}

/// Stitch arcs into a ring. Consecutive arcs share an endpoint, so the last
/// point collected so far is dropped before appending the next arc. A
/// negative index `i` means arc `!i` traversed backwards.
fn ring(indices: &[i64], arcs: &[Vec<DVec2>]) -> Result<Ring, GeoError> {
    let mut points: Ring = Vec::new();
    for &i in indices {
        let (index, reversed) = if i < 0 { (!i, true) } else { (i, false) };
        let arc = usize::try_from(index)
            .ok()
            .and_then(|ix| arcs.get(ix))
            .ok_or(GeoError::ArcOutOfRange {
                index: i,
                len: arcs.len(),
            })?;
        points.pop();
        if reversed {
            points.extend(arc.iter().rev());
        } else {
            points.extend(arc.iter());
        }
    }
    // Degenerate rings are padded to the minimum closed length.
    if let Some(&first) = points.first() {
        while points.len() < 4 {
            points.push(first);
        }
    }
    Ok(points)
}
