// Shared fixtures: coarse country outlines, enough for visibility and
// hit-testing checks without pulling the real world-atlas file.

#![allow(dead_code)]

use glam::DVec2;
use globe_web::core::{GeoCollection, GeoFeature};

fn ring(points: &[[f64; 2]]) -> Vec<DVec2> {
    let mut r: Vec<DVec2> = points.iter().map(|&p| DVec2::from(p)).collect();
    r.push(r[0]);
    r
}

pub fn china() -> GeoFeature {
    GeoFeature::new(
        Some("156".into()),
        Some("China".into()),
        vec![vec![ring(&[
            [73.5, 39.5],
            [80.0, 30.0],
            [97.0, 28.0],
            [108.0, 21.5],
            [121.0, 31.0],
            [122.5, 40.0],
            [134.8, 48.3],
            [119.5, 53.5],
            [87.0, 49.0],
        ])]],
    )
}

pub fn japan() -> GeoFeature {
    GeoFeature::new(
        Some("392".into()),
        Some("Japan".into()),
        vec![vec![ring(&[
            [130.0, 31.0],
            [141.0, 35.0],
            [142.0, 43.0],
            [139.0, 38.0],
        ])]],
    )
}

pub fn brazil() -> GeoFeature {
    GeoFeature::new(
        Some("076".into()),
        Some("Brazil".into()),
        vec![vec![ring(&[
            [-70.0, -5.0],
            [-50.0, 4.0],
            [-35.0, -7.0],
            [-48.0, -28.0],
            [-57.0, -30.0],
        ])]],
    )
}

pub fn world() -> GeoCollection {
    GeoCollection::new("countries", vec![brazil(), china(), japan()])
}

pub fn world_without_china() -> GeoCollection {
    GeoCollection::new("countries", vec![brazil(), japan()])
}
