use super::geo::GeoFeature;
use glam::DVec2;

/// Geographic bounding box in degrees. `east < west` means the box crosses
/// the antimeridian.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl GeoBounds {
    /// Smallest box (by longitude span) containing every vertex.
    pub fn of_points(points: impl IntoIterator<Item = DVec2>) -> Option<Self> {
        let mut lons = Vec::new();
        let (mut south, mut north) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in points {
            if !(p.x.is_finite() && p.y.is_finite()) {
                continue;
            }
            lons.push(wrap_lon(p.x));
            south = south.min(p.y);
            north = north.max(p.y);
        }
        if lons.is_empty() {
            return None;
        }
        lons.sort_by(f64::total_cmp);
        lons.dedup();

        // The box is the complement of the widest empty longitude gap.
        let first = lons[0];
        let last = lons[lons.len() - 1];
        let (mut west, mut east) = (first, last);
        let mut widest = first + 360.0 - last;
        for w in lons.windows(2) {
            let gap = w[1] - w[0];
            if gap > widest {
                widest = gap;
                west = w[1];
                east = w[0];
            }
        }
        Some(Self {
            west,
            south,
            east,
            north,
        })
    }

    pub fn of_feature(feature: &GeoFeature) -> Option<Self> {
        Self::of_points(feature.vertices())
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.east < self.west
    }

    pub fn lon_span(&self) -> f64 {
        if self.crosses_antimeridian() {
            self.east + 360.0 - self.west
        } else {
            self.east - self.west
        }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(
            wrap_lon(self.west + self.lon_span() / 2.0),
            (self.south + self.north) / 2.0,
        )
    }

    /// Four corners (SW, SE, NW, NE) then the centre.
    pub fn sample_points(&self) -> [DVec2; 5] {
        [
            DVec2::new(self.west, self.south),
            DVec2::new(self.east, self.south),
            DVec2::new(self.west, self.north),
            DVec2::new(self.east, self.north),
            self.center(),
        ]
    }
}

/// Normalise a longitude into [-180, 180).
pub fn wrap_lon(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}
