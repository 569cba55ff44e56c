use glam::{DMat3, DVec2, DVec3};

/// Sphere orientation in degrees: yaw about the polar axis, then pitch,
/// then roll (same convention as d3's `projection.rotate`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationState {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl Default for RotationState {
    fn default() -> Self {
        let [yaw, pitch, roll] = crate::constants::DEFAULT_ROTATION;
        Self { yaw, pitch, roll }
    }
}

impl RotationState {
    pub const fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Apply a pointer drag of `delta` pixels with gain `k` (degrees per
    /// pixel). Roll is left alone.
    pub fn apply_drag(&mut self, delta: DVec2, k: f64) {
        self.yaw += delta.x * k;
        self.pitch -= delta.y * k;
    }

    pub fn dragged(mut self, delta: DVec2, k: f64) -> Self {
        self.apply_drag(delta, k);
        self
    }

    /// Rotation taking geographic unit vectors into view space, where +x
    /// points at the viewer, +y to screen right and +z to screen up.
    pub fn matrix(&self) -> DMat3 {
        DMat3::from_rotation_x(self.roll.to_radians())
            * DMat3::from_rotation_y(-self.pitch.to_radians())
            * DMat3::from_rotation_z(self.yaw.to_radians())
    }
}

/// Unit vector for a `(lon, lat)` pair in degrees.
#[inline]
pub fn lon_lat_to_unit(lon_lat: DVec2) -> DVec3 {
    let (sin_lon, cos_lon) = lon_lat.x.to_radians().sin_cos();
    let (sin_lat, cos_lat) = lon_lat.y.to_radians().sin_cos();
    DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
}

/// Inverse of [`lon_lat_to_unit`] for unit (or near-unit) vectors.
#[inline]
pub fn unit_to_lon_lat(v: DVec3) -> DVec2 {
    let v = v.normalize_or_zero();
    DVec2::new(
        v.y.atan2(v.x).to_degrees(),
        v.z.clamp(-1.0, 1.0).asin().to_degrees(),
    )
}
