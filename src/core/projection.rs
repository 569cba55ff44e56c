//! Orthographic sphere → screen projection.

use super::clip;
use super::rotation::{lon_lat_to_unit, RotationState};
use crate::constants::CLIP_EPSILON_RAD;
use glam::{DMat3, DVec2, DVec3};
use smallvec::SmallVec;

/// Screen-space rings of one feature. Most countries have a single ring.
pub type ScreenRings = SmallVec<[Vec<DVec2>; 2]>;

/// Drawing surface size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A surface that has not been laid out yet reports 0×0.
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True if `p` is at least `margin` away from every edge.
    pub fn contains_with_margin(&self, p: DVec2, margin: f64) -> bool {
        p.x >= margin && p.x <= self.width - margin && p.y >= margin && p.y <= self.height - margin
    }
}

/// Projection for one rotation + viewport. Cheap to build, so callers make a
/// fresh one per redraw.
#[derive(Clone, Debug)]
pub struct Projector {
    rotation: DMat3,
    scale: f64,
    center: DVec2,
    viewport: Viewport,
    horizon: f64,
}

impl Projector {
    /// `None` when the viewport has no area yet.
    pub fn new(rotation: &RotationState, viewport: Viewport, scale_divisor: f64) -> Option<Self> {
        if !viewport.is_drawable() || scale_divisor <= 0.0 {
            return None;
        }
        Some(Self {
            rotation: rotation.matrix(),
            scale: viewport.width.min(viewport.height) / scale_divisor,
            center: viewport.center(),
            viewport,
            horizon: (std::f64::consts::FRAC_PI_2 + CLIP_EPSILON_RAD).cos(),
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Geographic point to view-space unit vector (+x towards the viewer).
    #[inline]
    pub fn to_view(&self, lon_lat: DVec2) -> DVec3 {
        self.rotation * lon_lat_to_unit(lon_lat)
    }

    #[inline]
    pub fn is_visible(&self, view: DVec3) -> bool {
        view.x > self.horizon
    }

    /// Screen position of a view-space vector, ignoring visibility.
    #[inline]
    pub fn view_to_screen(&self, view: DVec3) -> DVec2 {
        DVec2::new(
            self.center.x + view.y * self.scale,
            self.center.y - view.z * self.scale,
        )
    }

    /// Screen position of `(lon, lat)`, or `None` on the far hemisphere.
    pub fn project(&self, lon_lat: DVec2) -> Option<DVec2> {
        let v = self.to_view(lon_lat);
        self.is_visible(v).then(|| self.view_to_screen(v))
    }

    pub fn distance_from_center(&self, p: DVec2) -> f64 {
        p.distance(self.center)
    }

    pub fn in_disc(&self, p: DVec2) -> bool {
        self.distance_from_center(p) <= self.scale
    }

    /// Project a closed geographic ring, clipped to the visible hemisphere.
    /// Returns `None` if nothing of it is visible.
    pub fn project_ring(&self, ring: &[DVec2]) -> Option<Vec<DVec2>> {
        if ring.len() < 3 {
            return None;
        }
        let view: Vec<DVec3> = ring.iter().map(|&p| self.to_view(p)).collect();
        let clipped = clip::clip_to_hemisphere(&view, self.horizon);
        (clipped.len() >= 3).then(|| clipped.into_iter().map(|v| self.view_to_screen(v)).collect())
    }

    /// All visible rings of a feature's polygons, in screen space.
    pub fn project_rings<'a>(&self, rings: impl IntoIterator<Item = &'a Vec<DVec2>>) -> ScreenRings {
        rings
            .into_iter()
            .filter_map(|r| self.project_ring(r))
            .collect()
    }
}
