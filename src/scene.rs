//! Retained list of drawable primitives, rebuilt from scratch on each redraw.

use crate::core::{Rect, ScreenRings, Viewport};
use crate::input::point_in_rings;
use glam::DVec2;

/// Which fill rule picked a feature's colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillRole {
    /// The fixed highlighted country.
    Highlight,
    /// Matches the externally supplied selection.
    Selected,
    Default,
}

#[derive(Clone, Debug)]
pub struct FeaturePath {
    /// Index into the feature collection.
    pub index: usize,
    pub id: String,
    pub name: String,
    pub rings: ScreenRings,
    pub role: FillRole,
    pub fill: &'static str,
    pub opacity: f64,
}

impl FeaturePath {
    pub fn contains(&self, p: DVec2) -> bool {
        point_in_rings(self.rings.as_slice(), p)
    }
}

#[derive(Clone, Debug)]
pub enum Primitive {
    Disc {
        center: DVec2,
        radius: f64,
        fill: &'static str,
    },
    Feature(FeaturePath),
    Image {
        href: String,
        rect: Rect,
    },
    RoundedRect {
        rect: Rect,
        radius: f64,
        fill: &'static str,
    },
    Text {
        anchor: DVec2,
        text: String,
        font: &'static str,
        fill: &'static str,
    },
}

impl Primitive {
    /// Only country paths receive pointer events.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Primitive::Feature(_))
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub viewport: Viewport,
    primitives: Vec<Primitive>,
    marker_drawn: bool,
}

impl Scene {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            primitives: Vec::new(),
            marker_drawn: false,
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub(crate) fn mark_marker_drawn(&mut self) {
        self.marker_drawn = true;
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn marker_drawn(&self) -> bool {
        self.marker_drawn
    }

    pub fn features(&self) -> impl Iterator<Item = &FeaturePath> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Feature(f) => Some(f),
            _ => None,
        })
    }

    pub fn feature(&self, id: &str) -> Option<&FeaturePath> {
        self.features().find(|f| f.id == id)
    }

    /// Topmost feature under `p`. Later primitives are painted on top, so
    /// the search runs back to front.
    pub fn hit_test(&self, p: DVec2) -> Option<&FeaturePath> {
        self.primitives.iter().rev().find_map(|prim| match prim {
            Primitive::Feature(f) if f.contains(p) => Some(f),
            _ => None,
        })
    }
}
