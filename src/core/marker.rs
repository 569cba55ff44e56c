//! Point-of-interest marker: visibility gate and label layout.

use super::bounds::GeoBounds;
use super::projection::Projector;
use crate::constants::*;
use glam::DVec2;

/// Fixed point of interest, configured independently of the country data.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// `(lon, lat)` in degrees.
    pub coord: DVec2,
    pub label: String,
    pub icon_href: String,
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            coord: DVec2::from(MARKER_LON_LAT),
            label: MARKER_LABEL.to_string(),
            icon_href: MARKER_ICON_HREF.to_string(),
        }
    }
}

/// Marker geometry in pixels, relative to the projected marker point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerLayout {
    /// Icon width and height.
    pub icon_size: f64,
    /// Horizontal icon shift (+right).
    pub icon_offset_x: f64,
    /// Vertical icon shift (+down). The icon's bottom edge sits here.
    pub icon_offset_y: f64,
    /// Space between the icon's right edge and the label background.
    pub label_gap: f64,
    pub label_padding_x: f64,
    pub label_padding_y: f64,
    /// Text box size before padding.
    pub label_text_width: f64,
    pub label_text_height: f64,
    /// Extra downward shift of label background and text.
    pub label_offset_y: f64,
    pub label_corner_radius: f64,
    /// Minimum distance between the marker point and every viewport edge.
    pub edge_margin: f64,
}

impl Default for MarkerLayout {
    fn default() -> Self {
        Self {
            icon_size: ICON_SIZE,
            icon_offset_x: ICON_OFFSET_X,
            icon_offset_y: ICON_OFFSET_Y,
            label_gap: LABEL_GAP,
            label_padding_x: LABEL_PADDING_X,
            label_padding_y: LABEL_PADDING_Y,
            label_text_width: LABEL_TEXT_WIDTH,
            label_text_height: LABEL_TEXT_HEIGHT,
            label_offset_y: LABEL_OFFSET_Y,
            label_corner_radius: LABEL_CORNER_RADIUS,
            edge_margin: MARKER_EDGE_MARGIN,
        }
    }
}

/// Axis-aligned screen rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    pub fn center(&self) -> DVec2 {
        self.origin + self.size / 2.0
    }
}

/// Absolute screen placement of the marker's three parts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerPlacement {
    pub icon: Rect,
    pub label: Rect,
    pub text_anchor: DVec2,
}

impl MarkerLayout {
    pub fn label_width(&self) -> f64 {
        self.label_text_width + self.label_padding_x * 2.0
    }

    pub fn label_height(&self) -> f64 {
        self.label_text_height + self.label_padding_y
    }

    pub fn place(&self, anchor: DVec2) -> MarkerPlacement {
        let s = self.icon_size;
        let icon = Rect::new(
            anchor.x + self.icon_offset_x - s / 2.0,
            anchor.y + self.icon_offset_y - s,
            s,
            s,
        );
        // Vertical middle of the label, shared by background and text.
        let label_mid_y = anchor.y + self.icon_offset_y - s / 2.0 + self.label_offset_y;
        let label = Rect::new(
            anchor.x + self.icon_offset_x + s / 2.0 + self.label_gap,
            label_mid_y - self.label_height() / 2.0,
            self.label_width(),
            self.label_height(),
        );
        MarkerPlacement {
            icon,
            label,
            text_anchor: DVec2::new(label.center().x, label_mid_y),
        }
    }
}

/// Region check: at least one of the box's corner/centre samples projects
/// onto the visible disc. This approximates horizon clipping; large or
/// horizon-straddling regions can be misjudged.
pub fn region_in_view(projector: &Projector, bounds: &GeoBounds) -> bool {
    bounds
        .sample_points()
        .iter()
        .filter_map(|&p| projector.project(p))
        .any(|p| projector.in_disc(p))
}

/// Point check: screen anchor for the marker if it is on the visible disc
/// and clear of every viewport edge by `margin`.
pub fn marker_anchor(projector: &Projector, coord: DVec2, margin: f64) -> Option<DVec2> {
    projector
        .project(coord)
        .filter(|&p| projector.in_disc(p))
        .filter(|&p| projector.viewport().contains_with_margin(p, margin))
}
