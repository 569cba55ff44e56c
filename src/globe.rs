//! Renderer / interaction controller. Owns the rotation and turns geometry,
//! viewport and selection into a [`Scene`].

use crate::constants::*;
use crate::core::marker::{marker_anchor, region_in_view};
use crate::core::{
    GeoBounds, GeoCollection, GeoFeature, Marker, MarkerLayout, Projector, RotationState, Viewport,
};
use crate::input::DragState;
use crate::scene::{FeaturePath, FillRole, Primitive, Scene};
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub ocean: &'static str,
    pub highlight: &'static str,
    pub selected: &'static str,
    pub land: &'static str,
    pub hover_opacity: f64,
    pub label_background: &'static str,
    pub label_text: &'static str,
    pub label_font: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ocean: OCEAN_FILL,
            highlight: HIGHLIGHT_FILL,
            selected: SELECTED_FILL,
            land: LAND_FILL,
            hover_opacity: HOVER_OPACITY,
            label_background: LABEL_FILL,
            label_text: LABEL_TEXT_FILL,
            label_font: LABEL_FONT,
        }
    }
}

impl Palette {
    pub fn fill(&self, role: FillRole) -> &'static str {
        match role {
            FillRole::Highlight => self.highlight,
            FillRole::Selected => self.selected,
            FillRole::Default => self.land,
        }
    }
}

/// The country that is always tinted and gates the marker.
#[derive(Clone, Debug, PartialEq)]
pub struct HighlightRule {
    pub id: String,
    pub name: String,
}

impl Default for HighlightRule {
    fn default() -> Self {
        Self {
            id: HIGHLIGHT_ID.to_string(),
            name: HIGHLIGHT_NAME.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlobeConfig {
    pub initial_rotation: RotationState,
    pub scale_divisor: f64,
    pub drag_sensitivity: f64,
    pub click_distance: f64,
    pub palette: Palette,
    pub highlight: HighlightRule,
    pub marker: Marker,
    pub marker_layout: MarkerLayout,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            initial_rotation: RotationState::default(),
            scale_divisor: SCALE_DIVISOR,
            drag_sensitivity: DRAG_SENSITIVITY,
            click_distance: CLICK_DISTANCE_PX,
            palette: Palette::default(),
            highlight: HighlightRule::default(),
            marker: Marker::default(),
            marker_layout: MarkerLayout::default(),
        }
    }
}

/// Fill rule, highest priority first: fixed highlight, then selection.
pub fn fill_role(feature: &GeoFeature, highlight: &HighlightRule, selected_id: Option<&str>) -> FillRole {
    if feature.matches(&highlight.id, &highlight.name) {
        FillRole::Highlight
    } else if selected_id == Some(feature.id.as_str()) {
        FillRole::Selected
    } else {
        FillRole::Default
    }
}

/// Payload for the "country selected" callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureSelection {
    pub name: String,
    pub id: String,
}

/// What a pointer event changed, for the shell to act on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerOutcome {
    pub redrawn: bool,
    pub selection: Option<FeatureSelection>,
}

pub struct Globe {
    config: GlobeConfig,
    features: Option<GeoCollection>,
    highlight_bounds: Option<GeoBounds>,
    rotation: RotationState,
    viewport: Viewport,
    selected_id: Option<String>,
    hovered: Option<usize>,
    drag: DragState,
    scene: Scene,
}

impl Globe {
    pub fn new(config: GlobeConfig) -> Self {
        Self {
            rotation: config.initial_rotation,
            config,
            features: None,
            highlight_bounds: None,
            viewport: Viewport::default(),
            selected_id: None,
            hovered: None,
            drag: DragState::default(),
            scene: Scene::default(),
        }
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn hovered(&self) -> Option<&GeoFeature> {
        let features = self.features.as_ref()?;
        self.hovered.and_then(|i| features.features().get(i))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    /// Last scene built. Empty until the first successful redraw.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn projector(&self) -> Option<Projector> {
        Projector::new(&self.rotation, self.viewport, self.config.scale_divisor)
    }

    /// Install geometry (once, at mount) and draw.
    pub fn set_features(&mut self, collection: GeoCollection) -> bool {
        let highlight = &self.config.highlight;
        self.highlight_bounds = collection
            .position_of(&highlight.id, &highlight.name)
            .and_then(|i| GeoBounds::of_feature(&collection.features()[i]));
        if self.highlight_bounds.is_none() {
            log::warn!(
                "[globe] highlighted country {:?}/{:?} not in data; marker disabled",
                highlight.id,
                highlight.name
            );
        }
        self.hovered = None;
        self.features = Some(collection);
        self.redraw()
    }

    pub fn set_selected_id(&mut self, id: Option<String>) -> bool {
        self.selected_id = id;
        self.redraw()
    }

    /// Adopt a new surface size; rotation is kept.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        self.viewport = viewport;
        self.redraw()
    }

    /// Rotate by a pointer movement of `delta` pixels and redraw.
    pub fn drag_by(&mut self, delta: DVec2) -> bool {
        let Some(projector) = self.projector() else {
            return false;
        };
        let k = self.config.drag_sensitivity / projector.scale();
        self.rotation.apply_drag(delta, k);
        self.redraw()
    }

    pub fn pointer_down(&mut self, pos: DVec2) {
        self.drag.begin(pos);
    }

    pub fn pointer_move(&mut self, pos: DVec2) -> PointerOutcome {
        if let Some(delta) = self.drag.update(pos, self.config.click_distance) {
            if delta == DVec2::ZERO {
                return PointerOutcome::default();
            }
            // The globe turns under the pointer, so hover no longer applies.
            self.hovered = None;
            return PointerOutcome {
                redrawn: self.drag_by(delta),
                selection: None,
            };
        }
        self.rehover(pos)
    }

    fn rehover(&mut self, pos: DVec2) -> PointerOutcome {
        let hit = self.scene.hit_test(pos).map(|f| f.index);
        if hit == self.hovered {
            return PointerOutcome::default();
        }
        self.hovered = hit;
        PointerOutcome {
            redrawn: self.redraw(),
            selection: None,
        }
    }

    /// End a gesture. A press without movement over a feature selects it;
    /// after a drag, hover picks up whatever is now under the pointer.
    pub fn pointer_up(&mut self, pos: DVec2) -> PointerOutcome {
        if !self.drag.end() {
            return self.rehover(pos);
        }
        let selection = self.scene.hit_test(pos).map(|f| FeatureSelection {
            name: f.name.clone(),
            id: f.id.clone(),
        });
        if let Some(s) = &selection {
            log::info!("[globe] selected {} ({})", s.name, s.id);
        }
        PointerOutcome {
            redrawn: false,
            selection,
        }
    }

    pub fn pointer_leave(&mut self) -> PointerOutcome {
        if self.drag.active || self.hovered.is_none() {
            return PointerOutcome::default();
        }
        self.hovered = None;
        PointerOutcome {
            redrawn: self.redraw(),
            selection: None,
        }
    }

    pub fn cancel_gesture(&mut self) {
        self.drag.cancel();
    }

    /// Whether the marker would be drawn under the current state.
    pub fn marker_visible(&self) -> bool {
        self.projector()
            .is_some_and(|p| self.marker_anchor(&p).is_some())
    }

    fn marker_anchor(&self, projector: &Projector) -> Option<DVec2> {
        let bounds = self.highlight_bounds.as_ref()?;
        if !region_in_view(projector, bounds) {
            return None;
        }
        marker_anchor(
            projector,
            self.config.marker.coord,
            self.config.marker_layout.edge_margin,
        )
    }

    /// Rebuild the scene. No-op (returns false, previous scene kept) until
    /// geometry is loaded and the viewport has area.
    pub fn redraw(&mut self) -> bool {
        let Some(features) = self.features.as_ref() else {
            return false;
        };
        let Some(projector) = self.projector() else {
            return false;
        };
        let palette = &self.config.palette;
        let mut scene = Scene::new(self.viewport);

        scene.push(Primitive::Disc {
            center: projector.center(),
            radius: projector.scale(),
            fill: palette.ocean,
        });

        for (index, feature) in features.features().iter().enumerate() {
            let rings = projector.project_rings(feature.rings());
            if rings.is_empty() {
                continue;
            }
            let role = fill_role(feature, &self.config.highlight, self.selected_id.as_deref());
            scene.push(Primitive::Feature(FeaturePath {
                index,
                id: feature.id.clone(),
                name: feature.name.clone(),
                rings,
                role,
                fill: palette.fill(role),
                opacity: if self.hovered == Some(index) {
                    palette.hover_opacity
                } else {
                    1.0
                },
            }));
        }

        if let Some(anchor) = self.marker_anchor(&projector) {
            let placement = self.config.marker_layout.place(anchor);
            scene.push(Primitive::Image {
                href: self.config.marker.icon_href.clone(),
                rect: placement.icon,
            });
            scene.push(Primitive::RoundedRect {
                rect: placement.label,
                radius: self.config.marker_layout.label_corner_radius,
                fill: palette.label_background,
            });
            scene.push(Primitive::Text {
                anchor: placement.text_anchor,
                text: self.config.marker.label.clone(),
                font: palette.label_font,
                fill: palette.label_text,
            });
            scene.mark_marker_drawn();
        }

        log::debug!(
            "[globe] redraw rot=({:.1},{:.1},{:.1}) size={}x{} prims={} marker={}",
            self.rotation.yaw,
            self.rotation.pitch,
            self.rotation.roll,
            self.viewport.width,
            self.viewport.height,
            scene.primitives().len(),
            scene.marker_drawn()
        );
        self.scene = scene;
        true
    }
}
