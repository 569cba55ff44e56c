// Host-side tests for the redraw cycle, marker gating and pointer handling.

mod common;

use glam::DVec2;
use globe_web::core::{RotationState, Viewport};
use globe_web::globe::{fill_role, HighlightRule, PointerOutcome};
use globe_web::scene::{FillRole, Primitive};
use globe_web::{FeatureSelection, Globe, GlobeConfig};

fn loaded_globe(w: f64, h: f64) -> Globe {
    let mut globe = Globe::new(GlobeConfig::default());
    globe.resize(Viewport::new(w, h));
    assert!(globe.set_features(common::world()));
    globe
}

fn globe_with_rotation(rotation: RotationState) -> Globe {
    let config = GlobeConfig {
        initial_rotation: rotation,
        ..GlobeConfig::default()
    };
    let mut globe = Globe::new(config);
    globe.resize(Viewport::new(600.0, 600.0));
    globe.set_features(common::world());
    globe
}

fn screen_of(globe: &Globe, lon: f64, lat: f64) -> DVec2 {
    globe
        .projector()
        .and_then(|p| p.project(DVec2::new(lon, lat)))
        .expect("point faces the viewer")
}

// ---------------- fill precedence ----------------

#[test]
fn highlight_outranks_selection() {
    let rule = HighlightRule::default();
    let china = common::china();
    assert_eq!(fill_role(&china, &rule, Some("156")), FillRole::Highlight);
    assert_eq!(fill_role(&china, &rule, None), FillRole::Highlight);

    let japan = common::japan();
    assert_eq!(fill_role(&japan, &rule, Some("392")), FillRole::Selected);
    assert_eq!(fill_role(&japan, &rule, Some("156")), FillRole::Default);
    assert_eq!(fill_role(&japan, &rule, None), FillRole::Default);
}

#[test]
fn highlight_matches_by_name_when_id_differs() {
    let rule = HighlightRule::default();
    let renamed = globe_web::core::GeoFeature::new(Some("CHN".into()), Some("China".into()), vec![]);
    assert_eq!(fill_role(&renamed, &rule, Some("CHN")), FillRole::Highlight);
}

#[test]
fn scene_fills_follow_palette() {
    let mut globe = loaded_globe(600.0, 600.0);
    globe.set_selected_id(Some("392".into()));
    let scene = globe.scene();
    let palette = globe.config().palette;
    assert_eq!(scene.feature("156").unwrap().fill, palette.highlight);
    assert_eq!(scene.feature("392").unwrap().fill, palette.selected);
    assert_eq!(scene.feature("156").unwrap().role, FillRole::Highlight);
    assert_eq!(scene.feature("392").unwrap().role, FillRole::Selected);
    assert!(matches!(
        scene.primitives()[0],
        Primitive::Disc { fill, .. } if fill == palette.ocean
    ));
}

// ---------------- redraw cycle ----------------

#[test]
fn redraw_before_load_is_a_noop() {
    let mut globe = Globe::new(GlobeConfig::default());
    assert!(!globe.redraw());
    assert!(!globe.resize(Viewport::new(600.0, 600.0)));
    assert!(!globe.set_selected_id(Some("156".into())));
    assert!(globe.scene().is_empty());
    assert_eq!(globe.pointer_move(DVec2::new(300.0, 300.0)), PointerOutcome::default());
}

#[test]
fn zero_viewport_keeps_previous_scene() {
    let mut globe = loaded_globe(600.0, 600.0);
    let before = globe.scene().primitives().len();
    assert!(before > 1);
    assert!(!globe.resize(Viewport::new(0.0, 0.0)));
    assert_eq!(globe.scene().primitives().len(), before);
    // Drags need a scale, so nothing moves either.
    let rotation = globe.rotation();
    assert!(!globe.drag_by(DVec2::new(10.0, 10.0)));
    assert_eq!(globe.rotation(), rotation);
}

#[test]
fn far_side_features_are_not_drawn() {
    let globe = loaded_globe(600.0, 600.0);
    // Default view faces East Asia; Brazil is behind the globe.
    assert!(globe.scene().feature("156").is_some());
    assert!(globe.scene().feature("076").is_none());
}

#[test]
fn repeated_resize_is_idempotent() {
    let mut globe = loaded_globe(600.0, 600.0);
    globe.resize(Viewport::new(800.0, 500.0));
    let first: Vec<_> = globe.scene().features().map(|f| (f.id.clone(), f.rings.clone())).collect();
    globe.resize(Viewport::new(800.0, 500.0));
    let second: Vec<_> = globe.scene().features().map(|f| (f.id.clone(), f.rings.clone())).collect();
    assert_eq!(first, second);
    assert_eq!(globe.scene().marker_drawn(), globe.marker_visible());
}

#[test]
fn resize_keeps_rotation() {
    let mut globe = loaded_globe(600.0, 600.0);
    globe.drag_by(DVec2::new(40.0, -12.0));
    let rotation = globe.rotation();
    globe.resize(Viewport::new(1024.0, 768.0));
    assert_eq!(globe.rotation(), rotation);
}

#[test]
fn drag_rotates_by_scaled_delta() {
    let mut globe = loaded_globe(600.0, 600.0);
    let k = 75.0 / (600.0 / 2.2);
    assert!(globe.drag_by(DVec2::new(20.0, 10.0)));
    let expected = RotationState::default().dragged(DVec2::new(20.0, 10.0), k);
    assert_eq!(globe.rotation(), expected);
}

// ---------------- marker ----------------

#[test]
fn marker_shown_at_default_rotation() {
    let globe = loaded_globe(600.0, 600.0);
    let scene = globe.scene();
    assert!(scene.marker_drawn());
    let label = scene.primitives().iter().find_map(|p| match p {
        Primitive::Text { text, .. } => Some(text.as_str()),
        _ => None,
    });
    assert_eq!(label, Some("中国 • 杭州"));
    assert!(scene
        .primitives()
        .iter()
        .filter(|p| matches!(p, Primitive::Image { .. } | Primitive::RoundedRect { .. } | Primitive::Text { .. }))
        .all(|p| !p.is_interactive()));
}

#[test]
fn marker_hidden_after_half_turn() {
    let globe = globe_with_rotation(RotationState::new(75.0, -25.0, 0.0));
    assert!(!globe.scene().marker_drawn());
    assert!(!globe.marker_visible());
}

#[test]
fn marker_needs_highlighted_region() {
    let mut globe = Globe::new(GlobeConfig::default());
    globe.resize(Viewport::new(600.0, 600.0));
    globe.set_features(common::world_without_china());
    // The marker point itself is on screen, but the region check fails.
    let p = globe.projector().unwrap();
    assert!(p.project(globe.config().marker.coord).is_some());
    assert!(!globe.scene().marker_drawn());
}

#[test]
fn marker_needs_edge_margin() {
    // At 300×300 a 150px margin leaves only the exact centre.
    let globe = loaded_globe(300.0, 300.0);
    assert!(globe.scene().feature("156").is_some());
    assert!(!globe.scene().marker_drawn());
}

#[test]
fn marker_follows_drag_out_of_view() {
    let mut globe = loaded_globe(600.0, 600.0);
    assert!(globe.scene().marker_drawn());
    let scale = 600.0 / 2.2;
    // Half a turn of yaw in one gesture.
    globe.drag_by(DVec2::new(180.0 * scale / 75.0, 0.0));
    assert!(!globe.scene().marker_drawn());
}

// ---------------- pointer ----------------

#[test]
fn click_selects_feature_once() {
    let mut globe = loaded_globe(600.0, 600.0);
    globe.set_selected_id(Some("392".into()));
    let at = screen_of(&globe, 104.0, 35.0);

    globe.pointer_down(at);
    let outcome = globe.pointer_up(at);
    assert_eq!(
        outcome.selection,
        Some(FeatureSelection {
            name: "China".into(),
            id: "156".into()
        })
    );
    // A stray release without a press selects nothing.
    assert_eq!(globe.pointer_up(at).selection, None);
    // Selection is the page's business; the click does not change it.
    assert_eq!(globe.selected_id(), Some("392"));
}

#[test]
fn click_on_selected_feature_reports_itself() {
    let mut globe = loaded_globe(600.0, 600.0);
    let cases = [
        ("392", (138.0, 35.5), "Japan"),
        ("156", (104.0, 35.0), "China"),
    ];
    for (selected, (lon, lat), name) in cases {
        globe.set_selected_id(Some(selected.into()));
        let at = screen_of(&globe, lon, lat);
        globe.pointer_down(at);
        assert_eq!(
            globe.pointer_up(at).selection,
            Some(FeatureSelection {
                name: name.into(),
                id: selected.into()
            })
        );
    }
}

#[test]
fn click_on_ocean_selects_nothing() {
    let mut globe = loaded_globe(600.0, 600.0);
    let corner = DVec2::new(5.0, 5.0);
    globe.pointer_down(corner);
    assert_eq!(globe.pointer_up(corner).selection, None);
}

#[test]
fn drag_suppresses_click() {
    let mut globe = loaded_globe(600.0, 600.0);
    let at = screen_of(&globe, 104.0, 35.0);
    let before = globe.rotation();

    globe.pointer_down(at);
    let moved = globe.pointer_move(at + DVec2::new(6.0, 0.0));
    assert!(moved.redrawn);
    let outcome = globe.pointer_up(at + DVec2::new(6.0, 0.0));
    assert_eq!(outcome.selection, None);
    assert!(globe.rotation().yaw > before.yaw);
    assert_eq!(globe.rotation().roll, before.roll);
}

#[test]
fn hover_dims_feature_until_leave() {
    let mut globe = loaded_globe(600.0, 600.0);
    let at = screen_of(&globe, 104.0, 35.0);

    assert!(globe.pointer_move(at).redrawn);
    assert_eq!(globe.hovered().map(|f| f.id.as_str()), Some("156"));
    assert_eq!(globe.scene().feature("156").unwrap().opacity, 0.8);
    assert_eq!(globe.scene().feature("392").unwrap().opacity, 1.0);

    // Moving within the same feature changes nothing.
    assert!(!globe.pointer_move(at + DVec2::new(1.0, 1.0)).redrawn);

    assert!(globe.pointer_leave().redrawn);
    assert_eq!(globe.scene().feature("156").unwrap().opacity, 1.0);
    assert!(globe.hovered().is_none());
}

#[test]
fn drag_clears_hover_left_behind() {
    let mut globe = loaded_globe(600.0, 600.0);
    let start = screen_of(&globe, 104.0, 38.0);
    globe.pointer_move(start);
    assert_eq!(globe.hovered().map(|f| f.id.as_str()), Some("156"));

    globe.pointer_down(start);
    let end = start + DVec2::new(250.0, 0.0);
    assert!(globe.pointer_move(end).redrawn);
    assert!(globe.hovered().is_none());
    assert!(globe.scene().features().all(|f| f.opacity == 1.0));

    globe.pointer_up(end);
    // Only whatever now sits under the pointer may be dimmed.
    let under = globe.scene().hit_test(end).map(|f| f.id.clone());
    assert_eq!(globe.hovered().map(|f| f.id.clone()), under);
    for f in globe.scene().features() {
        let expected = if under.as_deref() == Some(f.id.as_str()) { 0.8 } else { 1.0 };
        assert_eq!(f.opacity, expected, "{}", f.id);
    }
}

// ---------------- marker layout ----------------

#[test]
fn marker_parts_are_placed_around_anchor() {
    let layout = globe_web::core::MarkerLayout::default();
    let placed = layout.place(DVec2::new(300.0, 300.0));
    assert_eq!(placed.icon, globe_web::core::Rect::new(272.0, 282.0, 36.0, 36.0));
    assert_eq!(placed.label, globe_web::core::Rect::new(316.0, 292.0, 104.0, 36.0));
    assert_eq!(placed.text_anchor, DVec2::new(368.0, 310.0));
    // The icon's bottom edge sits on the vertical offset.
    assert_eq!(placed.icon.origin.y + placed.icon.size.y, 318.0);
}

#[test]
fn drawn_marker_uses_projected_anchor() {
    let globe = loaded_globe(600.0, 600.0);
    let anchor = screen_of(&globe, 120.1551, 30.2741);
    let expected = globe.config().marker_layout.place(anchor);
    let icon = globe.scene().primitives().iter().find_map(|p| match p {
        Primitive::Image { rect, href } => Some((*rect, href.clone())),
        _ => None,
    });
    assert_eq!(icon, Some((expected.icon, "assets/dot.svg".to_string())));
}
