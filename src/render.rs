//! Canvas 2D painter for [`Scene`]s.

use crate::core::Rect;
use crate::scene::{FeaturePath, Primitive, Scene};
use std::f64::consts::TAU;
use web_sys as web;

pub fn paint(
    ctx: &web::CanvasRenderingContext2d,
    scene: &Scene,
    dpr: f64,
    icon: Option<&web::HtmlImageElement>,
) {
    // Work in CSS pixels; the backing store is dpr times larger.
    _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    let canvas_w = ctx.canvas().map(|c| c.width() as f64).unwrap_or(0.0);
    let canvas_h = ctx.canvas().map(|c| c.height() as f64).unwrap_or(0.0);
    ctx.clear_rect(0.0, 0.0, canvas_w, canvas_h);
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

    for prim in scene.primitives() {
        ctx.set_global_alpha(1.0);
        match prim {
            Primitive::Disc {
                center,
                radius,
                fill,
            } => {
                ctx.begin_path();
                _ = ctx.arc(center.x, center.y, *radius, 0.0, TAU);
                ctx.set_fill_style_str(fill);
                ctx.fill();
            }
            Primitive::Feature(f) => paint_feature(ctx, f),
            Primitive::Image { rect, .. } => paint_icon(ctx, rect, icon),
            Primitive::RoundedRect { rect, radius, fill } => {
                rounded_rect_path(ctx, rect, *radius);
                ctx.set_fill_style_str(fill);
                ctx.fill();
            }
            Primitive::Text {
                anchor,
                text,
                font,
                fill,
            } => {
                ctx.set_font(font);
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                ctx.set_fill_style_str(fill);
                _ = ctx.fill_text(text, anchor.x, anchor.y);
            }
        }
    }
    ctx.set_global_alpha(1.0);
}

fn paint_feature(ctx: &web::CanvasRenderingContext2d, f: &FeaturePath) {
    ctx.begin_path();
    for ring in &f.rings {
        let Some((first, rest)) = ring.split_first() else {
            continue;
        };
        ctx.move_to(first.x, first.y);
        for p in rest {
            ctx.line_to(p.x, p.y);
        }
        ctx.close_path();
    }
    ctx.set_global_alpha(f.opacity);
    ctx.set_fill_style_str(f.fill);
    ctx.fill_with_canvas_winding_rule(web::CanvasWindingRule::Evenodd);
}

fn paint_icon(ctx: &web::CanvasRenderingContext2d, rect: &Rect, icon: Option<&web::HtmlImageElement>) {
    match icon.filter(|img| img.complete() && img.natural_width() > 0) {
        Some(img) => {
            _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                rect.origin.x,
                rect.origin.y,
                rect.size.x,
                rect.size.y,
            );
        }
        None => {
            // Image still loading (or missing): a plain dot in its place.
            let c = rect.center();
            ctx.begin_path();
            _ = ctx.arc(c.x, c.y, rect.size.x.min(rect.size.y) / 4.0, 0.0, TAU);
            ctx.set_fill_style_str("white");
            ctx.fill();
        }
    }
}

fn rounded_rect_path(ctx: &web::CanvasRenderingContext2d, rect: &Rect, radius: f64) {
    let (x, y) = (rect.origin.x, rect.origin.y);
    let (w, h) = (rect.size.x, rect.size.y);
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    _ = ctx.arc_to(x + w, y, x + w, y + h, r);
    _ = ctx.arc_to(x + w, y + h, x, y + h, r);
    _ = ctx.arc_to(x, y + h, x, y, r);
    _ = ctx.arc_to(x, y, x + w, y, r);
    ctx.close_path();
}
