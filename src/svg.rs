//! SVG visualization of an alignment.
//!
//! Draws the container and the aligned rect in screen space, flipping y for
//! [`CoordinateOrigin::BottomLeft`] so "top" always renders at the top.
//!
//! # Example
//!
//! ```
//! use rectalign::{Alignment, CoordinateOrigin, Rect, svg::render_alignment_svg};
//!
//! let svg = render_alignment_svg(
//!     Rect::new(0.0, 0.0, 10.0, 10.0),
//!     Rect::new(0.0, 0.0, 100.0, 100.0),
//!     Alignment::TOP | Alignment::RIGHT,
//!     CoordinateOrigin::BottomLeft,
//! );
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::align::{Alignment, CoordinateOrigin, align_in_rect};
use crate::geometry::{Rect, Size};

/// Maximum pixel width of the panel.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height of the panel.
const MAX_PANEL_H: f64 = 200.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top and bottom margin.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above the panel.
const LABEL_H: f64 = 22.0;
/// Height of annotation text area below the panel.
const ANNOTATION_H: f64 = 22.0;

/// Render a complete SVG document showing `rect` aligned inside `container`.
///
/// The container is scaled to fit the panel. A rect larger than the
/// container is drawn at the same scale and spills past the panel.
pub fn render_alignment_svg(
    rect: Rect,
    container: Rect,
    alignment: Alignment,
    origin: CoordinateOrigin,
) -> String {
    let placed = align_in_rect(rect, container, alignment, origin);

    let (pw, ph, scale) = scale_to_fit(container.size);
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP + LABEL_H + MAX_PANEL_H + ANNOTATION_H + MARGIN_TOP;
    let center_x = total_w / 2.0;
    let panel_x = center_x - pw / 2.0;
    let panel_y = MARGIN_TOP + LABEL_H;

    let mut svg = String::with_capacity(2048);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Light/dark mode via prefers-color-scheme
    svg.push_str(r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .outer { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .inner { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  .axis { stroke: #c0392b; stroke-width: 2; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .outer { fill: #2d2d2d; stroke: #555; }
    .inner { fill: #3a72a4; stroke: #5a9fd4; }
    .axis { stroke: #e0705f; }
  }
</style>
"##);

    // Label
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN_TOP + 14.0,
        escape_xml(&format!("align {alignment} ({origin})"))
    ));
    svg.push('\n');

    // Container
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="outer" rx="2"/>"#,
        panel_x, panel_y, pw, ph
    ));
    svg.push('\n');

    // Origin marker: short stroke along each axis from the (0, 0) corner.
    let (ox, oy) = (panel_x, screen_y(0.0, 0.0, ph, origin) + panel_y);
    let dy = match origin {
        CoordinateOrigin::TopLeft => 12.0,
        CoordinateOrigin::BottomLeft => -12.0,
    };
    svg.push_str(&format!(
        r#"<line x1="{ox:.1}" y1="{oy:.1}" x2="{:.1}" y2="{oy:.1}" class="axis"/><line x1="{ox:.1}" y1="{oy:.1}" x2="{ox:.1}" y2="{:.1}" class="axis"/>"#,
        ox + 12.0,
        oy + dy
    ));
    svg.push('\n');

    // Aligned rect
    let iw = placed.width().abs() * scale;
    let ih = placed.height().abs() * scale;
    let ix = panel_x + placed.x() * scale;
    let iy = panel_y + screen_y(placed.y() * scale, ih, ph, origin);
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="inner" rx="1"/>"#,
        ix, iy, iw, ih
    ));
    svg.push('\n');

    // Annotation
    svg.push_str(&format!(
        r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
        center_x,
        panel_y + ph + 14.0,
        escape_xml(&format!(
            "{}×{} at ({}, {}) in {}×{}",
            placed.width(),
            placed.height(),
            placed.x(),
            placed.y(),
            container.width(),
            container.height()
        ))
    ));
    svg.push('\n');

    svg.push_str("</svg>\n");
    svg
}

/// Top edge in SVG space of a box starting at `y` with height `h`, inside
/// a panel of height `panel_h`.
fn screen_y(y: f64, h: f64, panel_h: f64, origin: CoordinateOrigin) -> f64 {
    match origin {
        CoordinateOrigin::TopLeft => y,
        CoordinateOrigin::BottomLeft => panel_h - y - h,
    }
}

/// Scale a Size to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(size: Size) -> (f64, f64, f64) {
    let w = size.width.abs();
    let h = size.height.abs();
    if w == 0.0 || h == 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
