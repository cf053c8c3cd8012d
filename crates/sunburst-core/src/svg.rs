// File: crates/sunburst-core/src/svg.rs
// Summary: Serialize a Scene into a standalone SVG document.

use std::fmt::Write as _;

use crate::geometry::num;
use crate::scene::Scene;

/// Escape text for XML content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the scene as an SVG document: arcs, labels, the zoom-out circle and the center title.
pub fn render_svg(scene: &Scene) -> String {
    let w = scene.width;
    let r = num(scene.radius);
    let theme = &scene.theme;
    let mut s = String::with_capacity(256 + scene.arcs.len() * 160);

    let _ = writeln!(s, r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{w}" viewBox="0 0 {w} {w}">"#);
    let _ = writeln!(s, r#"<rect width="100%" height="100%" fill="{}"/>"#, theme.background.to_hex());
    let _ = writeln!(s, r#"<g transform="translate({r},{r})">"#);

    s.push_str("<g>\n");
    for arc in &scene.arcs {
        let display = if arc.visible { "" } else { r#" display="none""# };
        let _ = writeln!(
            s,
            r#"<path data-id="{}" d="{}" fill="{}" stroke="{}"{display}><title>{}</title></path>"#,
            arc.id,
            arc.d,
            arc.fill.to_hex(),
            theme.stroke.to_hex(),
            escape_xml(&arc.name),
        );
    }
    s.push_str("</g>\n");

    let _ = writeln!(
        s,
        r#"<g pointer-events="none" text-anchor="middle" fill="{}">"#,
        theme.label.to_hex()
    );
    for label in &scene.labels {
        let _ = write!(
            s,
            r#"<text data-id="{}" transform="{}" font-size="{}px" opacity="{}">"#,
            label.id,
            label.transform(),
            num(label.font_size as f64),
            num(label.opacity),
        );
        for (i, line) in label.lines.iter().enumerate() {
            let dy = 0.35 + i as f64 * scene.line_height_em;
            let _ = write!(s, r#"<tspan x="0" y="0" dy="{}em">{}</tspan>"#, num(dy), escape_xml(line));
        }
        s.push_str("</text>\n");
    }
    s.push_str("</g>\n");

    let _ = writeln!(s, r#"<circle r="{}" fill="transparent"/>"#, num(scene.center_radius));
    let _ = writeln!(
        s,
        r#"<text text-anchor="middle" dy="0.35em" font-size="{}px" font-weight="600" fill="{}" opacity="{}" pointer-events="none">{}</text>"#,
        num(scene.title.font_size as f64),
        theme.center_text.to_hex(),
        num(scene.title.opacity),
        escape_xml(&scene.title.text),
    );
    s.push_str("</g>\n</svg>\n");
    s
}
