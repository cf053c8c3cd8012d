// File: crates/sunburst-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders the sample chart (root view and zoomed into one category) to SVG text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, logs a note; the label checks below still run, so a fresh checkout tests
//   label transforms, tspans and font sizes without a blessed file.

use sunburst_core::{ChartConfig, Sunburst};

/// Every label of the current frame is serialized with its transform, font size and one tspan per line.
fn assert_labels_serialized(chart: &Sunburst, svg: &str) {
    let scene = chart.scene();
    assert_eq!(svg.matches("<text data-id=").count(), chart.hierarchy().len() - 1);
    for label in &scene.labels {
        let open = format!(
            r#"<text data-id="{}" transform="{}" font-size="{}px""#,
            label.id,
            label.transform(),
            label.font_size
        );
        let start = svg.find(&open).unwrap_or_else(|| panic!("missing label element: {open}"));
        let end = start + svg[start..].find("</text>").expect("closed text");
        let element = &svg[start..end];
        assert!(label.transform().starts_with("rotate("), "{}", label.transform());
        assert_eq!(element.matches("<tspan").count(), label.lines.len());
        if let Some(first) = label.lines.first() {
            assert!(element.contains(r#"dy="0.35em""#));
            assert!(element.contains(first.as_str()) || first.contains('&'));
        }
    }
}

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, got: &str) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, got).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), got.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read_to_string(&path).expect("read snapshot");
        assert_eq!(got, want, "rendered SVG differs from golden snapshot: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn sample() -> Sunburst {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/hierarchy_data.json");
    // Default measurer is the width heuristic, so label wrapping is platform independent.
    Sunburst::load(path, ChartConfig::default()).expect("load sample")
}

#[test]
fn golden_root_view() {
    let chart = sample();
    let svg = chart.render_svg();
    assert_labels_serialized(&chart, &svg);
    assert!(svg.contains(r#"font-size="14px""#) && svg.contains(r#"font-size="11px""#));
    write_or_compare("root_view.svg", &svg);
}

#[test]
fn golden_zoomed_view() {
    let mut chart = sample();
    let furniture = chart.hierarchy().find_by_name("Furniture").expect("category");
    chart.click(furniture);
    chart.finish_animation();
    let svg = chart.render_svg();
    assert_labels_serialized(&chart, &svg);
    let chairs = chart.hierarchy().find_by_name("Chairs").expect("leaf");
    assert_eq!(chart.scene().label(chairs).expect("label").opacity, 1.0);
    write_or_compare("furniture_view.svg", &svg);
}

#[test]
fn svg_structure() {
    let chart = sample();
    let svg = chart.render_svg();
    // one path per node, root hidden
    assert_eq!(svg.matches("<path ").count(), chart.hierarchy().len());
    assert_eq!(svg.matches(r#"display="none""#).count(), 1);
    assert!(svg.contains(r#"<g transform="translate(300,300)">"#));
    assert!(svg.contains(r#"<circle r="75" fill="transparent"/>"#));
    assert!(svg.contains("<tspan"));
}
