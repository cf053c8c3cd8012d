// File: crates/sunburst-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape, background and an arc pixel.

use sunburst_core::{ChartConfig, Node, RenderOptions, Sunburst};

#[test]
fn render_rgba8_buffer() {
    let data = Node::branch("Root", vec![Node::leaf("Only", 10.0)]);
    let chart = Sunburst::new(data, ChartConfig::default()).expect("chart");

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    opts.draw_title = false;
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left corner is plain background (white, opaque)
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);

    // Middle of the only ring, straight above the center, carries the arc fill.
    let fill = chart.fill(chart.hierarchy().find_by_name("Only").unwrap());
    let ring = chart.layout()[1];
    let y = (300.0 - (ring.y0 + ring.y1) / 2.0) as usize;
    let i = y * stride + 300 * 4;
    assert_eq!(&px[i..i + 3], &[fill.r, fill.g, fill.b]);
}

#[test]
fn dpr_scales_surface() {
    let data = Node::branch("Root", vec![Node::leaf("Only", 10.0)]);
    let chart = Sunburst::new(data, ChartConfig::default()).expect("chart");
    let opts = RenderOptions { dpr: 2.0, draw_labels: false, draw_title: false };
    let (_, w, h, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (1200, 1200));
}
