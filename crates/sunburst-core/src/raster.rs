// File: crates/sunburst-core/src/raster.rs
// Summary: Headless raster rendering of a Scene using Skia CPU surfaces (PNG bytes / RGBA8 buffers).

use skia_safe as skia;

use crate::chart::RenderOptions;
use crate::error::{Result, SunburstError};
use crate::scene::Scene;
use crate::text::TextShaper;

fn make_surface(scene: &Scene, opts: &RenderOptions) -> Result<(skia::Surface, i32)> {
    let px = ((scene.width as f32) * opts.dpr.max(0.1)).round().max(1.0) as i32;
    let surface = skia::surfaces::raster_n32_premul((px, px))
        .ok_or_else(|| SunburstError::render("failed to create raster surface"))?;
    Ok((surface, px))
}

/// Draw the scene onto `canvas`, which is in CSS pixels with the origin at the top-left.
pub fn draw_scene(canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions) {
    canvas.clear(scene.theme.background.to_skia());
    canvas.save();
    canvas.translate((scene.radius as f32, scene.radius as f32));

    draw_arcs(canvas, scene);
    if opts.draw_labels || opts.draw_title {
        let shaper = TextShaper::new();
        if opts.draw_labels {
            draw_labels(canvas, scene, &shaper);
        }
        if opts.draw_title && scene.title.opacity > 0.0 {
            let alpha = (scene.title.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
            let color = scene.theme.center_text.to_skia().with_a(alpha);
            shaper.draw_centered(canvas, &scene.title.text, 0.0, 0.0, scene.title.font_size, color, true);
        }
    }
    canvas.restore();
}

fn draw_arcs(canvas: &skia::Canvas, scene: &Scene) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.0);
    stroke.set_color(scene.theme.stroke.to_skia());

    for arc in scene.arcs.iter().filter(|a| a.visible && !a.d.is_empty()) {
        let Some(path) = skia::Path::from_svg(&arc.d) else {
            tracing::debug!(id = arc.id, "skipping unparsable arc path");
            continue;
        };
        fill.set_color(arc.fill.to_skia());
        canvas.draw_path(&path, &fill);
        canvas.draw_path(&path, &stroke);
    }
}

fn draw_labels(canvas: &skia::Canvas, scene: &Scene, shaper: &TextShaper) {
    let color = scene.theme.label.to_skia();
    for label in scene.visible_labels() {
        let (x, y) = label.placement.anchor();
        canvas.save();
        canvas.translate((x as f32, y as f32));
        canvas.rotate(label.placement.text_rotation() as f32, None);
        let advance = label.font_size * scene.line_height_em as f32;
        for (i, line) in label.lines.iter().enumerate() {
            shaper.draw_centered(canvas, line, 0.0, i as f32 * advance, label.font_size, color, false);
        }
        canvas.restore();
    }
}

/// Render to an encoded PNG.
pub fn render_png_bytes(scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>> {
    let (mut surface, _) = make_surface(scene, opts)?;
    {
        let canvas = surface.canvas();
        canvas.scale((opts.dpr, opts.dpr));
        draw_scene(canvas, scene, opts);
    }
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| SunburstError::render("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render to a tightly packed RGBA8 buffer. Returns `(pixels, width, height, row_bytes)`.
pub fn render_rgba8(scene: &Scene, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let (mut surface, px) = make_surface(scene, opts)?;
    {
        let canvas = surface.canvas();
        canvas.scale((opts.dpr, opts.dpr));
        draw_scene(canvas, scene, opts);
    }
    let info = skia::ImageInfo::new(
        (px, px),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let row_bytes = px as usize * 4;
    let mut pixels = vec![0u8; row_bytes * px as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(SunburstError::render("read pixels failed"));
    }
    Ok((pixels, px as u32, px as u32, row_bytes))
}
