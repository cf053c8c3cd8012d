// File: crates/sunburst-core/src/scene.rs
// Summary: Renderer-agnostic snapshot of the chart: arcs, labels and center title for one frame.

use crate::geometry::{arc_path, ArcRect, LabelPlacement};
use crate::hierarchy::NodeId;
use crate::text::WrappedLabel;
use crate::theme::{Rgb, Theme};

#[derive(Clone, Debug, PartialEq)]
pub struct ArcShape {
    pub id: NodeId,
    pub name: String,
    pub depth: usize,
    pub rect: ArcRect,
    /// SVG path data relative to the chart center.
    pub d: String,
    pub fill: Rgb,
    /// The root disk is never drawn.
    pub visible: bool,
}

impl ArcShape {
    pub fn new(id: NodeId, name: &str, depth: usize, rect: ArcRect, fill: Rgb) -> Self {
        Self { id, name: name.to_string(), depth, rect, d: arc_path(&rect), fill, visible: depth > 0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelShape {
    pub id: NodeId,
    pub lines: Vec<String>,
    pub font_size: f32,
    pub placement: LabelPlacement,
    pub opacity: f64,
}

impl LabelShape {
    pub fn new(id: NodeId, wrapped: WrappedLabel, font_size: f32, placement: LabelPlacement, shown: bool) -> Self {
        let opacity = if shown && !wrapped.hidden { 1.0 } else { 0.0 };
        Self { id, lines: wrapped.lines, font_size, placement, opacity }
    }

    pub fn is_shown(&self) -> bool { self.opacity > 0.0 && !self.lines.is_empty() }

    /// SVG `transform` attribute value.
    pub fn transform(&self) -> String { self.placement.to_svg_transform() }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CenterTitle {
    pub text: String,
    pub opacity: f64,
    pub font_size: f32,
}

/// Everything needed to draw one frame. Coordinates are relative to the chart center.
#[derive(Clone, Debug)]
pub struct Scene {
    pub width: u32,
    pub radius: f64,
    pub arcs: Vec<ArcShape>,
    pub labels: Vec<LabelShape>,
    pub title: CenterTitle,
    /// Clicking inside this radius zooms out.
    pub center_radius: f64,
    pub line_height_em: f64,
    pub theme: Theme,
}

impl Scene {
    pub fn arc(&self, id: NodeId) -> Option<&ArcShape> { self.arcs.iter().find(|a| a.id == id) }

    pub fn label(&self, id: NodeId) -> Option<&LabelShape> { self.labels.iter().find(|l| l.id == id) }

    pub fn visible_labels(&self) -> impl Iterator<Item = &LabelShape> + '_ {
        self.labels.iter().filter(|l| l.is_shown())
    }
}
