// File: crates/sunburst-core/src/chart.rs
// Summary: Sunburst model: owns the data tree, layout, zoom state and colors; handles clicks and edits.

use std::path::Path;

use crate::config::ChartConfig;
use crate::controls::{self, NewCategory};
use crate::error::{Result, SunburstError};
use crate::geometry::{to_polar, ArcRect, LabelPlacement};
use crate::hierarchy::{Hierarchy, NodeId};
use crate::partition::partition;
use crate::scene::{ArcShape, CenterTitle, LabelShape, Scene};
use crate::text::{wrap_label, ApproxMeasure, TextMeasure};
use crate::theme::{self, OrdinalScale, Rgb, Theme};
use crate::tooltip::Tooltip;
use crate::tree::Node;
use crate::types::{FONT_LARGE, FONT_SMALL, LARGE_FONT_MIN_ANGLE};
use crate::zoom::ZoomState;

/// Options for raster output.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Device pixel ratio; the surface is `width * dpr` pixels square.
    pub dpr: f32,
    pub draw_labels: bool,
    pub draw_title: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { dpr: 1.0, draw_labels: true, draw_title: true }
    }
}

/// What a pointer position relative to the chart center lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// The zoom-out circle in the middle.
    Center,
    Arc(NodeId),
}

pub struct Sunburst {
    data: Node,
    hierarchy: Hierarchy,
    layout: Vec<ArcRect>,
    zoom: ZoomState,
    colors: OrdinalScale,
    fills: Vec<Rgb>,
    config: ChartConfig,
    theme: Theme,
    measure: Box<dyn TextMeasure>,
    /// Label font sizes follow depth once the user has zoomed; before that, arc width.
    zoomed: bool,
}

impl Sunburst {
    pub fn new(data: Node, config: ChartConfig) -> Result<Self> {
        data.validate()?;
        config.validate()?;
        let theme = theme::find(&config.theme);
        let hierarchy = build_checked(&data)?;
        let layout = partition(&hierarchy, config.radius());
        let zoom = ZoomState::new(&hierarchy, &layout);
        let mut chart = Self {
            data,
            hierarchy,
            layout,
            zoom,
            colors: OrdinalScale::new(theme.palette),
            fills: Vec::new(),
            config,
            theme,
            measure: Box::new(ApproxMeasure::default()),
            zoomed: false,
        };
        chart.fills = chart.compute_fills();
        Ok(chart)
    }

    pub fn from_json_str(json: &str, config: ChartConfig) -> Result<Self> {
        Self::new(Node::from_json_str(json)?, config)
    }

    pub fn load(path: impl AsRef<Path>, config: ChartConfig) -> Result<Self> {
        Self::new(Node::load(path)?, config)
    }

    /// Swap the text measurer used for label wrapping.
    pub fn with_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    pub fn data(&self) -> &Node { &self.data }
    pub fn hierarchy(&self) -> &Hierarchy { &self.hierarchy }
    pub fn layout(&self) -> &[ArcRect] { &self.layout }
    pub fn zoom_state(&self) -> &ZoomState { &self.zoom }
    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn theme(&self) -> &Theme { &self.theme }
    pub fn focus(&self) -> NodeId { self.zoom.focus() }
    pub fn fill(&self, id: NodeId) -> Rgb { self.fills[id] }

    // ---- navigation ---------------------------------------------------------

    /// Zoom so that `id` fills the circle.
    pub fn click(&mut self, id: NodeId) {
        if id >= self.hierarchy.len() {
            return;
        }
        self.zoomed = true;
        self.zoom.zoom_to(
            &self.hierarchy,
            &self.layout,
            id,
            self.config.zoom_duration_ms,
            self.config.title_fade_ms,
        );
    }

    /// Click on the center circle: zoom out one level. Returns false at the root.
    pub fn click_center(&mut self) -> bool {
        let moved = self.zoom.zoom_out(
            &self.hierarchy,
            &self.layout,
            self.config.zoom_duration_ms,
            self.config.title_fade_ms,
        );
        self.zoomed |= moved;
        moved
    }

    /// Resolve a point relative to the chart center against the arcs as currently drawn.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<HitTarget> {
        let (angle, r) = to_polar(x, y);
        if r < self.center_radius() {
            return Some(HitTarget::Center);
        }
        let current = self.zoom.current();
        self.hierarchy
            .descendants()
            .iter()
            .rev()
            .copied()
            .filter(|&id| self.hierarchy.node(id).depth > 0)
            .find(|&id| current[id].contains(angle, r))
            .map(HitTarget::Arc)
    }

    /// Dispatch a click at a point relative to the center.
    pub fn click_at(&mut self, x: f64, y: f64) -> Option<HitTarget> {
        let hit = self.hit_test(x, y)?;
        match hit {
            HitTarget::Center => {
                self.click_center();
            }
            HitTarget::Arc(id) => self.click(id),
        }
        Some(hit)
    }

    pub fn hover(&self, id: NodeId) -> Option<Tooltip> {
        (id < self.hierarchy.len()).then(|| Tooltip::for_node(&self.hierarchy, id))
    }

    pub fn center_radius(&self) -> f64 { self.config.radius() / 4.0 }

    // ---- animation ----------------------------------------------------------

    /// Advance transitions by `dt_ms`. Returns whether another frame is needed.
    pub fn tick(&mut self, dt_ms: f64) -> bool { self.zoom.tick(dt_ms) }

    pub fn is_animating(&self) -> bool { self.zoom.is_animating() }

    pub fn finish_animation(&mut self) { self.zoom.finish(); }

    // ---- edit controls ------------------------------------------------------

    /// Leaf names for the "update" dropdown.
    pub fn leaf_options(&self) -> Vec<String> {
        let h = &self.hierarchy;
        controls::sorted_options(h.leaves().map(|id| h.node(id).name.as_str()))
    }

    /// Names of nodes with children for the "parent" dropdown.
    pub fn parent_options(&self) -> Vec<String> {
        let h = &self.hierarchy;
        controls::sorted_options(
            h.descendants().iter().filter(|&&id| !h.node(id).is_leaf()).map(|&id| h.node(id).name.as_str()),
        )
    }

    /// Current value of the first leaf named `name`, used to pre-fill the value input.
    pub fn leaf_value(&self, name: &str) -> Option<f64> {
        let h = &self.hierarchy;
        h.leaves().find(|&id| h.node(id).name == name).map(|id| h.node(id).value)
    }

    /// Set a leaf's value from form input, re-layout and zoom back to the root.
    pub fn update_leaf(&mut self, name: &str, raw_value: &str) -> Result<()> {
        let result = self.try_update_leaf(name, raw_value);
        if let Err(e) = &result {
            tracing::warn!(category = name, error = %e, "update rejected");
        }
        result
    }

    fn try_update_leaf(&mut self, name: &str, raw_value: &str) -> Result<()> {
        let value = controls::clamp_value(controls::parse_value(raw_value)?);
        let mut data = self.data.clone();
        if data.set_leaf_value(name, value) == 0 {
            return Err(SunburstError::UnknownCategory { name: name.to_string() });
        }
        let hierarchy = build_checked(&data)?;
        // Same shape, same ids: arcs animate from where they are to the new layout.
        self.data = data;
        self.hierarchy = hierarchy;
        self.layout = partition(&self.hierarchy, self.config.radius());
        self.fills = self.compute_fills();
        tracing::info!(category = name, value, "updated leaf value");
        let root = self.hierarchy.root();
        self.click(root);
        Ok(())
    }

    /// Add a new leaf under `parent` from form input, then zoom to the parent.
    pub fn add_category(&mut self, parent: &str, raw_name: &str, raw_value: &str) -> Result<NodeId> {
        let result = NewCategory::parse(parent, raw_name, raw_value).and_then(|c| self.insert_category(c));
        if let Err(e) = &result {
            tracing::warn!(parent, name = raw_name.trim(), error = %e, "add category rejected");
        }
        result
    }

    fn insert_category(&mut self, c: NewCategory) -> Result<NodeId> {
        let mut data = self.data.clone();
        data.find_mut(&c.parent)
            .ok_or_else(|| SunburstError::ParentNotFound { name: c.parent.clone() })?
            .push_child(Node::leaf(c.name.as_str(), c.value))?;
        let hierarchy = build_checked(&data)?;

        // The shape changed, so ids shift: restart from the plain layout.
        self.data = data;
        self.hierarchy = hierarchy;
        self.layout = partition(&self.hierarchy, self.config.radius());
        self.fills = self.compute_fills();
        self.zoom = ZoomState::new(&self.hierarchy, &self.layout);
        tracing::info!(parent = %c.parent, name = %c.name, value = c.value, "added category");

        // Same lookup order as `Node::find_mut`, so this is the node that got the child.
        let h = &self.hierarchy;
        let target = h.first_in_input_order(&c.parent).unwrap_or(h.root());
        let id = h
            .node(target)
            .children
            .iter()
            .copied()
            .find(|&id| h.node(id).name == c.name)
            .unwrap_or(target);
        self.click(target);
        Ok(id)
    }

    // ---- scene --------------------------------------------------------------

    /// Depth 1 takes a darkened palette color; deeper rings a brightened copy of the parent's.
    /// Keys are requested breadth-first so first-ring names claim palette slots first.
    /// Added categories go through the same rule as loaded ones, so a node's color
    /// does not depend on how it entered the tree.
    fn compute_fills(&mut self) -> Vec<Rgb> {
        let h = &self.hierarchy;
        let mut order: Vec<NodeId> = h.descendants().to_vec();
        order.sort_by_key(|&id| h.node(id).depth);
        let mut fills = vec![Rgb::new(0, 0, 0); h.len()];
        for id in order {
            let n = h.node(id);
            fills[id] = match (n.depth, n.parent) {
                (1, _) => self.colors.color(&n.name).darker(0.4),
                (_, Some(p)) => self.colors.color(&h.node(p).name).brighter(0.7),
                (_, None) => self.colors.color(&n.name),
            };
        }
        fills
    }

    fn font_size(&self, id: NodeId, rect: &ArcRect) -> f32 {
        if self.zoomed {
            if self.hierarchy.node(id).depth == 1 { FONT_LARGE } else { FONT_SMALL }
        } else if rect.angle() > LARGE_FONT_MIN_ANGLE {
            FONT_LARGE
        } else {
            FONT_SMALL
        }
    }

    /// Snapshot of the current frame.
    pub fn scene(&self) -> Scene {
        let h = &self.hierarchy;
        let current = self.zoom.current();
        let wrap = &self.config.wrap;
        let mut arcs = Vec::with_capacity(h.len());
        let mut labels = Vec::with_capacity(h.len());
        for &id in h.descendants() {
            let n = h.node(id);
            let rect = current[id];
            arcs.push(ArcShape::new(id, &n.name, n.depth, rect, self.fills[id]));
            if n.depth == 0 {
                continue;
            }
            let font_size = self.font_size(id, &rect);
            let wrapped = wrap_label(
                &n.name,
                wrap.width_for_depth(n.depth),
                wrap.max_lines,
                font_size,
                self.measure.as_ref(),
            );
            let shown = self.zoom.label_visible(h, id, self.config.min_arc_length);
            labels.push(LabelShape::new(id, wrapped, font_size, LabelPlacement::for_arc(&rect, n.depth), shown));
        }
        Scene {
            width: self.config.width,
            radius: self.config.radius(),
            arcs,
            labels,
            title: CenterTitle {
                text: self.config.title.clone(),
                opacity: self.zoom.title_opacity(),
                font_size: 16.0,
            },
            center_radius: self.center_radius(),
            line_height_em: wrap.line_height_em,
            theme: self.theme,
        }
    }

    // ---- output -------------------------------------------------------------

    /// Standalone SVG document of the current frame.
    pub fn render_svg(&self) -> String { crate::svg::render_svg(&self.scene()) }

    pub fn render_to_svg(&self, output_svg_path: impl AsRef<Path>) -> Result<()> {
        write_output(output_svg_path.as_ref(), self.render_svg().as_bytes())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        crate::raster::render_png_bytes(&self.scene(), opts)
    }

    /// Render the current frame to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_output(output_png_path.as_ref(), &bytes)
    }

    /// RGBA8 pixels of the current frame: `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        crate::raster::render_rgba8(&self.scene(), opts)
    }
}

/// Build the arena and reject trees whose totals overflow `f64`.
fn build_checked(data: &Node) -> Result<Hierarchy> {
    let h = Hierarchy::build(data);
    let total = h.node(h.root()).value;
    if !total.is_finite() {
        return Err(SunburstError::validation(format!("category totals overflow: root value is {total}")));
    }
    Ok(h)
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
