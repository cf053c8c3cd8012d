// File: crates/sunburst-core/src/zoom.rs
// Summary: Zoom state: focused node, current/target arcs per node and the eased transitions between them.

use std::f64::consts::TAU;

use crate::geometry::{arc_has_enough_space, clamp, ArcRect};
use crate::hierarchy::{Hierarchy, NodeId};

/// Cubic ease-in-out on `t` in `[0, 1]`.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = clamp(t, 0.0, 1.0) * 2.0;
    if t <= 1.0 { t * t * t / 2.0 } else { ((t - 2.0) * (t - 2.0) * (t - 2.0) + 2.0) / 2.0 }
}

/// Elapsed-time clock for one transition.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub elapsed_ms: f64,
    pub duration_ms: f64,
}

impl Tween {
    pub fn new(duration_ms: u64) -> Self { Self { elapsed_ms: 0.0, duration_ms: duration_ms as f64 } }

    pub fn advance(&mut self, dt_ms: f64) { self.elapsed_ms += dt_ms.max(0.0); }

    pub fn is_done(&self) -> bool { self.elapsed_ms >= self.duration_ms }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration_ms <= 0.0 { 1.0 } else { ease_cubic_in_out(self.elapsed_ms / self.duration_ms) }
    }
}

/// Opacity fade of the center title.
#[derive(Clone, Copy, Debug)]
struct Fade {
    from: f64,
    to: f64,
    tween: Tween,
}

impl Fade {
    fn settled(value: f64) -> Self { Self { from: value, to: value, tween: Tween::new(0) } }

    fn value(&self) -> f64 { self.from + (self.to - self.from) * self.tween.progress() }
}

/// Target of every node when zooming into `focus`: the focus spans the full circle and sits at the center.
pub fn zoom_targets(layout: &[ArcRect], focus: NodeId) -> Vec<ArcRect> {
    let d = layout[focus];
    let span = (d.x1 - d.x0).max(f64::EPSILON);
    layout
        .iter()
        .map(|n| ArcRect {
            x0: clamp((n.x0 - d.x0) / span, 0.0, 1.0) * TAU,
            x1: clamp((n.x1 - d.x0) / span, 0.0, 1.0) * TAU,
            y0: (n.y0 - d.y0).max(0.0),
            y1: (n.y1 - d.y0).max(0.0),
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct ZoomState {
    focus: NodeId,
    from: Vec<ArcRect>,
    current: Vec<ArcRect>,
    target: Vec<ArcRect>,
    arcs: Option<Tween>,
    title: Fade,
    labels_settled: bool,
}

impl ZoomState {
    /// Unzoomed state showing `layout` as-is, focused on the root.
    pub fn new(h: &Hierarchy, layout: &[ArcRect]) -> Self {
        Self {
            focus: h.root(),
            from: layout.to_vec(),
            current: layout.to_vec(),
            target: layout.to_vec(),
            arcs: None,
            title: Fade::settled(1.0),
            labels_settled: true,
        }
    }

    pub fn focus(&self) -> NodeId { self.focus }

    /// Arcs as currently drawn, indexed by `NodeId`.
    pub fn current(&self) -> &[ArcRect] { &self.current }

    pub fn target(&self) -> &[ArcRect] { &self.target }

    pub fn title_opacity(&self) -> f64 { self.title.value() }

    pub fn is_animating(&self) -> bool { self.arcs.is_some() || !self.title.tween.is_done() }

    /// Labels are hidden while arcs move and re-evaluated when they settle.
    pub fn labels_settled(&self) -> bool { self.labels_settled }

    /// Start a transition that brings `d` to the full circle.
    pub fn zoom_to(&mut self, h: &Hierarchy, layout: &[ArcRect], d: NodeId, duration_ms: u64, title_fade_ms: u64) {
        self.focus = d;
        self.target = zoom_targets(layout, d);
        self.from = self.current.clone();
        self.arcs = Some(Tween::new(duration_ms));
        self.labels_settled = false;
        let title_to = if d == h.root() { 1.0 } else { 0.0 };
        self.title = Fade { from: self.title.value(), to: title_to, tween: Tween::new(title_fade_ms) };
        tracing::debug!(focus = %h.node(d).name, depth = h.node(d).depth, "zoom");
        if duration_ms == 0 {
            self.tick(0.0);
        }
    }

    /// Zoom to the focus's parent. Returns false at the root.
    pub fn zoom_out(&mut self, h: &Hierarchy, layout: &[ArcRect], duration_ms: u64, title_fade_ms: u64) -> bool {
        match h.node(self.focus).parent {
            Some(p) => {
                self.zoom_to(h, layout, p, duration_ms, title_fade_ms);
                true
            }
            None => false,
        }
    }

    /// Advance both transitions by `dt_ms`. Returns whether anything is still moving.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        self.title.tween.advance(dt_ms);
        if let Some(tween) = self.arcs.as_mut() {
            tween.advance(dt_ms);
            let t = tween.progress();
            if tween.is_done() {
                self.current = self.target.clone();
                self.arcs = None;
                self.labels_settled = true;
                tracing::debug!("zoom transition settled");
            } else {
                for ((cur, a), b) in self.current.iter_mut().zip(&self.from).zip(&self.target) {
                    *cur = ArcRect::lerp(a, b, t);
                }
            }
        }
        self.is_animating()
    }

    /// Jump to the end of any running transition.
    pub fn finish(&mut self) {
        let remaining = self.arcs.map_or(0.0, |t| t.duration_ms - t.elapsed_ms);
        let title = self.title.tween.duration_ms - self.title.tween.elapsed_ms;
        self.tick(remaining.max(title).max(0.0));
    }

    /// A label is shown once arcs settle, for nodes inside the focus with room for text.
    pub fn label_visible(&self, h: &Hierarchy, id: NodeId, min_arc_length: f64) -> bool {
        self.labels_settled
            && h.node(id).depth >= 1
            && h.is_descendant(self.focus, id)
            && arc_has_enough_space(&self.current[id], min_arc_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition;
    use crate::tree::Node;

    fn setup() -> (Hierarchy, Vec<ArcRect>) {
        let h = Hierarchy::build(&Node::branch(
            "R",
            vec![
                Node::branch("A", vec![Node::leaf("a1", 3.0), Node::leaf("a2", 1.0)]),
                Node::leaf("B", 2.0),
            ],
        ));
        let layout = partition(&h, 300.0);
        (h, layout)
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert!((ease_cubic_in_out(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zoom_to_root_reproduces_layout() {
        let (h, layout) = setup();
        let t = zoom_targets(&layout, h.root());
        for (a, b) in t.iter().zip(&layout) {
            assert!((a.x0 - b.x0).abs() < 1e-9 && (a.x1 - b.x1).abs() < 1e-9);
            assert_eq!((a.y0, a.y1), (b.y0, b.y1));
        }
    }

    #[test]
    fn zoom_to_node_fills_circle() {
        let (h, layout) = setup();
        let a = h.find_by_name("A").unwrap();
        let b = h.find_by_name("B").unwrap();
        let t = zoom_targets(&layout, a);
        assert!((t[a].x0).abs() < 1e-9 && (t[a].x1 - TAU).abs() < 1e-9);
        assert_eq!(t[a].y0, 0.0);
        assert_eq!(t[b].x1 - t[b].x0, 0.0);
        let a1 = h.find_by_name("a1").unwrap();
        assert!((t[a1].x1 - t[a1].x0 - TAU * 0.75).abs() < 1e-9);
        assert_eq!(t[a1].y0, 100.0);
    }

    #[test]
    fn transition_runs_and_settles() {
        let (h, layout) = setup();
        let mut z = ZoomState::new(&h, &layout);
        let a = h.find_by_name("A").unwrap();
        z.zoom_to(&h, &layout, a, 750, 300);
        assert!(z.is_animating());
        assert!(!z.labels_settled());
        assert!(z.tick(375.0));
        let mid = z.current()[a];
        assert!(mid.x1 > layout[a].x1 && mid.x1 < TAU);
        assert!(z.title_opacity() < 1e-9);
        assert!(!z.tick(400.0));
        assert_eq!(z.current(), z.target());
        assert!(z.labels_settled());
    }

    #[test]
    fn labels_outside_focus_hidden() {
        let (h, layout) = setup();
        let mut z = ZoomState::new(&h, &layout);
        let a = h.find_by_name("A").unwrap();
        let b = h.find_by_name("B").unwrap();
        let a1 = h.find_by_name("a1").unwrap();
        assert!(z.label_visible(&h, b, 30.0));
        assert!(!z.label_visible(&h, h.root(), 30.0));
        z.zoom_to(&h, &layout, a, 750, 300);
        z.finish();
        assert!(!z.label_visible(&h, b, 30.0));
        assert!(z.label_visible(&h, a1, 30.0));
    }

    #[test]
    fn zoom_out_walks_to_parent() {
        let (h, layout) = setup();
        let mut z = ZoomState::new(&h, &layout);
        assert!(!z.zoom_out(&h, &layout, 0, 0));
        let a = h.find_by_name("A").unwrap();
        z.zoom_to(&h, &layout, a, 0, 0);
        assert_eq!(z.focus(), a);
        assert!(z.zoom_out(&h, &layout, 0, 0));
        assert_eq!(z.focus(), h.root());
        assert!(!z.is_animating());
        assert_eq!(z.title_opacity(), 1.0);
    }
}
