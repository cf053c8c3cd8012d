// File: crates/sunburst-core/src/partition.rs
// Summary: Radial partition layout: angular span proportional to value, one ring per depth.

use std::f64::consts::TAU;

use crate::geometry::ArcRect;
use crate::hierarchy::Hierarchy;

/// Lay out every node of `h` into `[0, 2π] x [0, radius]`. Indexed by `NodeId`.
pub fn partition(h: &Hierarchy, radius: f64) -> Vec<ArcRect> {
    let mut out = vec![ArcRect::default(); h.len()];
    if h.is_empty() {
        return out;
    }
    let root = h.node(h.root());
    let dy = radius / (root.height + 1) as f64;
    for &id in h.descendants() {
        let node = h.node(id);
        let (x0, x1) = match node.parent {
            None => (0.0, TAU),
            // The parent already wrote its own span and the children's x0 cursor below.
            Some(_) => (out[id].x0, out[id].x1),
        };
        out[id] = ArcRect {
            x0,
            x1,
            y0: node.depth as f64 * dy,
            y1: (node.depth + 1) as f64 * dy,
        };
        dice(h, id, x0, x1, &mut out);
    }
    out
}

/// Split `[x0, x1]` among the children of `id` in sorted order.
fn dice(h: &Hierarchy, id: usize, x0: f64, x1: f64, out: &mut [ArcRect]) {
    let node = h.node(id);
    let k = if node.value > 0.0 { (x1 - x0) / node.value } else { 0.0 };
    let mut cursor = x0;
    for &c in &node.children {
        let w = h.node(c).value * k;
        out[c].x0 = cursor;
        out[c].x1 = cursor + w;
        cursor += w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;

    #[test]
    fn children_tile_parent_span() {
        let h = Hierarchy::build(&Node::branch(
            "R",
            vec![
                Node::branch("A", vec![Node::leaf("a1", 1.0), Node::leaf("a2", 3.0)]),
                Node::leaf("B", 4.0),
            ],
        ));
        let rects = partition(&h, 300.0);
        let root = rects[h.root()];
        assert_eq!((root.x0, root.x1), (0.0, TAU));
        assert_eq!((root.y0, root.y1), (0.0, 100.0));

        let a = rects[h.find_by_name("A").unwrap()];
        let b = rects[h.find_by_name("B").unwrap()];
        assert!((a.x1 - a.x0 - TAU / 2.0).abs() < 1e-12);
        assert!((b.x0 - a.x1).abs() < 1e-12 || (a.x0 - b.x1).abs() < 1e-12);
        assert_eq!((a.y0, a.y1), (100.0, 200.0));

        let a2 = rects[h.find_by_name("a2").unwrap()];
        assert!((a2.x1 - a2.x0 - TAU * 3.0 / 8.0).abs() < 1e-12);
        assert_eq!((a2.y0, a2.y1), (200.0, 300.0));
    }

    #[test]
    fn zero_value_parent_collapses_children() {
        let h = Hierarchy::build(&Node::branch("R", vec![Node::leaf("z", 0.0)]));
        let rects = partition(&h, 100.0);
        let z = rects[h.find_by_name("z").unwrap()];
        assert_eq!(z.x0, z.x1);
    }
}
