// File: crates/sunburst-core/src/geometry.rs
// Summary: Annular sector math: arc rectangles, SVG path data, label placement, space heuristics.

use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

const EPSILON: f64 = 1e-9;

/// An annular sector in polar layout space.
/// `x0..x1` are angles in radians clockwise from 12 o'clock, `y0..y1` radii in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ArcRect {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl ArcRect {
    pub const fn new(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self { x0, x1, y0, y1 }
    }

    pub fn angle(&self) -> f64 { self.x1 - self.x0 }

    pub fn mid_radius(&self) -> f64 { (self.y0 + self.y1) / 2.0 }

    /// Length of the arc along its middle radius.
    pub fn mid_arc_length(&self) -> f64 { self.angle() * self.mid_radius() }

    pub fn is_empty(&self) -> bool { self.x1 - self.x0 <= EPSILON || self.y1 - self.y0 <= EPSILON }

    pub fn lerp(a: &ArcRect, b: &ArcRect, t: f64) -> ArcRect {
        let m = |p: f64, q: f64| p + (q - p) * t;
        ArcRect { x0: m(a.x0, b.x0), x1: m(a.x1, b.x1), y0: m(a.y0, b.y0), y1: m(a.y1, b.y1) }
    }

    /// Whether a polar point falls inside this sector.
    pub fn contains(&self, angle: f64, r: f64) -> bool {
        !self.is_empty() && angle >= self.x0 && angle < self.x1 && r >= self.y0 && r < self.y1
    }
}

/// Cartesian point for a layout angle and radius (y grows downward).
#[inline]
pub fn polar(angle: f64, r: f64) -> (f64, f64) {
    (r * angle.sin(), -r * angle.cos())
}

/// Inverse of [`polar`]: angle in `[0, 2π)` and radius for a point relative to the center.
pub fn to_polar(x: f64, y: f64) -> (f64, f64) {
    let angle = x.atan2(-y).rem_euclid(TAU);
    (angle, x.hypot(y))
}

/// The mid arc is long enough to host a label.
pub fn arc_has_enough_space(rect: &ArcRect, min_arc_length: f64) -> bool {
    rect.mid_arc_length() > min_arc_length
}

/// SVG path data for the sector. Empty sectors yield an empty string.
pub fn arc_path(rect: &ArcRect) -> String {
    let (r0, r1) = (rect.y0.max(0.0).min(rect.y1.max(0.0)), rect.y0.max(rect.y1).max(0.0));
    let da = (rect.x1 - rect.x0).abs();
    if r1 <= EPSILON || da <= EPSILON {
        return String::new();
    }
    let mut d = String::with_capacity(96);
    if da >= TAU - EPSILON {
        let _ = write!(d, "M0,{}A{r},{r},0,1,1,0,{}A{r},{r},0,1,1,0,{}Z", num(-r1), num(r1), num(-r1), r = num(r1));
        if r0 > EPSILON {
            let _ = write!(d, "M0,{}A{r},{r},0,1,0,0,{}A{r},{r},0,1,0,0,{}Z", num(-r0), num(r0), num(-r0), r = num(r0));
        }
        return d;
    }
    let large = if da > PI { 1 } else { 0 };
    let (a0, a1) = (rect.x0.min(rect.x1), rect.x0.max(rect.x1));
    let (ox0, oy0) = polar(a0, r1);
    let (ox1, oy1) = polar(a1, r1);
    let _ = write!(d, "M{},{}A{r},{r},0,{large},1,{},{}", num(ox0), num(oy0), num(ox1), num(oy1), r = num(r1));
    if r0 > EPSILON {
        let (ix1, iy1) = polar(a1, r0);
        let (ix0, iy0) = polar(a0, r0);
        let _ = write!(d, "L{},{}A{r},{r},0,{large},0,{},{}Z", num(ix1), num(iy1), num(ix0), num(iy0), r = num(r0));
    } else {
        d.push_str("L0,0Z");
    }
    d
}

/// Where a label sits: rotated onto the arc's mid angle, flipped on the left half so it reads upright.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    /// Mid angle in degrees, clockwise from 12 o'clock.
    pub angle_deg: f64,
    pub radius: f64,
    pub flipped: bool,
}

impl LabelPlacement {
    /// First-ring labels sit slightly outward of the middle of their band.
    pub fn for_arc(rect: &ArcRect, depth: usize) -> Self {
        let angle_deg = (rect.x0 + rect.x1) / 2.0 * 180.0 / PI;
        let radius = if depth == 1 { rect.y0 + (rect.y1 - rect.y0) * 0.55 } else { rect.mid_radius() };
        Self { angle_deg, radius, flipped: angle_deg >= 180.0 }
    }

    pub fn to_svg_transform(&self) -> String {
        format!(
            "rotate({}) translate({},0) rotate({})",
            num(self.angle_deg - 90.0),
            num(self.radius),
            if self.flipped { 180 } else { 0 }
        )
    }

    /// Anchor point relative to the chart center.
    pub fn anchor(&self) -> (f64, f64) {
        polar(self.angle_deg.to_radians(), self.radius)
    }

    /// Total text rotation in degrees for renderers that draw at `anchor`.
    pub fn text_rotation(&self) -> f64 {
        self.angle_deg - 90.0 + if self.flipped { 180.0 } else { 0.0 }
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Compact decimal for SVG attributes: up to three fractional digits, no trailing zeros.
pub(crate) fn num(v: f64) -> String {
    let v = if v.abs() < 5e-4 { 0.0 } else { v };
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_round_trip_quadrants() {
        let (x, y) = polar(PI / 2.0, 10.0);
        assert!((x - 10.0).abs() < 1e-9 && y.abs() < 1e-9);
        let (a, r) = to_polar(0.0, 10.0);
        assert!((a - PI).abs() < 1e-9 && (r - 10.0).abs() < 1e-9);
        let (a, _) = to_polar(-10.0, 0.0);
        assert!((a - 1.5 * PI).abs() < 1e-9);
    }

    #[test]
    fn sector_path_shapes() {
        assert_eq!(arc_path(&ArcRect::new(1.0, 1.0, 10.0, 20.0)), "");
        let ring = arc_path(&ArcRect::new(0.0, TAU, 10.0, 20.0));
        assert!(ring.starts_with("M0,-20A20,20,0,1,1,0,20"));
        assert!(ring.contains("M0,-10"));
        let quarter = arc_path(&ArcRect::new(0.0, PI / 2.0, 10.0, 20.0));
        assert_eq!(quarter, "M0,-20A20,20,0,0,1,20,0L10,0A10,10,0,0,0,0,-10Z");
        let wedge = arc_path(&ArcRect::new(0.0, PI * 1.5, 0.0, 20.0));
        assert!(wedge.contains(",0,1,1,") && wedge.ends_with("L0,0Z"));
    }

    #[test]
    fn label_placement_flips_left_half() {
        let right = LabelPlacement::for_arc(&ArcRect::new(0.0, PI / 2.0, 100.0, 200.0), 1);
        assert!((right.angle_deg - 45.0).abs() < 1e-9);
        assert!((right.radius - 155.0).abs() < 1e-9);
        assert_eq!(right.to_svg_transform(), "rotate(-45) translate(155,0) rotate(0)");

        let left = LabelPlacement::for_arc(&ArcRect::new(PI, 1.5 * PI, 100.0, 200.0), 2);
        assert!(left.flipped);
        assert!((left.radius - 150.0).abs() < 1e-9);
        assert!((left.text_rotation() - 315.0).abs() < 1e-9);
    }

    #[test]
    fn enough_space_uses_mid_arc_length() {
        assert!(arc_has_enough_space(&ArcRect::new(0.0, 0.5, 50.0, 100.0), 30.0));
        assert!(!arc_has_enough_space(&ArcRect::new(0.0, 0.3, 50.0, 100.0), 30.0));
    }

    #[test]
    fn number_formatting() {
        assert_eq!(num(1.0), "1");
        assert_eq!(num(-0.00001), "0");
        assert_eq!(num(2.50049), "2.5");
    }
}
