// File: crates/sunburst-core/src/theme.rs
// Summary: Colors: RGB helpers with brighter/darker, the categorical palette scale, light/dark themes.

use skia_safe as skia;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Channel multiplier step for brighter/darker.
const DARKER: f64 = 0.7;

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    fn scale(self, k: f64) -> Self {
        let c = |v: u8| (v as f64 * k).round().clamp(0.0, 255.0) as u8;
        Self::new(c(self.r), c(self.g), c(self.b))
    }

    /// Each channel multiplied by (1/0.7)^k.
    pub fn brighter(self, k: f64) -> Self { self.scale((1.0 / DARKER).powf(k)) }

    /// Each channel multiplied by 0.7^k.
    pub fn darker(self, k: f64) -> Self { self.scale(DARKER.powf(k)) }

    pub fn to_hex(self) -> String { format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b) }

    pub fn to_skia(self) -> skia::Color { skia::Color::from_argb(255, self.r, self.g, self.b) }
}

/// Tableau 10 categorical colors.
pub const TABLEAU10: [Rgb; 10] = [
    Rgb::from_hex(0x4e79a7),
    Rgb::from_hex(0xf28e2c),
    Rgb::from_hex(0xe15759),
    Rgb::from_hex(0x76b7b2),
    Rgb::from_hex(0x59a14f),
    Rgb::from_hex(0xedc949),
    Rgb::from_hex(0xaf7aa1),
    Rgb::from_hex(0xff9da7),
    Rgb::from_hex(0x9c755f),
    Rgb::from_hex(0xbab0ab),
];

/// Ordinal scale: each new key takes the next palette color, cycling.
#[derive(Clone, Debug)]
pub struct OrdinalScale {
    palette: Vec<Rgb>,
    assigned: HashMap<String, usize>,
}

impl OrdinalScale {
    pub fn new(palette: &[Rgb]) -> Self {
        Self { palette: palette.to_vec(), assigned: HashMap::new() }
    }

    pub fn color(&mut self, key: &str) -> Rgb {
        if self.palette.is_empty() {
            return Rgb::new(0, 0, 0);
        }
        let next = self.assigned.len();
        let slot = *self.assigned.entry(key.to_string()).or_insert(next);
        self.palette[slot % self.palette.len()]
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    pub stroke: Rgb,
    pub label: Rgb,
    pub center_text: Rgb,
    pub tooltip_background: Rgb,
    pub tooltip_text: Rgb,
    pub palette: &'static [Rgb],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgb::from_hex(0xffffff),
            stroke: Rgb::from_hex(0xffffff),
            label: Rgb::from_hex(0x000000),
            center_text: Rgb::from_hex(0x444444),
            tooltip_background: Rgb::from_hex(0xffffff),
            tooltip_text: Rgb::from_hex(0x222222),
            palette: &TABLEAU10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgb::new(18, 18, 20),
            stroke: Rgb::new(18, 18, 20),
            label: Rgb::new(235, 235, 245),
            center_text: Rgb::new(200, 200, 210),
            tooltip_background: Rgb::new(40, 40, 45),
            tooltip_text: Rgb::new(235, 235, 245),
            palette: &TABLEAU10,
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brighter_and_darker() {
        let c = Rgb::new(100, 50, 200);
        assert_eq!(c.darker(1.0), Rgb::new(70, 35, 140));
        assert_eq!(c.brighter(1.0), Rgb::new(143, 71, 255));
        assert_eq!(c.darker(0.0), c);
        assert_eq!(Rgb::from_hex(0x4e79a7).to_hex(), "#4e79a7");
    }

    #[test]
    fn ordinal_scale_assigns_in_first_use_order() {
        let mut s = OrdinalScale::new(&TABLEAU10[..2]);
        assert_eq!(s.color("b"), TABLEAU10[0]);
        assert_eq!(s.color("a"), TABLEAU10[1]);
        assert_eq!(s.color("b"), TABLEAU10[0]);
        assert_eq!(s.color("c"), TABLEAU10[0]);
    }

    #[test]
    fn theme_lookup_falls_back() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("nope").name, "light");
    }
}
