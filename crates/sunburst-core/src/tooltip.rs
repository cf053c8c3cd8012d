// File: crates/sunburst-core/src/tooltip.rs
// Summary: Hover tooltip content (name, value, share of parent, rank) and placement.

use crate::config::TooltipConfig;
use crate::hierarchy::{Hierarchy, NodeId};
use crate::types::TOOLTIP_OFFSET;

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub id: NodeId,
    pub name: String,
    pub value: f64,
    pub percent: f64,
    pub rank: usize,
}

impl Tooltip {
    pub fn for_node(h: &Hierarchy, id: NodeId) -> Self {
        let n = h.node(id);
        Self {
            id,
            name: n.name.clone(),
            value: n.value,
            percent: h.percent_of_parent(id),
            rank: h.rank(id),
        }
    }

    /// Display rows after the name, e.g. `("Sales", "₹1,200")`.
    pub fn rows(&self, cfg: &TooltipConfig) -> Vec<(String, String)> {
        vec![
            (cfg.metric_label.clone(), format!("{}{}", cfg.currency, group_thousands(self.value))),
            ("Percentage".to_string(), format!("{:.0}%", self.percent)),
            ("Rank".to_string(), self.rank.to_string()),
        ]
    }

    /// Single-string rendering, one row per line.
    pub fn to_text(&self, cfg: &TooltipConfig) -> String {
        let mut out = self.name.clone();
        for (k, v) in self.rows(cfg) {
            out.push('\n');
            out.push_str(&k);
            out.push_str(": ");
            out.push_str(&v);
        }
        out
    }
}

/// Tooltip box position for a pointer at `(x, y)` page coordinates.
pub fn position(x: f64, y: f64) -> (f64, f64) {
    (x + TOOLTIP_OFFSET.0, y + TOOLTIP_OFFSET.1)
}

/// `1234567.5` -> `1,234,567.5`; at most three fractional digits.
pub fn group_thousands(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let rounded = (v * 1000.0).round() / 1000.0;
    let neg = rounded < 0.0;
    let abs = rounded.abs();
    let int = abs.trunc() as u64;
    let frac = format!("{:.3}", abs - abs.trunc());
    let frac = frac.trim_start_matches('0').trim_end_matches('0').trim_end_matches('.');

    let digits = int.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if neg {
        grouped.insert(0, '-');
    }
    grouped.push_str(frac);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(1234567.5), "1,234,567.5");
        assert_eq!(group_thousands(-4200.25), "-4,200.25");
    }

    #[test]
    fn tooltip_rows() {
        let h = Hierarchy::build(&Node::branch(
            "Sales",
            vec![Node::leaf("Phones", 1500.0), Node::leaf("Cases", 500.0)],
        ));
        let phones = h.find_by_name("Phones").unwrap();
        let tip = Tooltip::for_node(&h, phones);
        let cfg = TooltipConfig::default();
        assert_eq!(tip.to_text(&cfg), "Phones\nSales: \u{20B9}1,500\nPercentage: 75%\nRank: 1");
        assert_eq!(position(100.0, 100.0), (110.0, 80.0));
    }

    #[test]
    fn non_finite_values_are_not_grouped() {
        assert_eq!(group_thousands(f64::INFINITY), "inf");
        assert_eq!(group_thousands(f64::NAN), "NaN");
    }
}
