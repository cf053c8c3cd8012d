// File: crates/sunburst-core/src/controls.rs
// Summary: Form helpers for the edit controls: dropdown option lists and input parsing.

use std::cmp::Ordering;

use crate::error::{Result, SunburstError};
use crate::types::SAFE_MIN;

/// Case-insensitive ordering with a case-sensitive tie break, close to a locale compare.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Sorted, de-duplicated option list.
pub fn sorted_options<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = names.into_iter().map(str::to_string).collect();
    out.sort_by(|a, b| locale_cmp(a, b));
    out.dedup();
    out
}

/// Parse a numeric form input. Surrounding whitespace is ignored.
pub fn parse_value(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(SunburstError::InvalidValue { input: raw.to_string() }),
    }
}

/// Raise edited values to the floor that keeps a category visible.
pub fn clamp_value(v: f64) -> f64 { v.max(SAFE_MIN) }

/// Validated input of the "add category" form.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCategory {
    pub parent: String,
    pub name: String,
    pub value: f64,
}

impl NewCategory {
    /// Trim the name, parse and clamp the value.
    pub fn parse(parent: &str, raw_name: &str, raw_value: &str) -> Result<Self> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(SunburstError::MissingName);
        }
        let value = clamp_value(parse_value(raw_value)?);
        Ok(Self { parent: parent.to_string(), name: name.to_string(), value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_sort_case_insensitively() {
        let out = sorted_options(["beta", "Alpha", "alpha", "Gamma", "beta"]);
        assert_eq!(out, ["Alpha", "alpha", "beta", "Gamma"]);
    }

    #[test]
    fn value_parsing() {
        assert_eq!(parse_value(" 42.5 ").unwrap(), 42.5);
        assert!(matches!(parse_value("abc"), Err(SunburstError::InvalidValue { .. })));
        assert!(parse_value("").is_err());
        assert!(parse_value("NaN").is_err());
        assert_eq!(clamp_value(-3.0), 1.0);
        assert_eq!(clamp_value(0.5), 1.0);
        assert_eq!(clamp_value(7.0), 7.0);
    }

    #[test]
    fn new_category_validation() {
        assert!(matches!(NewCategory::parse("Tech", "  ", "3"), Err(SunburstError::MissingName)));
        assert!(matches!(NewCategory::parse("Tech", "Drones", "x"), Err(SunburstError::InvalidValue { .. })));
        let c = NewCategory::parse("Tech", " Drones ", "0").unwrap();
        assert_eq!(c, NewCategory { parent: "Tech".into(), name: "Drones".into(), value: 1.0 });
    }
}
