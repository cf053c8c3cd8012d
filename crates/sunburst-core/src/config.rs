// File: crates/sunburst-core/src/config.rs
// Summary: Chart configuration with defaults; optionally loaded from a TOML file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SunburstError};
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Square chart size in pixels; the outer radius is half of it.
    pub width: u32,
    pub min_arc_length: f64,
    pub zoom_duration_ms: u64,
    pub title_fade_ms: u64,
    /// Text in the middle of the chart while the root is focused.
    pub title: String,
    pub theme: String,
    pub wrap: WrapConfig,
    pub tooltip: TooltipConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapConfig {
    pub inner_width: f64,
    pub outer_width: f64,
    pub max_lines: usize,
    pub line_height_em: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub metric_label: String,
    pub currency: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            min_arc_length: MIN_ARC_LENGTH,
            zoom_duration_ms: ZOOM_DURATION_MS,
            title_fade_ms: TITLE_FADE_MS,
            title: "Sales Data".to_string(),
            theme: "light".to_string(),
            wrap: WrapConfig::default(),
            tooltip: TooltipConfig::default(),
        }
    }
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            inner_width: WRAP_WIDTH_INNER,
            outer_width: WRAP_WIDTH_OUTER,
            max_lines: WRAP_MAX_LINES,
            line_height_em: LINE_HEIGHT_EM,
        }
    }
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self { metric_label: "Sales".to_string(), currency: "\u{20B9}".to_string() }
    }
}

impl WrapConfig {
    /// Wrap width for a label at `depth`.
    pub fn width_for_depth(&self, depth: usize) -> f64 {
        if depth == 1 { self.inner_width } else { self.outer_width }
    }
}

impl ChartConfig {
    pub fn radius(&self) -> f64 { self.width as f64 / 2.0 }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: ChartConfig =
            toml::from_str(text).map_err(|e| SunburstError::Config { message: e.to_string() })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let cfg = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), width = cfg.width, "loaded chart config");
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let fail = |message: &str| Err(SunburstError::Config { message: message.to_string() });
        if self.width == 0 {
            return fail("width must be positive");
        }
        if self.wrap.max_lines == 0 {
            return fail("wrap.max_lines must be at least 1");
        }
        if !(self.wrap.inner_width > 0.0 && self.wrap.outer_width > 0.0) {
            return fail("wrap widths must be positive");
        }
        if !self.min_arc_length.is_finite() || self.min_arc_length < 0.0 {
            return fail("min_arc_length must be a non-negative number");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = ChartConfig::from_toml_str("width = 800\n[tooltip]\ncurrency = \"$\"\n").unwrap();
        assert_eq!(cfg.width, 800);
        assert_eq!(cfg.radius(), 400.0);
        assert_eq!(cfg.tooltip.currency, "$");
        assert_eq!(cfg.tooltip.metric_label, "Sales");
        assert_eq!(cfg.wrap.max_lines, 2);
    }

    #[test]
    fn rejects_zero_width() {
        assert!(matches!(ChartConfig::from_toml_str("width = 0"), Err(SunburstError::Config { .. })));
        assert!(ChartConfig::from_toml_str("width = [").is_err());
    }

    #[test]
    fn wrap_width_by_depth() {
        let w = WrapConfig::default();
        assert_eq!(w.width_for_depth(1), 80.0);
        assert_eq!(w.width_for_depth(3), 60.0);
    }
}
