// File: crates/sunburst-core/src/lib.rs
// Summary: Core library entry point; exports the public API for building, navigating and rendering sunburst charts.

pub mod error;
pub mod tree;
pub mod hierarchy;
pub mod partition;
pub mod geometry;
pub mod types;
pub mod config;
pub mod theme;
pub mod text;
pub mod zoom;
pub mod tooltip;
pub mod controls;
pub mod scene;
pub mod chart;
pub mod svg;
pub mod raster;

pub use chart::{HitTarget, RenderOptions, Sunburst};
pub use config::ChartConfig;
pub use error::{Result, SunburstError};
pub use geometry::{ArcRect, LabelPlacement};
pub use hierarchy::{Hierarchy, NodeId};
pub use scene::Scene;
pub use text::{ApproxMeasure, TextMeasure, TextShaper};
pub use theme::{Rgb, Theme};
pub use tooltip::Tooltip;
pub use tree::Node;
pub use zoom::ZoomState;
