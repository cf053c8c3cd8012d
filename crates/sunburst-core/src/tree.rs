// File: crates/sunburst-core/src/tree.rs
// Summary: Plain hierarchical record loaded from JSON; the source of truth the layout is rebuilt from.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, SunburstError};

/// One node of the input tree. Leaves carry `value`, internal nodes carry `children`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn leaf(name: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), value: Some(value), children: Vec::new() }
    }

    pub fn branch(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self { name: name.into(), value: None, children }
    }

    pub fn is_leaf(&self) -> bool { self.children.is_empty() }

    /// Parse and validate a tree from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let node: Node = serde_json::from_str(json)?;
        node.validate()?;
        Ok(node)
    }

    /// Read, parse and validate a tree from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let node = Self::from_json_str(&text)?;
        tracing::info!(path = %path.display(), nodes = node.count(), "loaded hierarchy");
        Ok(node)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every leaf has a positive finite value, names are non-empty and unique among siblings.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SunburstError::validation("node with empty name"));
        }
        if self.is_leaf() {
            match self.value {
                Some(v) if v.is_finite() && v > 0.0 => {}
                Some(v) => {
                    return Err(SunburstError::validation(format!(
                        "leaf '{}' has non-positive value {v}",
                        self.name
                    )))
                }
                None => {
                    return Err(SunburstError::validation(format!("leaf '{}' has no value", self.name)))
                }
            }
            return Ok(());
        }
        let mut seen = HashSet::with_capacity(self.children.len());
        for child in &self.children {
            if !seen.insert(child.name.as_str()) {
                return Err(SunburstError::validation(format!(
                    "duplicate child '{}' under '{}'",
                    child.name, self.name
                )));
            }
            child.validate()?;
        }
        Ok(())
    }

    /// Total number of nodes, self included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }

    /// Depth-first pre-order search; the first node with `name` wins.
    pub fn find(&self, name: &str) -> Option<&Node> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Node> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(name))
    }

    /// Names of all leaves in pre-order.
    pub fn leaf_names(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |n| if n.is_leaf() { out.push(n.name.as_str()) });
        out
    }

    /// Names of all nodes that have children, in pre-order.
    pub fn internal_names(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |n| if !n.is_leaf() { out.push(n.name.as_str()) });
        out
    }

    fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        for c in &self.children {
            c.walk(f);
        }
    }

    /// Set the value of every leaf named `name`. Returns how many leaves changed.
    pub fn set_leaf_value(&mut self, name: &str, value: f64) -> usize {
        if self.is_leaf() {
            if self.name == name {
                self.value = Some(value);
                return 1;
            }
            return 0;
        }
        self.children.iter_mut().map(|c| c.set_leaf_value(name, value)).sum()
    }

    /// Append a child. A leaf that gains a child becomes internal and drops its own value.
    pub fn push_child(&mut self, child: Node) -> Result<()> {
        if self.children.iter().any(|c| c.name == child.name) {
            return Err(SunburstError::DuplicateCategory { name: child.name });
        }
        if self.is_leaf() {
            self.value = None;
        }
        self.children.push(child);
        Ok(())
    }
}
