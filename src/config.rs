//! Configuration for the layout pipeline.
//!
//! Every constant the placement rules depend on lives here, so callers can
//! tune spacing or skip chapters without touching the algorithm.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{ProofMapError, Result};
use crate::layout::types::Point;

/// What the layout engine does with numbers nested five or more levels deep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DeepNodePolicy {
    /// Keep alternating vertical (odd depth) and horizontal (even depth) growth.
    #[default]
    Extrapolate,
    /// Fail the layout with `ProofMapError::UnsupportedDepth`.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance between neighbouring nodes inside a chapter.
    pub pad: i64,
    /// Horizontal gap between the right edge of one chapter and the next.
    pub gap: i64,
    pub start_x: i64,
    pub start_y: i64,
    /// Chapters skipped when composing every chapter in the store.
    pub excluded_chapters: BTreeSet<u64>,
    pub deep_nodes: DeepNodePolicy,
    /// Fixed coordinates for specific numbers, applied after rule-based placement.
    pub pins: BTreeMap<String, Point>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pad: 50,
            gap: 100,
            start_x: 0,
            start_y: 0,
            excluded_chapters: BTreeSet::new(),
            deep_nodes: DeepNodePolicy::Extrapolate,
            pins: BTreeMap::new(),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config document. Missing fields keep their defaults.
    pub fn from_json_str(src: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the spacing constants. `pad` must be positive so depth-1 rows
    /// strictly descend; `gap` may be zero but not negative.
    pub fn validate(&self) -> Result<()> {
        if self.pad <= 0 {
            return Err(ProofMapError::InvalidConfig {
                field: "pad",
                reason: "must be greater than zero",
            });
        }
        if self.gap < 0 {
            return Err(ProofMapError::InvalidConfig {
                field: "gap",
                reason: "must not be negative",
            });
        }
        Ok(())
    }

    pub fn origin(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    pub fn pin_for(&self, number: &str) -> Option<Point> {
        self.pins.get(number).copied()
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
