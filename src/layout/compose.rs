//! Side-by-side composition of chapters into one coordinate space.

use std::collections::{BTreeMap, BTreeSet};

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::LayoutConfig;
use crate::error::{ProofMapError, Result};
use crate::graph::GraphStore;

use super::chapter::expand;
use super::plot::plot;
use super::types::{Bounds, ChapterLayout, PlacedNode, Point};

/// Every laid-out chapter keyed by chapter number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComposedLayout<'g> {
    pub chapters: BTreeMap<u64, ChapterLayout<'g>>,
    /// Rightmost x of the last chapter.
    pub max_x: i64,
}

impl<'g> ComposedLayout<'g> {
    pub fn chapter(&self, chapter: u64) -> Option<&ChapterLayout<'g>> {
        self.chapters.get(&chapter)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &PlacedNode<'g>> {
        self.chapters.values().flat_map(|c| c.nodes.iter())
    }

    /// Extent of everything drawable, for sizing the canvas.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(self.nodes())
    }
}

impl Serialize for ComposedLayout<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.chapters.len()))?;
        for (chapter, layout) in &self.chapters {
            map.serialize_entry(&chapter.to_string(), &layout.nodes)?;
        }
        map.end()
    }
}

/// Lay out chapters left to right.
///
/// With `chapters = None` every chapter in the store is used except
/// `config.excluded_chapters`; otherwise exactly the given chapters. Either
/// way chapters go in ascending order, each starting `config.gap` to the
/// right of the previous chapter's rightmost node.
pub fn compose_all<'g>(
    store: &'g GraphStore,
    chapters: Option<&[u64]>,
    config: &LayoutConfig,
) -> Result<ComposedLayout<'g>> {
    config.validate()?;
    let selected: BTreeSet<u64> = match chapters {
        Some(list) => list.iter().copied().collect(),
        None => store
            .chapter_numbers()
            .into_iter()
            .filter(|c| !config.excluded_chapters.contains(c))
            .collect(),
    };

    let mut composed = ComposedLayout::default();
    let mut x = config.start_x;
    for chapter in selected {
        let layout = plot(expand(store, chapter), Point::new(x, config.start_y), config)?;
        debug!(chapter, start_x = x, max_x = layout.max_x, "chapter laid out");
        x = layout
            .max_x
            .checked_add(config.gap)
            .ok_or_else(|| ProofMapError::CoordinateOverflow {
                number: chapter.to_string(),
            })?;
        composed.max_x = layout.max_x;
        composed.chapters.insert(chapter, layout);
    }

    info!(
        chapters = composed.chapters.len(),
        max_x = composed.max_x,
        "layout composed"
    );
    Ok(composed)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_compose.rs"]
mod tests;
