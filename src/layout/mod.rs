//! Layout engine: chapter expansion, per-chapter placement, composition.

pub mod chapter;
pub mod compose;
pub mod plot;
pub mod types;

pub use chapter::expand;
pub use compose::{ComposedLayout, compose_all};
pub use plot::plot;
pub use types::{Bounds, ChapterLayout, PlacedNode, Point};

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::graph::GraphStore;

/// Expand and lay out a single chapter with the configured origin.
pub fn plot_chapter<'g>(
    store: &'g GraphStore,
    chapter: u64,
    config: &LayoutConfig,
) -> Result<ChapterLayout<'g>> {
    plot(expand(store, chapter), config.origin(), config)
}
