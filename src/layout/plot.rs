//! Depth-based coordinate assignment for one expanded chapter.
//!
//! Nodes are visited once in number order. The digit-string depth decides
//! which axis a node grows along:
//!
//!   depth 0   chapter root, placed at the cursor
//!   depth 1   next row: y steps below everything placed so far, x resets to
//!             the primary column
//!   depth 2   one step right; y re-aligns to the latest depth-1 node with the
//!             same leading digit
//!   depth 3+  odd depths step down, even depths step right; directly after a
//!             node one level up, the step is taken from that node instead of
//!             the cursor
//!
//! Placeholders take part in placement and bounds like real nodes. Pinned
//! numbers are drawn at their pin, but the rules above keep working from the
//! position the node would have had; pins only widen the bounds.

use crate::config::{DeepNodePolicy, LayoutConfig};
use crate::corpus::{ChapterEntry, Number};
use crate::error::{ProofMapError, Result};

use super::types::{ChapterLayout, PlacedNode, Point};

/// Deepest level the placement rules are defined for without extrapolation.
pub const MAX_RULE_DEPTH: usize = 4;

fn step(from: i64, by: i64, number: &Number) -> Result<i64> {
    from.checked_add(by)
        .ok_or_else(|| ProofMapError::CoordinateOverflow {
            number: number.to_string(),
        })
}

/// Running state threaded through the fold over a chapter's entries.
#[derive(Debug)]
struct PlotState<'g> {
    cursor: Point,
    max_x: i64,
    max_y: i64,
    /// Column depth-1 nodes return to.
    last_primary_x: i64,
    /// Lowest rule-based y so far; pins are not counted.
    reach_y: i64,
    /// Depth and rule-based position of the previous entry, ignoring pins.
    previous: Option<(usize, Point)>,
    /// Rule-based row of each depth-1 entry, keyed by its digit.
    primary_rows: Vec<(Option<char>, i64)>,
    placed: Vec<PlacedNode<'g>>,
}

impl<'g> PlotState<'g> {
    fn new(start: Point, capacity: usize) -> Self {
        Self {
            cursor: start,
            max_x: start.x,
            max_y: start.y,
            last_primary_x: start.x,
            reach_y: start.y,
            previous: None,
            primary_rows: Vec::new(),
            placed: Vec::with_capacity(capacity),
        }
    }

    fn place(mut self, entry: ChapterEntry<'g>, config: &LayoutConfig) -> Result<Self> {
        let pad = config.pad;
        let number = entry.number().clone();
        let depth = number.depth();
        let previous = self.previous;
        let mut root_node = false;

        let at = match depth {
            0 => self.cursor,
            1 => {
                self.cursor.y = step(self.cursor.y.max(self.reach_y), pad, &number)?;
                self.cursor.x = self.last_primary_x;
                self.primary_rows.push((number.leading_digit(), self.cursor.y));
                root_node = true;
                self.cursor
            }
            2 => {
                self.cursor.x = step(self.cursor.x, pad, &number)?;
                let lead = number.leading_digit();
                let y = self
                    .primary_rows
                    .iter()
                    .rev()
                    .find(|&&(digit, _)| digit == lead)
                    .map_or(self.cursor.y, |&(_, y)| y);
                Point::new(self.cursor.x, y)
            }
            d => {
                if d > MAX_RULE_DEPTH && config.deep_nodes == DeepNodePolicy::Reject {
                    return Err(ProofMapError::UnsupportedDepth {
                        number: number.to_string(),
                        depth: d,
                    });
                }
                let after_parent_level = previous
                    .filter(|&(prev_depth, _)| prev_depth == d - 1)
                    .map(|(_, pos)| pos);
                if d % 2 == 1 {
                    let from = after_parent_level.map_or(self.cursor.y, |p| p.y);
                    self.cursor.y = step(from, pad, &number)?;
                } else {
                    let from = after_parent_level.map_or(self.cursor.x, |p| p.x);
                    self.cursor.x = step(from, pad, &number)?;
                }
                self.cursor
            }
        };

        if number.decimal_digits() == Some("0") {
            self.last_primary_x = self.cursor.x;
        }

        self.previous = Some((depth, at));
        self.reach_y = self.reach_y.max(at.y);
        let at = config.pin_for(number.as_str()).unwrap_or(at);
        self.max_x = self.max_x.max(at.x);
        self.max_y = self.max_y.max(at.y);

        let mut placed = PlacedNode::new(entry, at);
        placed.root_node = root_node;
        self.placed.push(placed);
        Ok(self)
    }

    fn finish(self) -> ChapterLayout<'g> {
        ChapterLayout {
            nodes: self.placed,
            max_x: self.max_x,
            max_y: self.max_y,
        }
    }
}

/// Assign coordinates to an expanded chapter, starting at `start`.
///
/// Entries are (re)sorted by number order first. Returns every entry with
/// its position and the chapter's rightmost x.
pub fn plot<'g>(
    mut entries: Vec<ChapterEntry<'g>>,
    start: Point,
    config: &LayoutConfig,
) -> Result<ChapterLayout<'g>> {
    config.validate()?;
    entries.sort_by(|a, b| a.number().cmp(b.number()));
    let capacity = entries.len();
    let state = entries
        .into_iter()
        .try_fold(PlotState::new(start, capacity), |state, entry| {
            state.place(entry, config)
        })?;
    Ok(state.finish())
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_plot.rs"]
mod tests;
