//! Chapter expansion: a chapter's real nodes plus placeholders for every
//! missing primary subdivision `{chapter}.0` through `{chapter}.9`.

use serde_json::Value;

use crate::corpus::types::INHERITED_KEYS;
use crate::corpus::{ChapterEntry, Number, Placeholder, ProofNode};
use crate::graph::GraphStore;

/// Number of primary subdivision slots per chapter.
pub const PRIMARY_SLOTS: u8 = 10;

/// The full ordered entry list for `chapter`.
///
/// Every digit 0-9 gets exactly one depth-1 entry, real or placeholder.
/// Placeholders copy chapter/volume/part/section from the real nodes so
/// labels still resolve. Entries are sorted by number order.
pub fn expand(store: &GraphStore, chapter: u64) -> Vec<ChapterEntry<'_>> {
    let mut real: Vec<&ProofNode> = store.chapter_nodes(chapter);
    real.sort_by(|a, b| a.number().cmp(b.number()));

    let present: Vec<char> = real
        .iter()
        .filter(|n| n.number().depth() == 1)
        .filter_map(|n| n.number().leading_digit())
        .collect();

    let inherited: Vec<(&str, Value)> = INHERITED_KEYS
        .iter()
        .filter_map(|&key| {
            real.iter()
                .find_map(|n| n.properties.extra.get(key))
                .map(|v| (key, v.clone()))
        })
        .collect();

    let placeholders = (0..PRIMARY_SLOTS)
        .filter(|&digit| !present.contains(&char::from(b'0' + digit)))
        .map(|digit| {
            let mut placeholder = Placeholder::new(Number::primary(chapter, digit));
            for (key, value) in &inherited {
                placeholder
                    .properties
                    .extra
                    .insert((*key).to_string(), value.clone());
            }
            placeholder
                .properties
                .extra
                .entry("chapter".to_string())
                .or_insert_with(|| Value::String(chapter.to_string()));
            ChapterEntry::Placeholder(placeholder)
        });

    let mut entries: Vec<ChapterEntry<'_>> = real
        .into_iter()
        .map(ChapterEntry::Node)
        .chain(placeholders)
        .collect();
    entries.sort_by(|a, b| a.number().cmp(b.number()));
    entries
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_chapter.rs"]
mod tests;
