//! Overlap queries against the block list
//!
//! Movement in this game is all-or-nothing: a candidate position either
//! clears every block or the move is cancelled outright. These helpers keep
//! the scan logic in one place.

use super::rect::Rect;
use super::state::Block;

/// True if `rect` overlaps any block
pub fn hits_any(rect: &Rect, blocks: &[Block]) -> bool {
    blocks.iter().any(|b| rect.overlaps(&b.rect))
}

/// Index of the first block (in list order) overlapping `rect` and
/// satisfying `pred`
pub fn find_overlap(
    rect: &Rect,
    blocks: &[Block],
    pred: impl Fn(&Block) -> bool,
) -> Option<usize> {
    blocks
        .iter()
        .position(|b| pred(b) && rect.overlaps(&b.rect))
}

/// True if moving block `idx` to `dest` would overlap any other block
pub fn destination_occupied(dest: &Rect, blocks: &[Block], idx: usize) -> bool {
    blocks
        .iter()
        .enumerate()
        .any(|(j, b)| j != idx && dest.overlaps(&b.rect))
}
