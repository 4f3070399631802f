use alloc::{string::String, string::ToString, vec::Vec};

use crate::*;

/// Presentation of a single slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub index: usize,
    /// Digit text, empty for an empty slot.
    pub text: String,
    pub highlighted: bool,
}

pub fn render_cells(slots: &[Slot], highlight: Option<MatchWindow>) -> Vec<CellView> {
    slots
        .iter()
        .enumerate()
        .map(|(index, slot)| CellView {
            index,
            text: slot.to_string(),
            highlighted: highlight.is_some_and(|window| window.contains(index)),
        })
        .collect()
}
