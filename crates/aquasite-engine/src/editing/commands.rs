use crate::blocks::{BlockData, BlockId, BlockKind};
use crate::editing::EditError;

/// Edits an author can make to a page
#[derive(Debug, Clone, PartialEq)]
pub enum EditCmd {
    /// Append a block of `kind` with its empty payload.
    AddBlock {
        kind: BlockKind,
    },
    /// Replace a block's payload. The payload must be of the block's own type.
    UpdateBlock {
        id: BlockId,
        data: BlockData,
    },
    RemoveBlock {
        id: BlockId,
    },
    /// Drag-and-drop result: move the block at `from` so it ends up at `to`.
    Reorder {
        from: usize,
        to: usize,
    },
    SetTitle {
        title: String,
    },
    SetSubtitle {
        subtitle: String,
    },
}

/// Array move: take the item at `from` out and insert it at `to`. Every other
/// item keeps its relative order.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<(), EditError> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(EditError::IndexOutOfRange { index, len });
        }
    }
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    Ok(())
}
