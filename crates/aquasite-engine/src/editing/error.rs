use thiserror::Error;

use crate::blocks::BlockId;
use crate::editing::AssetSlot;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("block {id} is a {expected} block and cannot take a {found} payload")]
    KindChange {
        id: BlockId,
        expected: String,
        found: String,
    },

    #[error("position {index} is out of range for {len} blocks")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("block {0} not found")]
    BlockNotFound(BlockId),

    #[error("{slot:?} cannot hold an upload for a {kind} block")]
    SlotMismatch { slot: AssetSlot, kind: String },
}
