use crate::blocks::BlockId;

/// Result of applying a command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch {
    /// Blocks whose payload or position changed.
    pub changed: Vec<BlockId>,
    /// Page title or subtitle changed.
    pub header_changed: bool,
    /// A block the UI should scroll into view (set for newly added blocks).
    pub scroll_to: Option<BlockId>,
    pub version: u64,
}

impl Patch {
    /// Nothing changed, e.g. an update for a block that no longer exists.
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty() && !self.header_changed
    }
}
