use std::time::{SystemTime, UNIX_EPOCH};

use crate::blocks::{BlockId, BlockKind};

/// Issues `<type>-<millis>` block ids.
///
/// The numeric part is strictly increasing within a session and starts above
/// every numeric suffix already present in the page, so an id is never
/// reused, not even after the block holding it was deleted.
#[derive(Debug, Clone, Default)]
pub struct BlockIdGenerator {
    last: u64,
}

impl BlockIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded_from<'a>(existing: impl IntoIterator<Item = &'a BlockId>) -> Self {
        let last = existing
            .into_iter()
            .filter_map(|id| numeric_suffix(id.as_str()))
            .max()
            .unwrap_or(0);
        Self { last }
    }

    pub fn next_id(&mut self, kind: BlockKind) -> BlockId {
        self.last = now_millis().max(self.last + 1);
        BlockId::new(format!("{kind}-{}", self.last))
    }
}

fn numeric_suffix(id: &str) -> Option<u64> {
    id.rsplit('-').next()?.parse().ok()
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
