use std::sync::atomic::{AtomicU64, Ordering};

use crate::blocks::{BlockData, BlockId, BlockKind, LogoEntry, TeamMember};

/// The payload field an uploaded asset's URL is written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetSlot {
    /// `banner.image_url`
    Banner,
    /// `photo.image_url`
    Photo,
    /// Appended to `gallery.images`.
    GalleryAppend,
    /// `logos.logo_url`
    LogosImage,
    /// Appended to `logo.logos` as a new unnamed entry.
    LogoAppend,
    /// Replaces `logo.logos[index].logo_url`.
    LogoEntry { index: usize },
    /// Replaces `team.members[index].avatar_url`.
    TeamAvatar { index: usize },
    /// Appended to `team.members` as a new member with only an avatar.
    TeamAppend,
}

impl AssetSlot {
    pub fn accepts(self, kind: BlockKind) -> bool {
        let expected = match self {
            AssetSlot::Banner => BlockKind::Banner,
            AssetSlot::Photo => BlockKind::Photo,
            AssetSlot::GalleryAppend => BlockKind::Gallery,
            AssetSlot::LogosImage => BlockKind::Logos,
            AssetSlot::LogoAppend | AssetSlot::LogoEntry { .. } => BlockKind::Logo,
            AssetSlot::TeamAvatar { .. } | AssetSlot::TeamAppend => BlockKind::Team,
        };
        kind == expected
    }

    /// Append slots take any number of files; the others take one.
    pub fn appends(self) -> bool {
        matches!(
            self,
            AssetSlot::GalleryAppend | AssetSlot::LogoAppend | AssetSlot::TeamAppend
        )
    }

    /// Follow an indexed slot through an edit of its entry list. `None` when
    /// the targeted entry itself is gone.
    pub(crate) fn rebase(self, edit: ListEdit) -> Option<Self> {
        let shift = |index: usize| match edit {
            ListEdit::Stable => Some(index),
            ListEdit::Removed(at) if index == at => None,
            ListEdit::Removed(at) if index > at => Some(index - 1),
            ListEdit::Removed(_) => Some(index),
            ListEdit::Rewritten => None,
        };
        match self {
            AssetSlot::LogoEntry { index } => {
                shift(index).map(|index| AssetSlot::LogoEntry { index })
            }
            AssetSlot::TeamAvatar { index } => {
                shift(index).map(|index| AssetSlot::TeamAvatar { index })
            }
            slot => Some(slot),
        }
    }

    /// Write `url` into `data`. Returns false when the slot no longer fits the
    /// payload (wrong type, or the indexed entry was removed meanwhile).
    pub(crate) fn write(self, data: &mut BlockData, url: String) -> bool {
        match (self, data) {
            (AssetSlot::Banner, BlockData::Banner(banner)) => banner.image_url = url,
            (AssetSlot::Photo, BlockData::Photo(photo)) => photo.image_url = url,
            (AssetSlot::GalleryAppend, BlockData::Gallery(gallery)) => gallery.images.push(url),
            (AssetSlot::LogosImage, BlockData::Logos(logos)) => logos.logo_url = url,
            (AssetSlot::LogoAppend, BlockData::Logo(logo)) => logo.logos.push(LogoEntry {
                logo_url: url,
                name: String::new(),
            }),
            (AssetSlot::LogoEntry { index }, BlockData::Logo(logo)) => {
                let Some(entry) = logo.logos.get_mut(index) else {
                    return false;
                };
                entry.logo_url = url;
            }
            (AssetSlot::TeamAvatar { index }, BlockData::Team(team)) => {
                let Some(member) = team.members.get_mut(index) else {
                    return false;
                };
                member.avatar_url = url;
            }
            (AssetSlot::TeamAppend, BlockData::Team(team)) => team.members.push(TeamMember {
                avatar_url: url,
                ..TeamMember::default()
            }),
            _ => return false,
        }
        true
    }
}

/// Handle for one in-flight upload. Tickets are unique for the lifetime of
/// the process, so a late completion can never land in a newer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UploadTicket(u64);

impl UploadTicket {
    pub(crate) fn issue() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// URL written into the block.
    Applied { block_id: BlockId },
    /// Upload failed; the block is unchanged and a notice was queued.
    Failed { block_id: BlockId },
    /// Nowhere to put the result (unknown ticket, block removed, entry gone).
    Discarded,
}

/// How the entry list of a team or logo payload changed in one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListEdit {
    /// Existing entries kept their positions.
    Stable,
    /// The entry at this position was removed and later ones moved up.
    Removed(usize),
    /// Positions can no longer be matched.
    Rewritten,
}

impl ListEdit {
    pub(crate) fn between(old: &BlockData, new: &BlockData) -> Self {
        match (old, new) {
            (BlockData::Team(old), BlockData::Team(new)) => Self::of(&old.members, &new.members),
            (BlockData::Logo(old), BlockData::Logo(new)) => Self::of(&old.logos, &new.logos),
            _ => Self::Stable,
        }
    }

    fn of<T: PartialEq>(old: &[T], new: &[T]) -> Self {
        if new.len() >= old.len() {
            return if new.len() == old.len() || new.starts_with(old) {
                Self::Stable
            } else {
                Self::Rewritten
            };
        }
        if new.len() + 1 != old.len() {
            return Self::Rewritten;
        }
        let at = old.iter().zip(new).take_while(|(a, b)| a == b).count();
        if old[at + 1..] == new[at..] {
            Self::Removed(at)
        } else {
            Self::Rewritten
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct PendingUpload {
    pub block_id: BlockId,
    /// `None` once the entry the upload was aimed at has been removed.
    pub slot: Option<AssetSlot>,
}
