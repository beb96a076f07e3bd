use serde_json::Value;
use std::collections::HashMap;

use crate::blocks::{Block, BlockData, BlockId, BlockKind, PageContent};
use crate::editing::uploads::{ListEdit, PendingUpload};
use crate::editing::{
    AssetSlot, BlockIdGenerator, EditCmd, EditError, Notice, Patch, UploadOutcome, UploadTicket,
    move_item,
};
use crate::store::{PageKind, PageRecord, PageStore, SavePageRequest, StoreError};
use crate::upload::UploadError;

/// Where a page-edit session is in its save cycle.
///
/// `Loaded → Editing → Saving → Saved | SaveFailed → Editing`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    Loaded,
    Editing,
    Saving,
    Saved,
    SaveFailed,
}

/// One page-edit session.
///
/// The session exclusively owns the page's block sequence from load until it
/// is dropped. Every change goes through [`EditorSession::apply`] or an upload
/// completion; nothing reaches storage until [`EditorSession::begin_save`]
/// hands out a snapshot of the whole page.
#[derive(Debug)]
pub struct EditorSession {
    content: PageContent,
    features: Option<Value>,
    ids: BlockIdGenerator,
    version: u64,
    saved_version: u64,
    saving_version: Option<u64>,
    state: SaveState,
    pending: HashMap<UploadTicket, PendingUpload>,
    notices: Vec<Notice>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Session for a page that has never been saved.
    pub fn new() -> Self {
        Self::from_record(PageRecord::default())
    }

    pub fn from_record(record: PageRecord) -> Self {
        let ids = BlockIdGenerator::seeded_from(record.content.blocks.iter().map(|b| &b.id));
        Self {
            content: record.content,
            features: record.features,
            ids,
            version: 0,
            saved_version: 0,
            saving_version: None,
            state: SaveState::Loaded,
            pending: HashMap::new(),
            notices: Vec::new(),
        }
    }

    pub fn content(&self) -> &PageContent {
        &self.content
    }

    pub fn blocks(&self) -> &[Block] {
        &self.content.blocks
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.content.block(id)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn state(&self) -> SaveState {
        self.state
    }

    /// Local changes not yet acknowledged by the store.
    pub fn is_dirty(&self) -> bool {
        self.version != self.saved_version
    }

    /// Apply one edit to the in-memory page.
    ///
    /// Updates and removals of a block that does not exist are no-ops and
    /// return an empty patch. Errors leave the page untouched.
    pub fn apply(&mut self, cmd: EditCmd) -> Result<Patch, EditError> {
        let mut patch = match cmd {
            EditCmd::AddBlock { kind } => {
                let id = self.push_block(kind);
                Patch {
                    changed: vec![id.clone()],
                    scroll_to: Some(id),
                    ..Patch::default()
                }
            }
            EditCmd::UpdateBlock { id, data } => {
                let Some(block) = self.content.block_mut(&id) else {
                    log::debug!("update for missing block {id} ignored");
                    return Ok(self.unchanged());
                };
                if block.data.tag() != data.tag() {
                    return Err(EditError::KindChange {
                        id,
                        expected: block.data.tag().to_string(),
                        found: data.tag().to_string(),
                    });
                }
                let previous = std::mem::replace(&mut block.data, data);
                self.retarget_uploads(&id, &previous);
                Patch {
                    changed: vec![id],
                    ..Patch::default()
                }
            }
            EditCmd::RemoveBlock { id } => {
                let Some(index) = self.content.position(&id) else {
                    log::debug!("removal of missing block {id} ignored");
                    return Ok(self.unchanged());
                };
                self.content.blocks.remove(index);
                Patch {
                    changed: vec![id],
                    ..Patch::default()
                }
            }
            EditCmd::Reorder { from, to } => {
                move_item(&mut self.content.blocks, from, to)?;
                if from == to {
                    return Ok(self.unchanged());
                }
                let moved = from.min(to)..=from.max(to);
                Patch {
                    changed: self.content.blocks[moved]
                        .iter()
                        .map(|block| block.id.clone())
                        .collect(),
                    ..Patch::default()
                }
            }
            EditCmd::SetTitle { title } => {
                if self.content.title == title {
                    return Ok(self.unchanged());
                }
                self.content.title = title;
                Patch {
                    header_changed: true,
                    ..Patch::default()
                }
            }
            EditCmd::SetSubtitle { subtitle } => {
                if self.content.subtitle == subtitle {
                    return Ok(self.unchanged());
                }
                self.content.subtitle = subtitle;
                Patch {
                    header_changed: true,
                    ..Patch::default()
                }
            }
        };
        self.touch();
        patch.version = self.version;
        Ok(patch)
    }

    pub fn add_block(&mut self, kind: BlockKind) -> BlockId {
        let id = self.push_block(kind);
        self.touch();
        id
    }

    pub fn update_block(&mut self, id: &BlockId, data: BlockData) -> Result<Patch, EditError> {
        self.apply(EditCmd::UpdateBlock {
            id: id.clone(),
            data,
        })
    }

    pub fn remove_block(&mut self, id: &BlockId) -> Patch {
        match self.apply(EditCmd::RemoveBlock { id: id.clone() }) {
            Ok(patch) => patch,
            Err(_) => self.unchanged(),
        }
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> Result<Patch, EditError> {
        self.apply(EditCmd::Reorder { from, to })
    }

    /// Register an upload that will write into `slot` of block `block_id`.
    pub fn begin_upload(
        &mut self,
        block_id: &BlockId,
        slot: AssetSlot,
    ) -> Result<UploadTicket, EditError> {
        let block = self
            .content
            .block(block_id)
            .ok_or_else(|| EditError::BlockNotFound(block_id.clone()))?;
        if !block.kind().is_some_and(|kind| slot.accepts(kind)) {
            return Err(EditError::SlotMismatch {
                slot,
                kind: block.data.tag().to_string(),
            });
        }
        let ticket = UploadTicket::issue();
        self.pending.insert(
            ticket,
            PendingUpload {
                block_id: block_id.clone(),
                slot: Some(slot),
            },
        );
        Ok(ticket)
    }

    /// Record the result of an upload. Results may arrive in any order;
    /// append slots grow in the order results arrive.
    pub fn complete_upload(
        &mut self,
        ticket: UploadTicket,
        result: Result<String, UploadError>,
    ) -> UploadOutcome {
        let Some(pending) = self.pending.remove(&ticket) else {
            log::debug!("upload {ticket:?} does not belong to this session, discarding");
            return UploadOutcome::Discarded;
        };
        let url = match result {
            Ok(url) => url,
            Err(e) => {
                log::warn!("upload for block {} failed: {e}", pending.block_id);
                self.notices
                    .push(Notice::error(format!("Falha no envio do arquivo: {e}")));
                return UploadOutcome::Failed {
                    block_id: pending.block_id,
                };
            }
        };
        let Some(block) = self.content.block_mut(&pending.block_id) else {
            log::debug!(
                "block {} was removed before its upload finished",
                pending.block_id
            );
            return UploadOutcome::Discarded;
        };
        let Some(slot) = pending.slot else {
            log::debug!(
                "entry targeted by upload {ticket:?} left block {}, discarding",
                pending.block_id
            );
            return UploadOutcome::Discarded;
        };
        if !slot.write(&mut block.data, url) {
            log::debug!(
                "{slot:?} no longer fits block {}, discarding upload",
                pending.block_id
            );
            return UploadOutcome::Discarded;
        }
        self.touch();
        UploadOutcome::Applied {
            block_id: pending.block_id,
        }
    }

    pub fn pending_uploads(&self) -> usize {
        self.pending.len()
    }

    pub fn is_uploading(&self, block_id: &BlockId) -> bool {
        self.pending
            .values()
            .any(|pending| &pending.block_id == block_id)
    }

    /// Snapshot the whole page for the store and enter `Saving`.
    /// Editing may continue while the request is in flight.
    pub fn begin_save(&mut self) -> SavePageRequest {
        self.saving_version = Some(self.version);
        self.state = SaveState::Saving;
        SavePageRequest::new(&self.content, self.features.clone())
    }

    pub fn finish_save(&mut self, result: Result<(), StoreError>) {
        let Some(version) = self.saving_version.take() else {
            log::warn!("save result arrived with no save in progress");
            return;
        };
        match result {
            Ok(()) => {
                log::info!("page saved at version {version}");
                self.saved_version = version;
                self.state = if self.version == version {
                    SaveState::Saved
                } else {
                    SaveState::Editing
                };
                self.notices.push(Notice::info("Página salva."));
            }
            Err(e) => {
                log::warn!("page save failed: {e}");
                self.state = SaveState::SaveFailed;
                self.notices
                    .push(Notice::error(format!("Não foi possível salvar a página: {e}")));
            }
        }
    }

    /// Save through `store` in one go.
    pub async fn save_with<S: PageStore>(
        &mut self,
        store: &S,
        page: PageKind,
    ) -> Result<(), StoreError> {
        let request = self.begin_save();
        let result = store.save(page, &request).await;
        self.finish_save(result.clone());
        result
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn push_block(&mut self, kind: BlockKind) -> BlockId {
        let id = self.ids.next_id(kind);
        self.content
            .blocks
            .push(Block::new(id.clone(), BlockData::default_for(kind)));
        id
    }

    /// Keep indexed uploads into block `id` aimed at the same entry after its
    /// payload was replaced.
    fn retarget_uploads(&mut self, id: &BlockId, previous: &BlockData) {
        let Some(block) = self.content.block(id) else {
            return;
        };
        let edit = ListEdit::between(previous, &block.data);
        if edit == ListEdit::Stable {
            return;
        }
        for pending in self.pending.values_mut() {
            if &pending.block_id == id {
                pending.slot = pending.slot.and_then(|slot| slot.rebase(edit));
            }
        }
    }

    fn touch(&mut self) {
        self.version += 1;
        if self.state != SaveState::Saving {
            self.state = SaveState::Editing;
        }
    }

    fn unchanged(&self) -> Patch {
        Patch {
            version: self.version,
            ..Patch::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{GalleryData, GalleryLayout, TeamData, TeamMember, TitleData};
    use crate::store::MemoryPageStore;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    fn team(names: &[&str]) -> BlockData {
        BlockData::Team(TeamData {
            members: names
                .iter()
                .map(|name| TeamMember {
                    avatar_url: format!("{}.jpg", name.to_lowercase()),
                    name: name.to_string(),
                    role: String::new(),
                })
                .collect(),
        })
    }

    fn avatars(session: &EditorSession, id: &BlockId) -> Vec<(String, String)> {
        let BlockData::Team(team) = &session.block(id).unwrap().data else {
            panic!("expected team");
        };
        team.members
            .iter()
            .map(|member| (member.name.clone(), member.avatar_url.clone()))
            .collect()
    }

    fn title(text: &str) -> BlockData {
        BlockData::Title(TitleData {
            title: text.to_string(),
        })
    }

    #[test]
    fn test_add_block_appends_default_payload_and_scrolls_to_it() {
        let mut session = EditorSession::new();
        session.add_block(BlockKind::Title);

        let patch = session
            .apply(EditCmd::AddBlock {
                kind: BlockKind::Gallery,
            })
            .unwrap();

        let last = session.blocks().last().unwrap();
        assert_eq!(patch.scroll_to.as_ref(), Some(&last.id));
        assert_eq!(last.data, BlockData::default_for(BlockKind::Gallery));
        assert_eq!(session.blocks().len(), 2);
        assert_eq!(session.state(), SaveState::Editing);
    }

    #[test]
    fn test_add_block_matches_the_add_command() {
        let mut direct = EditorSession::new();
        let mut via_apply = EditorSession::new();

        let id = direct.add_block(BlockKind::Team);
        let patch = via_apply
            .apply(EditCmd::AddBlock {
                kind: BlockKind::Team,
            })
            .unwrap();

        assert_eq!(direct.blocks()[0].id, id);
        assert_eq!(patch.scroll_to.as_ref(), Some(&via_apply.blocks()[0].id));
        assert_eq!(direct.blocks()[0].data, via_apply.blocks()[0].data);
        assert_eq!(direct.version(), via_apply.version());
        assert_eq!(direct.state(), SaveState::Editing);
    }

    #[test]
    fn test_update_of_missing_block_is_a_noop() {
        let mut session = EditorSession::new();
        let before = session.version();

        let patch = session
            .update_block(&BlockId::new("title-404"), title("X"))
            .unwrap();

        assert!(patch.is_noop());
        assert_eq!(session.version(), before);
        assert_eq!(session.state(), SaveState::Loaded);
    }

    #[test]
    fn test_update_cannot_change_block_type() {
        let mut session = EditorSession::new();
        let id = session.add_block(BlockKind::Title);

        let result = session.update_block(&id, BlockData::default_for(BlockKind::Photo));

        assert!(matches!(result, Err(EditError::KindChange { .. })));
        assert_eq!(session.block(&id).unwrap().kind(), Some(BlockKind::Title));
    }

    #[test]
    fn test_remove_preserves_order_of_the_rest() {
        let mut session = EditorSession::new();
        let a = session.add_block(BlockKind::Title);
        let b = session.add_block(BlockKind::Photo);
        let c = session.add_block(BlockKind::Banner);

        session.remove_block(&b);

        let ids: Vec<&BlockId> = session.blocks().iter().map(|block| &block.id).collect();
        assert_eq!(ids, vec![&a, &c]);
    }

    #[test]
    fn test_removed_ids_are_never_reissued() {
        let mut session = EditorSession::new();
        let first = session.add_block(BlockKind::Title);
        session.remove_block(&first);

        let second = session.add_block(BlockKind::Title);

        assert_ne!(first, second);
    }

    #[test]
    fn test_reorder_reports_the_shifted_range() {
        let mut session = EditorSession::new();
        let a = session.add_block(BlockKind::Title);
        let b = session.add_block(BlockKind::Photo);
        let c = session.add_block(BlockKind::Banner);
        let d = session.add_block(BlockKind::Team);

        let patch = session.reorder(0, 2).unwrap();

        assert_eq!(patch.changed, vec![b.clone(), c.clone(), a.clone()]);
        let ids: Vec<&BlockId> = session.blocks().iter().map(|block| &block.id).collect();
        assert_eq!(ids, vec![&b, &c, &a, &d]);
    }

    #[test]
    fn test_reorder_out_of_range_changes_nothing() {
        let mut session = EditorSession::new();
        session.add_block(BlockKind::Title);
        let before = session.content().clone();

        let result = session.reorder(0, 5);

        assert_eq!(result, Err(EditError::IndexOutOfRange { index: 5, len: 1 }));
        assert_eq!(session.content(), &before);
    }

    #[test]
    fn test_header_edits() {
        let mut session = EditorSession::new();

        let patch = session
            .apply(EditCmd::SetTitle {
                title: "Turismo".to_string(),
            })
            .unwrap();
        assert!(patch.header_changed);

        let patch = session
            .apply(EditCmd::SetTitle {
                title: "Turismo".to_string(),
            })
            .unwrap();
        assert!(patch.is_noop());
        assert_eq!(session.content().title, "Turismo");
    }

    #[test]
    fn test_failed_upload_leaves_payload_and_queues_notice() {
        let mut session = EditorSession::new();
        let id = session.add_block(BlockKind::Banner);
        let before = session.block(&id).unwrap().clone();

        let ticket = session.begin_upload(&id, AssetSlot::Banner).unwrap();
        let outcome = session.complete_upload(
            ticket,
            Err(UploadError::Network("connection reset".to_string())),
        );

        assert_eq!(outcome, UploadOutcome::Failed { block_id: id.clone() });
        assert_eq!(session.block(&id).unwrap(), &before);
        let notices = session.take_notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].is_error());
        assert!(session.notices().is_empty());
    }

    #[test]
    fn test_one_failed_upload_does_not_affect_the_others() {
        let mut session = EditorSession::new();
        let id = session.add_block(BlockKind::Gallery);
        let tickets: Vec<UploadTicket> = (0..3)
            .map(|_| session.begin_upload(&id, AssetSlot::GalleryAppend).unwrap())
            .collect();

        session.complete_upload(tickets[0], Ok("a.jpg".to_string()));
        session.complete_upload(tickets[1], Err(UploadError::Network("timeout".to_string())));
        session.complete_upload(tickets[2], Ok("c.jpg".to_string()));

        let BlockData::Gallery(gallery) = &session.block(&id).unwrap().data else {
            panic!("expected gallery");
        };
        assert_eq!(gallery.images, vec!["a.jpg".to_string(), "c.jpg".to_string()]);
        assert_eq!(session.pending_uploads(), 0);
    }

    #[test]
    fn test_upload_for_removed_block_is_discarded() {
        let mut session = EditorSession::new();
        let id = session.add_block(BlockKind::Photo);
        let ticket = session.begin_upload(&id, AssetSlot::Photo).unwrap();
        session.remove_block(&id);
        let version = session.version();

        let outcome = session.complete_upload(ticket, Ok("late.jpg".to_string()));

        assert_eq!(outcome, UploadOutcome::Discarded);
        assert_eq!(session.version(), version);
        assert!(session.take_notices().is_empty());
    }

    #[test]
    fn test_avatar_upload_follows_its_member_after_an_earlier_removal() {
        let mut session = EditorSession::new();
        let id = session.add_block(BlockKind::Team);
        session.update_block(&id, team(&["Ana", "Bia", "Caio"])).unwrap();

        let ticket = session
            .begin_upload(&id, AssetSlot::TeamAvatar { index: 1 })
            .unwrap();
        session.update_block(&id, team(&["Bia", "Caio"])).unwrap();
        let outcome = session.complete_upload(ticket, Ok("nova-bia.png".to_string()));

        assert_eq!(outcome, UploadOutcome::Applied { block_id: id.clone() });
        assert_eq!(
            avatars(&session, &id),
            vec![
                ("Bia".to_string(), "nova-bia.png".to_string()),
                ("Caio".to_string(), "caio.jpg".to_string()),
            ]
        );
    }

    #[test]
    fn test_avatar_upload_for_a_removed_member_is_discarded() {
        let mut session = EditorSession::new();
        let id = session.add_block(BlockKind::Team);
        session.update_block(&id, team(&["Ana", "Bia", "Caio"])).unwrap();

        let ticket = session
            .begin_upload(&id, AssetSlot::TeamAvatar { index: 1 })
            .unwrap();
        session.update_block(&id, team(&["Ana", "Caio"])).unwrap();
        let version = session.version();
        let outcome = session.complete_upload(ticket, Ok("nova-bia.png".to_string()));

        assert_eq!(outcome, UploadOutcome::Discarded);
        assert_eq!(session.version(), version);
        assert_eq!(
            avatars(&session, &id),
            vec![
                ("Ana".to_string(), "ana.jpg".to_string()),
                ("Caio".to_string(), "caio.jpg".to_string()),
            ]
        );
        assert_eq!(session.pending_uploads(), 0);
    }

    #[test]
    fn test_avatar_upload_survives_text_edits_to_its_member() {
        let mut session = EditorSession::new();
        let id = session.add_block(BlockKind::Team);
        session.update_block(&id, team(&["Ana", "Bia"])).unwrap();

        let ticket = session
            .begin_upload(&id, AssetSlot::TeamAvatar { index: 1 })
            .unwrap();
        session.update_block(&id, team(&["Ana", "Beatriz"])).unwrap();
        session.complete_upload(ticket, Ok("nova.png".to_string()));

        assert_eq!(avatars(&session, &id)[1], ("Beatriz".to_string(), "nova.png".to_string()));
    }

    #[test]
    fn test_tickets_from_another_session_are_discarded() {
        let mut old = EditorSession::new();
        let id = old.add_block(BlockKind::Photo);
        let ticket = old.begin_upload(&id, AssetSlot::Photo).unwrap();

        let mut fresh = EditorSession::new();
        fresh.add_block(BlockKind::Photo);

        assert_eq!(
            fresh.complete_upload(ticket, Ok("x.jpg".to_string())),
            UploadOutcome::Discarded
        );
    }

    #[test]
    fn test_begin_upload_checks_slot_against_block_type() {
        let mut session = EditorSession::new();
        let id = session.add_block(BlockKind::Title);

        let result = session.begin_upload(&id, AssetSlot::Banner);

        assert!(matches!(result, Err(EditError::SlotMismatch { .. })));
        assert!(matches!(
            session.begin_upload(&BlockId::new("missing"), AssetSlot::Banner),
            Err(EditError::BlockNotFound(_))
        ));
        assert_eq!(session.pending_uploads(), 0);
    }

    #[test]
    fn test_save_state_machine() {
        let store = MemoryPageStore::new();
        let mut session = EditorSession::new();
        assert_eq!(session.state(), SaveState::Loaded);

        let id = session.add_block(BlockKind::Title);
        session.update_block(&id, title("Maricultura")).unwrap();
        assert!(session.is_dirty());

        block_on(session.save_with(&store, PageKind::Maricultura)).unwrap();
        assert_eq!(session.state(), SaveState::Saved);
        assert!(!session.is_dirty());

        session.add_block(BlockKind::Photo);
        assert_eq!(session.state(), SaveState::Editing);
    }

    #[test]
    fn test_failed_save_keeps_blocks_for_retry() {
        let store = MemoryPageStore::new();
        store.fail_next_save();
        let mut session = EditorSession::new();
        let id = session.add_block(BlockKind::Title);
        session.update_block(&id, title("Socioambiental")).unwrap();
        let before = session.content().clone();

        let result = block_on(session.save_with(&store, PageKind::Socioambiental));

        assert!(result.is_err());
        assert_eq!(session.state(), SaveState::SaveFailed);
        assert_eq!(session.content(), &before);
        assert!(session.is_dirty());
        assert!(session.take_notices().iter().any(Notice::is_error));

        block_on(session.save_with(&store, PageKind::Socioambiental)).unwrap();
        assert_eq!(session.state(), SaveState::Saved);
        let stored = block_on(store.load(PageKind::Socioambiental)).unwrap();
        assert_eq!(stored.content, before);
    }

    #[test]
    fn test_edits_during_save_keep_the_session_dirty() {
        let mut session = EditorSession::new();
        session.add_block(BlockKind::Title);

        let request = session.begin_save();
        session.add_block(BlockKind::Photo);
        assert_eq!(session.state(), SaveState::Saving);
        session.finish_save(Ok(()));

        assert_eq!(request.content_blocks.len(), 1);
        assert_eq!(session.state(), SaveState::Editing);
        assert!(session.is_dirty());
    }

    #[test]
    fn test_loaded_ids_are_not_reused() {
        let record = PageRecord {
            content: PageContent::new("Quem Somos", "").with_blocks(vec![Block::new(
                BlockId::new("title-99999999999999"),
                title("Quem Somos"),
            )]),
            features: None,
        };
        let mut session = EditorSession::from_record(record);

        let id = session.add_block(BlockKind::Title);

        assert_eq!(id.as_str(), "title-100000000000000");
        assert_eq!(session.state(), SaveState::Editing);
    }

    #[test]
    fn test_new_gallery_defaults_to_grid() {
        let mut session = EditorSession::new();
        let id = session.add_block(BlockKind::Gallery);

        assert_eq!(
            session.block(&id).unwrap().data,
            BlockData::Gallery(GalleryData {
                images: Vec::new(),
                layout: GalleryLayout::Grid,
            })
        );
    }
}
