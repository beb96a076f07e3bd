/*!
 * # Editing Core
 *
 * One [`EditorSession`] per open page. The session owns the page's ordered
 * block sequence and is the only place it changes.
 *
 * ## Architecture Overview
 *
 * ### 1. Single Source of Truth
 * - The loaded [`PageContent`](crate::blocks::PageContent) lives inside the session
 * - The editor list, the live preview and the reader view all read from it
 * - Nothing is written to the store until an explicit save
 *
 * ### 2. Command-Based Editing
 * - Edits are [`EditCmd`] values applied through [`EditorSession::apply`]
 * - Each returns a [`Patch`] naming the blocks that changed and, for new
 *   blocks, the one to scroll into view
 * - A block's type never changes after creation
 *
 * ### 3. Asynchronous Uploads
 * - [`EditorSession::begin_upload`] issues an [`UploadTicket`] bound to a
 *   block and an [`AssetSlot`]
 * - [`EditorSession::complete_upload`] applies results in whatever order they
 *   arrive; multi-file slots append in completion order
 * - Results for blocks removed meanwhile are discarded
 *
 * ### 4. Save Cycle
 * - [`EditorSession::begin_save`] snapshots the whole page as a single
 *   request; [`EditorSession::finish_save`] records the outcome
 * - A failed save keeps every local change so the author can retry
 *
 * ## Usage Pattern
 *
 * ```rust
 * use aquasite_engine::blocks::BlockKind;
 * use aquasite_engine::editing::*;
 *
 * let mut session = EditorSession::new();
 * let id = session.add_block(BlockKind::Gallery);
 *
 * let ticket = session.begin_upload(&id, AssetSlot::GalleryAppend).unwrap();
 * session.complete_upload(ticket, Ok("https://cdn.example/a.jpg".to_string()));
 *
 * let request = session.begin_save();
 * assert_eq!(request.content_blocks.len(), 1);
 * session.finish_save(Ok(()));
 * assert_eq!(session.state(), SaveState::Saved);
 * ```
 */

pub mod commands;
pub mod error;
pub mod ids;
pub mod notice;
pub mod patch;
pub mod session;
pub mod uploads;

pub use commands::{EditCmd, move_item};
pub use error::EditError;
pub use ids::BlockIdGenerator;
pub use notice::{Notice, NoticeLevel};
pub use patch::Patch;
pub use session::{EditorSession, SaveState};
pub use uploads::{AssetSlot, UploadOutcome, UploadTicket};
