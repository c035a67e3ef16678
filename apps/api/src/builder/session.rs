//! Per-user editing sessions.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::editor::SectionEditor;
use crate::persist::AutoSave;
use crate::reconcile::SourceKind;

/// One live editing session: the stepped editor, the resume resource id, and
/// the debounced auto-saver bound to this user's snapshot slot.
pub struct EditorSession {
    pub editor: SectionEditor,
    pub resume_id: String,
    /// Which source seeded the document, if any.
    pub seeded_from: Option<SourceKind>,
    pub autosave: AutoSave,
}

impl EditorSession {
    /// Schedules an auto-save of the current document.
    pub fn touch(&mut self) {
        let doc = self.editor.document().clone();
        self.autosave.schedule(&self.resume_id, &doc);
    }
}

/// Sessions keyed by user id. One session per user; opening again replaces
/// the old session (and its pending auto-save, via `Drop`).
pub type SessionMap = Arc<Mutex<HashMap<Uuid, EditorSession>>>;

pub fn new_session_map() -> SessionMap {
    Arc::new(Mutex::new(HashMap::new()))
}

/// Resource id for a resume that has never been snapshotted.
pub fn mint_resume_id() -> String {
    format!("resume_{}", Uuid::new_v4())
}
