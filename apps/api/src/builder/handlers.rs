use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::builder::session::{mint_resume_id, EditorSession};
use crate::document::{FieldEdit, ResumeDocument, Section};
use crate::editor::SectionEditor;
use crate::errors::AppError;
use crate::persist::{save_resume, AutoSave};
use crate::reconcile::{load_sources, reconcile};
use crate::render::{export_document, render_preview, RenderedSection, Template};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct OpenSessionRequest {
    pub user_id: Uuid,
}

/// The session as handlers report it: document plus step-navigator state.
#[derive(Serialize)]
pub struct SessionView {
    pub user_id: Uuid,
    pub resume_id: String,
    pub seeded_from: Option<&'static str>,
    pub active_section: Section,
    pub step: usize,
    pub step_count: usize,
    pub document: ResumeDocument,
}

impl SessionView {
    fn from_session(user_id: Uuid, session: &EditorSession) -> Self {
        SessionView {
            user_id,
            resume_id: session.resume_id.clone(),
            seeded_from: session.seeded_from.map(|s| s.as_str()),
            active_section: session.editor.active_section(),
            step: session.editor.step(),
            step_count: session.editor.step_count(),
            document: session.editor.document().clone(),
        }
    }
}

/// POST /api/v1/builder/sessions
///
/// Opens (or reopens) the editing session for a user: gathers the sources,
/// reconciles them into the initial document, and arms the auto-saver. The
/// auto-saver stays disabled until hydration is done so that seeding the
/// editor never writes a snapshot of its own.
pub async fn handle_open_session(
    State(state): State<AppState>,
    Json(req): Json<OpenSessionRequest>,
) -> Result<Json<SessionView>, AppError> {
    let bundle = load_sources(&state.db, state.snapshots.as_ref(), req.user_id).await;
    let reconciled = reconcile(Some(req.user_id), &bundle);

    let resume_id = reconciled.resume_id.unwrap_or_else(mint_resume_id);
    let autosave = AutoSave::new(Arc::clone(&state.snapshots), req.user_id);

    let mut session = EditorSession {
        editor: SectionEditor::new(reconciled.document),
        resume_id,
        seeded_from: reconciled.source,
        autosave,
    };
    session.autosave.set_enabled(true);

    info!(
        "Opened builder session for {} (resume {}, seeded from {:?})",
        req.user_id, session.resume_id, session.seeded_from
    );

    let view = SessionView::from_session(req.user_id, &session);
    state.sessions.lock().await.insert(req.user_id, session);
    Ok(Json(view))
}

/// GET /api/v1/builder/sessions/:user_id/document
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let sessions = state.sessions.lock().await;
    let session = sessions
        .get(&user_id)
        .ok_or_else(|| AppError::NotFound(format!("No open session for {user_id}")))?;
    Ok(Json(SessionView::from_session(user_id, session)))
}

#[derive(Deserialize)]
pub struct EditRequest {
    pub edits: Vec<FieldEdit>,
}

/// POST /api/v1/builder/sessions/:user_id/edits
///
/// Applies the batch atomically and schedules one debounced auto-save for
/// it. A bad edit rejects the whole batch and the document is unchanged, so
/// nothing needs snapshotting on the error path.
pub async fn handle_apply_edits(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<EditRequest>,
) -> Result<Json<SessionView>, AppError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions
        .get_mut(&user_id)
        .ok_or_else(|| AppError::NotFound(format!("No open session for {user_id}")))?;

    session
        .editor
        .apply_all(&req.edits)
        .map_err(|e| AppError::Validation(e.to_string()))?;
    session.touch();

    Ok(Json(SessionView::from_session(user_id, session)))
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavDirection {
    Next,
    Prev,
}

#[derive(Deserialize)]
pub struct NavigateRequest {
    #[serde(default)]
    pub direction: Option<NavDirection>,
    #[serde(default)]
    pub section: Option<Section>,
}

/// POST /api/v1/builder/sessions/:user_id/navigate
pub async fn handle_navigate(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<NavigateRequest>,
) -> Result<Json<SessionView>, AppError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions
        .get_mut(&user_id)
        .ok_or_else(|| AppError::NotFound(format!("No open session for {user_id}")))?;

    match (req.section, req.direction) {
        (Some(section), _) => session.editor.go_to(section),
        (None, Some(NavDirection::Next)) => {
            session.editor.go_next();
        }
        (None, Some(NavDirection::Prev)) => {
            session.editor.go_prev();
        }
        (None, None) => {
            return Err(AppError::Validation(
                "navigate needs a direction or a section".to_string(),
            ))
        }
    }

    Ok(Json(SessionView::from_session(user_id, session)))
}

#[derive(Serialize)]
pub struct SaveResponse {
    pub resume_id: String,
    pub saved_at: DateTime<Utc>,
}

/// POST /api/v1/builder/sessions/:user_id/save
pub async fn handle_save(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<SaveResponse>, AppError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions
        .get_mut(&user_id)
        .ok_or_else(|| AppError::NotFound(format!("No open session for {user_id}")))?;

    let errors = session.editor.validate();
    if !errors.is_empty() {
        return Err(AppError::UnprocessableEntity(
            serde_json::to_string(&errors).unwrap_or_default(),
        ));
    }

    let doc = session.editor.document().clone();
    save_resume(
        &state.db,
        state.snapshots.as_ref(),
        user_id,
        &session.resume_id,
        &doc,
    )
    .await?;

    Ok(Json(SaveResponse {
        resume_id: session.resume_id.clone(),
        saved_at: Utc::now(),
    }))
}

#[derive(Deserialize)]
pub struct TemplateQuery {
    #[serde(default)]
    pub template: Template,
}

#[derive(Serialize)]
pub struct PreviewResponse {
    pub template: &'static str,
    pub sections: Vec<RenderedSection>,
    pub html: String,
}

/// GET /api/v1/builder/sessions/:user_id/preview?template=
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<TemplateQuery>,
) -> Result<Json<PreviewResponse>, AppError> {
    let sessions = state.sessions.lock().await;
    let session = sessions
        .get(&user_id)
        .ok_or_else(|| AppError::NotFound(format!("No open session for {user_id}")))?;

    let preview = render_preview(session.editor.document(), params.template);
    Ok(Json(PreviewResponse {
        template: preview.template.as_str(),
        sections: preview.sections,
        html: preview.html,
    }))
}

/// GET /api/v1/builder/sessions/:user_id/export?template=
///
/// Streams the printable document as a download with the deterministic
/// per-student filename.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<TemplateQuery>,
) -> Result<impl IntoResponse, AppError> {
    let sessions = state.sessions.lock().await;
    let session = sessions
        .get(&user_id)
        .ok_or_else(|| AppError::NotFound(format!("No open session for {user_id}")))?;

    let doc = session.editor.document();
    let artifact = export_document(doc, params.template, &doc.personal.full_name);

    Ok((
        [
            (header::CONTENT_TYPE, artifact.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", artifact.filename),
            ),
        ],
        artifact.bytes,
    ))
}
