//! Explicit save: flushes the working document to the durable rows and
//! writes through to the snapshot slot so the three sources stay aligned.

use serde_json::Value;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::document::ResumeDocument;
use crate::errors::AppError;
use crate::models::snapshot::LocalSnapshot;
use crate::persist::store::SnapshotStore;

/// Column values for the students row, computed from the document.
///
/// Contact fields are `None` when the form field is blank so the UPDATE
/// coalesces to the stored value instead of erasing it. Record sections are
/// filtered to filled records only; a resume full of padding rows must not
/// persist as rows of empty strings.
#[derive(Debug)]
pub struct StudentUpdate {
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub leetcode_url: Option<String>,
    pub summary: Option<String>,
    pub skills: Value,
    pub education: Value,
    pub experience: Value,
    pub projects: Value,
    /// `None` when the form has no filled achievement so an UPDATE never
    /// clobbers certifications imported from elsewhere.
    pub certifications: Option<Value>,
    pub form_data: Value,
}

pub fn build_student_update(doc: &ResumeDocument) -> StudentUpdate {
    let non_blank = |v: &str| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    };

    let education: Vec<_> = doc.education.iter().filter(|e| e.is_filled()).collect();
    let experience: Vec<_> = doc.experience.iter().filter(|e| e.is_filled()).collect();
    let projects: Vec<_> = doc.projects.iter().filter(|p| p.is_filled()).collect();
    let certifications: Vec<_> = doc.achievements.iter().filter(|a| a.is_filled()).collect();

    StudentUpdate {
        phone: non_blank(&doc.personal.phone),
        address: non_blank(&doc.personal.address),
        linkedin_url: non_blank(&doc.personal.linkedin),
        github_url: non_blank(&doc.personal.github),
        leetcode_url: non_blank(&doc.personal.leetcode),
        summary: non_blank(&doc.summary),
        skills: Value::from(doc.filled_skills()),
        education: serde_json::to_value(&education).unwrap_or(Value::Array(vec![])),
        experience: serde_json::to_value(&experience).unwrap_or(Value::Array(vec![])),
        projects: serde_json::to_value(&projects).unwrap_or(Value::Array(vec![])),
        certifications: if certifications.is_empty() {
            None
        } else {
            serde_json::to_value(&certifications).ok()
        },
        form_data: serde_json::to_value(doc).unwrap_or(Value::Null),
    }
}

/// Saves the document for a user: students row, profiles row, snapshot slot.
///
/// The students UPDATE is the save; a failure there surfaces to the caller.
/// The profiles UPDATE and the snapshot write-through are best-effort and
/// only logged, matching the front end this replaces.
pub async fn save_resume(
    pool: &PgPool,
    snapshots: &dyn SnapshotStore,
    user_id: Uuid,
    resume_id: &str,
    doc: &ResumeDocument,
) -> Result<(), AppError> {
    let update = build_student_update(doc);

    let result = sqlx::query(
        r#"
        UPDATE students SET
            phone         = COALESCE($2, phone),
            address       = COALESCE($3, address),
            linkedin_url  = COALESCE($4, linkedin_url),
            github_url    = COALESCE($5, github_url),
            leetcode_url  = COALESCE($6, leetcode_url),
            summary       = COALESCE($7, summary),
            skills        = $8,
            education     = $9,
            experience    = $10,
            projects      = $11,
            certifications = COALESCE($12, certifications),
            resume_form_data = $13
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(&update.phone)
    .bind(&update.address)
    .bind(&update.linkedin_url)
    .bind(&update.github_url)
    .bind(&update.leetcode_url)
    .bind(&update.summary)
    .bind(&update.skills)
    .bind(&update.education)
    .bind(&update.experience)
    .bind(&update.projects)
    .bind(&update.certifications)
    .bind(&update.form_data)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "No student record for {user_id}"
        )));
    }

    let full_name = doc.personal.full_name.trim();
    let email = doc.personal.email.trim();
    if !full_name.is_empty() && !email.is_empty() {
        if let Err(e) = sqlx::query("UPDATE profiles SET full_name = $2, email = $3 WHERE id = $1")
            .bind(user_id)
            .bind(full_name)
            .bind(email)
            .execute(pool)
            .await
        {
            warn!("Profile update failed for {user_id}: {e}");
        }
    }

    let snapshot = LocalSnapshot::new(resume_id.to_string(), user_id, doc.clone());
    match serde_json::to_string(&snapshot) {
        Ok(payload) => {
            if let Err(e) = snapshots.store(user_id, payload).await {
                warn!("Snapshot write-through failed for {user_id}: {e}");
            }
        }
        Err(e) => warn!("Snapshot serialization failed for {user_id}: {e}"),
    }

    info!("Saved resume {resume_id} for {user_id}");
    Ok(())
}
