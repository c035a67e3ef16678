use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Baseline identity fields from the `profiles` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub college: Option<String>,
}

/// Per-user record from the `students` table.
///
/// The array sections are loosely typed at the store (arrays of strings or of
/// objects, written by several producers including the extraction service), so
/// they come back as raw JSON and are normalized at the reconciliation
/// boundary — untyped values never reach the document model.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentRow {
    pub id: Uuid,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub leetcode_url: Option<String>,
    pub department: Option<String>,
    pub gpa: Option<String>,
    pub summary: Option<String>,
    pub skills: Option<Value>,
    pub education: Option<Value>,
    pub experience: Option<Value>,
    pub projects: Option<Value>,
    pub certifications: Option<Value>,
    /// Structured extraction result written by the resume scanner, if any.
    pub resume_form_data: Option<Value>,
}
