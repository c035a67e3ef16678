use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::ResumeDocument;

/// The auto-saved local snapshot: one slot per user, last write wins.
///
/// Field names match the key-value records the web front end writes, so a
/// snapshot produced by either side parses on the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalSnapshot {
    pub id: String,
    pub student_id: Uuid,
    pub resume_data: ResumeDocument,
    pub updated_at: DateTime<Utc>,
}

impl LocalSnapshot {
    pub fn new(id: String, student_id: Uuid, resume_data: ResumeDocument) -> Self {
        LocalSnapshot {
            id,
            student_id,
            resume_data,
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_round_trip() {
        let snap = LocalSnapshot::new(
            "resume_abc".to_string(),
            Uuid::new_v4(),
            ResumeDocument::default(),
        );
        let json = serde_json::to_string(&snap).unwrap();
        let back: LocalSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, snap.id);
        assert_eq!(back.resume_data, snap.resume_data);
    }
}
