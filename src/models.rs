//! Frontend Models
//!
//! Data structures returned by the backend.

use serde::{Deserialize, Deserializer, Serialize};

/// Resume summary as listed by `/api/user_resumes`.
/// The endpoint sends more fields; only these are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSummary {
    pub id: u32,
    /// Untitled resumes arrive as `null`; they decode to an empty title
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::filter_resumes;

    #[test]
    fn test_extra_fields_ignored() {
        let json = r#"[
            {"id": 1, "title": "Software Engineer CV", "template": "modern", "pdf_path": null},
            {"id": 2, "title": "Marketing Resume"}
        ]"#;
        let resumes: Vec<ResumeSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(resumes.len(), 2);
        assert_eq!(resumes[0].id, 1);
        assert_eq!(resumes[1].title, "Marketing Resume");
    }

    #[test]
    fn test_untitled_resume_keeps_list() {
        let json = r#"[
            {"id": 1, "title": "Software Engineer CV"},
            {"id": 2, "title": null},
            {"id": 3},
            {"id": 4, "title": "Engineering Manager"}
        ]"#;
        let resumes: Vec<ResumeSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(resumes.len(), 4);
        assert_eq!(resumes[1].title, "");
        assert_eq!(resumes[2].title, "");

        let ids: Vec<u32> = filter_resumes(&resumes, "engineer").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }
}
