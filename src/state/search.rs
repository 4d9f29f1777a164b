//! Resume search state: load result and filtered view.

use crate::error::FetchError;
use crate::models::ResumeSummary;

/// Outcome of the one-time resume list fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResumeLoad {
    #[default]
    Pending,
    Loaded(Vec<ResumeSummary>),
    Failed(FetchError),
}

impl ResumeLoad {
    /// Resumes available for filtering; empty unless loaded
    pub fn resumes(&self) -> &[ResumeSummary] {
        match self {
            Self::Loaded(resumes) => resumes,
            Self::Pending | Self::Failed(_) => &[],
        }
    }

    /// Exposed to markup as `data-state` on the widget
    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Loaded(_) => "loaded",
            Self::Failed(_) => "failed",
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Case-insensitive substring match on titles, keeping fetch order
pub fn filter_resumes(resumes: &[ResumeSummary], query: &str) -> Vec<ResumeSummary> {
    let query = query.to_lowercase();
    resumes
        .iter()
        .filter(|r| r.title.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// What the results panel shows for one query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchView {
    pub results: Vec<ResumeSummary>,
}

impl SearchView {
    /// An empty query produces no rows rather than the full list
    pub fn compute(load: &ResumeLoad, query: &str) -> Self {
        if query.is_empty() {
            return Self::default();
        }
        Self {
            results: filter_resumes(load.resumes(), query),
        }
    }

    pub fn panel_visible(&self) -> bool {
        !self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ResumeSummary> {
        vec![
            ResumeSummary { id: 1, title: "Software Engineer CV".to_string() },
            ResumeSummary { id: 2, title: "Marketing Resume".to_string() },
            ResumeSummary { id: 3, title: "Engineering Manager".to_string() },
        ]
    }

    #[test]
    fn test_filter_case_insensitive_and_ordered() {
        let resumes = sample();
        let ids: Vec<u32> = filter_resumes(&resumes, "ENGINEER").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
        // source is untouched
        assert_eq!(resumes, sample());
    }

    #[test]
    fn test_engineer_scenario() {
        let load = ResumeLoad::Loaded(sample()[..2].to_vec());
        let view = SearchView::compute(&load, "engineer");
        assert!(view.panel_visible());
        assert_eq!(view.results.len(), 1);
        assert_eq!(view.results[0].id, 1);
    }

    #[test]
    fn test_empty_query_hides_panel() {
        let load = ResumeLoad::Loaded(sample());
        assert!(SearchView::compute(&load, "cv").panel_visible());
        let view = SearchView::compute(&load, "");
        assert!(view.results.is_empty());
        assert!(!view.panel_visible());
    }

    #[test]
    fn test_no_match_hides_panel() {
        let load = ResumeLoad::Loaded(sample());
        assert!(!SearchView::compute(&load, "designer").panel_visible());
    }

    #[test]
    fn test_failed_load_never_matches() {
        let load = ResumeLoad::Failed(FetchError::Network("offline".to_string()));
        for query in ["", "a", "engineer", "Marketing Resume"] {
            let view = SearchView::compute(&load, query);
            assert!(view.results.is_empty());
            assert!(!view.panel_visible());
        }
        assert_eq!(load.error(), Some(&FetchError::Network("offline".to_string())));
    }

    #[test]
    fn test_pending_load_is_empty() {
        assert!(ResumeLoad::Pending.resumes().is_empty());
        assert!(ResumeLoad::Pending.error().is_none());
        assert_eq!(ResumeLoad::Pending.state_name(), "pending");
        assert_eq!(ResumeLoad::Failed(FetchError::Timeout).state_name(), "failed");
    }
}
