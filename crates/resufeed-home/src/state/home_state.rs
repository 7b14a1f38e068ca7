//! Home page view state.
//!
//! Created on mount, mutated exactly once by the fetch effect, discarded on
//! unmount. There is no refresh path.

use crate::store::ResumeRecord;

/// Progress of the one-shot resume fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase {
    Loading,
    Loaded,
    Failed(String),
}

/// Which of the mutually exclusive page bodies renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeView {
    Loading,
    Empty,
    Populated,
    Failed,
}

/// State behind the home page render.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeState {
    /// Parsed records, in fetch-result order.
    pub resumes: Vec<ResumeRecord>,

    /// Fetch progress.
    pub phase: LoadPhase,
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeState {
    /// Fresh state; the fetch effect fires immediately on mount, so the page
    /// starts in the loading phase.
    pub fn new() -> Self {
        Self {
            resumes: Vec::new(),
            phase: LoadPhase::Loading,
        }
    }

    pub fn begin_loading(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Stores the fetch result and leaves the loading phase.
    pub fn finish(&mut self, records: Vec<ResumeRecord>) {
        self.resumes = records;
        self.phase = LoadPhase::Loaded;
    }

    pub fn fail(&mut self, message: String) {
        self.phase = LoadPhase::Failed(message);
    }

    /// Selects exactly one view for the current state.
    pub fn view(&self) -> HomeView {
        match &self.phase {
            LoadPhase::Loading => HomeView::Loading,
            LoadPhase::Failed(_) => HomeView::Failed,
            LoadPhase::Loaded if self.resumes.is_empty() => HomeView::Empty,
            LoadPhase::Loaded => HomeView::Populated,
        }
    }

    /// The load error, when the fetch failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Gallery center label: "1 Resume", "2 Resumes", ...
pub fn resume_count_label(count: usize) -> String {
    if count == 1 {
        "1 Resume".to_string()
    } else {
        format!("{count} Resumes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ResumeRecord {
        ResumeRecord {
            id: id.to_string(),
            company_name: None,
            job_title: None,
            image_path: None,
            resume_path: None,
            feedback: None,
        }
    }

    #[test]
    fn test_exactly_one_view_per_state() {
        let mut state = HomeState::new();
        assert_eq!(state.view(), HomeView::Loading);

        state.finish(Vec::new());
        assert_eq!(state.view(), HomeView::Empty);

        state.begin_loading();
        assert_eq!(state.view(), HomeView::Loading);

        state.finish(vec![record("a")]);
        assert_eq!(state.view(), HomeView::Populated);

        state.fail("store offline".into());
        assert_eq!(state.view(), HomeView::Failed);
        assert_eq!(state.error_message(), Some("store offline"));
    }

    #[test]
    fn test_finish_preserves_fetch_order() {
        let mut state = HomeState::new();
        state.finish(vec![record("b"), record("a"), record("c")]);
        let ids: Vec<_> = state.resumes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_count_label_pluralizes() {
        assert_eq!(resume_count_label(0), "0 Resumes");
        assert_eq!(resume_count_label(1), "1 Resume");
        assert_eq!(resume_count_label(2), "2 Resumes");
    }
}
