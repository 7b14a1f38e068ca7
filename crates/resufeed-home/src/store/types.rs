//! Stored resume records.
//!
//! Records are JSON values written by the upload/feedback flow under
//! `resume:<id>` keys, camelCase on the wire. Only `id` is required; the
//! card degrades gracefully when optional fields are missing.

use serde::Deserialize;

/// A stored resume and its feedback.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    /// Stable identifier, used as the list key.
    pub id: String,

    #[serde(default)]
    pub company_name: Option<String>,

    #[serde(default)]
    pub job_title: Option<String>,

    /// Preview image of the first page.
    #[serde(default)]
    pub image_path: Option<String>,

    /// The uploaded document itself.
    #[serde(default)]
    pub resume_path: Option<String>,

    #[serde(default)]
    pub feedback: Option<Feedback>,
}

impl ResumeRecord {
    /// Overall score, when feedback has been generated.
    pub fn overall_score(&self) -> Option<u32> {
        self.feedback.as_ref().map(|f| f.overall_score)
    }
}

/// AI feedback scores for one resume, 0-100 each.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub overall_score: u32,

    #[serde(default)]
    pub ats_score: Option<u32>,

    #[serde(default)]
    pub content_score: Option<u32>,

    #[serde(default)]
    pub structure_score: Option<u32>,

    #[serde(default)]
    pub skills_score: Option<u32>,
}

/// Score bands for card styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Low,
    Mid,
    High,
}

impl ScoreBand {
    /// Bands: below 50 low, 50-79 mid, 80+ high.
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            Self::High
        } else if score >= 50 {
            Self::Mid
        } else {
            Self::Low
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Low => "score-low",
            Self::Mid => "score-mid",
            Self::High => "score-high",
        }
    }
}
