//! A single resume card in the gallery.

use dioxus::prelude::*;

use crate::store::{ResumeRecord, ScoreBand};

/// Card showing company, role, and the overall feedback score.
#[component]
pub fn ResumeCard(resume: ResumeRecord) -> Element {
    let company = resume
        .company_name
        .clone()
        .unwrap_or_else(|| "Untitled".to_string());
    let job_title = resume.job_title.clone().unwrap_or_default();

    let (score_text, band_class) = match resume.overall_score() {
        Some(score) => (
            score.to_string(),
            ScoreBand::from_score(score).css_class(),
        ),
        None => ("\u{b7}".to_string(), "score-pending"),
    };

    rsx! {
        div {
            class: "resume-card",

            div {
                class: "resume-card-info",
                span { class: "resume-card-company", "{company}" }
                if !job_title.is_empty() {
                    span { class: "resume-card-role", "{job_title}" }
                }
            }

            div {
                class: "resume-card-score {band_class}",
                "{score_text}"
            }
        }
    }
}
