//! The landing page itself.
//!
//! On mount two independent effects fire: the auth gate (redirect to the
//! sign-in page carrying the return path) and the one-shot resume fetch.
//! The body then renders exactly one of loading / empty / populated /
//! failed around the always-present heading reveals.

use dioxus::prelude::*;

use resufeed_ui::{
    LetterStaggerReveal, LineStaggerReveal, ResumeGallery, ScrollLinkedReveal, SplitTextReveal,
    TypewriterReveal,
};

use crate::router::{auth_redirect, AppRoute};
use crate::state::{resume_count_label, HomeState, HomeView};
use crate::store::{load_resumes, Services};

use super::ResumeCard;

/// Page headline, revealed word by word.
pub const HEADLINE: &str = "Track Your Applications & Resume Ratings";

/// Subtitle when at least one resume is stored (or while loading).
pub const POPULATED_SUBTITLE: &str = "Review your submissions and check AI-powered feedback.";

/// Subtitle typed out when the store has no resumes yet.
pub const EMPTY_SUBTITLE: &str = "No resumes found. Upload your first resume to get feedback.";

/// Tagline, revealed letter by letter.
pub const TAGLINE: &str = "Smart feedback for your dream job!";

/// The landing page.
#[component]
pub fn HomePage(services: Services, route: Signal<AppRoute>) -> Element {
    let mut state = use_signal(HomeState::new);
    let authenticated = services.auth.is_authenticated();

    // Auth gate, once per mount.
    let mut nav = route;
    use_effect(move || {
        if let Some(target) = auth_redirect(authenticated, &AppRoute::Home) {
            tracing::info!("Not signed in, redirecting to {}", target.path());
            nav.set(target);
        }
    });

    // One-shot fetch, once per mount; never re-runs on re-render.
    let fetch_services = services.clone();
    use_effect(move || {
        let services = fetch_services.clone();
        spawn(async move {
            state.write().begin_loading();
            match load_resumes(services.kv.as_ref(), services.parse_policy).await {
                Ok(records) => {
                    tracing::info!("Loaded {} resumes", records.len());
                    state.write().finish(records);
                }
                Err(error) => {
                    tracing::error!("Resume load failed: {}", error);
                    state.write().fail(error.to_string());
                }
            }
        });
    });

    if !authenticated {
        // The route signal is about to switch to the sign-in page.
        return rsx! {
            div { class: "redirecting" }
        };
    }

    let state_read = state.read();
    let view = state_read.view();
    let resumes = state_read.resumes.clone();
    let error = state_read.error_message().map(str::to_owned);
    drop(state_read);

    let count_label = resume_count_label(resumes.len());
    let cards: Vec<Element> = resumes
        .iter()
        .map(|resume| {
            rsx! {
                ResumeCard { key: "{resume.id}", resume: resume.clone() }
            }
        })
        .collect();

    rsx! {
        section {
            class: "main-section",

            div {
                class: "page-heading",

                SplitTextReveal { text: "{HEADLINE}", class: "headline" }

                if view == HomeView::Empty {
                    TypewriterReveal { text: "{EMPTY_SUBTITLE}", class: "subtitle" }
                } else {
                    LineStaggerReveal { text: "{POPULATED_SUBTITLE}", class: "subtitle" }
                }

                LetterStaggerReveal { text: "{TAGLINE}", class: "tagline" }
            }

            if view == HomeView::Loading {
                ScrollLinkedReveal {
                    class: "loading-section",
                    div {
                        class: "scan-indicator",
                        div { class: "scan-beam" }
                        span { class: "scan-label", "Scanning your resumes" }
                    }
                }
            }

            if view == HomeView::Populated {
                div {
                    class: "resumes-section",
                    div {
                        class: "gallery-frame",
                        ResumeGallery {
                            radius: 200.0,
                            item_size: 120.0,
                            auto_rotate: true,
                            rotation_speed: 10.0,
                            center_content: rsx! {
                                div {
                                    class: "gallery-center-text",
                                    h3 { class: "gallery-center-title", "My Resumes" }
                                    p { class: "gallery-center-count", "{count_label}" }
                                }
                            },
                            items: cards,
                        }
                    }
                }
            }

            if view == HomeView::Empty {
                div {
                    class: "upload-cta",
                    button {
                        class: "primary-button",
                        onclick: move |_| nav.set(AppRoute::Upload),
                        "Upload Resume"
                    }
                }
            }

            if view == HomeView::Failed {
                div {
                    class: "load-error",
                    span { class: "load-error-title", "Could not load your resumes." }
                    if let Some(message) = error {
                        span { class: "load-error-detail", "{message}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_copy() {
        assert_eq!(
            EMPTY_SUBTITLE,
            "No resumes found. Upload your first resume to get feedback."
        );
        assert_eq!(HEADLINE, "Track Your Applications & Resume Ratings");
    }
}
