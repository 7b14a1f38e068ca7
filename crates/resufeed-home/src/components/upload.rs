//! Upload page stub.

use dioxus::prelude::*;

use crate::router::AppRoute;

/// Upload call-to-action target. The actual upload/analysis flow is a
/// separate application surface.
#[component]
pub fn UploadPage(route: Signal<AppRoute>) -> Element {
    let mut nav = route;

    rsx! {
        section {
            class: "upload-section",

            h2 { class: "upload-title", "Upload your resume" }
            p {
                class: "upload-hint",
                "Drop a PDF here to get AI-powered feedback on your next application."
            }
            button {
                class: "secondary-button",
                onclick: move |_| nav.set(AppRoute::Home),
                "Back to your resumes"
            }
        }
    }
}
