//! Sign-in page stub.
//!
//! Session handling lives outside the landing app; this page only explains
//! where the redirect came from and where sign-in returns to.

use dioxus::prelude::*;

use resufeed_ui::LetterStaggerReveal;

/// Sign-in page. `next` is the path to return to after signing in.
#[component]
pub fn AuthPage(next: String) -> Element {
    rsx! {
        section {
            class: "auth-section",

            h2 { class: "auth-title", "Welcome back" }
            LetterStaggerReveal {
                text: "Sign in to see your resume feedback.",
                class: "auth-tagline",
            }
            p {
                class: "auth-hint",
                "You'll return to "
                code { "{next}" }
                " after signing in."
            }
        }
    }
}
