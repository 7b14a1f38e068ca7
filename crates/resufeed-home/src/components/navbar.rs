//! Top navigation bar.

use dioxus::prelude::*;

use resufeed_ui::ThemeSwitcher;

use crate::router::AppRoute;

/// Navbar with the brand mark, theme switcher, and the upload shortcut.
#[component]
pub fn Navbar(route: Signal<AppRoute>) -> Element {
    let mut nav = route;

    rsx! {
        header {
            class: "navbar",

            div {
                class: "navbar-left",
                button {
                    class: "navbar-brand",
                    onclick: move |_| nav.set(AppRoute::Home),
                    "RESUFEED"
                }
            }

            div {
                class: "navbar-right",
                ThemeSwitcher {}
                button {
                    class: "navbar-upload",
                    onclick: move |_| nav.set(AppRoute::Upload),
                    "Upload Resume"
                }
            }
        }
    }
}
