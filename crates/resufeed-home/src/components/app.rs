//! Root application component.

use dioxus::prelude::*;

use resufeed_ui::ThemedRoot;

use crate::router::AppRoute;
use crate::store::Services;

use super::{AuthPage, HomePage, Navbar, UploadPage};

/// Root component: theme wrapper, navbar, and the route-switched page body.
#[component]
pub fn App(services: Services, route: Signal<AppRoute>) -> Element {
    let current = route.read().clone();

    rsx! {
        ThemedRoot {
            div {
                class: "resufeed-app",

                Navbar { route }

                if current == AppRoute::Home {
                    HomePage { services: services.clone(), route }
                }
                if current == AppRoute::Upload {
                    UploadPage { route }
                }
                if let AppRoute::Auth { next } = current {
                    AuthPage { next }
                }
            }
        }
    }
}
