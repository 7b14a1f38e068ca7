//! Theme system for Resufeed applications.
//!
//! Provides 2 themes: Aurora (light marketing look) and Midnight.

use dioxus::prelude::*;

/// Available themes for the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Aurora,
    Midnight,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Aurora => "aurora",
            Theme::Midnight => "midnight",
        }
    }

    /// Returns the display name for the theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Aurora => "Aurora",
            Theme::Midnight => "Midnight",
        }
    }

    /// Returns all available themes.
    pub fn all() -> &'static [Theme] {
        &[Theme::Aurora, Theme::Midnight]
    }
}

/// Global signal for current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(|| Theme::default());

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

/// Theme switcher dropdown component.
#[component]
pub fn ThemeSwitcher() -> Element {
    let current_theme = *CURRENT_THEME.read();

    rsx! {
        div { class: "theme-switcher",
            select {
                value: "{current_theme.css_value()}",
                onchange: move |evt| {
                    let value = evt.value();
                    for theme in Theme::all() {
                        if theme.css_value() == value {
                            *CURRENT_THEME.write() = *theme;
                        }
                    }
                },
                for theme in Theme::all() {
                    option {
                        value: "{theme.css_value()}",
                        "{theme.display_name()}"
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
    fn test_css_values_unique() {
        let values: Vec<_> = Theme::all().iter().map(|t| t.css_value()).collect();
        let mut deduped = values.clone();
        deduped.dedup();
        assert_eq!(values, deduped);
    }
}
