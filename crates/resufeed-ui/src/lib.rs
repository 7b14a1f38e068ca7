//! Shared UI components for Resufeed applications.
//!
//! Provides the theme system, scroll-triggered reveal animations, and the
//! circular resume gallery shared between the landing app and future tools.

pub mod gallery;
pub mod progress;
pub mod reveal;
pub mod theme;
pub mod visibility;

pub use gallery::{item_angle_degrees, item_transform, spin_period_secs, ResumeGallery};
pub use progress::{PiecewiseLinear, SCROLL_OFFSET_PX, SCROLL_OPACITY};
pub use reveal::{
    LetterStaggerReveal, LineStaggerReveal, ScrollLinkedReveal, SplitTextReveal, TypewriterReveal,
    TypewriterState,
};
pub use theme::{Theme, ThemeSwitcher, ThemedRoot, CURRENT_THEME};
pub use visibility::{use_scroll_progress, use_viewport_entry, ElementMetrics};

/// Shared CSS containing design tokens, theme definitions, and the reveal
/// animation classes.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
