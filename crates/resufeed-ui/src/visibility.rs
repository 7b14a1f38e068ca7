//! Viewport visibility tracking for reveal animations.
//!
//! Reveal components detect their own visibility by polling the element's
//! bounding rectangle through the document layer. The one-shot variant
//! latches on first entry and stops polling; the continuous variant keeps
//! reporting normalized scroll progress for the component's lifetime. Poll
//! tasks are scoped to their component and dropped on unmount.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dioxus::prelude::*;

/// Poll interval for the one-shot entry latch.
const ENTRY_POLL_MS: u64 = 100;

/// Poll interval for continuous scroll progress.
const SCROLL_POLL_MS: u64 = 50;

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(0);

/// Returns a process-unique element id with the given prefix.
///
/// Reveal components need a DOM id to measure themselves; ids are assigned
/// once per component instance via `use_hook`.
pub(crate) fn next_element_id(prefix: &str) -> String {
    let n = NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{n}")
}

/// Measured geometry of an element relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementMetrics {
    /// Top edge relative to the viewport, px.
    pub top: f64,
    /// Element height, px.
    pub height: f64,
    /// Viewport height, px.
    pub viewport_height: f64,
}

impl ElementMetrics {
    /// Normalized progress of the element through the viewport.
    ///
    /// 0 when the top edge reaches the viewport bottom (entry), 1 when the
    /// bottom edge passes the viewport top (exit), clamped outside.
    pub fn progress(&self) -> f64 {
        let travel = self.viewport_height + self.height;
        if travel <= 0.0 {
            return 0.0;
        }
        ((self.viewport_height - self.top) / travel).clamp(0.0, 1.0)
    }

    /// Whether the element overlaps the viewport shrunk by `margin` (a
    /// fraction of the viewport height applied to both edges).
    pub fn has_entered(&self, margin: f64) -> bool {
        let inset = self.viewport_height * margin;
        let bottom = self.top + self.height;
        self.top < self.viewport_height - inset && bottom > inset
    }
}

/// Measures an element's bounding rectangle by id.
///
/// Returns `None` while the element is not yet in the DOM.
async fn measure_element(element_id: &str) -> Option<ElementMetrics> {
    let js = format!(
        "var el = document.getElementById('{element_id}');\
         if (!el) return null;\
         var rect = el.getBoundingClientRect();\
         return [rect.top, rect.height, window.innerHeight];"
    );
    let value = document::eval(&js).await.ok()?;
    let parts = value.as_array()?;
    Some(ElementMetrics {
        top: parts.first()?.as_f64()?,
        height: parts.get(1)?.as_f64()?,
        viewport_height: parts.get(2)?.as_f64()?,
    })
}

/// Latched viewport-entry detection.
///
/// Polls the element until it first overlaps the viewport (shrunk by
/// `margin`), then sets the signal true and stops. The latch never resets,
/// so animations keyed on it trigger at most once per mount.
pub fn use_viewport_entry(element_id: String, margin: f64) -> Signal<bool> {
    let mut entered = use_signal(|| false);

    use_effect(move || {
        let element_id = element_id.clone();
        spawn(async move {
            loop {
                if *entered.peek() {
                    break;
                }
                if let Some(metrics) = measure_element(&element_id).await {
                    if metrics.has_entered(margin) {
                        entered.set(true);
                        break;
                    }
                }
                tokio::time::sleep(Duration::from_millis(ENTRY_POLL_MS)).await;
            }
        });
    });

    entered
}

/// Continuous scroll progress of an element through the viewport.
///
/// Polls for the component's lifetime and reports progress in [0, 1]; the
/// value moves forward and backward with the user's scrolling.
pub fn use_scroll_progress(element_id: String) -> Signal<f64> {
    let mut progress = use_signal(|| 0.0f64);

    use_effect(move || {
        let element_id = element_id.clone();
        spawn(async move {
            loop {
                if let Some(metrics) = measure_element(&element_id).await {
                    let next = metrics.progress();
                    if (next - *progress.peek()).abs() > f64::EPSILON {
                        progress.set(next);
                    }
                }
                tokio::time::sleep(Duration::from_millis(SCROLL_POLL_MS)).await;
            }
        });
    });

    progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_at_entry_and_exit() {
        // Top edge at the viewport bottom: entry.
        let at_entry = ElementMetrics {
            top: 800.0,
            height: 200.0,
            viewport_height: 800.0,
        };
        assert_eq!(at_entry.progress(), 0.0);

        // Bottom edge at the viewport top: exit.
        let at_exit = ElementMetrics {
            top: -200.0,
            height: 200.0,
            viewport_height: 800.0,
        };
        assert_eq!(at_exit.progress(), 1.0);
    }

    #[test]
    fn test_progress_clamped_and_monotonic() {
        let below = ElementMetrics {
            top: 2000.0,
            height: 200.0,
            viewport_height: 800.0,
        };
        assert_eq!(below.progress(), 0.0);

        let mut previous = 0.0;
        for step in 0..=20 {
            // Element scrolling upward: top decreases.
            let top = 800.0 - step as f64 * 50.0;
            let metrics = ElementMetrics {
                top,
                height: 200.0,
                viewport_height: 800.0,
            };
            let p = metrics.progress();
            assert!(p >= previous);
            previous = p;
        }
    }

    #[test]
    fn test_has_entered_margin() {
        // Element barely inside the viewport bottom.
        let grazing = ElementMetrics {
            top: 780.0,
            height: 100.0,
            viewport_height: 800.0,
        };
        assert!(grazing.has_entered(0.0));
        // A 10% margin (80px inset) excludes it.
        assert!(!grazing.has_entered(0.10));

        let offscreen = ElementMetrics {
            top: 900.0,
            height: 100.0,
            viewport_height: 800.0,
        };
        assert!(!offscreen.has_entered(0.0));
    }

    #[test]
    fn test_element_ids_unique() {
        let a = next_element_id("reveal");
        let b = next_element_id("reveal");
        assert_ne!(a, b);
        assert!(a.starts_with("reveal-"));
    }
}
