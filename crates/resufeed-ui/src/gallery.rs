//! Circular resume gallery.
//!
//! Purely presentational: items are placed evenly around a ring, the ring
//! optionally auto-rotates, and every item counter-rotates so its content
//! stays upright.

use dioxus::prelude::*;

/// Angle in degrees for item `index` of `count` placed evenly on the ring.
pub fn item_angle_degrees(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    360.0 * index as f64 / count as f64
}

/// CSS transform placing an item on the ring at `angle_degrees`.
pub fn item_transform(angle_degrees: f64, radius: f64) -> String {
    format!("translate(-50%, -50%) rotate({angle_degrees}deg) translateY(-{radius}px)")
}

/// Full-revolution period in seconds for a rotation speed in degrees/second.
///
/// Non-positive speeds disable rotation (period 0).
pub fn spin_period_secs(rotation_speed: f64) -> f64 {
    if rotation_speed <= 0.0 {
        0.0
    } else {
        360.0 / rotation_speed
    }
}

/// Circular gallery of resume cards around a center overlay.
#[component]
pub fn ResumeGallery(
    radius: f64,
    item_size: f64,
    auto_rotate: bool,
    rotation_speed: f64,
    center_content: Element,
    items: Vec<Element>,
) -> Element {
    let count = items.len();
    let period = spin_period_secs(rotation_speed);
    let spinning = auto_rotate && period > 0.0;
    let ring_class = if spinning {
        "gallery-ring spinning"
    } else {
        "gallery-ring"
    };
    let ring_style = if spinning {
        format!("animation-duration: {period}s;")
    } else {
        String::new()
    };

    rsx! {
        div {
            class: "resume-gallery",
            div {
                class: "{ring_class}",
                style: "{ring_style}",
                for (index, item) in items.into_iter().enumerate() {
                    {
                        let angle = item_angle_degrees(index, count);
                        let counter_angle = -angle;
                        let placement = item_transform(angle, radius);
                        let item_style = format!(
                            "width: {item_size}px; height: {item_size}px; transform: {placement};"
                        );
                        let upright_class = if spinning {
                            "gallery-item-upright spinning"
                        } else {
                            "gallery-item-upright"
                        };
                        let upright_style = if spinning {
                            format!(
                                "transform: rotate({counter_angle}deg); animation-duration: {period}s;"
                            )
                        } else {
                            format!("transform: rotate({counter_angle}deg);")
                        };
                        rsx! {
                            div {
                                key: "{index}",
                                class: "gallery-item",
                                style: "{item_style}",
                                div {
                                    class: "{upright_class}",
                                    style: "{upright_style}",
                                    {item}
                                }
                            }
                        }
                    }
                }
            }
            div { class: "gallery-center", {center_content} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_spaced_evenly() {
        assert_eq!(item_angle_degrees(0, 4), 0.0);
        assert_eq!(item_angle_degrees(1, 4), 90.0);
        assert_eq!(item_angle_degrees(3, 4), 270.0);
        // Degenerate ring.
        assert_eq!(item_angle_degrees(0, 0), 0.0);
    }

    #[test]
    fn test_item_transform_string() {
        let transform = item_transform(90.0, 200.0);
        assert_eq!(
            transform,
            "translate(-50%, -50%) rotate(90deg) translateY(-200px)"
        );
    }

    #[test]
    fn test_spin_period() {
        assert_eq!(spin_period_secs(10.0), 36.0);
        assert_eq!(spin_period_secs(0.0), 0.0);
        assert_eq!(spin_period_secs(-5.0), 0.0);
    }
}
