use dioxus::prelude::*;

use crate::ui::theme::{self, use_theme};

/// Splits a 0–5 rating into full, half and empty stars (rounded to the nearest half).
pub fn star_counts(rating: f32) -> (usize, bool, usize) {
    let halves = (rating.clamp(0.0, 5.0) * 2.0).round() as usize;
    let full = halves / 2;
    let half = halves % 2 == 1;
    let empty = 5 - full - usize::from(half);
    (full, half, empty)
}

#[component]
pub fn RatingStars(rating: f32, reviews: Option<u32>) -> Element {
    let theme = use_theme().resolved();
    let (full, half, empty) = star_counts(rating);
    let stars = format!(
        "{}{}{}",
        "★".repeat(full),
        if half { "½" } else { "" },
        "☆".repeat(empty)
    );

    rsx! {
        span {
            class: "inline-flex items-center gap-1 text-sm",
            span { class: "text-amber-400", title: "{rating:.1} / 5", "{stars}" }
            span { class: "font-semibold {theme::text_primary(theme)}", "{rating:.1}" }
            if let Some(count) = reviews {
                span { class: "text-xs {theme::text_muted(theme)}", "({count} avis)" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::star_counts;

    #[test]
    fn rounds_to_half_stars() {
        assert_eq!(star_counts(4.9), (5, false, 0));
        assert_eq!(star_counts(4.7), (4, true, 0));
        assert_eq!(star_counts(4.2), (4, false, 1));
        assert_eq!(star_counts(0.0), (0, false, 5));
    }

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(star_counts(7.5), (5, false, 0));
        assert_eq!(star_counts(-1.0), (0, false, 5));
    }
}
