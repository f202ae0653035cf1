use dioxus::prelude::*;

use crate::domain::{badge_label, ConfidenceTier};
use crate::ui::theme;

#[component]
pub fn ConfidenceBadge(confidence: f64) -> Element {
    let color = theme::tier_badge(ConfidenceTier::classify(confidence));
    let label = badge_label(confidence);

    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {color}",
            title: "Merge confidence",
            "{label}"
        }
    }
}
