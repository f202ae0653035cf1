use dioxus::prelude::*;

use crate::domain::{bar_width, percent, AlternativeAction, Analysis, ConfidenceTier};
use crate::ui::theme;

/// Breakdown of the six sub-scores plus any alternative actions.
#[component]
pub fn AnalysisDetailsPanel(analysis: Analysis) -> Element {
    let metrics = analysis.metrics();
    let alternatives = analysis
        .alternatives()
        .iter()
        .map(AlternativeAction::summary)
        .collect::<Vec<_>>();
    let has_reasoning = !analysis.reasoning.trim().is_empty();

    rsx! {
        section {
            class: "mt-3 space-y-3 rounded-lg border border-slate-800 bg-slate-950/60 p-3",
            if has_reasoning {
                p { class: "text-xs text-slate-400", "{analysis.reasoning}" }
            }
            ul {
                class: "space-y-2",
                for metric in metrics {
                    MetricBar { key: "{metric.label}", label: metric.label, value: metric.value }
                }
            }
            if !alternatives.is_empty() {
                div {
                    h4 { class: "{theme::label_class()}", "Alternatives" }
                    ul {
                        class: "mt-1 list-disc space-y-1 pl-4 text-xs text-slate-400",
                        for line in alternatives {
                            li { "{line}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MetricBar(label: &'static str, value: f64) -> Element {
    let width = bar_width(value);
    let rounded = percent(value);
    let fill = theme::tier_bar(ConfidenceTier::classify(value));

    rsx! {
        li {
            div {
                class: "flex items-center justify-between text-xs",
                span { class: "text-slate-300", "{label}" }
                span { class: "{theme::text_muted()}", "{rounded}%" }
            }
            div {
                class: "metric-bar",
                div { class: "metric-bar-fill {fill}", style: "width: {width}%" }
            }
        }
    }
}
