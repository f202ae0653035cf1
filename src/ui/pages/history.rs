use dioxus::prelude::*;

use crate::domain::ReviewState;
use crate::ui::theme;

#[component]
pub fn HistoryPage() -> Element {
    let state = use_context::<Signal<ReviewState>>();
    let records = state.with(|st| st.history.clone());

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-semibold text-slate-100", "Decisions" }
                p { class: "text-sm text-slate-400", "Taken in this session. Nothing here is saved." }
            }
            if records.is_empty() {
                div { class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6 text-sm text-slate-400",
                    "No decisions yet." }
            } else {
                table {
                    class: "min-w-full divide-y divide-slate-800 text-sm",
                    thead {
                        class: "text-left text-xs uppercase tracking-wide text-slate-500",
                        tr {
                            th { class: "px-4 py-3 font-medium", "Suggestion" }
                            th { class: "px-4 py-3 font-medium", "Target" }
                            th { class: "px-4 py-3 font-medium", "Decision" }
                            th { class: "px-4 py-3 font-medium", "Placement" }
                            th { class: "px-4 py-3 font-medium", "When" }
                        }
                    }
                    tbody {
                        class: "divide-y divide-slate-800",
                        for record in records {
                            tr {
                                key: "{record.id}",
                                td { class: "px-4 py-3 font-mono text-xs {theme::text_muted()}", "{record.suggestion_id}" }
                                td { class: "px-4 py-3 text-slate-200", "{record.target_title}" }
                                td { class: "px-4 py-3 text-slate-300", "{record.decision.label()}" }
                                td { class: "px-4 py-3 {theme::text_muted()}", {record.decision.detail().unwrap_or_default()} }
                                td { class: "px-4 py-3 {theme::text_muted()}", {record.decided_at_label()} }
                            }
                        }
                    }
                }
            }
        }
    }
}
