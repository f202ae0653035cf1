use dioxus::prelude::*;

use crate::{
    domain::ReviewState,
    infra::feed::{load_feed, FeedSource},
    ui::components::{
        toast::{push_toast, ToastKind, ToastMessage},
        ActionsHandle, MergeSuggestionCard,
    },
    util::config::AppConfig,
};

#[component]
pub fn InboxPage() -> Element {
    let state = use_context::<Signal<ReviewState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let actions = use_context::<ActionsHandle>();
    let config = use_context::<AppConfig>();

    let pending = state.with(|st| st.pending.clone());
    let feed_label = state.with(|st| st.feed_label.clone());
    let load_error = state.with(|st| st.load_error.clone());
    let card_class = config.card_class.clone().unwrap_or_default();

    let on_reload = {
        let mut state = state;
        let feed_path = config.feed_path.clone();
        move |_| match load_feed(feed_path.as_deref()) {
            Ok(feed) => {
                let label = match feed.source {
                    FeedSource::File(path) => path,
                    FeedSource::Bundled => "bundled sample".to_string(),
                };
                let count = state.with_mut(|st| st.reload(label, feed.suggestions));
                push_toast(toasts, ToastKind::Info, format!("Reloaded {count} pending suggestions."));
            }
            Err(err) => {
                tracing::error!("Failed to reload suggestion feed: {err}");
                push_toast(toasts, ToastKind::Error, format!("Failed to reload feed: {err}"));
            }
        }
    };

    rsx! {
        div { class: "space-y-6",
            header {
                class: "flex flex-wrap items-start justify-between gap-4",
                div {
                    h1 { class: "text-2xl font-semibold text-slate-100", "Merge Suggestions" }
                    p {
                        class: "text-sm text-slate-400",
                        "Review where new content should go. Source: {feed_label}"
                    }
                }
                button {
                    class: "rounded-md border border-indigo-500/40 px-3 py-2 text-xs font-semibold uppercase tracking-wide text-indigo-200 hover:bg-indigo-500/10",
                    onclick: on_reload,
                    "Reload Feed"
                }
            }

            if let Some(error) = load_error {
                div {
                    class: "rounded-lg border border-rose-500/30 bg-rose-500/10 px-3 py-2 text-xs text-rose-200",
                    "Could not load suggestions: {error}"
                }
            }

            if pending.is_empty() {
                div { class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6 text-sm text-slate-400",
                    "No pending suggestions." }
            } else {
                div {
                    class: "space-y-4",
                    for suggestion in pending {
                        MergeSuggestionCard {
                            key: "{suggestion.id}",
                            suggestion,
                            actions: actions.clone(),
                            class: card_class.clone(),
                        }
                    }
                }
            }
        }
    }
}
