use std::time::Duration;

use dioxus::prelude::*;
use futures::FutureExt;

use crate::{
    domain::{
        ActionError, ActionFuture, Decision, Placement, ReviewState, Suggestion,
        SuggestionActions,
    },
    infra::feed::{load_feed, FeedSource},
    ui::{
        components::{
            toast::{push_toast, Toast, ToastKind, ToastMessage},
            ActionsHandle,
        },
        pages::{HistoryPage, InboxPage},
        shell::Shell,
    },
    util::{assets, config::AppConfig},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Inbox {},
    #[route("/history")]
    History {},
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();

    let state = use_signal({
        let feed_path = config.feed_path.clone();
        move || match load_feed(feed_path.as_deref()) {
            Ok(feed) => {
                let label = match feed.source {
                    FeedSource::File(path) => path,
                    FeedSource::Bundled => "bundled sample".to_string(),
                };
                ReviewState::from_feed(label, feed.suggestions)
            }
            Err(err) => {
                tracing::error!("Failed to load suggestion feed: {err}");
                ReviewState::failed(err.to_string())
            }
        }
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let delay = config.handler_delay();
    let actions = use_hook(|| {
        ActionsHandle::new(InboxActions {
            state,
            toasts,
            delay,
        })
    });
    use_context_provider(|| actions);

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Handlers the inbox hands to every card. Decisions live in memory only.
#[derive(Clone, Copy)]
struct InboxActions {
    state: Signal<ReviewState>,
    toasts: Signal<Vec<ToastMessage>>,
    delay: Duration,
}

impl InboxActions {
    fn settle<F>(&self, id: String, decide: F) -> ActionFuture
    where
        F: FnOnce(&Suggestion) -> Result<Decision, ActionError> + 'static,
    {
        let InboxActions {
            mut state,
            toasts,
            delay,
        } = *self;
        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let suggestion = state
                .with(|st| st.find(&id).cloned())
                .ok_or_else(|| ActionError::new(format!("suggestion {id} is no longer pending")))?;

            let decision = match decide(&suggestion) {
                Ok(decision) => decision,
                Err(err) => {
                    push_toast(
                        toasts,
                        ToastKind::Error,
                        format!("Could not update \"{}\": {err}", suggestion.target_artifact.title),
                    );
                    return Err(err);
                }
            };

            let summary = match decision.detail() {
                Some(detail) => format!("{} into \"{}\" ({detail})", decision.label(), suggestion.target_artifact.title),
                None => format!("{}: \"{}\"", decision.label(), suggestion.target_artifact.title),
            };
            state.with_mut(|st| {
                st.resolve(&id, decision);
            });
            tracing::info!(suggestion = %id, "{summary}");
            push_toast(toasts, ToastKind::Success, summary);
            Ok(())
        }
        .boxed_local()
    }
}

fn ensure_writable(suggestion: &Suggestion) -> Result<(), ActionError> {
    if suggestion.target_artifact.locked {
        return Err(ActionError::new("target artifact is locked"));
    }
    Ok(())
}

impl SuggestionActions for InboxActions {
    fn accept(&self, id: String) -> ActionFuture {
        self.settle(id, |suggestion| {
            ensure_writable(suggestion)?;
            Ok(Decision::Merged(
                suggestion.analysis.suggested_placement.clone(),
            ))
        })
    }

    fn reject(&self, id: String) -> ActionFuture {
        self.settle(id, |_| Ok(Decision::Rejected))
    }

    fn create_separate(&self, id: String) -> ActionFuture {
        self.settle(id, |_| Ok(Decision::CreatedSeparate))
    }

    fn custom_placement(&self, id: String, placement: Placement) -> ActionFuture {
        self.settle(id, move |suggestion| {
            ensure_writable(suggestion)?;
            Ok(Decision::Placed(placement))
        })
    }
}

#[component]
pub fn Inbox() -> Element {
    rsx! { Shell { InboxPage {} } }
}

#[component]
pub fn History() -> Element {
    rsx! { Shell { HistoryPage {} } }
}
