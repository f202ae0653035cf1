use std::rc::Rc;

use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;

use super::{
    analysis_details::AnalysisDetailsPanel, confidence_badge::ConfidenceBadge,
    placement_menu::CustomPlacementMenu,
};
use crate::domain::{
    content_preview, describe_placement, dispatch_intent, CardController, CardState, MergeIntent,
    Placement, Suggestion, SuggestionActions,
};
use crate::ui::theme;

/// Shared handle to the caller's action handlers. Equal when both point at the same handlers.
#[derive(Clone)]
pub struct ActionsHandle(Rc<dyn SuggestionActions>);

impl ActionsHandle {
    pub fn new(actions: impl SuggestionActions + 'static) -> Self {
        Self(Rc::new(actions))
    }
}

impl PartialEq for ActionsHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl CardController for Signal<CardState> {
    fn try_begin(&mut self, intent: &MergeIntent) -> bool {
        self.try_write()
            .map(|mut state| state.try_begin(intent))
            .unwrap_or(false)
    }

    fn finish(&mut self) {
        // The card may already be unmounted once the handler settles.
        if let Ok(mut state) = self.try_write() {
            state.finish();
        }
    }
}

#[component]
pub fn MergeSuggestionCard(
    suggestion: Suggestion,
    actions: ActionsHandle,
    #[props(default)] class: String,
) -> Element {
    let mut card = use_signal(CardState::default);
    let state = card();
    let processing = state.is_processing();

    let analysis = suggestion.analysis.clone();
    let preview = content_preview(&suggestion.content);
    let placement_text = describe_placement(analysis.suggested_placement.as_ref());
    let root_class = match class.trim() {
        "" => theme::card_panel().to_string(),
        extra => format!("{} {extra}", theme::card_panel()),
    };

    let dispatch = {
        let id = suggestion.id.clone();
        move |intent: MergeIntent| {
            let actions = actions.clone();
            let id = id.clone();
            // Owned by the root scope so an unmounted card cannot cancel a started handler.
            spawn_forever(async move {
                let _ = dispatch_intent(card, actions.0.as_ref(), &id, intent).await;
            });
        }
    };

    let on_accept = {
        let dispatch = dispatch.clone();
        move |_| dispatch(MergeIntent::Accept)
    };
    let on_create_separate = {
        let dispatch = dispatch.clone();
        move |_| dispatch(MergeIntent::CreateSeparate)
    };
    let on_reject = {
        let dispatch = dispatch.clone();
        move |_| dispatch(MergeIntent::Reject)
    };
    let on_close = {
        let dispatch = dispatch.clone();
        move |_| dispatch(MergeIntent::Reject)
    };
    let on_custom = move |placement: Placement| dispatch(MergeIntent::Custom(placement));

    rsx! {
        article {
            class: "{root_class}",
            "data-suggestion-id": "{suggestion.id}",
            header {
                class: "flex items-start justify-between gap-3",
                div {
                    class: "min-w-0",
                    p { class: "{theme::label_class()}", "Suggested merge into" }
                    h3 { class: "truncate text-sm font-semibold text-slate-100", "{suggestion.target_artifact.title}" }
                }
                div {
                    class: "flex items-center gap-2",
                    ConfidenceBadge { confidence: analysis.confidence }
                    button {
                        class: "{theme::btn_icon()}",
                        title: "Dismiss suggestion",
                        disabled: processing,
                        onclick: on_close,
                        "✕"
                    }
                }
            }
            p { class: "mt-2 text-xs text-slate-400", "Placement: {placement_text}" }
            blockquote {
                class: "mt-3 whitespace-pre-wrap rounded-lg border-l-2 border-slate-700 bg-slate-950/40 px-3 py-2 text-sm text-slate-300",
                "{preview}"
            }
            button {
                class: "mt-3 {theme::link_class()}",
                onclick: move |_| card.with_mut(|s| s.toggle_details()),
                if state.details_expanded { "Hide analysis" } else { "Show analysis" }
            }
            if state.details_expanded {
                AnalysisDetailsPanel { analysis: analysis.clone() }
            }
            footer {
                class: "mt-4 flex flex-wrap items-center gap-2",
                button {
                    class: "{theme::btn_primary()}",
                    disabled: processing,
                    onclick: on_accept,
                    "Merge"
                }
                button {
                    class: "{theme::btn_secondary()}",
                    disabled: processing,
                    onclick: on_create_separate,
                    "Create separate"
                }
                CustomPlacementMenu {
                    suggested_placement: analysis.suggested_placement.clone(),
                    disabled: processing,
                    on_select: on_custom,
                }
                button {
                    class: "{theme::btn_danger()}",
                    disabled: processing,
                    onclick: on_reject,
                    "Reject"
                }
                if processing {
                    span { class: "text-xs {theme::text_muted()}", "Working..." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        any::Any,
        cell::{Cell, RefCell},
    };

    use dioxus::dioxus_core::{ElementId, Mutation, Mutations};
    use futures::{channel::oneshot, FutureExt};

    use super::*;
    use crate::domain::{suggestion::sample_suggestion, ActionFuture, PlacementType};

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Accept(String),
        Reject(String),
        CreateSeparate(String),
        Custom(String, Placement),
    }

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<Call>>,
        settled: Cell<usize>,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl Recorder {
        fn gated() -> (Rc<Self>, oneshot::Sender<()>) {
            let (release, gate) = oneshot::channel();
            let recorder = Self {
                gate: RefCell::new(Some(gate)),
                ..Self::default()
            };
            (Rc::new(recorder), release)
        }

        fn respond(self: &Rc<Self>, call: Call) -> ActionFuture {
            self.calls.borrow_mut().push(call);
            let gate = self.gate.borrow_mut().take();
            let this = self.clone();
            async move {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                this.settled.set(this.settled.get() + 1);
                Ok(())
            }
            .boxed_local()
        }
    }

    #[derive(Clone)]
    struct Shared(Rc<Recorder>);

    impl SuggestionActions for Shared {
        fn accept(&self, id: String) -> ActionFuture {
            self.0.respond(Call::Accept(id))
        }
        fn reject(&self, id: String) -> ActionFuture {
            self.0.respond(Call::Reject(id))
        }
        fn create_separate(&self, id: String) -> ActionFuture {
            self.0.respond(Call::CreateSeparate(id))
        }
        fn custom_placement(&self, id: String, placement: Placement) -> ActionFuture {
            self.0.respond(Call::Custom(id, placement))
        }
    }

    #[derive(Clone)]
    struct HostProps {
        suggestion: Suggestion,
        actions: ActionsHandle,
        shown: Rc<Cell<bool>>,
    }

    fn host(props: HostProps) -> Element {
        rsx! {
            if props.shown.get() {
                MergeSuggestionCard { suggestion: props.suggestion.clone(), actions: props.actions.clone() }
            }
        }
    }

    fn click_listeners(mutations: &Mutations) -> Vec<ElementId> {
        mutations
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name.ends_with("click") => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// A card mounted in a live `VirtualDom`, driven by synthetic clicks.
    struct Mounted {
        dom: VirtualDom,
        shown: Rc<Cell<bool>>,
        listeners: Vec<ElementId>,
    }

    impl Mounted {
        fn new(suggestion: Suggestion, recorder: &Rc<Recorder>) -> Self {
            set_event_converter(Box::new(dioxus::html::SerializedHtmlEventConverter));
            let shown = Rc::new(Cell::new(true));
            let props = HostProps {
                suggestion,
                actions: ActionsHandle::new(Shared(recorder.clone())),
                shown: shown.clone(),
            };
            let mut dom = VirtualDom::new_with_props(host, props);
            let listeners = click_listeners(&dom.rebuild_to_vec());
            Self {
                dom,
                shown,
                listeners,
            }
        }

        /// Clicks an element and returns the click listeners created by the re-render.
        fn click(&mut self, id: ElementId) -> Vec<ElementId> {
            let event = Event::new(
                Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
                true,
            );
            self.dom.runtime().handle_event("click", event, id);
            click_listeners(&self.dom.render_immediate_to_vec())
        }

        fn flush(&mut self) {
            self.dom.render_immediate_to_vec();
        }

        fn unmount(&mut self) {
            self.shown.set(false);
            self.dom.mark_dirty(ScopeId::APP);
            self.flush();
        }

        fn html(&self) -> String {
            dioxus_ssr::render(&self.dom)
        }
    }

    /// Clicks each card listener on a fresh card and reports what it dispatched.
    fn calls_per_listener(suggestion: &Suggestion) -> Vec<(ElementId, Vec<Call>)> {
        let count = Mounted::new(suggestion.clone(), &Rc::new(Recorder::default()))
            .listeners
            .len();
        (0..count)
            .map(|index| {
                let recorder = Rc::new(Recorder::default());
                let mut card = Mounted::new(suggestion.clone(), &recorder);
                let id = card.listeners[index];
                card.click(id);
                card.flush();
                let calls = recorder.calls.borrow().clone();
                (id, calls)
            })
            .collect()
    }

    fn listener_for(suggestion: &Suggestion, call: &Call) -> ElementId {
        calls_per_listener(suggestion)
            .into_iter()
            .find(|(_, calls)| calls.as_slice() == std::slice::from_ref(call))
            .map(|(id, _)| id)
            .unwrap()
    }

    fn render(suggestion: Suggestion, class: &str) -> String {
        let class = class.to_string();
        let actions = ActionsHandle::new(Shared(Rc::new(Recorder::default())));
        dioxus_ssr::render_element(rsx! {
            MergeSuggestionCard { suggestion, actions, class }
        })
    }

    #[test]
    fn renders_badge_title_and_preview() {
        let html = render(sample_suggestion(), "");
        assert!(html.contains("high (92%)"));
        assert!(html.contains("hello world"));
        assert!(html.contains("Doc A"));
        assert!(html.contains("Placement: Smart placement"));
        assert!(html.contains("Show analysis"));
        // Details are collapsed until toggled.
        assert!(!html.contains("Topic similarity"));
        assert!(!html.contains("Working..."));
        assert!(!html.contains("disabled=true"));
    }

    #[test]
    fn appends_styling_hook_to_root() {
        let html = render(sample_suggestion(), "compact");
        assert!(html.contains("shadow-sm compact"));
    }

    #[test]
    fn long_content_is_truncated_in_preview() {
        let mut suggestion = sample_suggestion();
        suggestion.content = "x".repeat(200);
        let html = render(suggestion, "");
        assert!(html.contains(&format!("{}...", "x".repeat(150))));
        assert!(!html.contains(&"x".repeat(151)));
    }

    #[test]
    fn details_panel_lists_metrics_and_alternatives() {
        let mut analysis = sample_suggestion().analysis;
        analysis.alternative_actions = Some(vec![crate::domain::AlternativeAction {
            reason: "Merge into Doc B".into(),
            confidence: 0.614,
        }]);
        let html = dioxus_ssr::render_element(rsx! {
            AnalysisDetailsPanel { analysis }
        });
        let order = [
            "Topic similarity",
            "Content-type fit",
            "Structural fit",
            "Size feasibility",
            "User context",
            "Temporal relevance",
        ];
        let positions: Vec<_> = order.iter().filter_map(|label| html.find(label)).collect();
        assert_eq!(positions.len(), 6);
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(html.contains("95%"));
        assert!(html.contains("Merge into Doc B (confidence: 61%)"));
    }

    #[test]
    fn details_panel_skips_empty_alternatives() {
        let mut analysis = sample_suggestion().analysis;
        analysis.alternative_actions = Some(Vec::new());
        let html = dioxus_ssr::render_element(rsx! {
            AnalysisDetailsPanel { analysis }
        });
        assert!(!html.contains("Alternatives"));
    }

    #[test]
    fn each_button_dispatches_its_own_intent_once() {
        let per_listener = calls_per_listener(&sample_suggestion());
        let calls: Vec<Call> = per_listener
            .iter()
            .flat_map(|(_, calls)| calls.clone())
            .collect();
        let count = |wanted: &Call| calls.iter().filter(|call| *call == wanted).count();

        assert_eq!(count(&Call::Accept("s1".into())), 1);
        assert_eq!(count(&Call::CreateSeparate("s1".into())), 1);
        // The header close button and the footer Reject button.
        assert_eq!(count(&Call::Reject("s1".into())), 2);
        assert_eq!(calls.len(), 4);
        assert!(per_listener.iter().all(|(_, calls)| calls.len() <= 1));
    }

    #[test]
    fn details_toggle_reveals_analysis() {
        let suggestion = sample_suggestion();
        let recorder = Rc::new(Recorder::default());
        let mut card = Mounted::new(suggestion, &recorder);
        let toggle = card
            .listeners
            .clone()
            .into_iter()
            .find(|id| {
                let mut scratch = Mounted::new(sample_suggestion(), &Rc::new(Recorder::default()));
                scratch.click(*id);
                scratch.html().contains("Hide analysis")
            })
            .unwrap();

        card.click(toggle);
        assert!(card.html().contains("Topic similarity"));
        card.click(toggle);
        assert!(!card.html().contains("Topic similarity"));
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn buttons_disable_while_an_intent_is_in_flight() {
        let suggestion = sample_suggestion();
        let merge = listener_for(&suggestion, &Call::Accept("s1".into()));

        let (recorder, release) = Recorder::gated();
        let mut card = Mounted::new(suggestion, &recorder);
        card.click(merge);

        let html = card.html();
        assert!(html.contains("Working..."));
        // Close, Merge, Create separate, the menu toggle and Reject.
        assert_eq!(html.matches("disabled=true").count(), 5);

        release.send(()).unwrap();
        card.flush();
        assert_eq!(recorder.settled.get(), 1);
        let html = card.html();
        assert!(!html.contains("Working..."));
        assert!(!html.contains("disabled=true"));
    }

    #[test]
    fn menu_choice_dispatches_once_and_closes_menu() {
        let original = Placement {
            kind: PlacementType::InsertAfterSection,
            title: Some("Intro".into()),
            section_title: Some("Methods".into()),
        };
        let mut suggestion = sample_suggestion();
        suggestion.analysis.suggested_placement = Some(original.clone());

        let opens_menu = |id: ElementId| {
            let mut card = Mounted::new(suggestion.clone(), &Rc::new(Recorder::default()));
            card.click(id);
            card.html().contains("role=\"menu\"")
        };
        let initial = Mounted::new(suggestion.clone(), &Rc::new(Recorder::default())).listeners;
        let toggle = initial.into_iter().find(|id| opens_menu(*id)).unwrap();

        let menu_listeners = Mounted::new(suggestion.clone(), &Rc::new(Recorder::default())).click(toggle);
        let mut chosen = Vec::new();
        for index in 0..menu_listeners.len() {
            let recorder = Rc::new(Recorder::default());
            let mut card = Mounted::new(suggestion.clone(), &recorder);
            let item = card.click(toggle)[index];
            card.click(item);
            card.flush();

            let calls = recorder.calls.borrow().clone();
            if let [Call::Custom(id, placement)] = calls.as_slice() {
                assert_eq!(id, "s1");
                assert!(!card.html().contains("role=\"menu\""));
                chosen.push(placement.clone());
            } else {
                assert!(calls.is_empty());
            }
        }

        assert_eq!(chosen.len(), PlacementType::MENU_OPTIONS.len());
        for kind in PlacementType::MENU_OPTIONS {
            let expected = Placement {
                kind,
                ..original.clone()
            };
            assert_eq!(chosen.iter().filter(|p| **p == expected).count(), 1);
        }
    }

    #[test]
    fn started_intent_survives_card_unmount() {
        let suggestion = sample_suggestion();
        let merge = listener_for(&suggestion, &Call::Accept("s1".into()));

        let (recorder, release) = Recorder::gated();
        let mut card = Mounted::new(suggestion, &recorder);
        card.click(merge);
        assert_eq!(*recorder.calls.borrow(), vec![Call::Accept("s1".into())]);

        card.unmount();
        assert!(!card.html().contains("Doc A"));

        // The handler future is still alive and waiting on the gate.
        assert!(release.send(()).is_ok());
        card.flush();
        assert_eq!(recorder.settled.get(), 1);
        assert_eq!(recorder.calls.borrow().len(), 1);
    }

    #[test]
    fn handles_compare_by_identity() {
        let first = ActionsHandle::new(Shared(Rc::new(Recorder::default())));
        let second = ActionsHandle::new(Shared(Rc::new(Recorder::default())));
        assert!(first == first.clone());
        assert!(first != second);
    }
}
