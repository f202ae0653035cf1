use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::ReviewState;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<ReviewState>>();
    let (pending, decided) = state.with(|st| (st.pending.len(), st.history.len()));

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 px-6 py-4",
                div { class: "mx-auto flex max-w-4xl items-center justify-between gap-4",
                    div {
                        h1 { class: "text-xl font-semibold tracking-tight", "{APP_NAME}" }
                        p { class: "text-xs {theme::text_muted()}", "{version_label()}" }
                    }
                    nav { class: "flex gap-2 text-sm",
                        NavButton {
                            active: matches!(current_route, Route::Inbox {}),
                            onclick: move |_| { nav.push(Route::Inbox {}); },
                            label: format!("Inbox ({pending})"),
                        }
                        NavButton {
                            active: matches!(current_route, Route::History {}),
                            onclick: move |_| { nav.push(Route::History {}); },
                            label: format!("History ({decided})"),
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-4xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: String) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
