use dioxus::prelude::*;

use crate::domain::{MenuState, Placement, PlacementType, PointerTarget};
use crate::ui::theme;

/// Dropdown that overrides the type of the suggested placement.
#[component]
pub fn CustomPlacementMenu(
    #[props(!optional)] suggested_placement: Option<Placement>,
    disabled: bool,
    on_select: EventHandler<Placement>,
) -> Element {
    let mut menu = use_signal(MenuState::default);
    let open = menu().is_open();
    let options = PlacementType::MENU_OPTIONS
        .into_iter()
        .map(|kind| (kind, suggested_placement.clone()))
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "relative",
            if open {
                // Full-viewport layer under the menu; any press on it is outside the menu.
                div {
                    class: "fixed inset-0 z-10",
                    onclick: move |_| menu.with_mut(|m| m.pointer_down(PointerTarget::Outside)),
                }
            }
            button {
                class: "{theme::btn_secondary()}",
                disabled: disabled,
                aria_expanded: "{open}",
                onclick: move |_| menu.with_mut(|m| m.toggle(disabled)),
                "Custom placement ▾"
            }
            if open {
                div {
                    class: "{theme::menu_panel()}",
                    role: "menu",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        menu.with_mut(|m| m.pointer_down(PointerTarget::Inside));
                    },
                    for (kind, original) in options {
                        button {
                            key: "{kind:?}",
                            class: "block w-full px-3 py-2 text-left text-sm text-slate-300 hover:bg-slate-800/60 disabled:opacity-50",
                            role: "menuitem",
                            disabled: disabled,
                            onclick: move |evt| {
                                evt.stop_propagation();
                                let placement = menu.with_mut(|m| m.select(kind, original.as_ref()));
                                on_select.call(placement);
                            },
                            "{kind.menu_label()}"
                        }
                    }
                }
            }
        }
    }
}
