use dioxus::prelude::*;
use strum::IntoEnumIterator;

use liftlog_web_app::{Screen, view::Action};

use crate::APP;

#[component]
pub fn Navbar(screen: Screen) -> Element {
    let mut menu_visible = use_signal(|| false);

    rsx! {
        nav {
            class: "navbar is-primary has-shadow has-text-weight-bold",
            div {
                class: "container",
                div {
                    class: "navbar-brand is-flex-grow-1",
                    div { class: "navbar-item is-size-5", "{screen}" }
                    div { class: "mx-auto" }
                    a {
                        aria_expanded: menu_visible(),
                        aria_label: "menu",
                        class: "navbar-burger ml-0",
                        class: if menu_visible() { "is-active" },
                        role: "button",
                        onclick: move |_| { *menu_visible.write() = !menu_visible() },
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                    }
                }
                div {
                    class: "navbar-menu is-flex-grow-0",
                    class: if menu_visible() { "is-active" },
                    div {
                        class: "navbar-end",
                        for target in Screen::iter() {
                            a {
                                class: "navbar-item",
                                class: if target == screen { "is-selected" },
                                onclick: move |_| {
                                    APP.write().dispatch(Action::Navigate(target));
                                    *menu_visible.write() = false;
                                },
                                "{target}"
                            }
                        }
                    }
                }
            }
        }
    }
}
