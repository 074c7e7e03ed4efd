use dioxus::prelude::*;
use strum::Display;

use liftlog_web_app::view;

#[derive(Display, Clone, Copy, PartialEq)]
pub enum Color {
    #[strum(to_string = "primary")]
    Primary,
    #[strum(to_string = "success")]
    Success,
    #[strum(to_string = "danger")]
    Danger,
    #[strum(to_string = "light")]
    Light,
}

impl From<view::Color> for Color {
    fn from(value: view::Color) -> Self {
        match value {
            view::Color::Primary => Color::Primary,
            view::Color::Success => Color::Success,
            view::Color::Danger => Color::Danger,
            view::Color::Light => Color::Light,
        }
    }
}

#[component]
pub fn Title(title: String) -> Element {
    rsx! {
        div {
            class: "block has-text-centered",
            h1 { class: "title is-5", "{title}" }
        }
    }
}

#[component]
pub fn WhiteBox(children: Element, title: String) -> Element {
    rsx! {
        div {
            class: "box",
            h2 { class: "subtitle is-5 has-text-weight-bold", "{title}" }
            {children}
        }
    }
}

#[component]
pub fn Dialog(
    children: Element,
    title: Option<Element>,
    close_event: EventHandler<MouseEvent>,
    color: Option<Color>,
) -> Element {
    let color = color.unwrap_or(Color::Primary);
    rsx! {
        div {
            class: "modal is-active",
            div {
                class: "modal-background",
                onclick: close_event
            }
            div {
                class: "modal-content",
                div {
                    class: "message is-{color} mx-2",
                    div {
                        class: "message-body has-text-text-bold has-background-scheme-main",
                        if let Some(title) = title {
                            div {
                                class: "title has-text-{color}",
                                {title}
                            }
                        }
                        {children}
                    }
                }
            }
            button {
                aria_label: "close",
                class: "modal-close",
                onclick: close_event,
            }
        }
    }
}
