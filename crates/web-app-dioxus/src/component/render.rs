use dioxus::prelude::*;

use liftlog_web_app::view::{self, Action, Field, InputKind};

use crate::{
    APP,
    component::{
        element::{Color, Dialog, Title, WhiteBox},
        form::{InputField, SelectField, SelectOption, TextAreaField},
    },
};

fn dispatch(action: Action) {
    APP.write().dispatch(action);
}

fn change(field: Field, value: String) {
    dispatch(Action::Change { field, value });
}

#[component]
pub fn Content(node: view::Node) -> Element {
    match node {
        view::Node::Column(children) => rsx! {
            for child in children {
                Content { node: child }
            }
        },
        view::Node::Row(children) => rsx! {
            div {
                class: "columns is-mobile is-multiline is-vcentered",
                for child in children {
                    div {
                        class: "column is-narrow",
                        Content { node: child }
                    }
                }
            }
        },
        view::Node::Block { title, children } => rsx! {
            WhiteBox {
                title,
                for child in children {
                    Content { node: child }
                }
            }
        },
        view::Node::Title(title) => rsx! { Title { title } },
        view::Node::Subtitle(text) => rsx! {
            p { class: "subtitle is-6 has-text-weight-semibold", "{text}" }
        },
        view::Node::Text(text) => rsx! {
            p { class: "has-text-weight-semibold", "{text}" }
        },
        view::Node::List(lines) => rsx! {
            ul {
                class: "block ml-4",
                for line in lines {
                    li { "{line}" }
                }
            }
        },
        view::Node::Input {
            field,
            label,
            value,
            kind: InputKind::MultiLine,
        } => rsx! {
            TextAreaField {
                label,
                value,
                oninput: move |evt: FormEvent| change(field, evt.value()),
            }
        },
        view::Node::Input {
            field,
            label,
            value,
            kind,
        } => {
            let (r#type, inputmode, step) = match kind {
                InputKind::Number => (
                    "number".to_string(),
                    Some("decimal".to_string()),
                    Some("any".to_string()),
                ),
                InputKind::Text | InputKind::MultiLine => ("text".to_string(), None, None),
            };
            rsx! {
                InputField {
                    label,
                    r#type,
                    inputmode,
                    step,
                    value,
                    oninput: move |evt: FormEvent| change(field, evt.value()),
                }
            }
        }
        view::Node::Select {
            field,
            label,
            options,
        } => rsx! {
            SelectField {
                label,
                options: options
                    .into_iter()
                    .map(|o| {
                        rsx! {
                            SelectOption { text: o.label, value: o.value, selected: o.selected }
                        }
                    })
                    .collect::<Vec<_>>(),
                onchange: move |evt: FormEvent| change(field, evt.value()),
            }
        },
        view::Node::Button {
            label,
            action,
            color,
        } => {
            let color = Color::from(color);
            rsx! {
                div {
                    class: "field",
                    button {
                        class: "button is-{color}",
                        onclick: move |_| dispatch(action.clone()),
                        "{label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn NotificationDialog(notification: view::Notification) -> Element {
    let color = Color::from(notification.color);
    let title = match color {
        Color::Danger => Some(rsx! { "Error" }),
        Color::Primary | Color::Success | Color::Light => None,
    };
    rsx! {
        Dialog {
            color,
            title,
            close_event: move |_| dispatch(Action::DismissNotification),
            div {
                class: "block",
                "{notification.message}"
            }
            div {
                class: "field is-grouped is-grouped-centered",
                div {
                    class: "control",
                    button {
                        class: "button is-{color}",
                        onclick: move |_| dispatch(Action::DismissNotification),
                        "Close"
                    }
                }
            }
        }
    }
}
