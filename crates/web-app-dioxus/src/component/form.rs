use dioxus::prelude::*;

#[component]
pub fn InputField(
    label: String,
    r#type: String,
    inputmode: Option<String>,
    step: Option<String>,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let is_number = r#type == "number";
    rsx! {
        div {
            class: "field",
            label { class: "label", "{label}" }
            div {
                class: "control",
                input {
                    class: "input",
                    r#type: r#type,
                    inputmode: if let Some(inputmode) = inputmode { inputmode },
                    min: if is_number { "0" },
                    step: if let Some(step) = step { step },
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
            }
        }
    }
}

#[component]
pub fn TextAreaField(label: String, value: String, oninput: EventHandler<FormEvent>) -> Element {
    rsx! {
        div {
            class: "field",
            label { class: "label", "{label}" }
            div {
                class: "control",
                textarea {
                    class: "textarea",
                    rows: 5,
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
            }
        }
    }
}

#[component]
pub fn SelectField(
    label: String,
    options: Vec<Element>,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            label { class: "label", "{label}" }
            div {
                class: "control",
                div {
                    class: "select",
                    select {
                        onchange,
                        for option in options {
                            {option}
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SelectOption(text: String, value: String, selected: bool) -> Element {
    rsx! {
        option {
            selected,
            value,
            "{text}"
        }
    }
}
