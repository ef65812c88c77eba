use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] name: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default)] required: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let kind = r#type;

    rsx! {
        input {
            class: "input {class}",
            id: id,
            name: name,
            r#type: kind,
            placeholder: placeholder,
            value: value,
            required: required,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "label",
            r#for: html_for,
            {children}
        }
    }
}
