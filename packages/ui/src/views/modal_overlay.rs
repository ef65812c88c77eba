use dioxus::prelude::*;

/// Centered card over a dimmed page, labelled by `title` for screen readers.
///
/// Clicking the backdrop or pressing Escape calls `on_close`; clicks inside
/// the card do not.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "modal-card",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "modal-title",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                h3 { id: "modal-title", class: "modal-title", "{title}" }
                {children}
            }
        }
    }
}
