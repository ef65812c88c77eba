use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::views::ModalOverlay;

/// Yes/no prompt shown before a destructive action.
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Delete invite".to_string())] title: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            title,
            on_close: move |_| on_cancel.call(()),
            div {
                class: "confirm-dialog",
                p { class: "confirm-message", "{message}" }
                div {
                    class: "button-group",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
