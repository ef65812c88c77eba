use dioxus::prelude::*;
use ui::views::SignupView;

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();

    rsx! {
        SignupView {
            on_signed_up: move |_| {
                nav.push(Route::Login {});
            },
            p {
                class: "auth-links",
                "Already a user? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}
