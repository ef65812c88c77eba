//! Login form shared by the web and desktop apps.

use dioxus::prelude::*;

use crate::client::make_client;
use crate::components::{Button, ButtonVariant, Input, Notice, NoticeKind};
use crate::use_session;

/// Login page. `on_logged_in` fires only after the session is updated;
/// `children` renders below the form (platform links).
#[component]
pub fn LoginView(on_logged_in: EventHandler<()>, children: Element) -> Element {
    let mut session = use_session();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut message = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            message.set(None);
            loading.set(true);

            let mut next = session();
            let result = match make_client() {
                Ok(client) => next.log_in(&client, username().trim(), &password()).await,
                Err(e) => Err(e),
            };
            loading.set(false);

            match result {
                Ok(()) => {
                    session.set(next);
                    on_logged_in.call(());
                }
                Err(e) => {
                    tracing::error!("login failed: {e}");
                    message.set(Some(e.user_message("Error")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page auth-page--login",
            div {
                class: "card auth-card",
                h2 { class: "auth-heading", "Login to Eventide" }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    Input {
                        name: "username",
                        placeholder: "Username",
                        value: username(),
                        required: true,
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }

                    Input {
                        name: "password",
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        required: true,
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Login" }
                    }
                }

                {children}

                if let Some(text) = message() {
                    Notice { text, kind: NoticeKind::Error }
                }
            }
        }
    }
}
