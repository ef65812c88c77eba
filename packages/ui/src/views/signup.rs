//! Signup form shared by the web and desktop apps.

use api::{Role, SignupRequest};
use dioxus::prelude::*;

use crate::client::{make_client, signup_delay, sleep};
use crate::components::{Button, ButtonVariant, Input, Label, Notice, NoticeKind};

/// Signup page. Shows the server's confirmation, waits the configured
/// delay, then fires `on_signed_up`.
#[component]
pub fn SignupView(on_signed_up: EventHandler<()>, children: Element) -> Element {
    let mut form = use_signal(SignupRequest::default);
    let mut notice = use_signal(|| Option::<(String, NoticeKind)>::None);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let request = form();
        if !request.is_complete() {
            notice.set(Some(("All fields are required".to_string(), NoticeKind::Error)));
            return;
        }
        spawn(async move {
            notice.set(None);
            loading.set(true);

            let result = async { make_client()?.signup(&request).await }.await;
            match result {
                Ok(msg) => {
                    notice.set(Some((msg, NoticeKind::Info)));
                    sleep(signup_delay()).await;
                    loading.set(false);
                    on_signed_up.call(());
                }
                Err(e) => {
                    tracing::error!("signup failed: {e}");
                    loading.set(false);
                    notice.set(Some((e.user_message("Error occurred"), NoticeKind::Error)));
                }
            }
        });
    };

    let current = form();
    let role_options = Role::ALL.iter().map(|role| {
        let value = role.as_str();
        let label = role.label();
        let selected = *role == current.role;
        rsx! {
            option { key: "{value}", value: value, selected: selected, {label} }
        }
    });

    rsx! {
        div {
            class: "auth-page auth-page--signup",
            div {
                class: "card auth-card",
                h2 { class: "auth-heading", "Sign Up to Eventide" }

                form {
                    class: "auth-form",
                    onsubmit: handle_signup,

                    Input {
                        name: "username",
                        placeholder: "Username",
                        value: current.username.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| form.write().username = evt.value(),
                    }

                    Input {
                        name: "email",
                        r#type: "email",
                        placeholder: "Email",
                        value: current.email.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }

                    Input {
                        name: "password",
                        r#type: "password",
                        placeholder: "Password",
                        value: current.password.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }

                    Label { html_for: "role", "Role" }
                    select {
                        class: "input select",
                        id: "role",
                        name: "role",
                        onchange: move |evt: FormEvent| {
                            match evt.value().parse::<Role>() {
                                Ok(role) => form.write().role = role,
                                Err(e) => tracing::warn!("ignoring role choice: {e}"),
                            }
                        },
                        {role_options}
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        "Sign Up"
                    }
                }

                {children}

                if let Some((text, kind)) = notice() {
                    Notice { text, kind }
                }
            }
        }
    }
}
