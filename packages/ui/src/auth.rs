//! Session context and hooks for the UI.

use api::Session;
use dioxus::prelude::*;

use crate::client::make_client;
use crate::icons::FaRightFromBracket;
use crate::Icon;

/// Get the current session.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Provider component that holds the process-wide [`Session`].
/// Wrap your app with this component; every session starts logged out.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(Session::default);
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button that drops the stored token and resets the session.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| {
        match make_client() {
            Ok(client) => session.write().log_out(&client),
            Err(e) => {
                tracing::error!("logout could not reach the token store: {e}");
                session.set(Session::default());
            }
        }
        on_logout.call(());
    };

    rsx! {
        button {
            class: "logout {class}",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}
