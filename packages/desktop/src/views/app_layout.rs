use dioxus::prelude::*;
use ui::{use_session, LogoutButton, Navbar};

use crate::Route;

/// Shell for the logged-in routes. Sends logged-out visitors to login.
#[component]
pub fn AppLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();

    use_effect(move || {
        if !session().logged_in {
            nav.replace(Route::Login {});
        }
    });

    if !session().logged_in {
        return rsx! {};
    }

    rsx! {
        Navbar {
            Link { to: Route::Dashboard {}, "Dashboard" }
            Link { to: Route::Profile {}, "Profile" }
            LogoutButton {
                on_logout: move |_| {
                    nav.replace(Route::Login {});
                },
            }
        }
        Outlet::<Route> {}
    }
}
