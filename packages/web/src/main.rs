use dioxus::prelude::*;

use store::EventideConfig;
use ui::SessionProvider;
use views::{AppLayout, Dashboard, Login, Profile, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Signup {},
    #[route("/login")]
    Login {},
    #[layout(AppLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/profile")]
        Profile {},
}

fn main() {
    dioxus::launch(App);
}

/// Web builds have no config file; the Invite Service URL is baked in at compile time.
fn web_config() -> EventideConfig {
    let config = EventideConfig::default();
    match option_env!("EVENTIDE_API_URL") {
        Some(url) if !url.trim().is_empty() => config.with_api_url(url.trim()),
        _ => config,
    }
}

#[component]
fn App() -> Element {
    use_hook(|| {
        if let Err(e) = ui::configure(&web_config()) {
            tracing::error!("invalid Invite Service URL, using default: {e}");
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::EVENTIDE_CSS }
        SessionProvider {
            Router::<Route> {}
        }
    }
}
