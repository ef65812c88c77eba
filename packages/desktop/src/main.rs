use std::path::PathBuf;

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
    dotenvy::dotenv().ok();
    dioxus::launch(App);
}

/// `<config_dir>/eventide/eventide.toml`, then `EVENTIDE_API_URL` on top.
fn desktop_config() -> EventideConfig {
    let path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("eventide")
        .join(EventideConfig::filename());
    let config = EventideConfig::load(&path).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), "ignoring config file: {e}");
        EventideConfig::default()
    });
    config.with_env_overrides()
}

#[component]
fn App() -> Element {
    use_hook(|| {
        if let Err(e) = ui::configure(&desktop_config()) {
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
