use dioxus::prelude::*;

use crate::icons::FaCalendarCheck;
use crate::Icon;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        div {
            class: "navbar",
            span {
                class: "navbar-brand",
                Icon { icon: FaCalendarCheck, width: 18, height: 18 }
                "Eventide"
            }
            div {
                class: "navbar-links",
                {children}
            }
        }
    }
}
