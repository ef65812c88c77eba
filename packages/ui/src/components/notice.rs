use api::StatusMessage;
use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum NoticeKind {
    #[default]
    Info,
    Error,
}

impl From<&StatusMessage> for NoticeKind {
    fn from(message: &StatusMessage) -> Self {
        if message.is_error() {
            NoticeKind::Error
        } else {
            NoticeKind::Info
        }
    }
}

/// A one-line status message under a form or at the top of a view.
#[component]
pub fn Notice(text: String, #[props(default)] kind: NoticeKind) -> Element {
    let class = match kind {
        NoticeKind::Info => "notice",
        NoticeKind::Error => "notice notice-error",
    };

    rsx! {
        p {
            class: class,
            role: "status",
            "{text}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_outcome() {
        let failed = StatusMessage::Failure("Error accepting invite".into());
        let done = StatusMessage::Success("Invite accepted successfully!".into());
        assert_eq!(NoticeKind::from(&failed), NoticeKind::Error);
        assert_eq!(NoticeKind::from(&done), NoticeKind::Info);
    }

    #[test]
    fn test_error_notice_is_styled() {
        fn app() -> Element {
            rsx! {
                Notice { text: "Error fetching invites", kind: NoticeKind::Error }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("notice notice-error"));
        assert!(html.contains("Error fetching invites"));
    }
}
