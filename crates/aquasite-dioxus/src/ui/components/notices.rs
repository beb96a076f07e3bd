use aquasite_engine::editing::{Notice, NoticeLevel};
use dioxus::prelude::*;

#[component]
pub fn NoticeList(notices: Vec<Notice>, on_dismiss: Callback<usize>) -> Element {
    if notices.is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            class: "notices",
            "role": "status",
            for (index, notice) in notices.into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: match notice.level {
                        NoticeLevel::Info => "notice notice-info",
                        NoticeLevel::Error => "notice notice-error",
                    },
                    span { "{notice.message}" }
                    button {
                        class: "notice-dismiss",
                        "aria-label": "Dispensar",
                        onclick: move |_| on_dismiss.call(index),
                        "×"
                    }
                }
            }
        }
    }
}
