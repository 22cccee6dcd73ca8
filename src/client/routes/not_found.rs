use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx!(
        Page { class: "flex flex-col items-center justify-center gap-2",
            p { class: "text-2xl",
                "404"
            }
            p {
                "This page wandered off the shelf."
            }
        }
    )
}
