use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::dashboard::{HistoryTable, ProfileCard};
use crate::client::components::Page;

#[component]
pub fn Dashboard() -> Element {
    rsx!(
        Title { "Dashboard | ReadClash" }
        Meta {
            name: "description",
            content: "Your ReadClash profile, rank progress and match history."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full h-full max-w-[1440px] p-6 flex flex-wrap justify-center gap-4",
                ProfileCard { }
                HistoryTable { }
            }
        }
    )
}
