use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrophy;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::{Avatar, Page};
use crate::client::store::toast::ToastState;
use crate::model::leaderboard::LeaderboardEntryDto;

/// Refresh cadence for the standings.
#[cfg(feature = "web")]
const REFRESH_MILLIS: u32 = 10_000;

#[component]
pub fn Leaderboard() -> Element {
    let mut entries = use_signal(Vec::<LeaderboardEntryDto>::new);
    let toast = use_context::<Signal<ToastState>>();

    // Fetch on load and keep refreshing on a poll loop; the change feed of
    // the original re-fetched the whole list anyway.
    #[cfg(feature = "web")]
    use_future(move || async move {
        let mut toast = toast;
        loop {
            match crate::client::util::api::leaderboard().await {
                Ok(fetched) => entries.set(fetched),
                Err(err) => {
                    tracing::error!(err);
                    toast.write().show("Could not load the leaderboard");
                }
            }

            gloo_timers::future::TimeoutFuture::new(REFRESH_MILLIS).await;
        }
    });

    #[cfg(not(feature = "web"))]
    let _ = toast;

    rsx!(
        Title { "Leaderboard | ReadClash" }
        Meta {
            name: "description",
            content: "Top ReadClash players ranked by experience."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[960px] p-6",
                h2 { class: "text-2xl mb-4 flex items-center gap-2",
                    Icon { width: 24, height: 24, icon: FaTrophy }
                    "Leaderboard"
                }
                div { class: "overflow-x-auto",
                    table {
                        class: "table table-md",
                        thead {
                            tr {
                                th { "#" }
                                th { "Player" }
                                th { "Rank" }
                                th { "EXP" }
                                th { "Wins" }
                            }
                        }
                        tbody {
                            {entries.iter().map(|entry| rsx! {
                                tr {
                                    td { "{entry.position}" }
                                    td {
                                        div { class: "flex gap-2 items-center",
                                            Avatar { avatar: entry.avatar.clone(), class: "text-2xl" }
                                            p {
                                                "{entry.username}"
                                            }
                                        }
                                    }
                                    td { "{entry.rank_title}" }
                                    td { "{entry.experience}" }
                                    td { "{entry.wins}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    )
}
