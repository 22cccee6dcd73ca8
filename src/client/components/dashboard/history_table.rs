use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::model::game::{MatchHistoryEntryDto, MatchOutcome};

#[component]
pub fn HistoryTable() -> Element {
    let mut history = use_signal(Vec::<MatchHistoryEntryDto>::new);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { crate::client::util::api::match_history().await });

        match &*future.read_unchecked() {
            Some(Ok(entries)) => {
                history.set(entries.clone());
            }
            Some(Err(err)) => {
                tracing::error!(err);
            }
            None => (),
        }
    }

    rsx!(
        div {
            class: "card shadow-sm w-full max-w-[640px]",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Match History"
                }
                if history.read().is_empty() {
                    p { class: "text-sm",
                        "No battles yet. Head to the Battle page to play your first match!"
                    }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-md",
                            thead {
                                tr {
                                    th { "Game" }
                                    th { "Opponent" }
                                    th { "Score" }
                                    th { "Result" }
                                    th { "EXP" }
                                }
                            }
                            tbody {
                                {history.iter().map(|entry| {
                                    let outcome = match entry.outcome {
                                        MatchOutcome::Won => "Won",
                                        MatchOutcome::Lost => "Lost",
                                        MatchOutcome::Draw => "Draw",
                                    };

                                    rsx! {
                                        tr {
                                            td { "{entry.game_type.label()}" }
                                            td { "{entry.opponent}" }
                                            td { "{entry.your_score} - {entry.opponent_score}" }
                                            td { "{outcome}" }
                                            td { "+{entry.experience_gained}" }
                                        }
                                    }
                                })}
                            }
                        }
                    }
                }
            }
        }
    )
}
