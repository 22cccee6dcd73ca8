use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBookOpen, FaKeyboard};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::battle::{ReadingGame, ResultCard, SpellingGame};
use crate::client::components::Page;
use crate::client::store::toast::ToastState;
use crate::model::game::{GameType, OpponentDto, QueueStatusDto};

/// Poll cadence while waiting in the queue.
#[cfg(feature = "web")]
const POLL_MILLIS: u32 = 2_000;

#[derive(Clone, PartialEq)]
enum BattleStage {
    Lobby,
    Waiting {
        game_type: GameType,
    },
    Playing {
        match_id: i32,
        game_type: GameType,
        opponent: OpponentDto,
    },
    Finished {
        match_id: i32,
    },
}

impl BattleStage {
    fn from_status(status: QueueStatusDto) -> Self {
        match status {
            QueueStatusDto::Idle => BattleStage::Lobby,
            QueueStatusDto::Waiting { game_type } => BattleStage::Waiting { game_type },
            QueueStatusDto::Matched {
                match_id,
                game_type,
                opponent,
            } => BattleStage::Playing {
                match_id,
                game_type,
                opponent,
            },
        }
    }
}

#[component]
pub fn Battle() -> Element {
    let mut stage = use_signal(|| BattleStage::Lobby);
    let mut toast = use_context::<Signal<ToastState>>();

    // Resume whatever state the server has for us (a refresh mid-match lands
    // back in the running game), then keep polling while waiting.
    #[cfg(feature = "web")]
    use_future(move || async move {
        loop {
            if matches!(stage(), BattleStage::Lobby | BattleStage::Waiting { .. }) {
                match crate::client::util::api::queue_status().await {
                    Ok(status) => {
                        let next = BattleStage::from_status(status);
                        // Never poll ourselves out of the lobby once the user
                        // cancelled locally
                        if !matches!(
                            (&stage(), &next),
                            (BattleStage::Lobby, BattleStage::Lobby)
                        ) {
                            stage.set(next);
                        }
                    }
                    Err(err) => tracing::error!(err),
                }
            }

            gloo_timers::future::TimeoutFuture::new(POLL_MILLIS).await;
        }
    });

    let mut join = move |game_type: GameType| {
        #[cfg(feature = "web")]
        spawn(async move {
            match crate::client::util::api::join_queue(game_type).await {
                Ok(status) => stage.set(BattleStage::from_status(status)),
                Err(err) => {
                    tracing::error!(err);
                    toast.write().show("Could not join the queue");
                }
            }
        });

        #[cfg(not(feature = "web"))]
        {
            let _ = game_type;
            let _ = &mut toast;
        }
    };

    let cancel = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            if let Err(err) = crate::client::util::api::leave_queue().await {
                tracing::error!(err);
                toast.write().show("Could not leave the queue");
            }
            stage.set(BattleStage::Lobby);
        });
    };

    rsx!(
        Title { "Battle | ReadClash" }
        Meta {
            name: "description",
            content: "Queue up for a reading comprehension or spelling battle."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[960px] p-6 flex flex-col items-center gap-4",
                match stage() {
                    BattleStage::Lobby => rsx!(
                        h2 { class: "text-2xl",
                            "Choose your battle"
                        }
                        div { class: "flex flex-wrap justify-center gap-4",
                            QueueCard {
                                game_type: GameType::Reading,
                                description: "Read a passage, answer questions about it. Best score wins.",
                                on_join: move |game_type| join(game_type),
                            }
                            QueueCard {
                                game_type: GameType::Spelling,
                                description: "Spell words from their definitions. Best score wins.",
                                on_join: move |game_type| join(game_type),
                            }
                        }
                    ),
                    BattleStage::Waiting { game_type } => rsx!(
                        div { class: "card shadow-sm w-full max-w-96",
                            div { class: "card-body items-center",
                                h2 { class: "card-title",
                                    "Looking for a {game_type.label()} opponent..."
                                }
                                span { class: "loading loading-dots loading-lg" }
                                button {
                                    class: "btn btn-ghost",
                                    onclick: cancel,
                                    "Cancel"
                                }
                            }
                        }
                    ),
                    BattleStage::Playing { match_id, game_type, opponent } => rsx!(
                        p { class: "text-sm",
                            "Battling {opponent.username} ({opponent.rank_title})"
                        }
                        match game_type {
                            GameType::Reading => rsx!(
                                ReadingGame {
                                    match_id,
                                    on_complete: move |(score, total)| {
                                        finish_match(stage, match_id, score, total);
                                    },
                                }
                            ),
                            GameType::Spelling => rsx!(
                                SpellingGame {
                                    match_id,
                                    on_complete: move |(score, total)| {
                                        finish_match(stage, match_id, score, total);
                                    },
                                }
                            ),
                        }
                    ),
                    BattleStage::Finished { match_id } => rsx!(
                        ResultCard {
                            match_id,
                            on_back: move |_| stage.set(BattleStage::Lobby),
                        }
                    ),
                }
            }
        }
    )
}

/// Report the local quiz result upward, then move to the result screen.
fn finish_match(mut stage: Signal<BattleStage>, match_id: i32, score: i32, total: i32) {
    #[cfg(feature = "web")]
    spawn(async move {
        if let Err(err) = crate::client::util::api::report_score(match_id, score, total).await {
            tracing::error!(err);
        }

        stage.set(BattleStage::Finished { match_id });
    });

    #[cfg(not(feature = "web"))]
    {
        let _ = (score, total);
        stage.set(BattleStage::Finished { match_id });
    }
}

#[component]
fn QueueCard(
    game_type: GameType,
    description: &'static str,
    on_join: EventHandler<GameType>,
) -> Element {
    rsx!(
        div { class: "card shadow-sm w-full max-w-96",
            div { class: "card-body items-center",
                match game_type {
                    GameType::Reading => rsx!(Icon { width: 32, height: 32, icon: FaBookOpen }),
                    GameType::Spelling => rsx!(Icon { width: 32, height: 32, icon: FaKeyboard }),
                }
                h2 { class: "card-title",
                    "{game_type.label()}"
                }
                p { class: "text-sm text-center",
                    "{description}"
                }
                button {
                    class: "btn btn-primary w-42",
                    onclick: move |_| on_join.call(game_type),
                    "Find opponent"
                }
            }
        }
    )
}
