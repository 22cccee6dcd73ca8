use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::store::user::UserState;
use crate::model::game::{MatchOutcome, MatchResultDto};

/// Poll cadence while waiting for the opponent's report.
#[cfg(feature = "web")]
const POLL_MILLIS: u32 = 2_000;

/// Shows the settled result of a match, polling until the opponent's report
/// lands.
#[component]
pub fn ResultCard(match_id: i32, on_back: EventHandler<()>) -> Element {
    let mut result = use_signal(|| None::<MatchResultDto>);

    #[cfg(feature = "web")]
    {
        let mut user_state = use_context::<Signal<UserState>>();

        use_future(move || async move {
            loop {
                match crate::client::util::api::match_result(match_id).await {
                    Ok(fetched) => {
                        let completed = fetched.completed;
                        result.set(Some(fetched));

                        if completed {
                            // Experience changed; refresh the shared user state
                            if let Ok(user) =
                                crate::client::util::api::fetch_current_user().await
                            {
                                let mut state = user_state.write();
                                state.user = user;
                                state.fetched = true;
                            }
                            break;
                        }
                    }
                    Err(err) => tracing::error!(err),
                }

                gloo_timers::future::TimeoutFuture::new(POLL_MILLIS).await;
            }
        });
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = use_context::<Signal<UserState>>();
    }

    let current = result.read().clone();

    match current {
        Some(result) if result.completed => {
            let headline = match result.outcome {
                Some(MatchOutcome::Won) => "Victory!",
                Some(MatchOutcome::Lost) => "Defeat",
                Some(MatchOutcome::Draw) | None => "It's a draw",
            };
            let your_score = result.your_score.unwrap_or(0);
            let opponent_score = result.opponent_score.unwrap_or(0);
            let gained = result.experience_gained.unwrap_or(0);

            rsx!(
                div { class: "card shadow-sm w-full max-w-[720px]",
                    div { class: "card-body items-center",
                        h2 { class: "card-title text-2xl",
                            "{headline}"
                        }
                        p {
                            "{your_score} - {opponent_score} against {result.opponent.username}"
                        }
                        p { class: "font-semibold",
                            "+{gained} EXP"
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| on_back.call(()),
                            "Back to the lobby"
                        }
                    }
                }
            )
        }
        _ => rsx!(
            div { class: "card shadow-sm w-full max-w-[720px]",
                div { class: "card-body items-center",
                    h2 { class: "card-title",
                        "Waiting for your opponent to finish..."
                    }
                    span { class: "loading loading-dots loading-lg" }
                }
            }
        ),
    }
}
