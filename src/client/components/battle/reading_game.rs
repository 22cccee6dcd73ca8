use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::model::game::{MatchContentDto, PassageDto, QuestionDto};

/// Time with the passage before questions begin.
const READING_SECONDS: u32 = 60;
/// Time per question.
const QUESTION_SECONDS: u32 = 30;

/// Forward-only quiz flow: read the passage against a countdown, answer each
/// question in turn, then report the score upward.
#[derive(Clone, PartialEq)]
enum ReadingPhase {
    Loading,
    Reading { seconds_left: u32 },
    Answering { index: usize, seconds_left: u32 },
    Finished { score: i32 },
}

/// Count of selected answers matching the stored correct option exactly.
fn score_reading(answers: &[Option<usize>], questions: &[QuestionDto]) -> i32 {
    answers
        .iter()
        .zip(questions)
        .filter(|(answer, question)| **answer == Some(question.correct_index as usize))
        .count() as i32
}

#[component]
pub fn ReadingGame(match_id: i32, on_complete: EventHandler<(i32, i32)>) -> Element {
    let mut phase = use_signal(|| ReadingPhase::Loading);
    let mut passage = use_signal(|| None::<PassageDto>);
    let mut questions = use_signal(Vec::<QuestionDto>::new);
    let mut answers = use_signal(Vec::<Option<usize>>::new);

    // Move to the next question, or settle the score on the last one.
    let mut advance = move || {
        let next = match phase() {
            ReadingPhase::Answering { index, .. } => index + 1,
            _ => return,
        };

        if next >= questions.read().len() {
            let score = score_reading(&answers.read(), &questions.read());
            let total = questions.read().len() as i32;

            phase.set(ReadingPhase::Finished { score });
            on_complete.call((score, total));
        } else {
            phase.set(ReadingPhase::Answering {
                index: next,
                seconds_left: QUESTION_SECONDS,
            });
        }
    };

    // Load the match content once
    #[cfg(feature = "web")]
    use_future(move || async move {
        match crate::client::util::api::match_content(match_id).await {
            Ok(MatchContentDto::Reading {
                passage: fetched_passage,
                questions: fetched_questions,
            }) => {
                answers.set(vec![None; fetched_questions.len()]);
                passage.set(Some(fetched_passage));
                questions.set(fetched_questions);
                phase.set(ReadingPhase::Reading {
                    seconds_left: READING_SECONDS,
                });
            }
            Ok(_) => tracing::error!("Expected reading content for match {}", match_id),
            Err(err) => tracing::error!(err),
        }
    });

    // One-second tick driving the countdowns
    #[cfg(feature = "web")]
    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(1_000).await;

            match phase() {
                ReadingPhase::Reading { seconds_left } => {
                    if seconds_left <= 1 {
                        phase.set(ReadingPhase::Answering {
                            index: 0,
                            seconds_left: QUESTION_SECONDS,
                        });
                    } else {
                        phase.set(ReadingPhase::Reading {
                            seconds_left: seconds_left - 1,
                        });
                    }
                }
                ReadingPhase::Answering { index, seconds_left } => {
                    if seconds_left <= 1 {
                        // Time ran out: the question stays unanswered
                        advance();
                    } else {
                        phase.set(ReadingPhase::Answering {
                            index,
                            seconds_left: seconds_left - 1,
                        });
                    }
                }
                ReadingPhase::Finished { .. } => break,
                ReadingPhase::Loading => (),
            }
        }
    });

    match phase() {
        ReadingPhase::Loading => rsx!(
            div { class: "flex justify-center p-8",
                div { class: "skeleton h-64 w-full max-w-[640px]" }
            }
        ),
        ReadingPhase::Reading { seconds_left } => rsx!(
            div { class: "card shadow-sm w-full max-w-[720px]",
                div { class: "card-body",
                    div { class: "flex justify-between items-center",
                        h2 { class: "card-title",
                            {passage.read().as_ref().map(|p| p.title.clone()).unwrap_or_default()}
                        }
                        p { class: "font-mono",
                            "{seconds_left}s"
                        }
                    }
                    p { class: "whitespace-pre-line",
                        {passage.read().as_ref().map(|p| p.body.clone()).unwrap_or_default()}
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            phase.set(ReadingPhase::Answering {
                                index: 0,
                                seconds_left: QUESTION_SECONDS,
                            });
                        },
                        "Start answering"
                    }
                }
            }
        ),
        ReadingPhase::Answering { index, seconds_left } => {
            let question = questions.read().get(index).cloned();
            let total = questions.read().len();
            let selected = answers.read().get(index).copied().flatten();

            match question {
                Some(question) => rsx!(
                    div { class: "card shadow-sm w-full max-w-[720px]",
                        div { class: "card-body",
                            div { class: "flex justify-between items-center",
                                p { class: "text-sm",
                                    "Question {index + 1} of {total}"
                                }
                                p { class: "font-mono",
                                    "{seconds_left}s"
                                }
                            }
                            h2 { class: "card-title",
                                "{question.prompt}"
                            }
                            div { class: "flex flex-col gap-2",
                                {question.options.iter().enumerate().map(|(option_index, option)| {
                                    let class = if selected == Some(option_index) {
                                        "btn btn-primary justify-start"
                                    } else {
                                        "btn btn-outline justify-start"
                                    };

                                    rsx! {
                                        button {
                                            class: "{class}",
                                            onclick: move |_| {
                                                answers.write()[index] = Some(option_index);
                                            },
                                            "{option}"
                                        }
                                    }
                                })}
                            }
                            button {
                                class: "btn btn-secondary",
                                disabled: selected.is_none(),
                                onclick: move |_| advance(),
                                if index + 1 == total { "Finish" } else { "Next question" }
                            }
                        }
                    }
                ),
                None => rsx!(),
            }
        }
        ReadingPhase::Finished { score } => {
            let total = questions.read().len();

            rsx!(
                div { class: "card shadow-sm w-full max-w-[720px]",
                    div { class: "card-body items-center",
                        h2 { class: "card-title",
                            "Quiz finished!"
                        }
                        p {
                            "You answered {score} of {total} correctly. Waiting for your opponent..."
                        }
                    }
                }
            )
        }
    }
}
