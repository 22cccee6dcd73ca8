use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::model::game::{MatchContentDto, SpellingWordDto};

/// Countdown before the first word appears.
const PREPARATION_SECONDS: u32 = 5;
/// Time per word.
const WORD_SECONDS: u32 = 20;

/// Forward-only quiz flow: a short preparation countdown, then one word at a
/// time prompted by its definition and example sentence.
#[derive(Clone, PartialEq)]
enum SpellingPhase {
    Loading,
    Preparation { seconds_left: u32 },
    Answering { index: usize, seconds_left: u32 },
    Finished { score: i32 },
}

/// Count of submissions spelling the stored word, ignoring surrounding
/// whitespace and letter case.
fn score_spelling(entries: &[String], words: &[SpellingWordDto]) -> i32 {
    entries
        .iter()
        .zip(words)
        .filter(|(entry, word)| entry.trim().eq_ignore_ascii_case(&word.word))
        .count() as i32
}

/// Hide the answer when the example sentence contains the word itself.
fn masked_sentence(word: &SpellingWordDto) -> String {
    let lowered = word.example_sentence.to_lowercase();
    let target = word.word.to_lowercase();

    match lowered.find(&target) {
        Some(start) => {
            let mut masked = word.example_sentence.clone();
            masked.replace_range(start..start + target.len(), "_____");
            masked
        }
        None => word.example_sentence.clone(),
    }
}

#[component]
pub fn SpellingGame(match_id: i32, on_complete: EventHandler<(i32, i32)>) -> Element {
    let mut phase = use_signal(|| SpellingPhase::Loading);
    let mut words = use_signal(Vec::<SpellingWordDto>::new);
    let mut entries = use_signal(Vec::<String>::new);
    let mut current_entry = use_signal(String::new);

    // Commit the current input, then move to the next word or settle.
    let mut advance = move || {
        let index = match phase() {
            SpellingPhase::Answering { index, .. } => index,
            _ => return,
        };

        entries.write()[index] = current_entry();
        current_entry.set(String::new());

        let next = index + 1;
        if next >= words.read().len() {
            let score = score_spelling(&entries.read(), &words.read());
            let total = words.read().len() as i32;

            phase.set(SpellingPhase::Finished { score });
            on_complete.call((score, total));
        } else {
            phase.set(SpellingPhase::Answering {
                index: next,
                seconds_left: WORD_SECONDS,
            });
        }
    };

    // Load the match content once
    #[cfg(feature = "web")]
    use_future(move || async move {
        match crate::client::util::api::match_content(match_id).await {
            Ok(MatchContentDto::Spelling { words: fetched }) => {
                entries.set(vec![String::new(); fetched.len()]);
                words.set(fetched);
                phase.set(SpellingPhase::Preparation {
                    seconds_left: PREPARATION_SECONDS,
                });
            }
            Ok(_) => tracing::error!("Expected spelling content for match {}", match_id),
            Err(err) => tracing::error!(err),
        }
    });

    // One-second tick driving the countdowns
    #[cfg(feature = "web")]
    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(1_000).await;

            match phase() {
                SpellingPhase::Preparation { seconds_left } => {
                    if seconds_left <= 1 {
                        phase.set(SpellingPhase::Answering {
                            index: 0,
                            seconds_left: WORD_SECONDS,
                        });
                    } else {
                        phase.set(SpellingPhase::Preparation {
                            seconds_left: seconds_left - 1,
                        });
                    }
                }
                SpellingPhase::Answering { index, seconds_left } => {
                    if seconds_left <= 1 {
                        // Time ran out: whatever was typed is the answer
                        advance();
                    } else {
                        phase.set(SpellingPhase::Answering {
                            index,
                            seconds_left: seconds_left - 1,
                        });
                    }
                }
                SpellingPhase::Finished { .. } => break,
                SpellingPhase::Loading => (),
            }
        }
    });

    match phase() {
        SpellingPhase::Loading => rsx!(
            div { class: "flex justify-center p-8",
                div { class: "skeleton h-64 w-full max-w-[640px]" }
            }
        ),
        SpellingPhase::Preparation { seconds_left } => rsx!(
            div { class: "card shadow-sm w-full max-w-[720px]",
                div { class: "card-body items-center",
                    h2 { class: "card-title",
                        "Get ready to spell!"
                    }
                    p { class: "text-4xl font-mono",
                        "{seconds_left}"
                    }
                }
            }
        ),
        SpellingPhase::Answering { index, seconds_left } => {
            let word = words.read().get(index).cloned();
            let total = words.read().len();

            match word {
                Some(word) => {
                    let sentence = masked_sentence(&word);

                    rsx!(
                        div { class: "card shadow-sm w-full max-w-[720px]",
                            div { class: "card-body",
                                div { class: "flex justify-between items-center",
                                    p { class: "text-sm",
                                        "Word {index + 1} of {total}"
                                    }
                                    p { class: "font-mono",
                                        "{seconds_left}s"
                                    }
                                }
                                p { class: "font-semibold",
                                    "Definition"
                                }
                                p {
                                    "{word.definition}"
                                }
                                p { class: "font-semibold",
                                    "Example"
                                }
                                p {
                                    "{sentence}"
                                }
                                input {
                                    class: "input input-bordered w-full",
                                    r#type: "text",
                                    placeholder: "Type the word",
                                    autocomplete: "off",
                                    value: "{current_entry}",
                                    oninput: move |e| current_entry.set(e.value()),
                                    onkeydown: move |e| {
                                        if e.key() == Key::Enter {
                                            advance();
                                        }
                                    },
                                }
                                button {
                                    class: "btn btn-secondary",
                                    onclick: move |_| advance(),
                                    if index + 1 == total { "Finish" } else { "Next word" }
                                }
                            }
                        }
                    )
                }
                None => rsx!(),
            }
        }
        SpellingPhase::Finished { score } => {
            let total = words.read().len();

            rsx!(
                div { class: "card shadow-sm w-full max-w-[720px]",
                    div { class: "card-body items-center",
                        h2 { class: "card-title",
                            "Quiz finished!"
                        }
                        p {
                            "You spelled {score} of {total} correctly. Waiting for your opponent..."
                        }
                    }
                }
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{masked_sentence, score_spelling};
    use crate::model::game::SpellingWordDto;

    fn word(id: i32, word: &str, sentence: &str) -> SpellingWordDto {
        SpellingWordDto {
            id,
            word: word.to_string(),
            definition: String::new(),
            example_sentence: sentence.to_string(),
        }
    }

    /// Expect the score to equal the count of exact word matches
    #[test]
    fn test_score_counts_exact_matches() {
        let words = vec![
            word(1, "rhythm", ""),
            word(2, "necessary", ""),
            word(3, "island", ""),
        ];
        let entries = vec![
            "rhythm".to_string(),
            "neccessary".to_string(),
            "island".to_string(),
        ];

        assert_eq!(score_spelling(&entries, &words), 2);
    }

    /// Expect surrounding whitespace and case to be ignored
    #[test]
    fn test_score_trims_and_folds_case() {
        let words = vec![word(1, "Because", "")];
        let entries = vec!["  because  ".to_string()];

        assert_eq!(score_spelling(&entries, &words), 1);
    }

    /// Expect empty submissions to score zero
    #[test]
    fn test_score_empty_entries() {
        let words = vec![word(1, "friend", ""), word(2, "island", "")];
        let entries = vec![String::new(), String::new()];

        assert_eq!(score_spelling(&entries, &words), 0);
    }

    /// Expect the answer word to be masked out of the example sentence
    #[test]
    fn test_masked_sentence_hides_word() {
        let word = word(1, "island", "The ferry sails to the island twice a day.");

        let masked = masked_sentence(&word);

        assert!(!masked.to_lowercase().contains("island"));
        assert!(masked.contains("_____"));
    }

    /// Expect sentences without the word to pass through unchanged
    #[test]
    fn test_masked_sentence_passthrough() {
        let word = word(1, "conscience", "She did the right thing.");

        assert_eq!(masked_sentence(&word), "She did the right thing.");
    }
}
