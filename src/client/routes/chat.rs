use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPaperPlane;
use dioxus_free_icons::Icon;

use crate::client::components::Page;
use crate::model::chat::ChatSource;

/// One line of the transcript; kept only in component memory.
#[derive(Clone, PartialEq)]
struct TranscriptEntry {
    from_user: bool,
    text: String,
    source: Option<ChatSource>,
}

#[component]
pub fn Chat() -> Element {
    let mut transcript = use_signal(Vec::<TranscriptEntry>::new);
    let mut draft = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let mut send = move || {
        let message = draft().trim().to_string();
        if message.is_empty() || busy() {
            return;
        }

        draft.set(String::new());
        transcript.write().push(TranscriptEntry {
            from_user: true,
            text: message.clone(),
            source: None,
        });

        #[cfg(feature = "web")]
        {
            busy.set(true);
            spawn(async move {
                let entry = match crate::client::util::api::send_chat(message).await {
                    Ok(reply) => TranscriptEntry {
                        from_user: false,
                        text: reply.reply,
                        source: Some(reply.source),
                    },
                    // The tutor never shows an error state, only an apology
                    Err(_) => TranscriptEntry {
                        from_user: false,
                        text: "Sorry, I lost my train of thought. Could you ask that again?"
                            .to_string(),
                        source: Some(ChatSource::Fallback),
                    },
                };

                transcript.write().push(entry);
                busy.set(false);
            });
        }
    };

    rsx!(
        Title { "Tutor | ReadClash" }
        Meta {
            name: "description",
            content: "Ask the ReadClash tutor about reading, spelling and the game."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[720px] p-6 flex flex-col gap-4",
                h2 { class: "text-2xl",
                    "Reading Tutor"
                }
                div { class: "flex flex-col gap-2 min-h-[320px]",
                    if transcript.read().is_empty() {
                        p { class: "text-sm",
                            "Ask me anything about reading, spelling, or how battles work!"
                        }
                    }
                    {transcript.iter().map(|entry| {
                        let bubble = if entry.from_user {
                            "chat chat-end"
                        } else {
                            "chat chat-start"
                        };
                        let badge = match entry.source {
                            Some(ChatSource::Assistant) => Some("assistant"),
                            Some(ChatSource::Fallback) => Some("offline"),
                            _ => None,
                        };

                        rsx! {
                            div { class: "{bubble}",
                                div { class: "chat-bubble",
                                    "{entry.text}"
                                }
                                if let Some(badge) = badge {
                                    div { class: "chat-footer text-xs opacity-50",
                                        "{badge}"
                                    }
                                }
                            }
                        }
                    })}
                    if busy() {
                        div { class: "chat chat-start",
                            div { class: "chat-bubble",
                                span { class: "loading loading-dots loading-sm" }
                            }
                        }
                    }
                }
                div { class: "flex gap-2",
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        placeholder: "Ask the tutor...",
                        value: "{draft}",
                        oninput: move |e| draft.set(e.value()),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                send();
                            }
                        },
                    }
                    button {
                        class: "btn btn-primary flex gap-2",
                        disabled: busy(),
                        onclick: move |_| send(),
                        Icon { width: 16, height: 16, icon: FaPaperPlane }
                        "Send"
                    }
                }
            }
        }
    )
}
