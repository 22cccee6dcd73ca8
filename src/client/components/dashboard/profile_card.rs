use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::{avatar::avatar_glyph, Avatar};
use crate::client::store::toast::ToastState;
use crate::client::store::user::UserState;
use crate::model::user::AVATARS;

#[component]
pub fn ProfileCard() -> Element {
    let user_state = use_context::<Signal<UserState>>();

    let state = user_state.read();
    let user_data = state.user.as_ref();

    rsx!(
        div {
            class: "card shadow-sm w-full max-w-96",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "My Profile"
                }
                div { class: "flex flex-col justify-center items-center p-2",
                    if let Some(user) = user_data {
                        Avatar { avatar: user.avatar.clone(), class: "text-7xl" }
                        p {
                            class: "text-lg font-semibold mt-2",
                            "{user.username}"
                        }
                        p {
                            class: "text-sm",
                            "{user.rank.title}"
                        }
                        RankProgress {
                            experience: user.experience,
                            floor: user.rank.floor,
                            next_at: user.rank.next_at,
                        }
                    } else {
                        div {
                            class: "skeleton h-32 w-32 rounded"
                        }
                        div {
                            class: "skeleton h-6 w-40 mt-2"
                        }
                    }
                }
                AvatarPicker { }
            }
        }
    )
}

/// Progress toward the next rank threshold.
#[component]
pub fn RankProgress(experience: i32, floor: i32, next_at: Option<i32>) -> Element {
    match next_at {
        Some(next_at) => {
            let span = (next_at - floor).max(1);
            let into = (experience - floor).clamp(0, span);
            let percent = into * 100 / span;

            rsx!(
                div { class: "w-full mt-2",
                    div { class: "flex justify-between text-xs",
                        p { "{experience} EXP" }
                        p { "next rank at {next_at}" }
                    }
                    progress {
                        class: "progress progress-primary w-full",
                        value: "{percent}",
                        max: "100",
                    }
                }
            )
        }
        None => rsx!(
            p { class: "text-xs mt-2",
                "{experience} EXP — top rank reached!"
            }
        ),
    }
}

#[component]
pub fn AvatarPicker() -> Element {
    let mut user_state = use_context::<Signal<UserState>>();
    let mut toast = use_context::<Signal<ToastState>>();

    let current = user_state
        .read()
        .user
        .as_ref()
        .map(|user| user.avatar.clone())
        .unwrap_or_default();

    rsx!(
        div { class: "flex justify-center gap-1 flex-wrap",
            {AVATARS.iter().map(|key| {
                let key = key.to_string();
                let selected = key == current;
                let class = if selected {
                    "btn btn-sm btn-active text-xl"
                } else {
                    "btn btn-sm btn-ghost text-xl"
                };

                rsx! {
                    button {
                        class: "{class}",
                        onclick: {
                            let key = key.clone();
                            move |_| {
                                let key = key.clone();

                                #[cfg(feature = "web")]
                                spawn(async move {
                                    match crate::client::util::api::update_avatar(key).await {
                                        Ok(user) => user_state.write().user = Some(user),
                                        Err(err) => {
                                            tracing::error!(err);
                                            toast.write().show("Could not update avatar");
                                        }
                                    }
                                });

                                #[cfg(not(feature = "web"))]
                                {
                                    let _ = key;
                                    let _ = &mut user_state;
                                    let _ = &mut toast;
                                }
                            }
                        },
                        {avatar_glyph(&key)}
                    }
                }
            })}
        }
    )
}
