use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::user::UserState;

#[component]
pub fn Home() -> Element {
    let user_state = use_context::<Signal<UserState>>();

    rsx!(
        Title { "ReadClash Home" }
        Meta {
            name: "description",
            content: "Player-vs-player reading comprehension and spelling battles with an AI chat tutor."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                div { class: "flex items-center gap-2",
                    p { class: "text-2xl",
                        "ReadClash"
                    }
                    p {
                        "v0.1.0-Alpha.1"
                    }
                }
                div { class: "flex flex-col gap-2 px-4 max-w-256 text-center",
                    p { class: "font-bold",
                        "Battle other readers, climb the leaderboard"
                    }
                    p {
                        "Face off in reading comprehension and spelling battles against other players.
                        Both of you get the same passage or word list, the sharper reader wins. Every
                        finished match earns experience toward your next rank, and the tutor is always
                        around if you want to ask about anything you read."
                    }
                }
                if user_state.read().is_logged_in() {
                    Link {
                        to: Route::Dashboard {},
                        class: "btn btn-primary w-48",
                        "Go to Dashboard"
                    }
                } else if user_state.read().fetched {
                    LoginCard { }
                } else {
                    div { class: "skeleton h-64 w-80" }
                }
            }
        }
    )
}

#[component]
pub fn LoginCard() -> Element {
    let mut registering = use_signal(|| false);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let mut user_state = use_context::<Signal<UserState>>();
    let navigator = use_navigator();

    let on_submit = move |_| {
        let username = username();
        let password = password();

        if username.trim().is_empty() || password.is_empty() {
            error.set(Some("Enter a username and password".to_string()));
            return;
        }

        #[cfg(feature = "web")]
        {
            use crate::client::util::api;

            spawn(async move {
                let result = if registering() {
                    api::register(username, password).await
                } else {
                    api::login(username, password).await
                };

                match result {
                    Ok(user) => {
                        let mut state = user_state.write();
                        state.user = Some(user);
                        state.fetched = true;
                        drop(state);

                        navigator.push(Route::Dashboard {});
                    }
                    Err(err) => error.set(Some(err)),
                }
            });
        }

        #[cfg(not(feature = "web"))]
        {
            let _ = &mut user_state;
            let _ = &navigator;
        }
    };

    let heading = if registering() { "Create account" } else { "Log in" };
    let switch_label = if registering() {
        "Already have an account? Log in"
    } else {
        "New here? Create an account"
    };

    rsx!(
        div { class: "card shadow-sm w-full max-w-96",
            div { class: "card-body",
                h2 { class: "card-title",
                    "{heading}"
                }
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    placeholder: "Username",
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }
                input {
                    class: "input input-bordered w-full",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                if let Some(message) = error() {
                    p { class: "text-error text-sm",
                        "{message}"
                    }
                }
                button {
                    class: "btn btn-primary w-full",
                    onclick: on_submit,
                    "{heading}"
                }
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| {
                        error.set(None);
                        registering.set(!registering());
                    },
                    "{switch_label}"
                }
            }
        }
    )
}
