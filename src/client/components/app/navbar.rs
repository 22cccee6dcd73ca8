use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::Avatar;
use crate::client::router::Route;
use crate::client::store::user::UserState;

#[component]
pub fn AppNavbar() -> Element {
    let mut user_state = use_context::<Signal<UserState>>();
    let navigator = use_navigator();

    let (username, avatar) = {
        let state = user_state.read();
        match state.user.as_ref() {
            Some(user) => (user.username.clone(), user.avatar.clone()),
            None => (String::new(), String::new()),
        }
    };

    let on_logout = move |_| {
        #[cfg(feature = "web")]
        {
            spawn(async move {
                if let Err(err) = crate::client::util::api::logout().await {
                    tracing::error!(err);
                }

                user_state.write().user = None;
                navigator.replace(Route::Home {});
            });
        }
    };

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                div { class: "flex items-center gap-2",
                    p { class: "text-xl",
                        "ReadClash"
                    }
                }
            }
            div {
                class: "navbar-center",
                ul { class: "flex gap-4",
                    li {
                        Link { to: Route::Dashboard {}, "Dashboard" }
                    }
                    li {
                        Link { to: Route::Battle {}, "Battle" }
                    }
                    li {
                        Link { to: Route::Leaderboard {}, "Leaderboard" }
                    }
                    li {
                        Link { to: Route::Chat {}, "Tutor" }
                    }
                }
            }
            div {
                class: "navbar-end",
                div { class: "flex items-center gap-2",
                    Avatar { avatar: avatar, class: "text-2xl" }
                    p {
                        "{username}"
                    }
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: on_logout,
                        "Log out"
                    }
                }
            }
        }
    }
}
