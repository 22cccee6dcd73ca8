use dioxus::prelude::*;

use crate::client::store::user::UserState;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    let user_state = use_context::<Signal<UserState>>();

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                div { class: "flex items-center gap-2",
                    p { class: "text-xl",
                        "ReadClash"
                    }
                    p { class: "text-xs",
                        "v0.1.0.Alpha-1"
                    }
                }
            }
            div {
                class: "navbar-center",
                ul { class: "flex gap-4",
                    li {
                        Link { to: Route::Home {}, "Home" }
                    }
                    li {
                        Link { to: Route::Leaderboard {}, "Leaderboard" }
                    }
                }
            }
            div {
                class: "navbar-end",
                if user_state.read().is_logged_in() {
                    Link {
                        to: Route::Dashboard {},
                        class: "btn btn-primary",
                        "My Dashboard"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
