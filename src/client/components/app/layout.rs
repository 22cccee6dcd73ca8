use dioxus::prelude::*;

use crate::client::components::app::AppNavbar;
use crate::client::router::Route;
use crate::client::store::user::UserState;

/// Layout for the logged-in section. Renders a skeleton until the user fetch
/// resolves, then either the app chrome or a redirect home.
#[component]
pub fn AppLayout() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let navigator = use_navigator();

    let state = user_state.read();

    if !state.fetched {
        return rsx!(
            div { class: "min-h-screen flex items-center justify-center",
                div { class: "skeleton h-32 w-64" }
            }
        );
    }

    if !state.is_logged_in() {
        navigator.replace(Route::Home {});
        return rsx!();
    }

    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
