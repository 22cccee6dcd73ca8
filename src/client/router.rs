use dioxus::prelude::*;

use crate::client::{
    components::{app::AppLayout, Navbar},
    routes::{Battle, Chat, Dashboard, Home, Leaderboard, NotFound},
};

use crate::client::routes::NotFound as AppNotFound;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/leaderboard")]
    Leaderboard {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },

    #[end_layout]

    #[nest("/app")]

        #[layout(AppLayout)]

        #[route("/")]
        Dashboard {},

        #[route("/battle")]
        Battle {},

        #[route("/chat")]
        Chat {},

        #[route("/:..segments")]
        AppNotFound { segments: Vec<String> },
}
