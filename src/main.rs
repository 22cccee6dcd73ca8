#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use readclash::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;
        use readclash::server::scheduler::cron::start_scheduler;

        use crate::server::{config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let session = startup::connect_to_session(&config).await.unwrap();
        let db = startup::connect_to_database(&config).await.unwrap();
        let chat = startup::build_chat_service(&config);
        start_scheduler(&db).await.unwrap();

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes()
            .with_state(AppState { db, chat })
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
