use dioxus::prelude::*;

use crate::client::components::Toast;
use crate::client::router::Route;
use crate::client::store::toast::ToastState;
use crate::client::store::user::UserState;

#[component]
pub fn App() -> Element {
    let user_state = use_context_provider(|| Signal::new(UserState::default()));
    use_context_provider(|| Signal::new(ToastState::default()));

    // Resolve the logged in user once on load; pages render skeletons until
    // `fetched` flips.
    #[cfg(feature = "web")]
    {
        let mut user_state = user_state;
        use_future(move || async move {
            let user = crate::client::util::api::fetch_current_user()
                .await
                .unwrap_or(None);

            let mut state = user_state.write();
            state.user = user;
            state.fetched = true;
        });
    }

    let _ = user_state;

    rsx! {
        Router::<Route> {}

        Toast {}
    }
}
