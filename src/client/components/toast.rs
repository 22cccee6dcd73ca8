use dioxus::prelude::*;

use crate::client::store::toast::ToastState;

/// Transient error banner. Failed data calls show a message here instead of
/// breaking the page; it dismisses itself after a few seconds.
#[component]
pub fn Toast() -> Element {
    let mut toast = use_context::<Signal<ToastState>>();

    #[cfg(feature = "web")]
    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(1_000).await;
            toast.write().tick();
        }
    });

    let message = toast.read().message.clone();

    match message {
        Some(message) => rsx!(
            div { class: "toast toast-top toast-center",
                div { class: "alert alert-error",
                    span {
                        "{message}"
                    }
                    button {
                        class: "btn btn-ghost btn-xs",
                        onclick: move |_| toast.write().dismiss(),
                        "✕"
                    }
                }
            }
        ),
        None => rsx!(),
    }
}
