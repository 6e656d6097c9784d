use crate::features::auth::state::{mount_redirect, use_auth};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Sends a signed-in user away from the login and signup forms. The check
/// runs once when the form mounts.
#[component]
pub fn RedirectIfSignedIn(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let Some(to) = mount_redirect(&auth) {
            navigate(to, Default::default());
        }
    });

    view! { {children()} }
}
