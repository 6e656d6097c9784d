//! Landing page. Job listings live behind their own routes; this page only
//! greets the visitor and points at the next step.

use crate::app_lib::theme::Theme;
use crate::components::AppShell;
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.session
            .with(|user| user.as_ref().map(|user| format!("Welcome, {}", user.fullname)))
            .unwrap_or_else(|| "Search, Apply & Get Your Dream Jobs".to_string())
    };

    view! {
        <AppShell>
            <section class="my-16 flex flex-col items-center gap-5 px-4 text-center">
                <span class="rounded-full bg-gray-100 px-4 py-2 font-medium text-[#F83002]">
                    "No. 1 Job Hunt Website"
                </span>
                <h1 class="text-4xl font-bold sm:text-5xl">{greeting}</h1>
                <Show when=move || !auth.is_authenticated.get()>
                    <div class="flex gap-2">
                        <A href=paths::LOGIN {..} class=Theme::ACTION_OUTLINE>"Login"</A>
                        <A href=paths::SIGNUP {..} class=Theme::ACTION_PRIMARY>"Signup"</A>
                    </div>
                </Show>
            </section>
        </AppShell>
    }
}
