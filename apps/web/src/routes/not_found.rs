//! Fallback page for unknown routes.

use crate::app_lib::theme::Theme;
use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex min-h-[50vh] flex-col items-center justify-center px-4 text-center">
                <div class="relative">
                    <h1 class="select-none text-9xl font-black text-gray-100">"404"</h1>
                    <p class="absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 whitespace-nowrap text-2xl font-bold text-gray-900">
                        "Page not found"
                    </p>
                </div>
                <p class="mx-auto mt-4 max-w-sm text-gray-500">
                    "The page you requested does not exist."
                </p>
                <div class="mt-6">
                    <A href=paths::HOME {..} class=Theme::ACTION_PRIMARY>"Go Home"</A>
                </div>
            </div>
        </AppShell>
    }
}
