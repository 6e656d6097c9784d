//! Shared layout wrapper: the navigation bar above a content container.
//! Navigation is client-side only; the API enforces access control.

use crate::components::layout::Navbar;
use leptos::prelude::*;

/// Wraps routes with the navbar and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col bg-white">
            <Navbar />
            <main class="flex-1">
                <div class="mx-auto w-full max-w-7xl">{children()}</div>
            </main>
        </div>
    }
}
