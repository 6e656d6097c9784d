use crate::components::Toaster;
use crate::features::auth::state::AuthProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <Toaster>
                <Router>
                    <AppRoutes />
                </Router>
            </Toaster>
        </AuthProvider>
    }
}
