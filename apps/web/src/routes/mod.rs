pub(crate) mod paths;

#[cfg(target_arch = "wasm32")]
mod home;
#[cfg(target_arch = "wasm32")]
mod login;
#[cfg(target_arch = "wasm32")]
mod not_found;
#[cfg(target_arch = "wasm32")]
mod signup;

#[cfg(target_arch = "wasm32")]
pub(crate) use app_routes::AppRoutes;

#[cfg(target_arch = "wasm32")]
mod app_routes {
    use super::{home::HomePage, login::LoginPage, not_found::NotFoundPage, signup::SignUpPage};
    use leptos::prelude::*;
    use leptos_router::components::{Route, Routes};
    use leptos_router::path;

    #[component]
    pub fn AppRoutes() -> impl IntoView {
        view! {
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/signup") view=SignUpPage />
            </Routes>
        }
    }
}
