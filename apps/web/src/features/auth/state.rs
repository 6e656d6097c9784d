//! Auth session state for the frontend. `SessionStore` is the seam every flow
//! writes through; in the browser it is backed by `AuthContext`, provided once
//! at the root and mirrored into `sessionStorage` so a reload keeps the tab
//! signed in. Only the public user document is stored; the session cookie
//! stays `HttpOnly` on the server side.

use crate::{features::auth::types::SessionUser, routes::paths};

/// Key of the tab-scoped copy of the session user.
pub const SESSION_STORAGE_KEY: &str = "jobportal.session_user";

/// Holds at most one `SessionUser`. `set` is the only mutation.
pub trait SessionStore {
    fn current(&self) -> Option<SessionUser>;

    fn set(&self, user: Option<SessionUser>);

    fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }
}

/// Where an auth form sends its visitor on mount: home when a session exists.
pub fn mount_redirect<S: SessionStore + ?Sized>(session: &S) -> Option<&'static str> {
    session.is_authenticated().then_some(paths::HOME)
}

/// Serializes the user for tab storage.
pub fn encode_session(user: &SessionUser) -> Option<String> {
    serde_json::to_string(user).ok()
}

/// Restores a stored user; anything undecodable counts as no session.
pub fn decode_session(raw: &str) -> Option<SessionUser> {
    serde_json::from_str(raw).ok()
}

#[cfg(target_arch = "wasm32")]
pub use browser::{AuthContext, AuthProvider, use_auth};

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{SESSION_STORAGE_KEY, SessionStore, decode_session, encode_session};
    use crate::features::auth::types::SessionUser;
    use leptos::prelude::*;

    #[derive(Clone, Copy)]
    /// Auth session context shared through Leptos.
    pub struct AuthContext {
        pub session: RwSignal<Option<SessionUser>>,
        pub is_authenticated: Signal<bool>,
    }

    impl AuthContext {
        fn new(session: RwSignal<Option<SessionUser>>) -> Self {
            let is_authenticated = Signal::derive(move || session.get().is_some());
            Self {
                session,
                is_authenticated,
            }
        }
    }

    impl SessionStore for AuthContext {
        fn current(&self) -> Option<SessionUser> {
            self.session.get_untracked()
        }

        fn set(&self, user: Option<SessionUser>) {
            persist(user.as_ref());
            self.session.set(user);
        }
    }

    /// Provides the auth context and restores the tab's session on mount.
    #[component]
    pub fn AuthProvider(children: Children) -> impl IntoView {
        let session = RwSignal::new(restore());
        provide_context(AuthContext::new(session));

        view! { {children()} }
    }

    /// Returns the current auth context or a fallback empty context.
    pub fn use_auth() -> AuthContext {
        use_context::<AuthContext>().unwrap_or_else(|| {
            log::warn!("auth context missing; rendering signed out");
            AuthContext::new(RwSignal::new(None))
        })
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.session_storage().ok().flatten())
    }

    fn restore() -> Option<SessionUser> {
        let storage = storage()?;
        let raw = storage.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
        let user = decode_session(&raw);
        if user.is_none() {
            log::warn!("discarding unreadable stored session");
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
        }
        user
    }

    fn persist(user: Option<&SessionUser>) {
        let Some(storage) = storage() else {
            return;
        };
        let result = match user.and_then(encode_session) {
            Some(raw) => storage.set_item(SESSION_STORAGE_KEY, &raw),
            None => storage.remove_item(SESSION_STORAGE_KEY),
        };
        if result.is_err() {
            log::warn!("unable to update stored session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::test_support::{MemorySession, recruiter, student};

    #[test]
    fn store_holds_at_most_one_user() {
        let store = MemorySession::default();
        assert!(!store.is_authenticated());

        store.set(Some(student()));
        assert!(store.is_authenticated());

        store.set(Some(recruiter()));
        assert_eq!(store.current(), Some(recruiter()));

        store.set(None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn stored_session_survives_encoding() {
        let user = recruiter();
        let raw = encode_session(&user).expect("encode");
        assert!(raw.contains("\"_id\":\"65f1c0ffef\""));
        assert_eq!(decode_session(&raw), Some(user));
    }

    #[test]
    fn garbage_in_storage_is_no_session() {
        assert_eq!(decode_session("{not json"), None);
        assert_eq!(decode_session(r#"{"_id":"1"}"#), None);
    }

    #[test]
    fn signed_in_visitor_is_sent_home_from_auth_forms() {
        let store = MemorySession::with_user(student());
        assert_eq!(mount_redirect(&store), Some("/"));
    }

    #[test]
    fn signed_out_visitor_stays_on_auth_forms() {
        let store = MemorySession::default();
        assert_eq!(mount_redirect(&store), None);

        store.set(Some(recruiter()));
        store.set(None);
        assert_eq!(mount_redirect(&store), None);
    }
}
