//! Shared frontend utilities for API access, configuration, errors,
//! notifications and build metadata.
//!
//! ## Auth Flows
//!
//! 1. **Login:** the form POSTs `{email, password, role}` as JSON to `/login`.
//!    The backend sets a session cookie and returns the user, which is stored
//!    in the session context.
//! 2. **Signup:** the form POSTs a multipart body to `/register`. No session is
//!    created; the user is sent to the login page.
//! 3. **Logout:** `GET /logout` clears the cookie; the session context is
//!    cleared only once the server confirms.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must not log passwords.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod notice;
pub(crate) mod theme;

pub(crate) use errors::AppError;
pub(crate) use notice::{Notice, NoticeKind};
