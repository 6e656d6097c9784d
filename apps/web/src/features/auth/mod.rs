//! Auth feature module: form state, shared validation, session state and the
//! login/signup/logout flows. It keeps authentication logic out of the views;
//! routes only wire signals to these types. Passwords must never be logged.
//!
//! Flow Overview: a form validates locally, raises its submitting flag and
//! hands one request to a flow. The flow calls the API, updates the session
//! store and returns a notice plus an optional redirect. The form lowers its
//! flag when the flow returns, whatever the outcome.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod flows;
pub(crate) mod forms;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod state;
#[cfg(test)]
pub(crate) mod test_support;
pub(crate) mod types;
pub(crate) mod validation;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RedirectIfSignedIn;
