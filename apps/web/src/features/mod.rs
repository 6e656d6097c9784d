//! Domain-level frontend features (auth, navigation) and their shared logic.
//! Routes import these modules to keep view code focused while keeping
//! session handling and API access in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod navigation;
