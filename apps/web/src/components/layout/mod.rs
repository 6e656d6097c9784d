//! Layout components shared across routes.

mod app_shell;
mod navbar;

pub(crate) use app_shell::AppShell;
pub(crate) use navbar::Navbar;
