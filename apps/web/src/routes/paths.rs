//! Route paths shared by the router, the navbar and the auth flows.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";
pub const JOBS: &str = "/jobs";
pub const BROWSE: &str = "/browse";
pub const PROFILE: &str = "/profile";
pub const ADMIN_COMPANIES: &str = "/admin/companies";
pub const ADMIN_JOBS: &str = "/admin/jobs";
