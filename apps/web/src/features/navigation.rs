//! What the navigation bar shows for a given session. The navbar component
//! renders this model twice (desktop row and mobile panel); `MenuState`
//! tracks which menus are open and whether a logout is in flight.

use crate::{features::auth::types::SessionUser, routes::paths};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href }
}

pub const PUBLIC_LINKS: [NavLink; 3] = [
    link("Home", paths::HOME),
    link("Jobs", paths::JOBS),
    link("Browse", paths::BROWSE),
];

pub const RECRUITER_LINKS: [NavLink; 2] = [
    link("Companies", paths::ADMIN_COMPANIES),
    link("Jobs", paths::ADMIN_JOBS),
];

pub const AUTH_ACTIONS: [NavLink; 2] = [link("Login", paths::LOGIN), link("Signup", paths::SIGNUP)];

pub const VIEW_PROFILE: NavLink = link("View Profile", paths::PROFILE);

/// Account menu of a signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountMenu {
    pub fullname: String,
    pub initial: String,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    /// Only students get "View Profile".
    pub profile_link: Option<NavLink>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavModel {
    pub links: &'static [NavLink],
    /// Login/Signup for guests, `None` once signed in.
    pub auth_actions: Option<&'static [NavLink]>,
    pub account: Option<AccountMenu>,
}

impl NavModel {
    pub fn for_session(user: Option<&SessionUser>) -> Self {
        match user {
            None => Self {
                links: &PUBLIC_LINKS,
                auth_actions: Some(&AUTH_ACTIONS),
                account: None,
            },
            Some(user) => Self {
                links: if user.is_recruiter() {
                    &RECRUITER_LINKS
                } else {
                    &PUBLIC_LINKS
                },
                auth_actions: None,
                account: Some(AccountMenu {
                    fullname: user.fullname.clone(),
                    initial: user.initial(),
                    photo_url: user.photo_url().map(str::to_string),
                    bio: user.bio().map(str::to_string),
                    profile_link: (!user.is_recruiter()).then_some(VIEW_PROFILE),
                }),
            },
        }
    }
}

/// Open/closed state of the mobile panel and the account popover, plus the
/// logout in-flight flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    mobile_open: bool,
    account_open: bool,
    logging_out: bool,
}

impl MenuState {
    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn is_account_open(&self) -> bool {
        self.account_open
    }

    pub fn is_logging_out(&self) -> bool {
        self.logging_out
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn toggle_account(&mut self) {
        self.account_open = !self.account_open;
    }

    /// Any link tap closes both menus.
    pub fn close(&mut self) {
        self.mobile_open = false;
        self.account_open = false;
    }

    /// Closes the menus and claims the logout; `false` while one is pending.
    pub fn begin_logout(&mut self) -> bool {
        self.close();
        if self.logging_out {
            return false;
        }
        self.logging_out = true;
        true
    }

    pub fn end_logout(&mut self) {
        self.logging_out = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::test_support::{recruiter, student};

    fn labels(links: &[NavLink]) -> Vec<&'static str> {
        links.iter().map(|link| link.label).collect()
    }

    #[test]
    fn guest_sees_public_links_and_auth_actions() {
        let model = NavModel::for_session(None);
        assert_eq!(labels(model.links), ["Home", "Jobs", "Browse"]);
        assert_eq!(
            labels(model.auth_actions.expect("actions")),
            ["Login", "Signup"]
        );
        assert!(model.account.is_none());
    }

    #[test]
    fn recruiter_sees_admin_links_without_profile() {
        let user = recruiter();
        let model = NavModel::for_session(Some(&user));
        assert_eq!(labels(model.links), ["Companies", "Jobs"]);
        assert_eq!(
            model.links.iter().map(|link| link.href).collect::<Vec<_>>(),
            ["/admin/companies", "/admin/jobs"]
        );
        assert!(model.auth_actions.is_none());

        let account = model.account.expect("account menu");
        assert_eq!(account.profile_link, None);
        assert_eq!(
            account.photo_url.as_deref(),
            Some("https://cdn.example.com/grace.png")
        );
        assert_eq!(account.initial, "G");
    }

    #[test]
    fn student_sees_public_links_and_profile() {
        let user = student();
        let model = NavModel::for_session(Some(&user));
        assert_eq!(labels(model.links), ["Home", "Jobs", "Browse"]);
        assert!(model.auth_actions.is_none());

        let account = model.account.expect("account menu");
        assert_eq!(account.profile_link, Some(VIEW_PROFILE));
        assert_eq!(account.fullname, "Ada Lovelace");
        assert_eq!(account.bio.as_deref(), Some("Analytical engines"));
        assert_eq!(account.photo_url, None);
    }

    #[test]
    fn toggle_flips_mobile_panel() {
        let mut menu = MenuState::default();
        assert!(!menu.is_mobile_open());
        menu.toggle_mobile();
        assert!(menu.is_mobile_open());
        menu.toggle_mobile();
        assert!(!menu.is_mobile_open());
    }

    #[test]
    fn link_tap_closes_every_menu() {
        let mut menu = MenuState::default();
        menu.toggle_mobile();
        menu.toggle_account();
        menu.close();
        assert!(!menu.is_mobile_open());
        assert!(!menu.is_account_open());

        menu.close();
        assert_eq!(menu, MenuState::default());
    }

    #[test]
    fn logout_closes_panel_and_runs_once_at_a_time() {
        let mut menu = MenuState::default();
        menu.toggle_mobile();
        assert!(menu.begin_logout());
        assert!(!menu.is_mobile_open());
        assert!(menu.is_logging_out());

        menu.toggle_mobile();
        assert!(!menu.begin_logout(), "second click while pending");
        assert!(!menu.is_mobile_open());

        menu.end_logout();
        assert!(!menu.is_logging_out());
        assert!(menu.begin_logout());
    }
}
