//! Shared Tailwind class constants for the navigation chrome.

pub struct Theme;

impl Theme {
    /// Desktop navigation link.
    pub const NAV_LINK: &'static str = "text-gray-700 hover:text-[#6A38C2] transition-colors";

    /// Mobile panel link; taps also close the panel.
    pub const NAV_LINK_MOBILE: &'static str = "block py-2 text-gray-700 hover:text-[#6A38C2]";

    /// Outline action used for "Login".
    pub const ACTION_OUTLINE: &'static str = "inline-flex items-center rounded-md border border-gray-300 bg-white px-4 py-2 text-sm font-medium text-gray-900 hover:bg-gray-100";

    /// Filled action used for "Signup".
    pub const ACTION_PRIMARY: &'static str = "inline-flex items-center rounded-md bg-[#6A38C2] px-4 py-2 text-sm font-medium text-white hover:bg-[#5b30a6]";

    /// Text-style button inside the account menu.
    pub const MENU_ITEM: &'static str = "flex w-fit items-center gap-2 text-sm text-gray-600 hover:underline";

    /// Form input; the error variant swaps the border color.
    pub const INPUT: &'static str = "w-full rounded-md border border-gray-300 bg-white px-3 py-2 text-sm text-gray-900 focus:outline-none focus:ring-2 focus:ring-[#6A38C2]/40";
    pub const INPUT_ERROR: &'static str = "w-full rounded-md border border-red-500 bg-white px-3 py-2 text-sm text-gray-900 focus:outline-none focus:ring-2 focus:ring-red-200";

    /// Inline field error message.
    pub const FIELD_ERROR: &'static str = "mt-1 text-sm text-red-500";
}
