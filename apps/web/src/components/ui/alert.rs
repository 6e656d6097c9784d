//! Alert banners for notices. Messages come from the server or from fixed
//! fallbacks and must never include passwords.

use crate::app_lib::{Notice, NoticeKind};
use leptos::prelude::*;

fn alert_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Error => {
            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 shadow-sm"
        }
        NoticeKind::Success => {
            "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 shadow-sm"
        }
    }
}

/// Renders a styled alert banner for one notice.
#[component]
pub fn Alert(notice: Notice) -> impl IntoView {
    let role = if notice.is_error() { "alert" } else { "status" };

    view! { <div class=alert_class(notice.kind) role=role>{notice.message}</div> }
}
