//! Transient notifications. Flows return a `Notice`; pages push it here and
//! the toaster shows it for a few seconds.

use crate::app_lib::Notice;
use crate::components::ui::Alert;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a notice stays on screen (milliseconds).
const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy)]
pub struct Notices {
    entries: RwSignal<Vec<(u64, Notice)>>,
    next_id: StoredValue<u64>,
}

impl Notices {
    fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Shows a notice and schedules its removal.
    pub fn push(&self, notice: Notice) {
        log::debug!("notice: {}", notice.message);
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.entries.update(|entries| entries.push((id, notice)));

        let entries = self.entries;
        Timeout::new(NOTICE_TTL_MS, move || {
            entries.update(|entries| entries.retain(|(entry, _)| *entry != id));
        })
        .forget();
    }
}

/// Provides the notice context to its children and renders the stack.
#[component]
pub fn Toaster(children: Children) -> impl IntoView {
    let notices = Notices::new();
    provide_context(notices);

    view! {
        {children()}
        <div class="fixed bottom-4 right-4 z-50 flex w-80 flex-col gap-2" aria-live="polite">
            <For
                each=move || notices.entries.get()
                key=|(id, _)| *id
                children=|(_, notice)| view! { <Alert notice=notice /> }
            />
        </div>
    }
}

/// Returns the notice context. Without a mounted `Toaster` notices are
/// still logged but never shown.
pub fn use_notices() -> Notices {
    use_context::<Notices>().unwrap_or_else(|| {
        log::warn!("toaster missing; notices will only be logged");
        Notices::new()
    })
}
