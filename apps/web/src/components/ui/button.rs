use crate::components::ui::Spinner;
use leptos::prelude::*;

/// Full-width form submit button. While `busy` it is disabled and shows a
/// spinner with "Please wait" instead of its label.
#[component]
pub fn SubmitButton(
    #[prop(into)] busy: Signal<bool>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let inactive = move || busy.get() || disabled.get();

    view! {
        <button
            type="submit"
            class="my-4 inline-flex w-full items-center justify-center gap-2 rounded-md bg-gray-900 px-4 py-2 text-sm font-medium text-white hover:bg-gray-800"
            class:cursor-not-allowed=inactive
            class:opacity-60=inactive
            disabled=inactive
        >
            <Show when=move || busy.get() fallback=move || children()>
                <Spinner />
                "Please wait"
            </Show>
        </button>
    }
}
