use crate::app_lib::theme::Theme;
use leptos::prelude::*;

/// Inline message under a form field; renders nothing while the field is clean.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    move || message.get().map(|text| view! { <p class=Theme::FIELD_ERROR>{text}</p> })
}
