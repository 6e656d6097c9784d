use crate::app_lib::theme::Theme;
use crate::components::{
    AppShell, SubmitButton,
    ui::{FieldError, use_notices},
};
use crate::features::auth::{
    RedirectIfSignedIn,
    client::HttpAuthApi,
    flows,
    forms::SignupForm,
    state::use_auth,
    types::{ProfileImage, Role},
    validation::Field,
};
use crate::routes::paths;
use leptos::ev::{Event, SubmitEvent};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_navigate};
use web_sys::{File, HtmlInputElement};

fn describe(file: &File) -> ProfileImage {
    ProfileImage {
        name: file.name(),
        mime: file.type_(),
        size: file.size() as u64,
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = use_auth();
    let notices = use_notices();
    let navigate = use_navigate();
    let form = RwSignal::new(SignupForm::default());
    let upload = StoredValue::new_local(None::<File>);
    let (redirect, set_redirect) = signal::<Option<&'static str>>(None);

    Effect::new(move |_| {
        if let Some(to) = redirect.get() {
            navigate(to, Default::default());
        }
    });

    let busy = Signal::derive(move || form.with(SignupForm::is_submitting));
    let blocked = Signal::derive(move || !form.with(SignupForm::is_valid));
    let error = move |field: Field| form.with(|form| form.error(field));
    let input_class = move |field: Field| {
        if error(field).is_some() {
            Theme::INPUT_ERROR
        } else {
            Theme::INPUT
        }
    };
    let edit = move |field: Field, value: String| {
        form.update(|form| form.edit(field, &value));
    };

    let on_file = move |event: Event| {
        let file = event_target::<HtmlInputElement>(&event)
            .files()
            .and_then(|files| files.get(0));
        form.update(|form| form.attach_image(file.as_ref().map(describe)));
        upload.set_value(file);
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let Some(request) = form.try_update(SignupForm::begin_submit).flatten() else {
            return;
        };
        let file = upload.get_value();
        spawn_local(async move {
            let outcome = flows::signup(&HttpAuthApi, &auth, &request, file.as_ref()).await;
            form.update(SignupForm::end_submit);
            notices.push(outcome.notice);
            if let Some(to) = outcome.redirect {
                set_redirect.set(Some(to));
            }
        });
    };

    let text_field = move |field: Field, label: &'static str, kind: &'static str, placeholder: &'static str| {
        view! {
            <div class="my-2">
                <label class="mb-1 block text-sm font-medium" for=field.name()>{label}</label>
                <input
                    id=field.name()
                    type=kind
                    class=move || input_class(field)
                    placeholder=placeholder
                    on:input=move |event| edit(field, event_target_value(&event))
                    on:blur=move |event| edit(field, event_target_value(&event))
                />
                <FieldError message=Signal::derive(move || error(field)) />
            </div>
        }
    };

    view! {
        <RedirectIfSignedIn>
            <AppShell>
                <div class="mx-auto flex max-w-7xl items-center justify-center px-4">
                    <form
                        class="my-10 w-full rounded-md border border-gray-200 p-6 sm:w-1/2"
                        novalidate
                        on:submit=on_submit
                    >
                        <h1 class="mb-5 text-xl font-bold">"Sign Up"</h1>

                        {text_field(Field::FullName, "Full Name", "text", "Your name")}
                        {text_field(Field::Email, "Email", "email", "you@example.com")}
                        {text_field(Field::PhoneNumber, "Phone Number", "tel", "10-digit number")}

                        <div class="my-2">
                            <label class="mb-1 block text-sm font-medium" for="password">"Password"</label>
                            <div class="relative">
                                <input
                                    id="password"
                                    type=move || if form.with(|form| form.show_password) { "text" } else { "password" }
                                    class=move || input_class(Field::Password)
                                    autocomplete="new-password"
                                    on:input=move |event| edit(Field::Password, event_target_value(&event))
                                    on:blur=move |event| edit(Field::Password, event_target_value(&event))
                                />
                                <button
                                    type="button"
                                    class="absolute inset-y-0 right-0 px-3 text-sm text-gray-500"
                                    on:click=move |_| form.update(SignupForm::toggle_password)
                                >
                                    {move || if form.with(|form| form.show_password) { "Hide" } else { "Show" }}
                                </button>
                            </div>
                            <FieldError message=Signal::derive(move || error(Field::Password)) />
                        </div>

                        <div class="my-4 flex flex-col gap-4 sm:flex-row sm:items-start sm:justify-between">
                            <fieldset>
                                <div class="flex items-center gap-4">
                                    {Role::ALL
                                        .into_iter()
                                        .map(|role| {
                                            view! {
                                                <label class="flex cursor-pointer items-center gap-2 text-sm">
                                                    <input
                                                        type="radio"
                                                        name="role"
                                                        value=role.as_str()
                                                        prop:checked=move || form.with(|form| form.role == Some(role))
                                                        on:change=move |_| {
                                                            form.update(|form| form.edit(Field::Role, role.as_str()))
                                                        }
                                                    />
                                                    {role.label()}
                                                </label>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <FieldError message=Signal::derive(move || error(Field::Role)) />
                            </fieldset>

                            <div class="flex flex-col gap-1">
                                <label class="text-sm font-medium" for="file">"Profile"</label>
                                <input
                                    id="file"
                                    type="file"
                                    accept="image/*"
                                    class="cursor-pointer text-sm"
                                    on:change=on_file
                                />
                                <FieldError message=Signal::derive(move || error(Field::ProfileImage)) />
                            </div>
                        </div>

                        <SubmitButton busy=busy disabled=blocked>"Signup"</SubmitButton>
                        <span class="text-sm">
                            "Already have an account? "
                            <A href=paths::LOGIN {..} class="text-blue-600">"Login"</A>
                        </span>
                    </form>
                </div>
            </AppShell>
        </RedirectIfSignedIn>
    }
}
