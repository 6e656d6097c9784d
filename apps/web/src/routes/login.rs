use crate::app_lib::theme::Theme;
use crate::components::{
    AppShell, SubmitButton,
    ui::{FieldError, use_notices},
};
use crate::features::auth::{
    RedirectIfSignedIn,
    client::HttpAuthApi,
    flows,
    forms::LoginForm,
    state::use_auth,
    types::Role,
    validation::Field,
};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let notices = use_notices();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());
    let (redirect, set_redirect) = signal::<Option<&'static str>>(None);

    Effect::new(move |_| {
        if let Some(to) = redirect.get() {
            navigate(to, Default::default());
        }
    });

    let busy = Signal::derive(move || form.with(LoginForm::is_submitting));
    let error = move |field: Field| form.with(|form| form.error(field));
    let input_class = move |field: Field| {
        if error(field).is_some() {
            Theme::INPUT_ERROR
        } else {
            Theme::INPUT
        }
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let Some(request) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = flows::login(&HttpAuthApi, &auth, &request).await;
            form.update(LoginForm::end_submit);
            notices.push(outcome.notice);
            if let Some(to) = outcome.redirect {
                set_redirect.set(Some(to));
            }
        });
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
                        <h1 class="mb-5 text-xl font-bold">"Login"</h1>

                        <div class="my-2">
                            <label class="mb-1 block text-sm font-medium" for="email">"Email"</label>
                            <input
                                id="email"
                                type="email"
                                class=move || input_class(Field::Email)
                                autocomplete="email"
                                placeholder="you@example.com"
                                prop:value=move || form.with(|form| form.email.clone())
                                on:input=move |event| {
                                    form.update(|form| form.edit(Field::Email, &event_target_value(&event)))
                                }
                            />
                            <FieldError message=Signal::derive(move || error(Field::Email)) />
                        </div>

                        <div class="my-2">
                            <label class="mb-1 block text-sm font-medium" for="password">"Password"</label>
                            <div class="relative">
                                <input
                                    id="password"
                                    type=move || if form.with(|form| form.show_password) { "text" } else { "password" }
                                    class=move || input_class(Field::Password)
                                    autocomplete="current-password"
                                    prop:value=move || form.with(|form| form.password.clone())
                                    on:input=move |event| {
                                        form.update(|form| form.edit(Field::Password, &event_target_value(&event)))
                                    }
                                />
                                <button
                                    type="button"
                                    class="absolute inset-y-0 right-0 px-3 text-sm text-gray-500"
                                    on:click=move |_| form.update(LoginForm::toggle_password)
                                >
                                    {move || if form.with(|form| form.show_password) { "Hide" } else { "Show" }}
                                </button>
                            </div>
                            <FieldError message=Signal::derive(move || error(Field::Password)) />
                        </div>

                        <fieldset class="my-4">
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

                        <SubmitButton busy=busy>"Login"</SubmitButton>
                        <span class="text-sm">
                            "Don't have an account? "
                            <A href=paths::SIGNUP {..} class="text-blue-600">"Signup"</A>
                        </span>
                    </form>
                </div>
            </AppShell>
        </RedirectIfSignedIn>
    }
}
