//! Top navigation. Links and the account menu come from `NavModel`; which
//! menus are open and whether a logout is pending live in `MenuState`. Link lists render twice: once in the desktop row and
//! once in the mobile panel, where every tap also closes the panel.

use crate::{
    app_lib::theme::Theme,
    components::ui::use_notices,
    features::{
        auth::{client::HttpAuthApi, flows, state::use_auth},
        navigation::{AccountMenu, MenuState, NavLink, NavModel},
    },
    routes::paths,
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let notices = use_notices();
    let navigate = use_navigate();
    let menu = RwSignal::new(MenuState::default());
    let menu_open = move || menu.with(MenuState::is_mobile_open);
    let account_open = move || menu.with(MenuState::is_account_open);
    let (redirect, set_redirect) = signal::<Option<&'static str>>(None);
    let model = Memo::new(move |_| NavModel::for_session(auth.session.get().as_ref()));

    Effect::new(move |_| {
        if let Some(to) = redirect.get() {
            navigate(to, Default::default());
        }
    });

    let close_menu = Callback::new(move |()| menu.update(MenuState::close));
    let logout = Callback::new(move |()| {
        if !menu.try_update(MenuState::begin_logout).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let outcome = flows::logout(&HttpAuthApi, &auth).await;
            menu.update(MenuState::end_logout);
            notices.push(outcome.notice);
            if let Some(to) = outcome.redirect {
                set_redirect.set(Some(to));
            }
        });
    });

    view! {
        <header class="relative bg-white">
            <div class="mx-auto flex h-16 max-w-7xl items-center justify-between px-4 sm:px-6 lg:px-8">
                <A href=paths::HOME {..} on:click=move |_| close_menu.run(())>
                    <h1 class="text-2xl font-bold">
                        "Job" <span class="text-[#F83002]">"Portal"</span>
                    </h1>
                </A>
                <div class="hidden items-center gap-12 md:flex">
                    <ul class="flex items-center gap-5 font-medium">
                        {move || link_items(model.get().links, Theme::NAV_LINK, close_menu)}
                    </ul>
                    {move || match model.get().account {
                        None => auth_actions(model.get().auth_actions, "flex items-center gap-2", close_menu).into_any(),
                        Some(account) => {
                            let badge = avatar(&account);
                            view! {
                                <div class="relative">
                                    <button
                                        type="button"
                                        class="cursor-pointer"
                                        aria-haspopup="menu"
                                        aria-expanded=move || account_open().to_string()
                                        on:click=move |_| menu.update(MenuState::toggle_account)
                                    >
                                        {badge}
                                    </button>
                                    <Show when=account_open>
                                        <div class="absolute right-0 z-50 mt-2 w-80 rounded-md border border-gray-100 bg-white p-4 shadow-lg">
                                            <AccountPanel
                                                account=account.clone()
                                                on_pick=close_menu
                                                on_logout=logout
                                            />
                                        </div>
                                    </Show>
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </div>
                <div class="md:hidden">
                    <button
                        type="button"
                        class="p-2 text-2xl text-gray-700"
                        aria-controls="mobile-menu"
                        aria-expanded=move || menu_open().to_string()
                        on:click=move |_| menu.update(MenuState::toggle_mobile)
                    >
                        <span class="sr-only">"Toggle main menu"</span>
                        {move || if menu_open() { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>
            </div>
            <Show when=menu_open>
                <div
                    id="mobile-menu"
                    class="absolute left-0 right-0 top-full z-50 border-t bg-white shadow-lg md:hidden"
                >
                    <ul class="flex flex-col items-center gap-4 py-4">
                        {move || link_items(model.get().links, Theme::NAV_LINK_MOBILE, close_menu)}
                    </ul>
                    <div class="flex flex-col items-center gap-2 pb-4">
                        {move || match model.get().account {
                            None => auth_actions(model.get().auth_actions, "flex flex-col items-center gap-2", close_menu).into_any(),
                            Some(account) => {
                                view! {
                                    <div class="flex flex-col items-center gap-2 text-center">
                                        <AccountPanel account=account on_pick=close_menu on_logout=logout />
                                    </div>
                                }
                                .into_any()
                            }
                        }}
                    </div>
                </div>
            </Show>
        </header>
    }
}

fn link_items(links: &'static [NavLink], class: &'static str, on_pick: Callback<()>) -> impl IntoView {
    links
        .iter()
        .map(|link| {
            view! {
                <li>
                    <A href=link.href {..} class=class on:click=move |_| on_pick.run(())>
                        {link.label}
                    </A>
                </li>
            }
        })
        .collect_view()
}

fn auth_actions(
    actions: Option<&'static [NavLink]>,
    class: &'static str,
    on_pick: Callback<()>,
) -> impl IntoView {
    let actions = actions.unwrap_or_default();
    view! {
        <div class=class>
            {actions
                .iter()
                .map(|action| {
                    let style = if action.href == paths::SIGNUP {
                        Theme::ACTION_PRIMARY
                    } else {
                        Theme::ACTION_OUTLINE
                    };
                    view! {
                        <A href=action.href {..} class=style on:click=move |_| on_pick.run(())>
                            {action.label}
                        </A>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn avatar(account: &AccountMenu) -> AnyView {
    match account.photo_url.clone() {
        Some(url) => view! {
            <img class="h-10 w-10 rounded-full object-cover" src=url alt="profile" />
        }
        .into_any(),
        None => view! {
            <span class="flex h-10 w-10 items-center justify-center rounded-full bg-gray-200 font-semibold text-gray-700">
                {account.initial.clone()}
            </span>
        }
        .into_any(),
    }
}

/// Name, bio, "View Profile" (students only) and logout.
#[component]
fn AccountPanel(account: AccountMenu, on_pick: Callback<()>, on_logout: Callback<()>) -> impl IntoView {
    let profile_link = account.profile_link;

    view! {
        <div class="flex gap-3">
            {avatar(&account)}
            <div>
                <h4 class="font-medium">{account.fullname.clone()}</h4>
                <p class="text-sm text-gray-500">{account.bio.clone().unwrap_or_default()}</p>
            </div>
        </div>
        <div class="my-2 flex flex-col gap-2">
            {profile_link.map(|link| {
                view! {
                    <A href=link.href {..} class=Theme::MENU_ITEM on:click=move |_| on_pick.run(())>
                        {link.label}
                    </A>
                }
            })}
            <button type="button" class=Theme::MENU_ITEM on:click=move |_| on_logout.run(())>
                "Logout"
            </button>
        </div>
    }
}
