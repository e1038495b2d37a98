//! Sector dashboard: one workspace card per sector the account subscribed
//! to, with a prompt to pick sectors when none are selected yet.

use crate::app_lib::theme::Theme;
use crate::components::AppShell;
use crate::features::auth::state::use_auth;
use crate::features::interests::catalog::sector_or_default;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user;

    view! {
        <AppShell>
            <div class="space-y-6">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        {move || {
                            user.get()
                                .map(|user| format!("Welcome back, {}", user.username))
                                .unwrap_or_default()
                        }}
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        {move || {
                            user.get()
                                .map(|user| user.company_name)
                                .filter(|name| !name.is_empty())
                                .map(|name| format!("Managing {name}"))
                                .unwrap_or_default()
                        }}
                    </p>
                </div>
                {move || {
                    let interests = user
                        .get()
                        .map(|user| user.sector_interests)
                        .unwrap_or_default();
                    if interests.is_empty() {
                        view! {
                            <div class=Theme::CARD>
                                <p class="mb-3 text-sm text-gray-500 dark:text-gray-400">
                                    "You have not picked any sectors yet. Choose the ones your business works in to set up your workspaces."
                                </p>
                                <A
                                    href="/preferences"
                                    {..}
                                    class="text-sm font-medium text-green-700 hover:underline dark:text-green-500"
                                >
                                    "Choose sectors"
                                </A>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                                {interests
                                    .iter()
                                    .map(|id| {
                                        let sector = sector_or_default(id);
                                        view! {
                                            <div class=Theme::CARD>
                                                <h2 class="mb-1 font-semibold text-gray-900 dark:text-white">
                                                    {sector.title}
                                                </h2>
                                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                                    {sector.description}
                                                </p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </AppShell>
    }
}
