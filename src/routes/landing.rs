//! Public landing page with the product pitch and the sector highlights.

use crate::app_lib::theme::Theme;
use crate::components::AppShell;
use crate::features::interests::catalog::SECTORS;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <AppShell>
            <section class="py-16 text-center">
                <h1 class="mb-4 text-4xl font-extrabold tracking-tight text-gray-900 dark:text-white">
                    "Run your whole business from one place"
                </h1>
                <p class="mx-auto mb-8 max-w-2xl text-lg text-gray-500 dark:text-gray-400">
                    "BisFlow gives hotels, shops, farms, and clinics a single workspace for their teams, tailored to the sectors they work in."
                </p>
                <div class="flex items-center justify-center gap-4">
                    <A
                        href="/signup"
                        {..}
                        class="rounded-lg bg-green-700 px-5 py-2.5 text-sm font-medium text-white hover:bg-green-800 focus:ring-4 focus:outline-none focus:ring-green-300 dark:bg-green-600 dark:hover:bg-green-700 dark:focus:ring-green-800"
                    >
                        "Get started"
                    </A>
                    <A
                        href="/login"
                        {..}
                        class="rounded-lg border border-gray-300 bg-white px-5 py-2.5 text-sm font-medium text-gray-900 hover:bg-gray-100 focus:ring-4 focus:ring-gray-100 dark:border-gray-600 dark:bg-gray-800 dark:text-white dark:hover:bg-gray-700 dark:focus:ring-gray-700"
                    >
                        "Sign in"
                    </A>
                </div>
            </section>
            <section class="grid grid-cols-1 gap-4 pb-16 sm:grid-cols-2 lg:grid-cols-3">
                {SECTORS
                    .iter()
                    .map(|sector| {
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
            </section>
        </AppShell>
    }
}
