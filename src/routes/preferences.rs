//! Sector preferences route. Loads the current selection from the server,
//! lets the user toggle sectors, and re-fetches the profile after a save so
//! the cached copy matches the server again.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::interests::catalog::SECTORS;
use crate::features::interests::client;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[derive(Clone)]
struct SaveInput {
    token: String,
    user_id: u64,
    interests: Vec<String>,
}

#[component]
pub fn PreferencesPage() -> impl IntoView {
    let auth = use_auth();
    let access = auth.access;
    let user = auth.user;

    let interests = LocalResource::new(move || {
        let token = access.get();
        let user_id = user.get().map(|user| user.id);
        async move {
            match (token, user_id) {
                (Some(token), Some(user_id)) => client::fetch_interests(&token, user_id).await,
                _ => Ok(Vec::new()),
            }
        }
    });

    view! {
        <AppShell>
            <div class="max-w-2xl mx-auto space-y-6">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Sector preferences"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Pick the sectors your business works in. Your dashboard is built from this selection."
                    </p>
                </div>
                <Suspense fallback=move || {
                    view! { <div class="flex justify-center py-12"><Spinner large=true /></div> }
                }>
                    {move || match interests.get() {
                        Some(Ok(initial)) => {
                            view! { <InterestForm initial=initial /> }.into_any()
                        }
                        Some(Err(err)) => {
                            view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                .into_any()
                        }
                        None => {
                            view! { <div class="flex justify-center py-12"><Spinner large=true /></div> }
                                .into_any()
                        }
                    }}
                </Suspense>
            </div>
        </AppShell>
    }
}

#[component]
fn InterestForm(initial: Vec<String>) -> impl IntoView {
    let auth = use_auth();
    let access = auth.access;
    let user = auth.user;
    let selected = RwSignal::new(initial);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saved, set_saved) = signal(false);

    let save_action = Action::new_local(move |input: &SaveInput| {
        let input = input.clone();
        async move { client::update_interests(&input.token, input.user_id, &input.interests).await }
    });

    let auth_for_refresh = auth.clone();
    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => {
                    set_saved.set(true);
                    auth_for_refresh.refresh_profile();
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let toggle = move |id: &'static str| {
        selected.update(|list| {
            if let Some(position) = list.iter().position(|item| item == id) {
                list.remove(position);
            } else {
                list.push(id.to_string());
            }
        });
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_saved.set(false);

        let interests = selected.get_untracked();
        if interests.is_empty() {
            set_error.set(Some("Select at least one sector.".to_string()));
            return;
        }

        let (Some(token), Some(user_id)) = (
            access.get_untracked(),
            user.get_untracked().map(|user| user.id),
        ) else {
            return;
        };

        save_action.dispatch(SaveInput {
            token,
            user_id,
            interests,
        });
    };

    view! {
        <form class=Theme::CARD on:submit=on_submit>
            <div class="grid grid-cols-1 gap-2 sm:grid-cols-2">
                {SECTORS
                    .iter()
                    .map(|sector| {
                        let id = sector.id;
                        view! {
                            <label class="flex items-start gap-2 rounded-lg border border-gray-200 p-3 text-sm dark:border-gray-700">
                                <input
                                    type="checkbox"
                                    class="mt-0.5 h-4 w-4 rounded border-gray-300 text-green-600 focus:ring-green-500"
                                    prop:checked=move || {
                                        selected.get().iter().any(|item| item == id)
                                    }
                                    on:change=move |_| toggle(id)
                                />
                                <span>
                                    <span class="block font-medium text-gray-900 dark:text-white">
                                        {sector.title}
                                    </span>
                                    <span class="block text-gray-500 dark:text-gray-400">
                                        {sector.description}
                                    </span>
                                </span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-4">
                <Button disabled=save_action.pending()>
                    "Save preferences"
                </Button>
            </div>
            {move || {
                saved
                    .get()
                    .then_some(
                        view! {
                            <div class="mt-4">
                                <Alert
                                    kind=AlertKind::Success
                                    message="Preferences saved.".to_string()
                                />
                            </div>
                        },
                    )
            }}
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=message />
                            </div>
                        }
                    })
            }}
        </form>
    }
}
