//! Account settings route: cached profile summary plus the change-password
//! form. The old password never leaves the form except inside the change
//! request itself.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Badge, Button};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::ChangePasswordRequest;
use crate::features::auth::{client, errors::AuthError};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[derive(Clone)]
struct ChangeInput {
    token: String,
    request: ChangePasswordRequest,
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = use_auth();
    let access = auth.access;
    let user = auth.user;
    let (old_password, set_old_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (message, set_message) = signal::<Option<String>>(None);

    let change_action = Action::new_local(move |input: &ChangeInput| {
        let input = input.clone();
        async move { client::change_password(&input.token, &input.request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = change_action.value().get() {
            match result {
                Ok(response) => {
                    set_message.set(Some(response.message));
                    set_old_password.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm_password.set(String::new());
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_message.set(None);

        let old_value = old_password.get_untracked();
        let new_value = new_password.get_untracked();
        let confirm_value = confirm_password.get_untracked();

        if old_value.trim().is_empty() || new_value.trim().is_empty() {
            set_error.set(Some("Both passwords are required.".to_string()));
            return;
        }

        if new_value != confirm_value {
            set_error.set(Some("New passwords do not match.".to_string()));
            return;
        }

        let Some(token) = access.get_untracked() else {
            set_error.set(Some(AuthError::SessionExpired.to_string()));
            return;
        };

        change_action.dispatch(ChangeInput {
            token,
            request: ChangePasswordRequest {
                old_password: old_value,
                new_password: new_value,
            },
        });
    };

    view! {
        <AppShell>
            <div class="max-w-2xl mx-auto space-y-6">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Settings"
                    </h1>
                </div>

                <div class=Theme::CARD>
                    <h2 class="mb-4 font-semibold text-gray-900 dark:text-white">
                        "Profile"
                    </h2>
                    {move || {
                        user.get()
                            .map(|profile| {
                                view! {
                                    <dl class="space-y-2 text-sm">
                                        <div class="flex justify-between">
                                            <dt class="text-gray-500 dark:text-gray-400">"Username"</dt>
                                            <dd class="text-gray-900 dark:text-white">
                                                {profile.username.clone()}
                                                " "
                                                {profile
                                                    .is_superuser
                                                    .then_some(
                                                        view! { <Badge active=true>"Owner"</Badge> },
                                                    )}
                                            </dd>
                                        </div>
                                        <div class="flex justify-between">
                                            <dt class="text-gray-500 dark:text-gray-400">"Email"</dt>
                                            <dd class="text-gray-900 dark:text-white">{profile.email.clone()}</dd>
                                        </div>
                                        <div class="flex justify-between">
                                            <dt class="text-gray-500 dark:text-gray-400">"Company"</dt>
                                            <dd class="text-gray-900 dark:text-white">{profile.company_name.clone()}</dd>
                                        </div>
                                        <div class="flex justify-between">
                                            <dt class="text-gray-500 dark:text-gray-400">"Address"</dt>
                                            <dd class="text-gray-900 dark:text-white">{profile.address.clone()}</dd>
                                        </div>
                                        <div class="flex justify-between">
                                            <dt class="text-gray-500 dark:text-gray-400">"Phone"</dt>
                                            <dd class="text-gray-900 dark:text-white">{profile.phone_number.clone()}</dd>
                                        </div>
                                        <div class="flex justify-between">
                                            <dt class="text-gray-500 dark:text-gray-400">"Sectors"</dt>
                                            <dd class="text-gray-900 dark:text-white">
                                                {profile.sector_interests.join(", ")}
                                            </dd>
                                        </div>
                                    </dl>
                                }
                            })
                    }}
                </div>

                <form class=Theme::CARD on:submit=on_submit>
                    <h2 class="mb-4 font-semibold text-gray-900 dark:text-white">
                        "Change password"
                    </h2>
                    <div class="mb-5">
                        <label class=Theme::LABEL for="old-password">
                            "Current password"
                        </label>
                        <input
                            id="old-password"
                            type="password"
                            class=Theme::INPUT
                            autocomplete="current-password"
                            prop:value=old_password
                            on:input=move |event| set_old_password.set(event_target_value(&event))
                        />
                    </div>
                    <div class="mb-5">
                        <label class=Theme::LABEL for="new-password">
                            "New password"
                        </label>
                        <input
                            id="new-password"
                            type="password"
                            class=Theme::INPUT
                            autocomplete="new-password"
                            prop:value=new_password
                            on:input=move |event| set_new_password.set(event_target_value(&event))
                        />
                    </div>
                    <div class="mb-5">
                        <label class=Theme::LABEL for="confirm-new-password">
                            "Confirm new password"
                        </label>
                        <input
                            id="confirm-new-password"
                            type="password"
                            class=Theme::INPUT
                            autocomplete="new-password"
                            prop:value=confirm_password
                            on:input=move |event| {
                                set_confirm_password.set(event_target_value(&event))
                            }
                        />
                    </div>
                    <Button disabled=change_action.pending()>
                        "Update password"
                    </Button>
                    {move || {
                        message
                            .get()
                            .map(|text| {
                                view! {
                                    <div class="mt-4">
                                        <Alert kind=AlertKind::Success message=text />
                                    </div>
                                }
                            })
                    }}
                    {move || {
                        error
                            .get()
                            .map(|text| {
                                view! {
                                    <div class="mt-4">
                                        <Alert kind=AlertKind::Error message=text />
                                    </div>
                                }
                            })
                    }}
                </form>
            </div>
        </AppShell>
    }
}
