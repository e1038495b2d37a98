//! Login route. Validation happens locally for fast feedback; the submit is
//! dispatched through the auth context, which serializes concurrent attempts
//! and redirects via the public-route guard once the session lands.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::LoginRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let pending = auth.pending;
    let last_error = auth.last_error;
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_form_error.set(None);

        let username_value = username.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if username_value.is_empty() || password_value.trim().is_empty() {
            set_form_error.set(Some("Username and password are required.".to_string()));
            return;
        }

        auth.login(LoginRequest {
            username: username_value,
            password: password_value,
        });
    };

    let error_message = move || {
        form_error
            .get()
            .or_else(|| last_error.get().map(|err| err.to_string()))
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Sign in"
                </h1>
                <div class="mb-5">
                    <label class=Theme::LABEL for="username">
                        "Your username"
                    </label>
                    <input
                        id="username"
                        type="text"
                        class=Theme::INPUT
                        autocomplete="username"
                        placeholder="acme-admin"
                        required
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="password">
                        "Your password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button disabled=pending>
                    "Submit"
                </Button>
                {move || {
                    pending
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    error_message()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}
