//! Signup route. Collects the account, company, and sector details, validates
//! locally, and dispatches one registration request; the response carries the
//! session tokens, so a successful signup lands directly on the dashboard via
//! the public-route guard.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::SignupRequest;
use crate::features::interests::catalog::SECTORS;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = use_auth();
    let pending = auth.pending;
    let last_error = auth.last_error;
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (company_name, set_company_name) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (phone_number, set_phone_number) = signal(String::new());
    let selected = RwSignal::new(Vec::<String>::new());
    let (form_error, set_form_error) = signal::<Option<String>>(None);

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
        set_form_error.set(None);

        let username_value = username.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();

        if username_value.is_empty() || email_value.is_empty() || password_value.trim().is_empty()
        {
            set_form_error.set(Some(
                "Username, email, and password are required.".to_string(),
            ));
            return;
        }

        if !email_value.contains('@') {
            set_form_error.set(Some("Email address looks invalid.".to_string()));
            return;
        }

        if password_value != confirm_value {
            set_form_error.set(Some("Passwords do not match.".to_string()));
            return;
        }

        auth.signup(SignupRequest {
            username: username_value,
            email: email_value,
            password: password_value,
            company_name: company_name.get_untracked().trim().to_string(),
            address: address.get_untracked().trim().to_string(),
            phone_number: phone_number.get_untracked().trim().to_string(),
            sector_interests: selected.get_untracked(),
        });
    };

    let error_message = move || {
        form_error
            .get()
            .or_else(|| last_error.get().map(|err| err.to_string()))
    };

    view! {
        <AppShell>
            <form class="max-w-md mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Create your account"
                </h1>
                <div class="mb-5">
                    <label class=Theme::LABEL for="username">
                        "Username"
                    </label>
                    <input
                        id="username"
                        type="text"
                        class=Theme::INPUT
                        autocomplete="username"
                        required
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class=Theme::INPUT
                        autocomplete="email"
                        placeholder="name@company.com"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="new-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="confirm-password">
                        "Confirm password"
                    </label>
                    <input
                        id="confirm-password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="new-password"
                        required
                        on:input=move |event| set_confirm_password.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="company-name">
                        "Company name"
                    </label>
                    <input
                        id="company-name"
                        type="text"
                        class=Theme::INPUT
                        autocomplete="organization"
                        on:input=move |event| set_company_name.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="address">
                        "Business address"
                    </label>
                    <input
                        id="address"
                        type="text"
                        class=Theme::INPUT
                        autocomplete="street-address"
                        on:input=move |event| set_address.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="phone-number">
                        "Phone number"
                    </label>
                    <input
                        id="phone-number"
                        type="tel"
                        class=Theme::INPUT
                        autocomplete="tel"
                        placeholder="+2348012345678"
                        on:input=move |event| set_phone_number.set(event_target_value(&event))
                    />
                </div>
                <fieldset class="mb-6">
                    <legend class=Theme::LABEL>"Which sectors do you work in?"</legend>
                    <div class="grid grid-cols-1 gap-2 sm:grid-cols-2">
                        {SECTORS
                            .iter()
                            .map(|sector| {
                                let id = sector.id;
                                view! {
                                    <label class="flex items-center gap-2 rounded-lg border border-gray-200 p-2 text-sm text-gray-700 dark:border-gray-700 dark:text-gray-300">
                                        <input
                                            type="checkbox"
                                            class="h-4 w-4 rounded border-gray-300 text-green-600 focus:ring-green-500"
                                            prop:checked=move || {
                                                selected.get().iter().any(|item| item == id)
                                            }
                                            on:change=move |_| toggle(id)
                                        />
                                        {sector.title}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </fieldset>
                <Button disabled=pending>
                    "Create account"
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
