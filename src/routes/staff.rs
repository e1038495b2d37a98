//! Staff management route. Superusers can list the roster, add members,
//! toggle per-member permissions, and remove members. The backend enforces
//! the actual authorization; the in-page gate only keeps the view honest.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Badge, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::staff::client;
use crate::features::staff::types::{StaffCreateRequest, StaffMember, StaffUpdateRequest};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[derive(Clone)]
struct CreateInput {
    token: String,
    request: StaffCreateRequest,
}

#[derive(Clone)]
struct UpdateInput {
    token: String,
    id: u64,
    request: StaffUpdateRequest,
}

#[derive(Clone)]
struct DeleteInput {
    token: String,
    id: u64,
}

const ROLES: [&str; 3] = ["Viewer", "Editor", "Manager"];

#[component]
pub fn StaffPage() -> impl IntoView {
    let auth = use_auth();
    let access = auth.access;
    let user = auth.user;
    let is_superuser = move || user.get().map(|user| user.is_superuser).unwrap_or(false);

    let (reload, set_reload) = signal(0u32);
    let (error, set_error) = signal::<Option<String>>(None);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (role, set_role) = signal(ROLES[0].to_string());

    let staff = LocalResource::new(move || {
        reload.track();
        let token = access.get();
        async move {
            match token {
                Some(token) => client::list_staff(&token).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let create_action = Action::new_local(move |input: &CreateInput| {
        let input = input.clone();
        async move { client::create_staff(&input.token, &input.request).await }
    });
    let update_action = Action::new_local(move |input: &UpdateInput| {
        let input = input.clone();
        async move { client::update_staff(&input.token, input.id, &input.request).await }
    });
    let delete_action = Action::new_local(move |input: &DeleteInput| {
        let input = input.clone();
        async move { client::remove_staff(&input.token, input.id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(_) => {
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_role.set(ROLES[0].to_string());
                    set_reload.update(|count| *count += 1);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });
    Effect::new(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(_) => set_reload.update(|count| *count += 1),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });
    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => set_reload.update(|count| *count += 1),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_create = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let Some(token) = access.get_untracked() else {
            return;
        };
        let name_value = name.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        if name_value.is_empty() || email_value.is_empty() {
            set_error.set(Some("Name and email are required.".to_string()));
            return;
        }

        create_action.dispatch(CreateInput {
            token,
            request: StaffCreateRequest {
                name: name_value,
                email: email_value,
                role: role.get_untracked(),
            },
        });
    };

    let permission_cell = move |id: u64, label: &'static str, current: bool, request: StaffUpdateRequest| {
        view! {
            <label class="flex items-center gap-1.5 text-xs text-gray-600 dark:text-gray-400">
                <input
                    type="checkbox"
                    class="h-4 w-4 rounded border-gray-300 text-green-600 focus:ring-green-500"
                    prop:checked=current
                    on:change=move |_| {
                        if let Some(token) = access.get_untracked() {
                            update_action
                                .dispatch(UpdateInput {
                                    token,
                                    id,
                                    request: request.clone(),
                                });
                        }
                    }
                />
                {label}
            </label>
        }
    };

    view! {
        <AppShell>
            <Show
                when=is_superuser
                fallback=|| {
                    view! {
                        <Alert
                            kind=AlertKind::Error
                            message="You do not have permission to access this page.".to_string()
                        />
                    }
                }
            >
                <div class="space-y-6">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Staff"
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "Add team members and manage what they can do."
                        </p>
                    </div>

                    <form class=Theme::CARD on:submit=on_create>
                        <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                            <div>
                                <label class=Theme::LABEL for="staff-name">
                                    "Name"
                                </label>
                                <input
                                    id="staff-name"
                                    type="text"
                                    class=Theme::INPUT
                                    prop:value=name
                                    on:input=move |event| set_name.set(event_target_value(&event))
                                />
                            </div>
                            <div>
                                <label class=Theme::LABEL for="staff-email">
                                    "Email"
                                </label>
                                <input
                                    id="staff-email"
                                    type="email"
                                    class=Theme::INPUT
                                    prop:value=email
                                    on:input=move |event| set_email.set(event_target_value(&event))
                                />
                            </div>
                            <div>
                                <label class=Theme::LABEL for="staff-role">
                                    "Role"
                                </label>
                                <select
                                    id="staff-role"
                                    class=Theme::INPUT
                                    prop:value=role
                                    on:change=move |event| set_role.set(event_target_value(&event))
                                >
                                    {ROLES
                                        .iter()
                                        .map(|role| view! { <option value=*role>{*role}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>
                        <div class="mt-4">
                            <Button disabled=create_action.pending()>
                                "Add member"
                            </Button>
                        </div>
                    </form>

                    {move || {
                        error
                            .get()
                            .map(|message| {
                                view! { <Alert kind=AlertKind::Error message=message /> }
                            })
                    }}

                    <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                        <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                            <thead class="bg-gray-50 dark:bg-gray-900/50">
                                <tr>
                                    <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                        "Member"
                                    </th>
                                    <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                        "Role"
                                    </th>
                                    <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                        "Permissions"
                                    </th>
                                    <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                        "Actions"
                                    </th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                <Suspense fallback=move || {
                                    view! {
                                        <tr>
                                            <td colspan="4" class="px-6 py-12 text-center">
                                                <Spinner large=true />
                                            </td>
                                        </tr>
                                    }
                                }>
                                    {move || match staff.get() {
                                        Some(Ok(list)) if list.is_empty() => {
                                            view! {
                                                <tr>
                                                    <td colspan="4" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                                        "No staff members yet."
                                                    </td>
                                                </tr>
                                            }
                                                .into_any()
                                        }
                                        Some(Ok(list)) => {
                                            view! {
                                                <For
                                                    each=move || list.clone()
                                                    key=|member| member.id
                                                    children=move |member: StaffMember| {
                                                        let id = member.id;
                                                        view! {
                                                            <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                                <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                                    <div class="font-medium text-gray-900 dark:text-white">
                                                                        {member.name.clone()}
                                                                    </div>
                                                                    <div class="text-gray-500 dark:text-gray-400">
                                                                        {member.email.clone()}
                                                                    </div>
                                                                </td>
                                                                <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                                    <Badge active=member.is_admin>
                                                                        {member.role.clone()}
                                                                    </Badge>
                                                                </td>
                                                                <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                                    <div class="flex gap-4">
                                                                        {permission_cell(
                                                                            id,
                                                                            "Edit",
                                                                            member.can_edit,
                                                                            StaffUpdateRequest {
                                                                                can_edit: Some(!member.can_edit),
                                                                                ..Default::default()
                                                                            },
                                                                        )}
                                                                        {permission_cell(
                                                                            id,
                                                                            "Delete",
                                                                            member.can_delete,
                                                                            StaffUpdateRequest {
                                                                                can_delete: Some(!member.can_delete),
                                                                                ..Default::default()
                                                                            },
                                                                        )}
                                                                        {permission_cell(
                                                                            id,
                                                                            "Admin",
                                                                            member.is_admin,
                                                                            StaffUpdateRequest {
                                                                                is_admin: Some(!member.is_admin),
                                                                                ..Default::default()
                                                                            },
                                                                        )}
                                                                    </div>
                                                                </td>
                                                                <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium">
                                                                    <button
                                                                        type="button"
                                                                        class="text-red-600 hover:text-red-800 dark:text-red-400 dark:hover:text-red-300"
                                                                        on:click=move |_| {
                                                                            if let Some(token) = access.get_untracked() {
                                                                                delete_action
                                                                                    .dispatch(DeleteInput {
                                                                                        token,
                                                                                        id,
                                                                                    });
                                                                            }
                                                                        }
                                                                    >
                                                                        "Remove"
                                                                    </button>
                                                                </td>
                                                            </tr>
                                                        }
                                                    }
                                                />
                                            }
                                                .into_any()
                                        }
                                        Some(Err(err)) => {
                                            view! {
                                                <tr>
                                                    <td colspan="4" class="px-6 py-4">
                                                        <Alert kind=AlertKind::Error message=err.to_string() />
                                                    </td>
                                                </tr>
                                            }
                                                .into_any()
                                        }
                                        None => {
                                            view! {
                                                <tr>
                                                    <td colspan="4" class="px-6 py-12 text-center">
                                                        <Spinner large=true />
                                                    </td>
                                                </tr>
                                            }
                                                .into_any()
                                        }
                                    }}
                                </Suspense>
                            </tbody>
                        </table>
                    </div>
                </div>
            </Show>
        </AppShell>
    }
}
