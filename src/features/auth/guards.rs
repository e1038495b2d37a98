//! Route guards mapping the auth phase to a view decision. The decision
//! itself is a pure function; the wrapper components only render the outcome
//! and issue the redirect. UX-only guards; real access control must live on
//! the API.

use crate::components::Spinner;
use crate::features::auth::state::{AuthPhase, use_auth};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Auth phase not resolved yet; show a placeholder.
    Pending,
    /// Render the guarded view.
    Allow,
    /// Send the visitor somewhere else.
    Redirect(&'static str),
}

/// Decision for routes that require an active session.
pub fn resolve_protected(phase: &AuthPhase) -> GuardOutcome {
    match phase {
        AuthPhase::Unknown => GuardOutcome::Pending,
        AuthPhase::Anonymous => GuardOutcome::Redirect("/"),
        AuthPhase::Authenticated(_) => GuardOutcome::Allow,
    }
}

/// Decision for landing/login/signup routes that signed-in users skip.
pub fn resolve_public(phase: &AuthPhase) -> GuardOutcome {
    match phase {
        AuthPhase::Unknown => GuardOutcome::Pending,
        AuthPhase::Anonymous => GuardOutcome::Allow,
        AuthPhase::Authenticated(_) => GuardOutcome::Redirect("/dashboard"),
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let phase = auth.phase;

    Effect::new(move |_| {
        if let GuardOutcome::Redirect(target) = resolve_protected(&phase.get()) {
            navigate(target, Default::default());
        }
    });

    view! {
        {move || match resolve_protected(&phase.get()) {
            GuardOutcome::Pending => view! {
                <div class="flex justify-center py-16">
                    <Spinner large=true />
                </div>
            }
            .into_any(),
            GuardOutcome::Allow => children().into_any(),
            GuardOutcome::Redirect(_) => ().into_any(),
        }}
    }
}

#[component]
pub fn PublicOnly(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let phase = auth.phase;

    Effect::new(move |_| {
        if let GuardOutcome::Redirect(target) = resolve_public(&phase.get()) {
            navigate(target, Default::default());
        }
    });

    view! {
        {move || match resolve_public(&phase.get()) {
            GuardOutcome::Pending => view! {
                <div class="flex justify-center py-16">
                    <Spinner large=true />
                </div>
            }
            .into_any(),
            GuardOutcome::Allow => children().into_any(),
            GuardOutcome::Redirect(_) => ().into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::{session::Session, types::UserProfile};

    fn authenticated() -> AuthPhase {
        AuthPhase::Authenticated(Session {
            access: "a".to_string(),
            refresh: "r".to_string(),
            user: UserProfile {
                id: 1,
                username: "alice".to_string(),
                email: "a@b.com".to_string(),
                company_name: String::new(),
                address: String::new(),
                phone_number: String::new(),
                sector_interests: vec![],
                is_superuser: false,
            },
        })
    }

    #[test]
    fn protected_routes_wait_redirect_or_allow() {
        assert_eq!(resolve_protected(&AuthPhase::Unknown), GuardOutcome::Pending);
        assert_eq!(
            resolve_protected(&AuthPhase::Anonymous),
            GuardOutcome::Redirect("/")
        );
        assert_eq!(resolve_protected(&authenticated()), GuardOutcome::Allow);
    }

    #[test]
    fn public_routes_skip_signed_in_users() {
        assert_eq!(resolve_public(&AuthPhase::Unknown), GuardOutcome::Pending);
        assert_eq!(resolve_public(&AuthPhase::Anonymous), GuardOutcome::Allow);
        assert_eq!(
            resolve_public(&authenticated()),
            GuardOutcome::Redirect("/dashboard")
        );
    }
}
