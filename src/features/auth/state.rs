//! Auth session state and context for the frontend. The provider owns the
//! session store, hydrates the phase once on mount, and exposes derived auth
//! signals for guards and routes. Every mutation flows through the store so
//! subscribers and the reactive phase stay in lockstep. Tokens and passwords
//! must never be logged here.

use crate::features::auth::{
    client,
    errors::AuthError,
    session::{Session, SessionStore},
    types::{LoginRequest, SignupRequest, UserProfile},
};
use leptos::{prelude::*, task::spawn_local};
use std::rc::Rc;

/// Discriminated authentication state for the tab.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthPhase {
    /// Startup state before the store has been consulted.
    Unknown,
    /// No active session.
    Anonymous,
    /// An active session with a fully populated profile.
    Authenticated(Session),
}

impl AuthPhase {
    pub fn is_unknown(&self) -> bool {
        matches!(self, AuthPhase::Unknown)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthPhase::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthPhase::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session().map(|session| &session.user)
    }
}

/// Auth session context shared through Leptos.
///
/// Operations are serialized: while one login/signup/refresh is in flight,
/// further dispatches are rejected, and each operation carries an epoch so a
/// stale response resolving after a newer operation (or after logout) is
/// discarded instead of applied.
#[derive(Clone)]
pub struct AuthContext {
    store: Rc<SessionStore>,
    epoch: StoredValue<u64>,
    pub phase: RwSignal<AuthPhase>,
    pub is_authenticated: Signal<bool>,
    pub user: Signal<Option<UserProfile>>,
    pub access: Signal<Option<String>>,
    pub pending: RwSignal<bool>,
    pub last_error: RwSignal<Option<AuthError>>,
}

impl AuthContext {
    /// Builds a context around the provided store.
    fn new(store: Rc<SessionStore>) -> Self {
        let phase = RwSignal::new(AuthPhase::Unknown);
        let is_authenticated = Signal::derive(move || phase.get().is_authenticated());
        let user = Signal::derive(move || phase.get().user().cloned());
        let access = Signal::derive(move || phase.get().session().map(|s| s.access.clone()));
        Self {
            store,
            epoch: StoredValue::new(0),
            phase,
            is_authenticated,
            user,
            access,
            pending: RwSignal::new(false),
            last_error: RwSignal::new(None),
        }
    }

    /// Resolves the startup `Unknown` phase from persisted state.
    fn hydrate(&self) {
        let phase = match self.store.load() {
            Some(session) => AuthPhase::Authenticated(session),
            None => AuthPhase::Anonymous,
        };
        self.phase.set(phase);
    }

    /// Starts an operation unless one is already in flight. Returns the epoch
    /// the operation must present when it settles.
    fn begin(&self) -> Option<u64> {
        if self.pending.get_untracked() {
            log::warn!("ignoring auth request while another is in flight");
            return None;
        }
        self.pending.set(true);
        self.last_error.set(None);
        Some(self.bump_epoch())
    }

    fn bump_epoch(&self) -> u64 {
        self.epoch.update_value(|value| *value += 1);
        self.epoch.get_value()
    }

    fn is_current(&self, epoch: u64) -> bool {
        self.epoch.get_value() == epoch
    }

    /// Applies an operation result. Stale epochs are dropped; a session
    /// expiry clears the store, which flips the phase to `Anonymous`.
    fn settle(&self, epoch: u64, result: Result<Session, AuthError>) {
        if !self.is_current(epoch) {
            log::info!("discarding stale auth response");
            return;
        }
        match result {
            Ok(session) => self.store.save(&session),
            Err(error) => {
                if matches!(error, AuthError::SessionExpired) {
                    self.store.clear();
                }
                self.last_error.set(Some(error));
            }
        }
        self.pending.set(false);
    }

    pub fn login(&self, request: LoginRequest) {
        let Some(epoch) = self.begin() else { return };
        let ctx = self.clone();
        spawn_local(async move {
            let result = client::login(&request).await;
            if result.is_ok() {
                log::info!("login succeeded");
            }
            ctx.settle(epoch, result);
        });
    }

    pub fn signup(&self, request: SignupRequest) {
        let Some(epoch) = self.begin() else { return };
        let ctx = self.clone();
        spawn_local(async move {
            let result = client::signup(&request).await;
            if result.is_ok() {
                log::info!("signup succeeded");
            }
            ctx.settle(epoch, result);
        });
    }

    /// Local-only logout: clears the store and invalidates any in-flight
    /// operation so its result cannot resurrect the session.
    pub fn logout(&self) {
        self.bump_epoch();
        self.pending.set(false);
        self.last_error.set(None);
        self.store.clear();
        log::info!("signed out");
    }

    /// Exchanges the refresh token for a new access token. A rejection by the
    /// server ends the session; transport failures leave it untouched.
    pub fn refresh(&self) {
        let Some(epoch) = self.begin() else { return };
        let Some(session) = self.phase.get_untracked().session().cloned() else {
            self.pending.set(false);
            return;
        };
        let ctx = self.clone();
        spawn_local(async move {
            let result = client::refresh(&session.refresh)
                .await
                .map(|access| Session { access, ..session });
            ctx.settle(epoch, result);
        });
    }

    /// Re-fetches the profile and persists the updated session. Used after
    /// server-side profile changes such as a new sector selection.
    pub fn refresh_profile(&self) {
        let Some(epoch) = self.begin() else { return };
        let Some(session) = self.phase.get_untracked().session().cloned() else {
            self.pending.set(false);
            return;
        };
        let ctx = self.clone();
        spawn_local(async move {
            let result = client::current_user(&session.access)
                .await
                .map(|user| Session { user, ..session });
            ctx.settle(epoch, result);
        });
    }
}

/// Provides auth context and hydrates the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let store = Rc::new(SessionStore::browser());
    let auth = AuthContext::new(Rc::clone(&store));

    let phase = auth.phase;
    store.subscribe(move |session| {
        phase.set(match session {
            Some(session) => AuthPhase::Authenticated(session.clone()),
            None => AuthPhase::Anonymous,
        });
    });

    auth.hydrate();
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(Rc::new(SessionStore::browser())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::session::SessionBackend;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct MemoryBackend(RefCell<HashMap<String, String>>);

    impl SessionBackend for MemoryBackend {
        fn read(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.0
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    fn test_context() -> AuthContext {
        let backend = MemoryBackend(RefCell::new(HashMap::new()));
        AuthContext::new(Rc::new(SessionStore::new(Box::new(backend))))
    }

    fn sample_session() -> Session {
        Session {
            access: "access-token".to_string(),
            refresh: "refresh-token".to_string(),
            user: UserProfile {
                id: 3,
                username: "alice".to_string(),
                email: "a@b.com".to_string(),
                company_name: "Acme".to_string(),
                address: "X".to_string(),
                phone_number: "+1".to_string(),
                sector_interests: vec![],
                is_superuser: false,
            },
        }
    }

    #[test]
    fn unknown_phase_has_no_session() {
        let phase = AuthPhase::Unknown;
        assert!(phase.is_unknown());
        assert!(!phase.is_authenticated());
        assert!(phase.session().is_none());
        assert!(phase.user().is_none());
    }

    #[test]
    fn anonymous_phase_is_settled_but_unauthenticated() {
        let phase = AuthPhase::Anonymous;
        assert!(!phase.is_unknown());
        assert!(!phase.is_authenticated());
        assert!(phase.user().is_none());
    }

    #[test]
    fn authenticated_phase_exposes_session_and_user() {
        let phase = AuthPhase::Authenticated(sample_session());
        assert!(phase.is_authenticated());
        assert_eq!(phase.session().map(|s| s.access.as_str()), Some("access-token"));
        assert_eq!(phase.user().map(|u| u.username.as_str()), Some("alice"));
    }

    #[test]
    fn failed_login_keeps_previous_session() {
        let ctx = test_context();
        ctx.store.save(&sample_session());

        let epoch = ctx.begin().expect("no operation in flight");
        ctx.settle(epoch, Err(AuthError::InvalidCredentials));

        assert!(ctx.store.load().is_some());
        assert_eq!(
            ctx.last_error.get_untracked(),
            Some(AuthError::InvalidCredentials)
        );
        assert!(!ctx.pending.get_untracked());
    }

    #[test]
    fn session_expiry_clears_store() {
        let ctx = test_context();
        ctx.store.save(&sample_session());

        let epoch = ctx.begin().expect("no operation in flight");
        ctx.settle(epoch, Err(AuthError::SessionExpired));

        assert!(ctx.store.load().is_none());
    }

    #[test]
    fn successful_settle_persists_session() {
        let ctx = test_context();

        let epoch = ctx.begin().expect("no operation in flight");
        ctx.settle(epoch, Ok(sample_session()));

        assert_eq!(ctx.store.load(), Some(sample_session()));
        assert!(!ctx.pending.get_untracked());
    }

    #[test]
    fn stale_response_cannot_resurrect_session_after_logout() {
        let ctx = test_context();

        let epoch = ctx.begin().expect("no operation in flight");
        ctx.logout();
        ctx.settle(epoch, Ok(sample_session()));

        assert!(ctx.store.load().is_none());
        assert!(!ctx.pending.get_untracked());
    }

    #[test]
    fn second_dispatch_is_rejected_while_pending() {
        let ctx = test_context();

        assert!(ctx.begin().is_some());
        assert!(ctx.begin().is_none());
    }
}
