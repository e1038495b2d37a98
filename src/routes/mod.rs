mod dashboard;
mod landing;
mod login;
mod not_found;
mod preferences;
mod settings;
mod signup;
mod staff;

pub(crate) use dashboard::DashboardPage;
pub(crate) use landing::LandingPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use preferences::PreferencesPage;
pub(crate) use settings::SettingsPage;
pub(crate) use signup::SignUpPage;
pub(crate) use staff::StaffPage;

use crate::features::auth::{PublicOnly, RequireAuth};
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route
                path=path!("/")
                view=|| view! { <PublicOnly><LandingPage /></PublicOnly> }
            />
            <Route
                path=path!("/login")
                view=|| view! { <PublicOnly><LoginPage /></PublicOnly> }
            />
            <Route
                path=path!("/signup")
                view=|| view! { <PublicOnly><SignUpPage /></PublicOnly> }
            />
            <Route
                path=path!("/dashboard")
                view=|| view! { <RequireAuth><DashboardPage /></RequireAuth> }
            />
            <Route
                path=path!("/staff")
                view=|| view! { <RequireAuth><StaffPage /></RequireAuth> }
            />
            <Route
                path=path!("/preferences")
                view=|| view! { <RequireAuth><PreferencesPage /></RequireAuth> }
            />
            <Route
                path=path!("/settings")
                view=|| view! { <RequireAuth><SettingsPage /></RequireAuth> }
            />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
