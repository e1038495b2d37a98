//! Inline feedback banner rendered near the form it belongs to. Messages are
//! plain text; never interpolate secrets or raw server payloads beyond the
//! sanitized error text.

use leptos::prelude::*;

/// Severity of an [`Alert`] banner.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    const fn palette(self) -> &'static str {
        match self {
            AlertKind::Error => {
                "border-red-300 bg-red-50 text-red-800 dark:border-red-500 dark:bg-gray-800 dark:text-red-300"
            }
            AlertKind::Success => {
                "border-green-300 bg-green-50 text-green-800 dark:border-green-500 dark:bg-gray-800 dark:text-green-300"
            }
        }
    }
}

#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    view! {
        <div
            class=format!("rounded-lg border px-4 py-3 text-sm {}", kind.palette())
            role="alert"
        >
            {message}
        </div>
    }
}
