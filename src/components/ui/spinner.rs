use leptos::prelude::*;

/// Spinning loading indicator. `large` is for whole-page placeholders; the
/// default size sits inline next to form controls.
#[component]
pub fn Spinner(#[prop(optional)] large: bool) -> impl IntoView {
    let size = if large {
        "h-10 w-10 border-4"
    } else {
        "h-6 w-6 border-[3px]"
    };

    view! {
        <div
            class=format!(
                "inline-block animate-spin rounded-full border-green-600 border-r-transparent {size}"
            )
            role="status"
            aria-label="Loading"
        ></div>
    }
}
