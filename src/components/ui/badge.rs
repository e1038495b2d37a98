use leptos::prelude::*;

/// Small label pill for roles and permission flags.
#[component]
pub fn Badge(#[prop(optional, into, default = Signal::from(false))] active: Signal<bool>, children: Children) -> impl IntoView {
    view! {
        <span
            class="inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium"
            class:bg-green-100=move || active.get()
            class:text-green-800=move || active.get()
            class:bg-gray-100=move || !active.get()
            class:text-gray-600=move || !active.get()
        >
            {children()}
        </span>
    }
}
