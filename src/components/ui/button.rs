use leptos::prelude::*;

const BASE: &str = "w-full sm:w-auto rounded-lg bg-green-700 px-5 py-2.5 text-center text-sm font-medium text-white hover:bg-green-800 focus:outline-none focus:ring-4 focus:ring-green-300 dark:bg-green-600 dark:hover:bg-green-700 dark:focus:ring-green-800";

/// Primary submit button for forms. Disable it while the form's request is in
/// flight so a double click cannot dispatch twice.
#[component]
pub fn Button(
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        if disabled.get() {
            format!("{BASE} cursor-not-allowed opacity-70")
        } else {
            BASE.to_string()
        }
    };

    view! {
        <button type="submit" class=class disabled=move || disabled.get()>
            {children()}
        </button>
    }
}
