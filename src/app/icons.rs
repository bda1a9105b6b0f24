use leptos::prelude::*;

use crate::icon::Icon;

#[component]
pub fn SvgIcon(icon: Icon, #[prop(optional)] large: bool) -> impl IntoView {
    let size = if large { "w-6 h-6 shrink-0" } else { "w-5 h-5 shrink-0" };
    view! {
        <svg
            class=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icon.path() />
        </svg>
    }
}
