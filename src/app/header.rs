use leptos::prelude::*;

use crate::icon::Icon;
use crate::portfolio::{NavItem, SectionId, NAV_ITEMS, PROFILE};

use super::icons::SvgIcon;
use super::{scroll_to_section, PageState};

const LINK_CLASS: &str =
    "flex items-center gap-2 px-3 py-2 rounded-md text-sm font-medium transition-colors duration-200";

#[component]
pub fn NavBar(state: PageState) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let nav_link = move |item: NavItem| {
        let id = item.id;
        view! {
            <a
                href=id.href()
                class=move || {
                    if state.is_active(id) {
                        format!("{LINK_CLASS} text-cyan-400 bg-gray-800")
                    } else {
                        format!("{LINK_CLASS} text-gray-300 hover:text-white")
                    }
                }
                aria-current=move || state.is_active(id).then_some("page")
                on:click=move |ev| {
                    ev.prevent_default();
                    set_menu_open.set(false);
                    scroll_to_section(id);
                }
            >
                <SvgIcon icon=item.icon />
                <span>{item.label}</span>
            </a>
        }
    };

    view! {
        <header class="sticky top-0 z-40 bg-gray-900/90 backdrop-blur border-b border-gray-800 shadow">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a
                        href=SectionId::Home.href()
                        class="text-xl font-bold text-teal-400"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section(SectionId::Home);
                        }
                    >
                        {PROFILE.name}
                    </a>
                    <nav class="hidden md:flex items-center gap-1">
                        {NAV_ITEMS.iter().copied().map(nav_link).collect_view()}
                    </nav>
                    <button
                        class="md:hidden flex items-center gap-2 p-2 rounded-md text-gray-300 hover:bg-gray-800"
                        aria-label="Toggle navigation"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            let icon = if menu_open.get() { Icon::Close } else { Icon::Menu };
                            view! { <SvgIcon icon /> }
                        }}
                        <span class="text-sm">"Menu"</span>
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <nav class="md:hidden flex flex-col pb-4">
                        {NAV_ITEMS.iter().copied().map(nav_link).collect_view()}
                    </nav>
                </Show>
            </div>
        </header>
    }
}
