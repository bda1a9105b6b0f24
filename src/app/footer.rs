use leptos::prelude::*;

use crate::portfolio::{build_year, NAV_ITEMS, PROFILE};

use super::homepage::SocialLinks;
use super::scroll_to_section;

#[component]
pub fn Footer() -> impl IntoView {
    let year = build_year().map(|y| format!("© {y} ")).unwrap_or_default();

    view! {
        <footer class="border-t border-gray-800 py-10 px-4">
            <div class="max-w-6xl mx-auto flex flex-col items-center gap-6">
                <nav class="flex flex-wrap justify-center gap-4 text-sm text-gray-400">
                    {NAV_ITEMS
                        .iter()
                        .copied()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.id.href()
                                    class="hover:text-cyan-400"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        scroll_to_section(item.id);
                                    }
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <SocialLinks />
                <p class="text-sm text-gray-500">{year}{PROFILE.name}". Built with Rust and Leptos."</p>
            </div>
        </footer>
    }
}
