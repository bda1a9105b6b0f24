mod contact;
mod footer;
mod header;
mod homepage;
mod icons;
mod projects;
mod section;
mod timeline;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::contact::ModalState;
use crate::motion::{ActiveSection, ScrollDirection};
use crate::portfolio::{person_json_ld, SectionId, FAVICON, PROFILE};

use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let schema = person_json_ld()
        .inspect_err(|e| log::warn!("couldn't serialize person schema: {e}"))
        .ok();
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                {schema.map(|json| view! { <script type="application/ld+json" inner_html=json></script> })}
                <MetaTags />
            </head>
            <body class="bg-gray-900 text-gray-100 font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.summary />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Transient UI state for the page. Created once by the home page and handed
/// to every view that reads or changes it.
#[derive(Debug, Clone, Copy)]
pub struct PageState {
    pub active: RwSignal<ActiveSection>,
    pub direction: Signal<Option<ScrollDirection>>,
    pub modal: RwSignal<ModalState>,
}

impl PageState {
    pub fn new(direction: Signal<Option<ScrollDirection>>) -> Self {
        Self {
            active: RwSignal::new(ActiveSection::new()),
            direction,
            modal: RwSignal::new(ModalState::default()),
        }
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active.with(|a| a.current() == section)
    }
}

/// Smooth-scrolls the page to a section's anchor. Missing targets are ignored.
pub(crate) fn scroll_to_section(section: SectionId) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::debug!("no element with id `{}` to scroll to", section.id());
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}
