use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_window_scroll, UseIntersectionObserverOptions,
};
use web_sys::IntersectionObserverEntry;

use crate::motion::{
    Observation, RevealTarget, ScrollDirection, ScrollTracker, ACTIVE_THRESHOLD,
    VISIBILITY_THRESHOLD,
};
use crate::portfolio::SectionId;

use super::PageState;

/// Single page-wide scroll subscription, dropped with the owning component.
pub fn use_scroll_direction() -> Signal<Option<ScrollDirection>> {
    let (_, y) = use_window_scroll();
    let direction = RwSignal::new(None::<ScrollDirection>);
    // the browser may have restored a scroll position before mount
    let mut tracker = ScrollTracker::starting_at(y.get_untracked());

    Effect::watch(
        move || y.get(),
        move |offset, _, _| {
            let next = tracker.record(*offset);
            direction.maybe_update(|d| {
                let changed = *d != next;
                *d = next;
                changed
            });
        },
        false,
    );

    direction.into()
}

fn observations(
    section: SectionId,
    entries: &[IntersectionObserverEntry],
) -> impl Iterator<Item = Observation> + '_ {
    entries.iter().map(move |e| Observation {
        section,
        ratio: e.intersection_ratio(),
        intersecting: e.is_intersecting(),
    })
}

/// Page section that slides in when it scrolls into view and reports itself
/// to the navigation once it fills half the viewport.
#[component]
pub fn AnimatedSection(
    section: SectionId,
    state: PageState,
    /// Shaded background, used on alternating sections.
    #[prop(optional)]
    shaded: bool,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let (visible, set_visible) = signal(false);

    // both observers disconnect when the section's owner is disposed
    use_intersection_observer_with_options(
        node,
        move |entries: Vec<IntersectionObserverEntry>, _| {
            if let Some(obs) = observations(section, &entries).last() {
                set_visible.set(obs.is_visible());
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![VISIBILITY_THRESHOLD]),
    );
    use_intersection_observer_with_options(
        node,
        move |entries: Vec<IntersectionObserverEntry>, _| {
            state
                .active
                .maybe_update(|active| active.observe_batch(observations(section, &entries)));
        },
        UseIntersectionObserverOptions::default().thresholds(vec![ACTIVE_THRESHOLD]),
    );

    let style = move || RevealTarget::resolve(visible.get(), state.direction.get()).style();

    view! {
        <section
            id=section.id()
            node_ref=node
            class="scroll-mt-20 py-20 px-4 sm:px-6 lg:px-8 overflow-x-hidden"
            class:bg-gray-800=shaded
        >
            <div class="max-w-6xl mx-auto will-change-transform" style=style>
                {children()}
            </div>
        </section>
    }
}

#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-3xl font-bold">{title}</h2>
            <div class="mx-auto mt-3 h-1 w-16 rounded bg-cyan-400"></div>
            {subtitle.map(|s| view! { <p class="mt-4 text-gray-400">{s}</p> })}
        </div>
    }
}
