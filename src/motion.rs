use crate::portfolio::SectionId;

pub const VISIBILITY_THRESHOLD: f64 = 0.2;
pub const ACTIVE_THRESHOLD: f64 = 0.5;
pub const REVEAL_OFFSET_PX: f64 = 100.0;
pub const REVEAL_DURATION_SECS: f64 = 0.6;
// float noise only; an exit crossing reports a ratio just under the threshold
const RATIO_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollTracker {
    last_offset: f64,
    direction: Option<ScrollDirection>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(offset: f64) -> Self {
        Self {
            last_offset: offset,
            direction: None,
        }
    }

    /// Records a scroll sample. An unchanged offset keeps the previous direction.
    pub fn record(&mut self, offset: f64) -> Option<ScrollDirection> {
        if offset > self.last_offset {
            self.direction = Some(ScrollDirection::Down);
        } else if offset < self.last_offset {
            self.direction = Some(ScrollDirection::Up);
        }
        self.last_offset = offset;
        self.direction
    }

    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTarget {
    pub opacity: f64,
    pub offset_x: f64,
}

impl RevealTarget {
    pub const INITIAL: Self = Self::hidden_right();
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        offset_x: 0.0,
    };

    const fn hidden_right() -> Self {
        Self {
            opacity: 0.0,
            offset_x: REVEAL_OFFSET_PX,
        }
    }

    const fn hidden_left() -> Self {
        Self {
            opacity: 0.0,
            offset_x: -REVEAL_OFFSET_PX,
        }
    }

    /// A hidden section leaves toward the side the page came from: left after
    /// scrolling up, right after scrolling down or before any scroll.
    pub fn resolve(visible: bool, direction: Option<ScrollDirection>) -> Self {
        match (visible, direction) {
            (true, _) => Self::SHOWN,
            (false, Some(ScrollDirection::Up)) => Self::hidden_left(),
            (false, _) => Self::hidden_right(),
        }
    }

    pub fn is_shown(&self) -> bool {
        *self == Self::SHOWN
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {}; transform: translateX({}px); transition: opacity {d}s ease-out, transform {d}s ease-out;",
            self.opacity,
            self.offset_x,
            d = REVEAL_DURATION_SECS,
        )
    }
}

impl Default for RevealTarget {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub section: SectionId,
    pub ratio: f64,
    pub intersecting: bool,
}

impl Observation {
    pub fn reaches(&self, threshold: f64) -> bool {
        self.intersecting && self.ratio + RATIO_EPSILON >= threshold
    }

    pub fn is_visible(&self) -> bool {
        self.reaches(VISIBILITY_THRESHOLD)
    }
}

// Simultaneous crossings: last observed wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveSection {
    current: SectionId,
}

impl ActiveSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> SectionId {
        self.current
    }

    pub fn observe(&mut self, obs: Observation) -> bool {
        if !obs.reaches(ACTIVE_THRESHOLD) {
            return false;
        }
        let changed = self.current != obs.section;
        if changed {
            log::debug!("active section: {}", obs.section.id());
        }
        self.current = obs.section;
        changed
    }

    pub fn observe_batch(&mut self, batch: impl IntoIterator<Item = Observation>) -> bool {
        let before = self.current;
        for obs in batch {
            self.observe(obs);
        }
        self.current != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(section: SectionId, ratio: f64) -> Observation {
        Observation {
            section,
            ratio,
            intersecting: ratio > 0.0,
        }
    }

    #[test]
    fn scroll_direction_follows_offset_sign() {
        let mut t = ScrollTracker::new();
        assert_eq!(t.direction(), None);
        assert_eq!(t.record(120.0), Some(ScrollDirection::Down));
        assert_eq!(t.record(80.0), Some(ScrollDirection::Up));
        assert_eq!(t.last_offset(), 80.0);
    }

    #[test]
    fn equal_offset_keeps_direction() {
        let mut t = ScrollTracker::new();
        assert_eq!(t.record(0.0), None);
        t.record(300.0);
        assert_eq!(t.record(300.0), Some(ScrollDirection::Down));
        t.record(10.0);
        assert_eq!(t.record(10.0), Some(ScrollDirection::Up));
    }

    #[test]
    fn unseen_section_starts_hidden_to_the_right() {
        let initial = RevealTarget::default();
        assert_eq!(initial.opacity, 0.0);
        assert!(initial.offset_x > 0.0);
        assert_eq!(RevealTarget::resolve(false, None), initial);
    }

    #[test]
    fn visible_section_is_shown_regardless_of_direction() {
        for dir in [None, Some(ScrollDirection::Up), Some(ScrollDirection::Down)] {
            assert!(RevealTarget::resolve(true, dir).is_shown());
        }
    }

    #[test]
    fn scrolling_past_and_back_exits_left() {
        let mut t = ScrollTracker::new();
        // scroll down into the section, then past it
        t.record(400.0);
        let shown = RevealTarget::resolve(true, t.direction());
        assert!(shown.is_shown());
        t.record(1200.0);
        let passed = RevealTarget::resolve(false, t.direction());
        assert_eq!(passed.offset_x, REVEAL_OFFSET_PX);

        // back up through it and above it
        t.record(600.0);
        assert!(RevealTarget::resolve(true, t.direction()).is_shown());
        t.record(0.0);
        let above = RevealTarget::resolve(false, t.direction());
        assert_eq!(above.opacity, 0.0);
        assert_eq!(above.offset_x, -REVEAL_OFFSET_PX);
    }

    #[test]
    fn style_carries_target_and_duration() {
        let style = RevealTarget::resolve(false, Some(ScrollDirection::Up)).style();
        assert!(style.contains("opacity: 0;"));
        assert!(style.contains("translateX(-100px)"));
        assert!(style.contains("0.6s ease-out"));
        assert!(RevealTarget::SHOWN.style().contains("translateX(0px)"));
    }

    #[test]
    fn active_section_needs_half_visibility() {
        let mut active = ActiveSection::new();
        assert_eq!(active.current(), SectionId::Home);
        assert!(!active.observe(seen(SectionId::About, 0.3)));
        assert_eq!(active.current(), SectionId::Home);
        assert!(active.observe(seen(SectionId::About, 0.5)));
        assert_eq!(active.current(), SectionId::About);
        assert!(!active.observe(seen(SectionId::About, 0.9)));
    }

    #[test]
    fn leaving_a_section_does_not_clear_it() {
        let mut active = ActiveSection::new();
        active.observe(seen(SectionId::Skills, 0.6));
        assert!(!active.observe(Observation {
            section: SectionId::Skills,
            ratio: 0.4,
            intersecting: true,
        }));
        assert!(!active.observe(seen(SectionId::Skills, 0.0)));
        assert_eq!(active.current(), SectionId::Skills);
    }

    #[test]
    fn last_observed_wins_within_a_batch() {
        let mut active = ActiveSection::new();
        let changed = active.observe_batch([
            seen(SectionId::Experience, 0.7),
            seen(SectionId::Projects, 0.55),
        ]);
        assert!(changed);
        assert_eq!(active.current(), SectionId::Projects);

        let changed = active.observe_batch([
            seen(SectionId::Contact, 0.8),
            seen(SectionId::Projects, 0.6),
        ]);
        assert!(!changed);
        assert_eq!(active.current(), SectionId::Projects);
    }

    #[test]
    fn visibility_uses_the_reveal_threshold() {
        assert!(!seen(SectionId::About, 0.1).is_visible());
        assert!(seen(SectionId::About, 0.2).is_visible());
        assert!(seen(SectionId::About, 0.8).is_visible());
        assert!(!Observation {
            section: SectionId::About,
            ratio: 0.8,
            intersecting: false,
        }
        .is_visible());
    }

    #[test]
    fn exit_crossing_hides_the_section() {
        let mut t = ScrollTracker::starting_at(900.0);
        t.record(400.0);
        // still intersecting, but just under the reveal threshold on the way out
        let leaving = seen(SectionId::About, 0.192);
        assert!(!leaving.is_visible());
        let target = RevealTarget::resolve(leaving.is_visible(), t.direction());
        assert_eq!(target, RevealTarget::resolve(false, Some(ScrollDirection::Up)));
        assert!(target.style().contains("translateX(-100px)"));
    }

    #[test]
    fn exit_crossing_does_not_take_the_highlight() {
        let mut active = ActiveSection::new();
        active.observe(seen(SectionId::Skills, 0.6));
        // scrolling up: About crosses in, then Skills' exit entry arrives last
        let changed = active.observe_batch([
            seen(SectionId::About, 0.5),
            seen(SectionId::Skills, 0.495),
        ]);
        assert!(changed);
        assert_eq!(active.current(), SectionId::About);
    }

    #[test]
    fn tracker_seeded_with_restored_offset() {
        let mut t = ScrollTracker::starting_at(1500.0);
        assert_eq!(t.direction(), None);
        assert_eq!(t.record(1400.0), Some(ScrollDirection::Up));
    }

    #[test]
    fn not_intersecting_never_activates() {
        let mut active = ActiveSection::new();
        assert!(!active.observe(Observation {
            section: SectionId::Contact,
            ratio: 1.0,
            intersecting: false,
        }));
    }
}
