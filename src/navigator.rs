//! Section navigation state.
//!
//! Tracks which report section the viewport is looking at and owns the
//! navigation panel flag. Layout geometry comes in through [`LayoutProvider`]
//! and scroll requests go out through [`Scroller`], so the state machine
//! never touches the terminal directly.

/// Lines past the top of the viewport where the scroll probe sits.
/// Compensates for the fixed title banner: a heading sliding under the
/// banner takes the highlight as soon as it crosses the probe line.
pub const SCROLL_LOOKAHEAD: usize = 4;

/// A named, anchorable region of the report, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// Vertical band a section occupies in the laid-out document, in lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub top: usize,
    pub height: usize,
}

impl Region {
    /// Whether `line` falls inside the half-open band `[top, top + height)`.
    pub fn contains(&self, line: usize) -> bool {
        line >= self.top && line < self.top + self.height
    }
}

/// Resolves a section id to its rendered band, if it currently has one.
pub trait LayoutProvider {
    fn region(&self, id: &str) -> Option<Region>;
}

/// One-way scroll command sink. Requests carry no completion signal and
/// are never awaited; a later request simply supersedes an earlier one.
pub trait Scroller {
    fn scroll_to(&mut self, line: usize);
}

/// Scroll-spy state machine over a fixed, ordered section list.
///
/// Only two fields are mutable at runtime: the active section and the
/// panel flag. The section list itself never changes after construction.
#[derive(Debug, Clone)]
pub struct Navigator {
    sections: &'static [Section],
    active: usize,
    panel_open: bool,
}

impl Navigator {
    /// Build a navigator over the fixed section list. The list must be
    /// non-empty; the first section starts active.
    pub fn new(sections: &'static [Section]) -> Self {
        Self {
            sections,
            active: 0,
            panel_open: false,
        }
    }

    pub fn sections(&self) -> &'static [Section] {
        self.sections
    }

    /// Id of the currently active section.
    pub fn active_id(&self) -> &'static str {
        self.sections[self.active].id
    }

    /// Display label of the currently active section.
    pub fn active_label(&self) -> &'static str {
        self.sections[self.active].label
    }

    /// Position of the active section in document order.
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Id of the section after the active one, if the active one is not
    /// the last. Drives the next-section chevron.
    pub fn next_section_id(&self) -> Option<&'static str> {
        self.sections.get(self.active + 1).map(|s| s.id)
    }

    /// Recompute the active section from a scroll offset.
    ///
    /// Probes `offset + SCROLL_LOOKAHEAD` against each section's band in
    /// document order; the first containing band wins. When the probe sits
    /// outside every band (above the first region or past the last) the
    /// previous active section is kept rather than reset. Sections without
    /// a region are skipped. Pure read: never issues scroll commands.
    pub fn on_scroll(&mut self, offset: usize, layout: &impl LayoutProvider) {
        let probe = offset.saturating_add(SCROLL_LOOKAHEAD);
        for (idx, section) in self.sections.iter().enumerate() {
            if let Some(region) = layout.region(section.id) {
                if region.contains(probe) {
                    self.active = idx;
                    break;
                }
            }
        }
    }

    /// Request a scroll to the named section and close the panel.
    ///
    /// Unknown ids and sections without a laid-out region are ignored
    /// entirely, panel included. On success one `scroll_to` command is
    /// issued for the region top; the active section is left alone and
    /// converges through `on_scroll` as the viewport moves. While the
    /// motion is in flight the highlight may pass through intermediate
    /// sections; that matches the page this report viewer reproduces.
    pub fn navigate_to(
        &mut self,
        id: &str,
        layout: &impl LayoutProvider,
        scroller: &mut impl Scroller,
    ) {
        let section = match self.sections.iter().find(|s| s.id == id) {
            Some(s) => s,
            None => return,
        };
        let region = match layout.region(section.id) {
            Some(r) => r,
            None => return,
        };
        scroller.scroll_to(region.top);
        self.panel_open = false;
    }

    /// Flip the navigation panel open/closed.
    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
    }

    /// Force the navigation panel closed. Idempotent; backdrop dismissal
    /// and the Esc key both land here.
    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECTIONS: &[Section] = &[
        Section { id: "overview", label: "Overview" },
        Section { id: "results", label: "Results" },
        Section { id: "performance-factors", label: "Performance Factors" },
        Section { id: "case-study", label: "Case Study" },
        Section { id: "next-steps", label: "Next Steps" },
    ];

    struct FakeLayout(Vec<(&'static str, Region)>);

    impl LayoutProvider for FakeLayout {
        fn region(&self, id: &str) -> Option<Region> {
            self.0.iter().find(|(rid, _)| *rid == id).map(|(_, r)| *r)
        }
    }

    #[derive(Default)]
    struct RecordingScroller {
        requests: Vec<usize>,
    }

    impl Scroller for RecordingScroller {
        fn scroll_to(&mut self, line: usize) {
            self.requests.push(line);
        }
    }

    fn nav() -> Navigator {
        Navigator::new(TEST_SECTIONS)
    }

    /// Bands at 0, 800, 2000, 3500, 5000, each filling to the next top.
    fn page_layout() -> FakeLayout {
        FakeLayout(vec![
            ("overview", Region { top: 0, height: 800 }),
            ("results", Region { top: 800, height: 1200 }),
            ("performance-factors", Region { top: 2000, height: 1500 }),
            ("case-study", Region { top: 3500, height: 1500 }),
            ("next-steps", Region { top: 5000, height: 600 }),
        ])
    }

    // ===== on_scroll =====

    #[test]
    fn starts_on_first_section_with_panel_closed() {
        let nav = nav();
        assert_eq!(nav.active_id(), "overview");
        assert!(!nav.panel_open());
    }

    #[test]
    fn scroll_selects_band_containing_probe() {
        let mut nav = nav();
        let layout = page_layout();
        // probe = 850, inside results' [800, 2000)
        nav.on_scroll(850 - SCROLL_LOOKAHEAD, &layout);
        assert_eq!(nav.active_id(), "results");
    }

    #[test]
    fn band_start_is_inclusive_and_end_exclusive() {
        let mut nav = nav();
        let layout = page_layout();
        nav.on_scroll(800 - SCROLL_LOOKAHEAD, &layout);
        assert_eq!(nav.active_id(), "results", "probe at band top belongs to that band");
        nav.on_scroll(2000 - SCROLL_LOOKAHEAD, &layout);
        assert_eq!(
            nav.active_id(),
            "performance-factors",
            "probe at band end belongs to the next band"
        );
    }

    #[test]
    fn lookahead_pulls_probe_into_first_band_near_the_top() {
        let mut nav = nav();
        let layout = page_layout();
        nav.on_scroll(2200, &layout);
        assert_eq!(nav.active_id(), "performance-factors");
        // offset 46 probes line 50, still inside overview's [0, 800)
        nav.on_scroll(50 - SCROLL_LOOKAHEAD, &layout);
        assert_eq!(nav.active_id(), "overview");
    }

    #[test]
    fn probe_before_first_band_keeps_previous_active() {
        let mut nav = nav();
        let layout = FakeLayout(vec![
            ("overview", Region { top: 100, height: 200 }),
            ("results", Region { top: 300, height: 200 }),
        ]);
        nav.on_scroll(350, &layout);
        assert_eq!(nav.active_id(), "results");
        nav.on_scroll(0, &layout);
        assert_eq!(nav.active_id(), "results", "no reset when probe is above every band");
    }

    #[test]
    fn probe_past_last_band_keeps_previous_active() {
        let mut nav = nav();
        let layout = page_layout();
        nav.on_scroll(4000, &layout);
        assert_eq!(nav.active_id(), "case-study");
        nav.on_scroll(9999, &layout);
        assert_eq!(nav.active_id(), "case-study");
    }

    #[test]
    fn first_band_in_document_order_wins_overlap() {
        let mut nav = nav();
        let layout = FakeLayout(vec![
            ("overview", Region { top: 0, height: 500 }),
            ("results", Region { top: 200, height: 500 }),
        ]);
        nav.on_scroll(300, &layout);
        assert_eq!(nav.active_id(), "overview");
    }

    #[test]
    fn sections_without_regions_are_skipped() {
        let mut nav = nav();
        let layout = FakeLayout(vec![
            ("overview", Region { top: 0, height: 100 }),
            // results has no laid-out region
            ("performance-factors", Region { top: 100, height: 100 }),
        ]);
        nav.on_scroll(150, &layout);
        assert_eq!(nav.active_id(), "performance-factors");
    }

    // ===== navigate_to =====

    #[test]
    fn navigate_scrolls_to_region_top_and_closes_panel() {
        let mut nav = nav();
        let layout = page_layout();
        let mut scroller = RecordingScroller::default();
        nav.toggle_panel();
        assert!(nav.panel_open());

        nav.navigate_to("case-study", &layout, &mut scroller);

        assert_eq!(scroller.requests, vec![3500]);
        assert!(!nav.panel_open(), "successful navigation always closes the panel");
        assert_eq!(nav.active_id(), "overview", "active only changes via on_scroll");
    }

    #[test]
    fn navigate_closes_panel_regardless_of_prior_state() {
        let mut nav = nav();
        let layout = page_layout();
        let mut scroller = RecordingScroller::default();
        nav.navigate_to("results", &layout, &mut scroller);
        assert!(!nav.panel_open());
        assert_eq!(scroller.requests, vec![800]);
    }

    #[test]
    fn navigate_to_unknown_id_changes_nothing() {
        let mut nav = nav();
        let layout = page_layout();
        let mut scroller = RecordingScroller::default();
        nav.toggle_panel();

        nav.navigate_to("nonexistent-id", &layout, &mut scroller);

        assert!(scroller.requests.is_empty(), "no scroll request for an unknown id");
        assert!(nav.panel_open(), "panel untouched on failed navigation");
        assert_eq!(nav.active_id(), "overview");
    }

    #[test]
    fn navigate_to_section_without_region_changes_nothing() {
        let mut nav = nav();
        let layout = FakeLayout(vec![("overview", Region { top: 0, height: 100 })]);
        let mut scroller = RecordingScroller::default();
        nav.toggle_panel();

        nav.navigate_to("results", &layout, &mut scroller);

        assert!(scroller.requests.is_empty());
        assert!(nav.panel_open());
    }

    #[test]
    fn repeated_navigation_issues_a_fresh_request_each_time() {
        let mut nav = nav();
        let layout = page_layout();
        let mut scroller = RecordingScroller::default();
        nav.navigate_to("results", &layout, &mut scroller);
        nav.navigate_to("next-steps", &layout, &mut scroller);
        assert_eq!(scroller.requests, vec![800, 5000]);
    }

    // ===== panel =====

    #[test]
    fn toggle_twice_returns_to_original_state() {
        let mut nav = nav();
        nav.toggle_panel();
        assert!(nav.panel_open());
        nav.toggle_panel();
        assert!(!nav.panel_open());
    }

    #[test]
    fn close_panel_is_idempotent() {
        let mut nav = nav();
        nav.close_panel();
        assert!(!nav.panel_open());
        nav.toggle_panel();
        nav.close_panel();
        nav.close_panel();
        assert!(!nav.panel_open());
    }

    // ===== next section =====

    #[test]
    fn next_section_follows_document_order() {
        let mut nav = nav();
        let layout = page_layout();
        assert_eq!(nav.next_section_id(), Some("results"));
        nav.on_scroll(3600, &layout);
        assert_eq!(nav.active_id(), "case-study");
        assert_eq!(nav.next_section_id(), Some("next-steps"));
    }

    #[test]
    fn no_next_section_after_the_last() {
        let mut nav = nav();
        let layout = page_layout();
        nav.on_scroll(5100, &layout);
        assert_eq!(nav.active_id(), "next-steps");
        assert_eq!(nav.next_section_id(), None);
    }
}
