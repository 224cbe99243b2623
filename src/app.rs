//! Application state and event handling.
//!
//! This module implements the Elm Architecture pattern for state management,
//! with a centralized App struct holding all application state. Key and
//! mouse events mutate it, `tick` advances the glide and panel animations,
//! and the renderer reads it without touching anything.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::layout::DocumentLayout;
use crate::navigator::{Navigator, Scroller};
use crate::panel::{self, PanelState, PANEL_WIDTH};
use crate::report;

/// Rows the header band occupies.
pub const HEADER_HEIGHT: u16 = 3;
/// Rows the footer status line occupies.
pub const FOOTER_HEIGHT: u16 = 2;
/// Lines one mouse wheel notch scrolls.
const WHEEL_STEP: isize = 3;
/// Columns at the right end of the header that act as the menu button.
const MENU_ZONE_WIDTH: u16 = 12;
/// Horizontal padding around the document column.
const SIDE_MARGIN: u16 = 4;

/// Viewport scroll position with an optional glide target.
///
/// Scroll commands from the navigator land here as a target line; `step`
/// eases the offset toward it a quarter of the remaining distance per
/// frame. Manual scrolling cancels the glide so the wheel always wins
/// over an in-flight jump.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollState {
    /// Top visible document line.
    pub offset: usize,
    /// Largest offset the document allows.
    pub max: usize,
    /// Line a glide is easing toward, if one is in flight.
    pub target: Option<usize>,
}

impl ScrollState {
    /// Re-clamp after the document or viewport changes size.
    pub fn set_max(&mut self, max: usize) {
        self.max = max;
        self.offset = self.offset.min(max);
        if let Some(target) = self.target {
            self.target = Some(target.min(max));
        }
    }

    /// Manual scroll by a signed number of lines.
    pub fn scroll_by(&mut self, delta: isize) {
        self.target = None;
        if delta < 0 {
            self.offset = self.offset.saturating_sub(delta.unsigned_abs());
        } else {
            self.offset = (self.offset + delta as usize).min(self.max);
        }
    }

    /// Manual jump to an absolute line.
    pub fn jump_to(&mut self, line: usize) {
        self.target = None;
        self.offset = line.min(self.max);
    }

    /// One glide step. Returns true if the offset moved.
    pub fn step(&mut self) -> bool {
        let target = match self.target {
            Some(t) => t,
            None => return false,
        };
        if self.offset == target {
            self.target = None;
            return false;
        }
        let step = (self.offset.abs_diff(target) / 4).max(1);
        if self.offset < target {
            self.offset += step;
        } else {
            self.offset -= step;
        }
        if self.offset == target {
            self.target = None;
        }
        true
    }
}

impl Scroller for ScrollState {
    fn scroll_to(&mut self, line: usize) {
        self.target = Some(line.min(self.max));
    }
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Scroll-spy highlight and panel flag
    pub navigator: Navigator,

    /// Wrapped document lines and section geometry
    pub layout: DocumentLayout,

    /// Viewport scroll position
    pub scroll: ScrollState,

    /// Panel slide animation and keyboard cursor
    pub panel: PanelState,

    /// Show help overlay
    pub show_help: bool,

    /// Terminal size from the last tick
    term_width: u16,
    term_height: u16,

    /// Document rows visible between header and footer
    viewport_height: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application instance
    pub fn new() -> Self {
        let term_width = 80;
        let layout = DocumentLayout::build(
            &report::meta(),
            report::REPORT,
            term_width - 2 * SIDE_MARGIN,
        );
        Self {
            should_quit: false,
            navigator: Navigator::new(report::SECTIONS),
            layout,
            scroll: ScrollState::default(),
            panel: PanelState::default(),
            show_help: false,
            term_width,
            term_height: 0,
            viewport_height: 0,
        }
    }

    /// Update animations and geometry (called every frame)
    pub fn tick(&mut self, width: u16, height: u16) {
        // Reflow the document when the terminal width changes.
        if width != self.term_width {
            self.term_width = width;
            self.layout = DocumentLayout::build(
                &report::meta(),
                report::REPORT,
                width.saturating_sub(2 * SIDE_MARGIN),
            );
        }
        self.term_height = height;
        self.viewport_height = height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT) as usize;
        self.scroll
            .set_max(self.layout.total_lines().saturating_sub(self.viewport_height));
        self.navigator.on_scroll(self.scroll.offset, &self.layout);

        // Ease toward a pending jump.
        if self.scroll.step() {
            self.navigator.on_scroll(self.scroll.offset, &self.layout);
        }

        // Slide the panel toward its open or closed edge.
        self.panel.tick(self.navigator.panel_open());
    }

    /// Handle key events
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Help overlay swallows everything and closes on any key.
        if self.show_help {
            self.show_help = false;
            return;
        }

        if self.navigator.panel_open() {
            self.handle_panel_key(key);
        } else {
            self.handle_normal_key(key);
        }
    }

    /// Handle keys while reading the document
    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('m') => self.open_panel(),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1),
            KeyCode::Char('d') | KeyCode::PageDown => self.scroll_by(self.half_page()),
            KeyCode::Char('u') | KeyCode::PageUp => self.scroll_by(-self.half_page()),
            KeyCode::Char('g') | KeyCode::Home => self.jump_to(0),
            KeyCode::Char('G') | KeyCode::End => self.jump_to(self.scroll.max),
            KeyCode::Char('n') => self.jump_to_next_section(),
            _ => {}
        }
    }

    /// Handle keys while the navigation panel is open
    fn handle_panel_key(&mut self, key: KeyEvent) {
        let total = self.navigator.sections().len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc | KeyCode::Char('m') => self.navigator.close_panel(),
            KeyCode::Char('j') | KeyCode::Down => self.panel.cursor_down(total),
            KeyCode::Char('k') | KeyCode::Up => self.panel.cursor_up(total),
            KeyCode::Enter => self.activate_panel_entry(self.panel.cursor),
            _ => {}
        }
    }

    /// Handle mouse events
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        // The help overlay swallows the mouse too; a click dismisses it.
        if self.show_help {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.show_help = false;
            }
            return;
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        if self.navigator.panel_open() {
            // Hit-test against the settled panel position; clicks during
            // the slide land close enough.
            let frame = Rect::new(0, 0, self.term_width, self.term_height);
            let rect = panel::panel_rect(frame, PANEL_WIDTH);
            if rect.contains(Position { x: column, y: row }) {
                let total = self.navigator.sections().len();
                if let Some(index) = panel::entry_at(rect, row, total) {
                    self.panel.open_at(index);
                    self.activate_panel_entry(index);
                } else if self.in_menu_zone(column, row) {
                    // The menu control toggles, even under the open panel.
                    self.navigator.close_panel();
                }
            } else {
                self.navigator.close_panel();
            }
            return;
        }

        // The "Menu" hint at the right end of the header.
        if self.in_menu_zone(column, row) {
            self.open_panel();
        }
    }

    fn in_menu_zone(&self, column: u16, row: u16) -> bool {
        row < HEADER_HEIGHT && column >= self.term_width.saturating_sub(MENU_ZONE_WIDTH)
    }

    /// Open the panel with the cursor on the highlighted section.
    fn open_panel(&mut self) {
        self.navigator.toggle_panel();
        if self.navigator.panel_open() {
            self.panel.open_at(self.navigator.active_index());
        }
    }

    fn activate_panel_entry(&mut self, index: usize) {
        if let Some(section) = self.navigator.sections().get(index) {
            let id = section.id;
            self.navigator.navigate_to(id, &self.layout, &mut self.scroll);
        }
    }

    /// Start a glide to the section after the highlighted one.
    fn jump_to_next_section(&mut self) {
        if let Some(id) = self.navigator.next_section_id() {
            self.navigator.navigate_to(id, &self.layout, &mut self.scroll);
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll.scroll_by(delta);
        self.navigator.on_scroll(self.scroll.offset, &self.layout);
    }

    fn jump_to(&mut self, line: usize) {
        self.scroll.jump_to(line);
        self.navigator.on_scroll(self.scroll.offset, &self.layout);
    }

    fn half_page(&self) -> isize {
        (self.viewport_height / 2).max(1) as isize
    }

    /// Get the status bar text
    pub fn status_text(&self) -> String {
        let percent = if self.scroll.max == 0 {
            100
        } else {
            self.scroll.offset * 100 / self.scroll.max
        };
        format!(
            "{} | {}% | j/k: Scroll | n: Next Section | m: Menu | ?: Help | q: Quit",
            self.navigator.active_label(),
            percent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sized_app() -> App {
        let mut app = App::new();
        app.tick(100, 40);
        app
    }

    // ===== lifecycle =====

    #[test]
    fn quit_keys_set_the_flag() {
        let mut app = sized_app();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = sized_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn help_overlay_opens_and_any_key_closes_it() {
        let mut app = sized_app();
        app.handle_key(press(KeyCode::Char('?')));
        assert!(app.show_help);
        app.handle_key(press(KeyCode::Char('j')));
        assert!(!app.show_help);
        assert_eq!(app.scroll.offset, 0, "the dismissing key is swallowed");
    }

    // ===== scrolling =====

    #[test]
    fn manual_scroll_moves_the_highlight() {
        let mut app = sized_app();
        let results_top = app.layout.region("results").unwrap().top;

        app.scroll_by(results_top as isize);
        assert_eq!(app.navigator.active_id(), "results");

        app.handle_key(press(KeyCode::Char('g')));
        assert_eq!(app.scroll.offset, 0);
        assert_eq!(
            app.navigator.active_id(),
            "results",
            "above the first section the highlight keeps its last value"
        );
    }

    #[test]
    fn end_key_jumps_to_the_bottom() {
        let mut app = sized_app();
        // Short viewport, so the bottom offset probes inside the last band.
        app.tick(100, 16);
        app.handle_key(press(KeyCode::Char('G')));
        assert_eq!(app.scroll.offset, app.scroll.max);
        assert_eq!(app.navigator.active_id(), "next-steps");
    }

    #[test]
    fn next_section_key_glides_until_it_arrives() {
        let mut app = sized_app();
        let results_top = app.layout.region("results").unwrap().top;

        app.handle_key(press(KeyCode::Char('n')));
        assert_eq!(app.scroll.target, Some(results_top));

        for _ in 0..500 {
            app.tick(100, 40);
            if app.scroll.target.is_none() {
                break;
            }
        }
        assert_eq!(app.scroll.offset, results_top);
        assert_eq!(app.navigator.active_id(), "results");
    }

    #[test]
    fn wheel_scroll_cancels_an_inflight_glide() {
        let mut app = sized_app();
        app.handle_key(press(KeyCode::Char('n')));
        assert!(app.scroll.target.is_some());

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        assert!(app.scroll.target.is_none());
        assert_eq!(app.scroll.offset, WHEEL_STEP as usize);
    }

    #[test]
    fn resize_reclamps_the_offset() {
        let mut app = sized_app();
        app.handle_key(press(KeyCode::Char('G')));
        let bottom = app.scroll.offset;

        // A taller viewport shrinks the maximum offset.
        app.tick(100, 80);
        assert!(app.scroll.offset < bottom);
        assert_eq!(app.scroll.offset, app.scroll.max);
    }

    // ===== panel =====

    #[test]
    fn menu_key_opens_with_the_cursor_on_the_active_entry() {
        let mut app = sized_app();
        let case_top = app.layout.region("case-study").unwrap().top;
        app.scroll_by(case_top as isize);

        app.handle_key(press(KeyCode::Char('m')));
        assert!(app.navigator.panel_open());
        assert_eq!(app.panel.cursor, app.navigator.active_index());

        app.handle_key(press(KeyCode::Char('m')));
        assert!(!app.navigator.panel_open());
    }

    #[test]
    fn escape_closes_the_panel() {
        let mut app = sized_app();
        app.handle_key(press(KeyCode::Char('m')));
        app.handle_key(press(KeyCode::Esc));
        assert!(!app.navigator.panel_open());
    }

    #[test]
    fn panel_enter_requests_the_jump_and_closes() {
        let mut app = sized_app();
        app.handle_key(press(KeyCode::Char('m')));
        app.handle_key(press(KeyCode::Char('j')));
        app.handle_key(press(KeyCode::Enter));

        let results_top = app.layout.region("results").unwrap().top;
        assert!(!app.navigator.panel_open());
        assert_eq!(app.scroll.target, Some(results_top));
        assert_eq!(
            app.navigator.active_id(),
            "overview",
            "the highlight converges later, through the glide"
        );
    }

    #[test]
    fn click_outside_the_panel_dismisses_it() {
        let mut app = sized_app();
        app.handle_key(press(KeyCode::Char('m')));
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row: 20,
            modifiers: KeyModifiers::NONE,
        });
        assert!(!app.navigator.panel_open());
    }

    #[test]
    fn menu_zone_click_toggles_the_panel() {
        let mut app = sized_app();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 98,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click);
        assert!(app.navigator.panel_open());
        app.handle_mouse(click);
        assert!(!app.navigator.panel_open());
    }

    #[test]
    fn click_on_a_panel_entry_navigates() {
        let mut app = sized_app();
        app.handle_key(press(KeyCode::Char('m')));

        let frame = Rect::new(0, 0, 100, 40);
        let rect = panel::panel_rect(frame, PANEL_WIDTH);
        // Third entry: two strides below the first entry row.
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + 2,
            row: rect.y + 6,
            modifiers: KeyModifiers::NONE,
        });

        let factors_top = app.layout.region("performance-factors").unwrap().top;
        assert!(!app.navigator.panel_open());
        assert_eq!(app.scroll.target, Some(factors_top));
    }

    #[test]
    fn status_line_reports_the_active_section() {
        let app = sized_app();
        let status = app.status_text();
        assert!(status.contains("Overview"));
        assert!(status.contains("q: Quit"));
    }

    // ===== end to end =====

    #[test]
    fn scrolling_the_whole_report_visits_every_section_in_order() {
        let mut app = sized_app();
        // Short viewport, so even the last band is reachable by the probe.
        app.tick(100, 16);

        let mut seen = vec![app.navigator.active_id()];
        for line in 1..=app.scroll.max {
            app.jump_to(line);
            let active = app.navigator.active_id();
            if *seen.last().unwrap() != active {
                seen.push(active);
            }
        }
        assert_eq!(
            seen,
            vec![
                "overview",
                "results",
                "performance-factors",
                "case-study",
                "next-steps"
            ]
        );
    }

    #[test]
    fn panel_jump_converges_and_the_panel_slides_shut() {
        let mut app = sized_app();
        app.handle_key(press(KeyCode::Char('m')));
        // Walk the cursor from Overview down to Case Study.
        app.handle_key(press(KeyCode::Char('j')));
        app.handle_key(press(KeyCode::Char('j')));
        app.handle_key(press(KeyCode::Char('j')));
        app.handle_key(press(KeyCode::Enter));

        let case_top = app.layout.region("case-study").unwrap().top;
        assert_eq!(app.scroll.target, Some(case_top));

        for _ in 0..500 {
            app.tick(100, 40);
            if app.scroll.target.is_none() && !app.panel.visible() {
                break;
            }
        }
        assert_eq!(app.scroll.offset, case_top);
        assert_eq!(app.navigator.active_id(), "case-study");
        assert!(!app.panel.visible());
    }
}
