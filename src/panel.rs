//! Navigation panel.
//!
//! Slide-in overlay on the right edge listing the report sections. The
//! panel keeps its own keyboard cursor, separate from the scroll-spy
//! highlight; opening snaps the cursor to the active entry. A tick-driven
//! slide moves the panel on and off screen, and everything behind it dims
//! while it is visible.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Widget};

use crate::navigator::{Navigator, Section};
use crate::theme::{colors, styles};

/// Full panel width including borders, in columns.
pub const PANEL_WIDTH: u16 = 30;
/// Columns the slide moves per tick.
const SLIDE_STEP: u16 = 6;
/// Rows from the panel top to the first entry (border, then one blank).
const FIRST_ENTRY_ROW: u16 = 2;
/// Vertical rhythm: one entry row, one blank row.
const ENTRY_STRIDE: u16 = 2;

/// Slide animation and keyboard cursor for the panel.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    /// Columns currently on screen, `0..=PANEL_WIDTH`.
    pub slide: u16,
    /// Cursor position among the entries.
    pub cursor: usize,
}

impl PanelState {
    /// Advance the slide one step toward open or closed.
    pub fn tick(&mut self, open: bool) {
        if open {
            self.slide = (self.slide + SLIDE_STEP).min(PANEL_WIDTH);
        } else {
            self.slide = self.slide.saturating_sub(SLIDE_STEP);
        }
    }

    /// Whether any part of the panel is on screen.
    pub fn visible(&self) -> bool {
        self.slide > 0
    }

    /// Snap the cursor onto an entry, used when the panel opens.
    pub fn open_at(&mut self, index: usize) {
        self.cursor = index;
    }

    pub fn cursor_up(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.cursor = (self.cursor + total - 1) % total;
    }

    pub fn cursor_down(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % total;
    }
}

/// Screen rect the panel covers at the current slide, hugging the right
/// edge of `area`.
pub fn panel_rect(area: Rect, slide: u16) -> Rect {
    let width = slide.min(area.width);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Entry index under `row`, if `row` lands on an entry line of a panel
/// drawn at `panel`. Mirrors the row rhythm used by the renderer.
pub fn entry_at(panel: Rect, row: u16, total: usize) -> Option<usize> {
    let first = panel.y + FIRST_ENTRY_ROW;
    if row < first {
        return None;
    }
    let offset = row - first;
    if offset % ENTRY_STRIDE != 0 {
        return None;
    }
    let index = (offset / ENTRY_STRIDE) as usize;
    if index < total {
        Some(index)
    } else {
        None
    }
}

/// Dim every cell of `area` outside `panel`; the click-away backdrop.
pub fn dim_backdrop(buf: &mut Buffer, area: Rect, panel: Rect) {
    let dim = Style::default().fg(colors::FG_HINT).bg(colors::BG_DIM);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let pos = Position { x, y };
            if !panel.contains(pos) {
                buf[pos].set_style(dim);
            }
        }
    }
}

/// The panel itself; borrows the navigator for entries and highlight.
pub struct NavPanel<'a> {
    sections: &'static [Section],
    active: usize,
    state: &'a PanelState,
}

impl<'a> NavPanel<'a> {
    pub fn new(navigator: &Navigator, state: &'a PanelState) -> Self {
        Self {
            sections: navigator.sections(),
            active: navigator.active_index(),
            state,
        }
    }
}

impl Widget for NavPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < FIRST_ENTRY_ROW + 2 {
            return;
        }

        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border_focused())
            .title(" Navigation ")
            .title_style(styles::title_accent())
            .style(styles::modal_content_bg());
        let inner = block.inner(area);
        block.render(area, buf);

        for (idx, section) in self.sections.iter().enumerate() {
            let y = area.y + FIRST_ENTRY_ROW + idx as u16 * ENTRY_STRIDE;
            if y >= inner.bottom() {
                break;
            }
            let is_cursor = idx == self.state.cursor;
            let is_active = idx == self.active;
            let marker = if is_active { "●" } else { " " };
            let style = if is_cursor {
                styles::selected()
            } else if is_active {
                styles::nav_active()
            } else {
                styles::nav_entry()
            };
            let text = format!(" {} {:<width$}", marker, section.label, width = inner.width.saturating_sub(3) as usize);
            buf.set_stringn(inner.x, y, text, inner.width as usize, style);
        }

        let hint = "j/k · Enter · Esc";
        if inner.height > self.sections.len() as u16 * ENTRY_STRIDE + 1 {
            buf.set_stringn(inner.x + 1, inner.bottom() - 1, hint, inner.width.saturating_sub(1) as usize, styles::text_hint());
        }
    }
}
