//! UI rendering module.
//!
//! This module handles all the TUI rendering using ratatui: the header
//! bar, the centered document viewport with its scrollbar, the status
//! footer, and the overlays (navigation panel, help).

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    },
    Frame,
};

use crate::app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::panel::{self, NavPanel};
use crate::report;
use crate::theme::{colors, styles};

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Fill background with theme color
    let bg_block = Block::default().style(Style::default().bg(colors::BG_DARK));
    frame.render_widget(bg_block, area);

    if area.width < 40 || area.height < 10 {
        frame.render_widget(
            Paragraph::new("Terminal too small").style(styles::text_dim()),
            area,
        );
        return;
    }

    // Create main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Title bar
            Constraint::Min(5),                // Document viewport
            Constraint::Length(FOOTER_HEIGHT), // Status line
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_document(frame, app, chunks[1]);
    render_footer(frame, app, chunks[2]);

    // Render overlays
    if app.panel.visible() {
        render_panel(frame, app, area);
    }

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

/// Render the title bar with the menu hint on the right
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::border_dim())
        .style(Style::default().bg(colors::BG_MEDIUM));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Line::from(vec![
        Span::styled(" mailscope ", styles::selected()),
        Span::raw(" "),
        Span::styled(report::meta().title, styles::text_dim()),
    ]);
    frame.render_widget(Paragraph::new(title), inner);

    let hint = if app.navigator.panel_open() {
        "≡ Menu (Esc) "
    } else {
        "≡ Menu (m) "
    };
    let menu = Paragraph::new(Line::from(Span::styled(hint, styles::chevron())))
        .alignment(Alignment::Right);
    frame.render_widget(menu, inner);
}

/// Render the document viewport, centered, with a scrollbar on the right
fn render_document(frame: &mut Frame, app: &App, area: Rect) {
    let content_width = app.layout.width().min(area.width.saturating_sub(2));
    let margin = area.width.saturating_sub(content_width) / 2;
    let content = Rect {
        x: area.x + margin,
        y: area.y,
        width: content_width,
        height: area.height,
    };

    let lines = app.layout.view(app.scroll.offset, area.height as usize);
    frame.render_widget(Paragraph::new(lines), content);

    render_scrollbar(frame, app, area);
}

fn render_scrollbar(frame: &mut Frame, app: &App, area: Rect) {
    if app.scroll.max == 0 {
        return;
    }
    let mut state = ScrollbarState::new(app.scroll.max).position(app.scroll.offset);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(styles::border_focused())
        .track_style(styles::border_dim());
    frame.render_stateful_widget(scrollbar, area, &mut state);
}

/// Render the status footer
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(styles::border_dim())
        .style(Style::default().bg(colors::BG_MEDIUM));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status = Paragraph::new(format!(" {}", app.status_text())).style(styles::text_dim());
    frame.render_widget(status, inner);
}

/// Dim the page and draw the navigation panel at its slide position
fn render_panel(frame: &mut Frame, app: &App, area: Rect) {
    let rect = panel::panel_rect(area, app.panel.slide);
    panel::dim_backdrop(frame.buffer_mut(), area, rect);
    frame.render_widget(NavPanel::new(&app.navigator, &app.panel), rect);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_width = 48;
    let popup_height = 17;
    let popup_area = centered_rect(popup_width, popup_height, area);

    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(colors::BLUE)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Reading",
            Style::default()
                .fg(colors::ORANGE)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  j/k or Up/Down ", Style::default().fg(colors::BLUE)),
            Span::raw("Scroll one line"),
        ]),
        Line::from(vec![
            Span::styled("  d/u, PgDn/PgUp ", Style::default().fg(colors::BLUE)),
            Span::raw("Scroll half a page"),
        ]),
        Line::from(vec![
            Span::styled("  g / G          ", Style::default().fg(colors::BLUE)),
            Span::raw("Top / bottom"),
        ]),
        Line::from(vec![
            Span::styled("  n              ", Style::default().fg(colors::BLUE)),
            Span::raw("Glide to the next section"),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Navigation Panel",
            Style::default()
                .fg(colors::ORANGE)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  m              ", Style::default().fg(colors::BLUE)),
            Span::raw("Open / close the panel"),
        ]),
        Line::from(vec![
            Span::styled("  j/k + Enter    ", Style::default().fg(colors::BLUE)),
            Span::raw("Pick a section and jump"),
        ]),
        Line::from(vec![
            Span::styled("  Esc            ", Style::default().fg(colors::BLUE)),
            Span::raw("Close the panel"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  q / Ctrl+C     ", Style::default().fg(colors::BLUE)),
            Span::raw("Quit"),
        ]),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(styles::title_accent())
            .borders(Borders::ALL)
            .border_style(styles::border_focused())
            .style(Style::default().bg(colors::BG_HIGHLIGHT)),
    );

    frame.render_widget(help, popup_area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
