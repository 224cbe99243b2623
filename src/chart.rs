//! Performance spread chart.
//!
//! Renders the campaign spread (excellent / average / poor counts) as a
//! block-character bar chart. Emitted as styled lines so the chart scrolls
//! with the document instead of occupying a fixed screen area.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::report::{Rating, Spread};
use crate::theme::{colors, styles};

/// Rows in the body of the tallest bar.
pub const CHART_BAR_HEIGHT: usize = 8;

const BAR_WIDTH: usize = 9;
const BAR_GAP: usize = 6;
const BAR_CHAR: &str = "█";
const BASELINE_CHAR: &str = "─";
const LEGEND_MARKER: &str = "■";

/// Bar color per performance class; matches the rating colors used in the
/// benchmark table.
pub fn rating_color(rating: Rating) -> Color {
    match rating {
        Rating::Excellent => colors::GREEN,
        Rating::Average => colors::ORANGE,
        Rating::Poor => colors::RED,
    }
}

/// Build the chart as document lines, centered within `width` columns.
pub fn spread_lines(spread: &Spread, width: u16) -> Vec<Line<'static>> {
    let segments = spread.segments;
    if segments.is_empty() {
        return Vec::new();
    }

    let chart_width = segments.len() * BAR_WIDTH + (segments.len() - 1) * BAR_GAP;
    let pad = (width as usize).saturating_sub(chart_width) / 2;
    let max_count = segments.iter().map(|s| s.count).max().unwrap_or(1).max(1);

    let bar_rows: Vec<usize> = segments
        .iter()
        .map(|s| {
            if s.count == 0 {
                0
            } else {
                let scaled =
                    (s.count as usize * CHART_BAR_HEIGHT + max_count as usize / 2) / max_count as usize;
                scaled.max(1)
            }
        })
        .collect();

    let mut lines = Vec::new();

    // --- 1. Bar body, top row first ---
    for row in (0..CHART_BAR_HEIGHT).rev() {
        let mut spans = vec![Span::raw(" ".repeat(pad))];
        for (idx, segment) in segments.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw(" ".repeat(BAR_GAP)));
            }
            if bar_rows[idx] > row {
                spans.push(Span::styled(
                    BAR_CHAR.repeat(BAR_WIDTH),
                    Style::default().fg(rating_color(segment.rating)),
                ));
            } else {
                spans.push(Span::raw(" ".repeat(BAR_WIDTH)));
            }
        }
        lines.push(Line::from(spans));
    }

    // --- 2. Baseline, counts, class labels ---
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(BASELINE_CHAR.repeat(chart_width), styles::border_dim()),
    ]));

    let mut count_spans = vec![Span::raw(" ".repeat(pad))];
    let mut label_spans = vec![Span::raw(" ".repeat(pad))];
    for (idx, segment) in segments.iter().enumerate() {
        if idx > 0 {
            count_spans.push(Span::raw(" ".repeat(BAR_GAP)));
            label_spans.push(Span::raw(" ".repeat(BAR_GAP)));
        }
        count_spans.push(Span::styled(
            centered(&segment.count.to_string(), BAR_WIDTH),
            Style::default()
                .fg(rating_color(segment.rating))
                .add_modifier(Modifier::BOLD),
        ));
        label_spans.push(Span::styled(centered(segment.label, BAR_WIDTH), styles::text_dim()));
    }
    lines.push(Line::from(count_spans));
    lines.push(Line::from(label_spans));

    // --- 3. Axis label and legend ---
    let axis_pad = (width as usize).saturating_sub(spread.axis_label.len()) / 2;
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(axis_pad)),
        Span::styled(spread.axis_label.to_string(), styles::text_hint()),
    ]));
    lines.push(Line::default());

    for segment in segments {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", LEGEND_MARKER),
                Style::default().fg(rating_color(segment.rating)),
            ),
            Span::styled(format!("{:<9}", segment.label), styles::title()),
            Span::styled(
                format!(" {} campaigns ({})", segment.count, segment.share),
                styles::text_dim(),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(segment.criteria.to_string(), styles::text_hint()),
        ]));
    }

    lines
}

/// Center `s` within `width` columns, space-padded.
fn centered(s: &str, width: usize) -> String {
    if s.len() >= width {
        return s.to_string();
    }
    let left = (width - s.len()) / 2;
    let right = width - s.len() - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}
