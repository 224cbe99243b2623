//! Document layout.
//!
//! Flattens the report content into pre-wrapped styled lines at a fixed
//! content width and records the vertical band each section occupies. The
//! bands back the scroll-spy region lookups, so wrapping happens here, once
//! per width, and geometry never depends on the renderer.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::chart;
use crate::navigator::{LayoutProvider, Region};
use crate::report::{
    BenchmarkRow, Block, Exhibit, ListItem, ReportMeta, SectionContent, Spread, StatCard, Tone,
};
use crate::theme::{banner_color, colors, styles};

/// Narrowest width the layout will build at; below this the table and the
/// chart stop fitting and the renderer clips instead.
pub const MIN_CONTENT_WIDTH: u16 = 64;
/// Widest content width; keeps paragraphs readable on wide terminals.
pub const MAX_CONTENT_WIDTH: u16 = 96;

const BULLET: &str = "•";
const TILE_MARK: &str = "▪";
const BAR_PREFIX: &str = "▌ ";
const QUOTE_PREFIX: &str = "┃ ";
const CHEVRON: &str = "▼";
const TILE_WIDTH: usize = 26;

/// The laid-out document: styled lines plus the band each anchor occupies.
#[derive(Debug)]
pub struct DocumentLayout {
    width: u16,
    lines: Vec<Line<'static>>,
    regions: Vec<(&'static str, Region)>,
}

impl DocumentLayout {
    /// Lay the report out at `width` columns (clamped to the supported
    /// range). Sections are contiguous; the title banner scrolls above the
    /// first one, which is why a probe near the very top can sit outside
    /// every band.
    pub fn build(meta: &ReportMeta, report: &[SectionContent], width: u16) -> Self {
        let mut layout = Self {
            width: width.clamp(MIN_CONTENT_WIDTH, MAX_CONTENT_WIDTH),
            lines: Vec::new(),
            regions: Vec::new(),
        };

        layout.push_hero(meta);

        for (idx, content) in report.iter().enumerate() {
            let top = layout.lines.len();
            layout.push_section(content);
            if let Some(next) = report.get(idx + 1) {
                layout.push_section_chevron(next.section.label);
            }
            let height = layout.lines.len() - top;
            layout.regions.push((content.section.id, Region { top, height }));
        }

        layout
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// Clone of the visible slice, `offset` to `offset + height`, clamped.
    pub fn view(&self, offset: usize, height: usize) -> Vec<Line<'static>> {
        let start = offset.min(self.lines.len());
        let end = offset.saturating_add(height).min(self.lines.len());
        self.lines[start..end].to_vec()
    }

    /// Band for a section or figure anchor id.
    pub fn region(&self, id: &str) -> Option<Region> {
        self.regions
            .iter()
            .find(|(rid, _)| *rid == id)
            .map(|(_, region)| *region)
    }

    // ===== block rendering =====

    fn push_hero(&mut self, meta: &ReportMeta) {
        let width = self.width as usize;
        let subtitle = format!("{} · {}", meta.period_display(), meta.sample_note);

        self.push_gradient_row("", false);
        for row in wrap(meta.title, width.saturating_sub(4)) {
            self.push_gradient_row(&row, true);
        }
        for row in wrap(&subtitle, width.saturating_sub(4)) {
            self.push_gradient_row(&row, false);
        }
        self.push_gradient_row("", false);
        self.push_blank();
    }

    /// One banner row: centered text over the left-to-right gradient.
    fn push_gradient_row(&mut self, text: &str, bold: bool) {
        let width = self.width;
        let padded = pad_centered(text, width as usize);
        let mut spans = Vec::with_capacity(width as usize);
        for (x, ch) in padded.chars().enumerate() {
            let mut style = Style::default()
                .bg(banner_color(x as u16, width))
                .fg(colors::BANNER_FG);
            if bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(ch.to_string(), style));
        }
        self.lines.push(Line::from(spans));
    }

    fn push_section(&mut self, content: &SectionContent) {
        self.push_centered(content.heading, styles::heading());
        self.lines.push(Line::from(Span::styled(
            "─".repeat(self.width as usize),
            styles::border_dim(),
        )));
        self.push_blank();

        for block in content.blocks {
            self.push_block(block);
        }
    }

    fn push_block(&mut self, block: &Block) {
        match *block {
            Block::Subheading(text) => {
                self.lines.push(Line::from(Span::styled(text, styles::subheading())));
                self.push_blank();
            }
            Block::Paragraph(text) => {
                for row in wrap(text, self.width as usize) {
                    self.lines.push(Line::from(Span::styled(row, styles::text())));
                }
                self.push_blank();
            }
            Block::Callout { title, body } => self.push_callout(title, body),
            Block::Bullets { title, items } => self.push_bullets(title, items),
            Block::TileGrid(tiles) => self.push_tiles(tiles),
            Block::StatCards(cards) => self.push_stat_cards(cards),
            Block::BenchmarkTable { headers, rows } => self.push_table(&headers, rows),
            Block::SpreadChart(spread) => self.push_chart(&spread),
            Block::Exhibits { title, tone, items } => self.push_exhibits(title, tone, items),
            Block::Figure { anchor, caption, annotation } => {
                self.push_figure(anchor, caption, annotation)
            }
            Block::Banner { title, stats } => self.push_banner(title, stats),
            Block::Reference { label, url } => self.push_reference(label, url),
        }
    }

    fn push_callout(&mut self, title: &'static str, body: &[&'static str]) {
        self.lines.push(Line::from(vec![
            Span::styled(BAR_PREFIX, Style::default().fg(colors::ORANGE)),
            Span::styled(title, styles::title()),
        ]));
        for paragraph in body {
            for row in wrap(paragraph, self.width as usize - 2) {
                self.lines.push(Line::from(vec![
                    Span::styled(BAR_PREFIX, Style::default().fg(colors::ORANGE)),
                    Span::styled(row, styles::text()),
                ]));
            }
        }
        self.push_blank();
    }

    fn push_bullets(&mut self, title: Option<&'static str>, items: &[ListItem]) {
        if let Some(title) = title {
            self.lines.push(Line::from(Span::styled(title, styles::title())));
        }
        for item in items {
            let combined = if item.lead.is_empty() {
                item.text.to_string()
            } else {
                format!("{} {}", item.lead, item.text)
            };
            let rows = wrap(&combined, self.width as usize - 4);
            for (i, row) in rows.into_iter().enumerate() {
                let mut spans = Vec::new();
                if i == 0 {
                    spans.push(Span::styled(
                        format!("  {} ", BULLET),
                        Style::default().fg(tone_color(item.tone)),
                    ));
                    if !item.lead.is_empty() && row.len() >= item.lead.len() {
                        let (lead, rest) = row.split_at(item.lead.len());
                        spans.push(Span::styled(
                            lead.to_string(),
                            styles::text().add_modifier(Modifier::BOLD),
                        ));
                        spans.push(Span::styled(rest.to_string(), styles::text()));
                    } else {
                        spans.push(Span::styled(row, styles::text()));
                    }
                } else {
                    spans.push(Span::raw("    "));
                    spans.push(Span::styled(row, styles::text()));
                }
                self.lines.push(Line::from(spans));
            }
        }
        self.push_blank();
    }

    fn push_tiles(&mut self, tiles: &[&'static str]) {
        let columns = (self.width as usize / TILE_WIDTH).max(1);
        for chunk in tiles.chunks(columns) {
            let mut spans = Vec::new();
            for tile in chunk {
                spans.push(Span::styled(
                    format!("{} ", TILE_MARK),
                    Style::default().fg(colors::ORANGE),
                ));
                spans.push(Span::styled(
                    format!("{:<width$}", tile, width = TILE_WIDTH - 2),
                    styles::text(),
                ));
            }
            self.lines.push(Line::from(spans));
        }
        self.push_blank();
    }

    fn push_stat_cards(&mut self, cards: &[StatCard]) {
        for card in cards {
            self.lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{:<8}", card.value), styles::stat_value()),
                Span::styled(card.name, styles::title()),
            ]));
            self.lines.push(Line::from(vec![
                Span::raw(" ".repeat(10)),
                Span::styled(card.note, styles::text_dim()),
            ]));
        }
        self.push_blank();
    }

    fn push_table(&mut self, headers: &[&'static str; 4], rows: &[BenchmarkRow]) {
        let width = self.width as usize;
        let metric_w = 20;
        let ours_w = 8;
        let industry_w = 16;
        let rating_w = width.saturating_sub(metric_w + ours_w + industry_w + 3).max(12);

        self.lines.push(Line::from(vec![
            Span::styled(fit(headers[0], metric_w), styles::title()),
            Span::raw(" "),
            Span::styled(fit(headers[1], ours_w), styles::title()),
            Span::raw(" "),
            Span::styled(fit(headers[2], industry_w), styles::title()),
            Span::raw(" "),
            Span::styled(fit(headers[3], rating_w), styles::title()),
        ]));
        self.lines.push(Line::from(Span::styled(
            "─".repeat(width),
            styles::border_dim(),
        )));
        for row in rows {
            let rating_style = if row.good { styles::good() } else { styles::bad() };
            self.lines.push(Line::from(vec![
                Span::styled(fit(row.metric, metric_w), styles::text()),
                Span::raw(" "),
                Span::styled(fit(row.ours, ours_w), styles::stat_value()),
                Span::raw(" "),
                Span::styled(fit(row.industry, industry_w), styles::text_dim()),
                Span::raw(" "),
                Span::styled(fit(row.rating, rating_w), rating_style.add_modifier(Modifier::BOLD)),
            ]));
        }
        self.push_blank();
    }

    fn push_chart(&mut self, spread: &Spread) {
        self.lines.extend(chart::spread_lines(spread, self.width));
        self.push_blank();
    }

    fn push_exhibits(&mut self, title: &'static str, tone: Tone, items: &[Exhibit]) {
        self.lines.push(Line::from(Span::styled(title, styles::title())));
        for item in items {
            for row in wrap(item.quote, self.width as usize - 2) {
                self.lines.push(Line::from(vec![
                    Span::styled(QUOTE_PREFIX, Style::default().fg(tone_color(tone))),
                    Span::styled(row, styles::text()),
                ]));
            }
            self.lines.push(Line::from(vec![
                Span::styled(QUOTE_PREFIX, Style::default().fg(tone_color(tone))),
                Span::styled(item.note, Style::default().fg(note_color(tone))),
            ]));
            self.push_blank();
        }
    }

    fn push_figure(&mut self, anchor: &'static str, caption: &'static str, annotation: &'static str) {
        self.push_centered(CHEVRON, styles::chevron());
        self.push_blank();

        let top = self.lines.len();
        let width = self.width as usize;
        let inner = width.saturating_sub(2);
        self.lines.push(Line::from(Span::styled(
            format!("┌{}┐", "╌".repeat(inner)),
            styles::border_dim(),
        )));
        self.lines.push(Line::from(vec![
            Span::styled("┆", styles::border_dim()),
            Span::styled(
                pad_centered(caption, inner),
                Style::default().fg(colors::BLUE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("┆", styles::border_dim()),
        ]));
        self.lines.push(Line::from(vec![
            Span::styled("┆", styles::border_dim()),
            Span::styled(pad_centered("(email screenshot)", inner), styles::text_hint()),
            Span::styled("┆", styles::border_dim()),
        ]));
        self.lines.push(Line::from(Span::styled(
            format!("└{}┘", "╌".repeat(inner)),
            styles::border_dim(),
        )));
        for row in wrap(annotation, width - 2) {
            self.lines.push(Line::from(vec![
                Span::styled(BAR_PREFIX, Style::default().fg(colors::ORANGE)),
                Span::styled(row, styles::text()),
            ]));
        }
        let height = self.lines.len() - top;
        self.regions.push((anchor, Region { top, height }));
        self.push_blank();
    }

    fn push_banner(&mut self, title: &'static str, stats: &[StatCard]) {
        let width = self.width as usize;
        let filled = Style::default().bg(colors::ORANGE).fg(colors::BANNER_FG);
        let filled_bold = filled.add_modifier(Modifier::BOLD);

        self.lines.push(Line::from(Span::styled(" ".repeat(width), filled)));
        self.lines.push(Line::from(Span::styled(
            pad_centered(title, width),
            filled_bold,
        )));

        let mut text_len = 0;
        for (i, stat) in stats.iter().enumerate() {
            if i > 0 {
                text_len += 6;
            }
            text_len += stat.value.chars().count() + 1 + stat.name.chars().count();
        }
        let left = width.saturating_sub(text_len) / 2;
        let mut spans = vec![Span::styled(" ".repeat(left), filled)];
        for (i, stat) in stats.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ".repeat(6), filled));
            }
            spans.push(Span::styled(stat.value.to_string(), filled_bold));
            spans.push(Span::styled(format!(" {}", stat.name), filled));
        }
        let right = width.saturating_sub(left + text_len);
        spans.push(Span::styled(" ".repeat(right), filled));
        self.lines.push(Line::from(spans));

        self.lines.push(Line::from(Span::styled(" ".repeat(width), filled)));
        self.push_blank();
    }

    fn push_reference(&mut self, label: &'static str, url: &'static str) {
        self.lines.push(Line::from(vec![
            Span::styled("  → ", Style::default().fg(colors::ORANGE)),
            Span::styled(
                format!(" {} ", label),
                Style::default()
                    .bg(colors::ORANGE)
                    .fg(colors::BG_DARK)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        for row in wrap(url, self.width as usize - 4) {
            self.lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(row, styles::text_hint()),
            ]));
        }
        self.push_blank();
    }

    /// Centered chevron hint pointing at the next section; belongs to the
    /// band of the section it closes.
    fn push_section_chevron(&mut self, next_label: &'static str) {
        self.push_centered(&format!("{} {}", CHEVRON, next_label), styles::chevron());
        self.push_blank();
    }

    fn push_centered(&mut self, text: &str, style: Style) {
        let pad = (self.width as usize).saturating_sub(text.chars().count()) / 2;
        self.lines.push(Line::from(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(text.to_string(), style),
        ]));
    }

    fn push_blank(&mut self) {
        self.lines.push(Line::default());
    }
}

impl LayoutProvider for DocumentLayout {
    fn region(&self, id: &str) -> Option<Region> {
        DocumentLayout::region(self, id)
    }
}

/// Bullet/border color per tone.
fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Normal => colors::ORANGE,
        Tone::Muted => colors::BORDER_DIM,
        Tone::Attention => colors::YELLOW,
        Tone::Info => colors::BLUE,
    }
}

/// Note color per tone; weaker than the border so the quote stays dominant.
fn note_color(tone: Tone) -> Color {
    match tone {
        Tone::Normal => colors::ORANGE_LIGHT,
        Tone::Muted => colors::FG_DIM,
        Tone::Attention => colors::YELLOW,
        Tone::Info => colors::FG_DIM,
    }
}

/// Greedy word wrap at `width` columns. Words longer than the width are
/// hard-broken; counts are in chars, which over-counts nothing we render.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(8);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    let words = text.split_whitespace().flat_map(|w| chunk_word(w, width));
    for word in words {
        let word_len = word.chars().count();
        if current_len == 0 {
            current = word;
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(&word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current = word;
            current_len = word_len;
        }
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Split an over-long word into width-sized char chunks.
fn chunk_word(word: &str, width: usize) -> Vec<String> {
    if word.chars().count() <= width {
        return vec![word.to_string()];
    }
    let chars: Vec<char> = word.chars().collect();
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

/// Pad a string to a fixed column width, truncating with an ellipsis when
/// it does not fit.
fn fit(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        format!("{:<width$}", s, width = width)
    } else {
        let truncated: String = s.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// Center `s` within `width` columns, space-padded on both sides.
fn pad_centered(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{meta, REPORT, SECTIONS};

    fn layout() -> DocumentLayout {
        DocumentLayout::build(&meta(), REPORT, 80)
    }

    fn flat(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn every_section_has_a_region() {
        let layout = layout();
        for section in SECTIONS {
            assert!(
                layout.region(section.id).is_some(),
                "missing region for {}",
                section.id
            );
        }
        assert!(layout.region("nonexistent-id").is_none());
    }

    #[test]
    fn section_bands_are_ordered_and_contiguous() {
        let layout = layout();
        let regions: Vec<Region> = SECTIONS.iter().map(|s| layout.region(s.id).unwrap()).collect();
        for pair in regions.windows(2) {
            assert_eq!(
                pair[0].top + pair[0].height,
                pair[1].top,
                "bands must tile the document body"
            );
        }
        let last = regions.last().unwrap();
        assert_eq!(last.top + last.height, layout.total_lines());
    }

    #[test]
    fn banner_scrolls_above_the_first_section() {
        let layout = layout();
        let first = layout.region(SECTIONS[0].id).unwrap();
        assert!(
            first.top > crate::navigator::SCROLL_LOOKAHEAD,
            "probe at the very top must sit above the first band"
        );
    }

    #[test]
    fn headings_sit_on_their_bands_first_line() {
        let layout = layout();
        for content in REPORT {
            let region = layout.region(content.section.id).unwrap();
            let line = flat(&layout.view(region.top, 1)[0]);
            assert!(
                line.contains(content.heading),
                "band for {} should start at its heading",
                content.section.id
            );
        }
    }

    #[test]
    fn figure_anchors_land_inside_the_case_study_band() {
        let layout = layout();
        let case_study = layout.region("case-study").unwrap();
        for anchor in ["email-section-1", "email-section-2", "email-section-3"] {
            let region = layout.region(anchor).unwrap();
            assert!(case_study.contains(region.top));
            assert!(case_study.contains(region.top + region.height - 1));
        }
    }

    #[test]
    fn no_line_exceeds_the_build_width() {
        let layout = layout();
        for (idx, line) in layout.view(0, layout.total_lines()).iter().enumerate() {
            assert!(
                line.width() <= layout.width() as usize,
                "line {} is {} columns wide",
                idx,
                line.width()
            );
        }
    }

    #[test]
    fn width_is_clamped_to_the_supported_range() {
        assert_eq!(DocumentLayout::build(&meta(), REPORT, 10).width(), MIN_CONTENT_WIDTH);
        assert_eq!(DocumentLayout::build(&meta(), REPORT, 500).width(), MAX_CONTENT_WIDTH);
    }

    #[test]
    fn view_clamps_to_document_bounds() {
        let layout = layout();
        assert!(layout.view(layout.total_lines() + 100, 10).is_empty());
        let tail = layout.view(layout.total_lines() - 3, 10);
        assert_eq!(tail.len(), 3);
    }

    // ===== wrap =====

    #[test]
    fn wrap_respects_the_width() {
        let rows = wrap("the quick brown fox jumps over the lazy dog", 12);
        assert!(rows.len() > 1);
        for row in &rows {
            assert!(row.chars().count() <= 12, "row {:?} too wide", row);
        }
    }

    #[test]
    fn wrap_hard_breaks_oversized_words() {
        let rows = wrap("https://notebooklm.google.com/notebook/0a570834", 16);
        assert!(rows.iter().all(|r| r.chars().count() <= 16));
        let rejoined: String = rows.concat();
        assert_eq!(rejoined, "https://notebooklm.google.com/notebook/0a570834");
    }

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("short text", 40), vec!["short text".to_string()]);
    }
}
