//! Harvest theme module.
//!
//! A warm, dark palette built around the report's orange/green brand pairing:
//! ember orange for accents and headline numbers, field green and clay red for
//! good/bad ratings, on a low-contrast warm charcoal ground.

#![allow(dead_code)]

use ratatui::style::Color;

/// Harvest color palette
/// Warm charcoal backgrounds with the report's orange/green/red accent set
pub mod colors {
    use super::Color;

    // === Background Colors ===
    /// Charcoal - Primary background
    pub const BG_DARK: Color = Color::Rgb(0x17, 0x14, 0x12);
    /// Slightly lighter background for cards and inset blocks
    pub const BG_MEDIUM: Color = Color::Rgb(0x1F, 0x1B, 0x17);
    /// Background for highlighted/selected areas
    pub const BG_HIGHLIGHT: Color = Color::Rgb(0x2C, 0x26, 0x20);
    /// Background for dimmed/overlay areas
    pub const BG_DIM: Color = Color::Rgb(0x10, 0x0E, 0x0C);

    // === Foreground Colors ===
    /// Warm white - Primary text color
    pub const FG_PRIMARY: Color = Color::Rgb(0xD8, 0xD2, 0xC6);
    /// Dimmed text for secondary information
    pub const FG_DIM: Color = Color::Rgb(0x8A, 0x82, 0x76);
    /// Very dim text for hints and placeholders
    pub const FG_HINT: Color = Color::Rgb(0x5C, 0x56, 0x4C);
    /// Text over the banner gradient and filled accent blocks
    pub const BANNER_FG: Color = Color::Rgb(0xFF, 0xF7, 0xEC);

    // === Accent Colors ===
    /// Ember Orange - The brand accent; headline numbers, active nav entry
    pub const ORANGE: Color = Color::Rgb(0xE8, 0x82, 0x2E);
    /// Light Orange - Bullets and softer orange accents
    pub const ORANGE_LIGHT: Color = Color::Rgb(0xF0, 0xA3, 0x5C);

    /// Field Green - Good ratings, the "Excellent" chart segment
    pub const GREEN: Color = Color::Rgb(0x7B, 0xA0, 0x5B);
    /// Light Green - Lighter green accents
    pub const GREEN_LIGHT: Color = Color::Rgb(0x97, 0xBD, 0x77);

    /// Clay Red - Bad ratings, the "Poor" chart segment
    pub const RED: Color = Color::Rgb(0xC7, 0x5C, 0x54);
    /// Light Red - Lighter red accents
    pub const RED_LIGHT: Color = Color::Rgb(0xE0, 0x7B, 0x72);

    /// Straw Yellow - The urgency/relevance bullet in the guidelines
    pub const YELLOW: Color = Color::Rgb(0xD9, 0xB3, 0x6A);
    /// Slate Blue - Exhibit frames in the case study
    pub const BLUE: Color = Color::Rgb(0x7E, 0x9C, 0xB8);

    // === UI Element Colors ===
    /// Border for framed blocks and the panel
    pub const BORDER: Color = Color::Rgb(0x6E, 0x67, 0x5C);
    /// Dim border for less important separators
    pub const BORDER_DIM: Color = Color::Rgb(0x3A, 0x35, 0x2E);
    /// Accent border for the open panel and focused frames
    pub const BORDER_ACCENT: Color = Color::Rgb(0xB0, 0x6A, 0x34);

    // === Rating Colors ===
    /// "Excellent" / "Above Average" table ratings
    pub const RATING_GOOD: Color = GREEN;
    /// "Needs Improvement" table ratings
    pub const RATING_BAD: Color = RED;
}

/// Gradient stops for the title banner
/// Mirrors the report's orange-to-green header sweep, left to right
pub const BANNER_STOPS: &[Color] = &[
    Color::Rgb(0xEA, 0x58, 0x0C), // Deep orange - left edge
    Color::Rgb(0xF9, 0x73, 0x16), // Bright orange - center
    Color::Rgb(0x22, 0xC5, 0x5E), // Green - right edge
];

/// Sample the banner gradient at column `x` of `width` (piecewise-linear).
pub fn banner_color(x: u16, width: u16) -> Color {
    if width <= 1 || BANNER_STOPS.len() < 2 {
        return BANNER_STOPS[0];
    }
    let span = (BANNER_STOPS.len() - 1) as f64;
    let t = (x as f64 / (width - 1) as f64).clamp(0.0, 1.0) * span;
    let seg = (t as usize).min(BANNER_STOPS.len() - 2);
    blend_colors(BANNER_STOPS[seg], BANNER_STOPS[seg + 1], t - seg as f64)
}

/// Linear blend between two RGB colors (`t` in 0.0..=1.0).
pub fn blend_colors(a: Color, b: Color, t: f64) -> Color {
    match (a, b) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t) as u8;
            Color::Rgb(lerp(r1, r2), lerp(g1, g2), lerp(b1, b2))
        }
        _ => a,
    }
}

/// Semantic styling helpers
pub mod styles {
    use super::colors;
    use ratatui::style::{Modifier, Style};

    /// Style for primary text
    pub fn text() -> Style {
        Style::default().fg(colors::FG_PRIMARY)
    }

    /// Style for dimmed/secondary text
    pub fn text_dim() -> Style {
        Style::default().fg(colors::FG_DIM)
    }

    /// Style for hint text
    pub fn text_hint() -> Style {
        Style::default().fg(colors::FG_HINT)
    }

    /// Style for good ratings and the excellent chart segment
    pub fn good() -> Style {
        Style::default().fg(colors::RATING_GOOD)
    }

    /// Style for bad ratings and the poor chart segment
    pub fn bad() -> Style {
        Style::default().fg(colors::RATING_BAD)
    }

    /// Style for the urgency bullet
    pub fn attention() -> Style {
        Style::default().fg(colors::YELLOW)
    }

    /// Style for exhibit annotations
    pub fn exhibit() -> Style {
        Style::default().fg(colors::BLUE)
    }

    /// Style for section headings
    pub fn heading() -> Style {
        Style::default()
            .fg(colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for subsection headings
    pub fn subheading() -> Style {
        Style::default()
            .fg(colors::ORANGE_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for headline stat values
    pub fn stat_value() -> Style {
        Style::default()
            .fg(colors::ORANGE)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for block titles
    pub fn title() -> Style {
        Style::default()
            .fg(colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for accent titles (panel header, footer section name)
    pub fn title_accent() -> Style {
        Style::default()
            .fg(colors::ORANGE)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the active navigation entry
    pub fn nav_active() -> Style {
        Style::default()
            .fg(colors::ORANGE)
            .bg(colors::BG_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for inactive navigation entries
    pub fn nav_entry() -> Style {
        Style::default().fg(colors::FG_DIM)
    }

    /// Style for the panel keyboard cursor
    pub fn selected() -> Style {
        Style::default()
            .fg(colors::BG_DARK)
            .bg(colors::ORANGE)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for focused borders
    pub fn border_focused() -> Style {
        Style::default().fg(colors::BORDER_ACCENT)
    }

    /// Style for unfocused borders
    pub fn border() -> Style {
        Style::default().fg(colors::BORDER)
    }

    /// Style for dim borders
    pub fn border_dim() -> Style {
        Style::default().fg(colors::BORDER_DIM)
    }

    /// Style for the chevron next-section hint
    pub fn chevron() -> Style {
        Style::default().fg(colors::ORANGE_LIGHT)
    }

    /// Style for modal overlay background
    pub fn modal_bg() -> Style {
        Style::default().bg(colors::BG_DIM)
    }

    /// Style for modal content background
    pub fn modal_content_bg() -> Style {
        Style::default().bg(colors::BG_MEDIUM)
    }
}
