//! Semantic style builders for the console theme.

use avellon_core::RiskTier;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn heading() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn error() -> Style {
    Style::default()
        .fg(palette::STATUS_RED)
        .add_modifier(Modifier::BOLD)
}

/// Info callout (the blue `st.info` box look)
pub fn callout() -> Style {
    Style::default().fg(palette::ACCENT).bg(palette::INFO_BG)
}

/// "Black on accent" - the focused control
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Focused control when `focused`, plain text otherwise
pub fn control(focused: bool) -> Style {
    if focused {
        focused_selected()
    } else {
        text_primary()
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn titled_block(title: &str, focused: bool) -> Block<'_> {
    glass_block(focused).title(Span::styled(format!(" {} ", title), accent_bold()))
}

// --- Risk tiers ---
pub fn tier_color(tier: RiskTier) -> Color {
    match tier {
        RiskTier::Critical => palette::TIER_CRITICAL,
        RiskTier::High => palette::TIER_HIGH,
        RiskTier::Medium => palette::TIER_MEDIUM,
        RiskTier::Low => palette::TIER_LOW,
    }
}

/// Badge: dark text on the tier color
pub fn tier_badge(tier: RiskTier) -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(tier_color(tier))
        .add_modifier(Modifier::BOLD)
}
