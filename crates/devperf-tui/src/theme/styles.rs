//! Semantic style builders for the dashboard theme.

use devperf_core::{MetricCategory, Tier};
use ratatui::style::{Color, Modifier, Style};
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

pub fn text_bright_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
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

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn link() -> Style {
    Style::default().fg(palette::LINK_BLUE)
}

pub fn keybinding() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Disabled controls (pagination bounds)
pub fn disabled() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::DIM)
}

// --- Selection styles ---

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Selected item in an unfocused panel
pub fn unfocused_selected() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
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

// --- Domain mappings ---

/// Theme color of a score category
pub fn category_color(category: MetricCategory) -> Color {
    match category {
        MetricCategory::Startup => palette::THEME_BLUE,
        MetricCategory::Runtime => palette::THEME_EMERALD,
        MetricCategory::Network => palette::THEME_VIOLET,
        MetricCategory::Compatibility => palette::THEME_AMBER,
    }
}

/// Badge style for a device tier
pub fn tier_badge(tier: Tier) -> Style {
    let color = match tier {
        Tier::High => palette::TIER_HIGH,
        Tier::Mid => palette::TIER_MID,
        Tier::Low => palette::TIER_LOW,
    };
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(color)
        .add_modifier(Modifier::BOLD)
}
