//! Color palette for the dashboard theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent
pub const CONTRAST_FG: Color = Color::Black; // Text drawn on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_RED: Color = Color::Red; // Slow devices, critical gauges
pub const LINK_BLUE: Color = Color::LightBlue; // Table action links

// --- Category themes (score cards, gauges) ---
pub const THEME_BLUE: Color = Color::Rgb(59, 130, 246);
pub const THEME_EMERALD: Color = Color::Rgb(16, 185, 129);
pub const THEME_VIOLET: Color = Color::Rgb(139, 92, 246);
pub const THEME_AMBER: Color = Color::Rgb(245, 158, 11);

// --- Tier badges ---
pub const TIER_HIGH: Color = Color::Green;
pub const TIER_MID: Color = Color::Rgb(234, 88, 12); // orange
pub const TIER_LOW: Color = Color::Gray;

// --- Gauges ---
pub const GAUGE_TRACK: Color = Color::DarkGray;
pub const GAUGE_MARKER: Color = Color::Gray;
