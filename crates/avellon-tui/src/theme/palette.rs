//! Color palette for the command-console theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(11, 13, 16);
pub const CARD_BG: Color = Color::Rgb(22, 27, 34);
pub const SIDEBAR_BG: Color = Color::Rgb(13, 17, 23);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(48, 54, 61);
pub const BORDER_ACTIVE: Color = Color::Rgb(0, 212, 255);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(0, 212, 255);
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(240, 242, 246);
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 187);
pub const TEXT_MUTED: Color = Color::Rgb(102, 102, 102);

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const INFO_BG: Color = Color::Rgb(23, 45, 72);

// --- Risk tiers (marker and badge colors) ---
pub const TIER_CRITICAL: Color = Color::Red;
pub const TIER_HIGH: Color = Color::Rgb(255, 165, 0);
pub const TIER_MEDIUM: Color = Color::Yellow;
pub const TIER_LOW: Color = Color::Green;

// --- Supply-chain graph ---
pub const NODE_BG: Color = Color::Rgb(68, 68, 68);
pub const NODE_CRITICAL_BG: Color = Color::Rgb(127, 29, 29);

// --- Map ---
pub const COASTLINE: Color = Color::Rgb(60, 70, 80);
