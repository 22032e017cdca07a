//! Color and sizing constants for the Shellyboard UI.
//!
//! Hues follow the Tailwind palette (slate surface, blue items). Colors
//! with transparency are stored premultiplied so they can stay `const`.

use egui::Color32;

/// Canvas surface background (slate-50).
pub const SURFACE_BG: Color32 = Color32::from_rgb(248, 250, 252);
/// Canvas surface border (slate-200).
pub const SURFACE_BORDER: Color32 = Color32::from_rgb(226, 232, 240);

/// Committed item fill (blue-500 at 30%).
pub const ITEM_FILL: Color32 = Color32::from_rgba_premultiplied(18, 39, 74, 77);
/// Committed item fill while hovered (blue-500 at 40%).
pub const ITEM_FILL_HOVER: Color32 = Color32::from_rgba_premultiplied(24, 52, 98, 102);
/// Committed item border (blue-600 at 50%).
pub const ITEM_BORDER: Color32 = Color32::from_rgba_premultiplied(19, 50, 118, 128);

/// Draft preview outline (blue-400).
pub const DRAFT_BORDER: Color32 = Color32::from_rgb(96, 165, 250);
/// Draft preview fill (blue-400 at 10%).
pub const DRAFT_FILL: Color32 = Color32::from_rgba_premultiplied(10, 17, 25, 26);

/// Muted text (slate-600).
pub const TEXT_MUTED: Color32 = Color32::from_rgb(71, 85, 105);
/// Day chip background (slate-100).
pub const CHIP_BG: Color32 = Color32::from_rgb(241, 245, 249);
/// Day chip text (slate-700).
pub const CHIP_TEXT: Color32 = Color32::from_rgb(51, 65, 85);
/// Accent for the current day chip (blue-500).
pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);

/// Corner radius for committed items.
pub const ITEM_RADIUS: u8 = 2;
/// Corner radius for the canvas surface.
pub const SURFACE_RADIUS: u8 = 6;
