//! Glyph lookup for icon kinds.
//!
//! The data model names icons abstractly; the terminal renderer resolves
//! them to glyphs here, at the presentation boundary.

use ecomicro_core::StepIcon;

/// Glyph for a timeline step icon.
pub fn step_icon_glyph(icon: StepIcon) -> &'static str {
    match icon {
        StepIcon::Droplets => "💧",
        StepIcon::Moon => "🌙",
        StepIcon::Sprout => "🌱",
        StepIcon::Sun => "☀️",
        StepIcon::Scissors => "✂️",
        StepIcon::Leaf => "🌿",
        StepIcon::Clock => "⏱",
    }
}
