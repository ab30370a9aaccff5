//! Caption style configuration

use serde::{Deserialize, Serialize};

/// Visual configuration for caption rendering.
///
/// The style is an immutable value: updating options means building a new
/// `CaptionStyle` and handing it to the driver, which rebuilds every word
/// state from scratch. None of these fields affect which word is active at
/// a given time; they are passed through to the render surface as-is.
///
/// Deserializing merges the given fields over [`CaptionStyle::default`],
/// so a partial JSON object is a valid style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaptionStyle {
    /// Font family name, CSS-style fallback list allowed
    pub font_family: String,
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (100-900)
    pub font_weight: u16,
    /// Text fill color as 0xRRGGBB
    pub fill_color: u32,
    /// Outline color as 0xRRGGBB
    pub stroke_color: u32,
    /// Outline thickness in pixels
    pub stroke_thickness: f32,
    /// Drop shadow color as 0xRRGGBB
    pub drop_shadow_color: u32,
    /// Drop shadow opacity in [0, 1]
    pub drop_shadow_alpha: f32,
    /// Drop shadow offset in pixels
    pub drop_shadow_distance: f32,
    /// Drop shadow blur radius in pixels
    pub drop_shadow_blur: f32,
    /// Peak scale of the entrance pop
    pub pop_scale: f32,
    /// Entrance pop duration in seconds
    pub pop_duration: f32,
    /// Fade duration in seconds
    pub fade_duration: f32,
    /// Maximum caption width in pixels
    pub max_width: f32,
    /// Line height multiplier
    pub line_height: f32,
    /// Distance from the bottom of the frame in pixels
    pub bottom_margin: f32,
    /// Maximum words per caption line
    pub words_per_line: u32,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial Black, sans-serif".to_string(),
            font_size: 48.0,
            font_weight: 900,
            fill_color: 0xFFFFFF,
            stroke_color: 0x000000,
            stroke_thickness: 4.0,
            drop_shadow_color: 0x000000,
            drop_shadow_alpha: 0.8,
            drop_shadow_distance: 3.0,
            drop_shadow_blur: 2.0,
            pop_scale: 1.2,
            pop_duration: 0.15,
            fade_duration: 0.1,
            max_width: 380.0,
            line_height: 1.2,
            bottom_margin: 120.0,
            words_per_line: 4,
        }
    }
}
