//! Page Decorations
//!
//! Snowflake and light bulb layouts. Rendering lives in the frontend;
//! this module only decides positions, timings and colors.

use crate::random::RandomSource;

/// Bulb colors, cycled along the light string
pub const LIGHT_COLORS: &[&str] = &["#ff6b6b", "#4ecdc4", "#ffe66d", "#95e1d3", "#f38181"];

/// A single falling snowflake
#[derive(Debug, Clone, PartialEq)]
pub struct Snowflake {
    pub id: usize,
    /// Horizontal position, percent of viewport width
    pub left_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub font_size_px: f64,
    pub opacity: f64,
}

impl Snowflake {
    /// Inline CSS for the flake element
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s; font-size: {:.1}px; opacity: {:.2};",
            self.left_pct, self.duration_s, self.delay_s, self.font_size_px, self.opacity
        )
    }
}

/// Scatter `count` snowflakes across the page
pub fn generate_snowflakes(count: usize, rng: &mut impl RandomSource) -> Vec<Snowflake> {
    (0..count)
        .map(|id| Snowflake {
            id,
            left_pct: rng.range(0.0, 100.0),
            duration_s: rng.range(5.0, 15.0),
            delay_s: rng.range(0.0, 5.0),
            font_size_px: rng.range(10.0, 30.0),
            opacity: rng.range(0.5, 1.0),
        })
        .collect()
}

/// A bulb on the decorative light string
#[derive(Debug, Clone, PartialEq)]
pub struct LightBulb {
    pub delay_s: f64,
    pub color: &'static str,
}

impl LightBulb {
    pub fn style(&self) -> String {
        format!("animation-delay: {:.1}s; background-color: {};", self.delay_s, self.color)
    }
}

/// Lay out `count` bulbs with staggered blink delays
pub fn light_bulbs(count: usize) -> Vec<LightBulb> {
    (0..count)
        .map(|i| LightBulb {
            delay_s: i as f64 * 0.2,
            color: LIGHT_COLORS[i % LIGHT_COLORS.len()],
        })
        .collect()
}
