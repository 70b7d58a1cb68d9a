//! Text width measurement on the shields.io 11px grid.

use tracing::trace;

use super::char_widths::{CHAR_WIDTHS, FALLBACK_CHAR};

/// Measures strings against a fixed advance-width table.
///
/// Widths come back in the table's native 110px scale, snapped so that the
/// 11px ("coarse") width is always odd.
#[derive(Debug, Clone, Copy)]
pub struct TextWidthCalculator {
    widths: &'static [f64],
    fallback: f64,
}

impl Default for TextWidthCalculator {
    fn default() -> Self {
        Self::new(&CHAR_WIDTHS, FALLBACK_CHAR)
    }
}

impl TextWidthCalculator {
    /// Build a calculator over `widths`, charging the width of `fallback` for
    /// code points the table does not cover.
    pub fn new(widths: &'static [f64], fallback: char) -> Self {
        let fallback = widths.get(fallback as usize).copied().unwrap_or(0.0);
        Self { widths, fallback }
    }

    /// Sum of advance widths, before any rounding.
    pub fn raw_width(&self, text: &str) -> f64 {
        text.chars()
            .map(|ch| {
                self.widths
                    .get(ch as usize)
                    .copied()
                    .unwrap_or(self.fallback)
            })
            .sum()
    }

    /// Measured width of `text`.
    ///
    /// The raw width is divided by 10 and truncated, bumped to the next odd
    /// number when even, then scaled back up by 10.
    pub fn measure(&self, text: &str) -> f64 {
        let coarse = coarse_width(self.raw_width(text));
        let width = (coarse * 10) as f64;

        trace!(chars = text.chars().count(), width, "calculated text width");
        width
    }
}

/// Truncate a 110px width to the 11px grid, forcing the result odd.
fn coarse_width(raw: f64) -> i64 {
    let mut coarse = (raw / 10.0) as i64;
    if coarse % 2 == 0 {
        coarse += 1;
    }
    coarse
}

/// Measure `text` with the built-in Verdana table.
pub fn measure(text: &str) -> f64 {
    TextWidthCalculator::default().measure(text)
}
