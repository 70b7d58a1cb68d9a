//! Advance widths for Verdana rendered at 110px.
//!
//! Generated with the anafanafo `char-width-table-builder` and indexed by
//! code point. Codes 0-31 and a few non-printing codes carry zero width.

/// Number of code points covered by [`CHAR_WIDTHS`].
pub const TABLE_LEN: usize = 384;

/// Glyph whose width is charged for any code point outside the table.
pub const FALLBACK_CHAR: char = '?';

#[rustfmt::skip]
pub static CHAR_WIDTHS: [f64; TABLE_LEN] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // 0-15
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // 16-31
    38.67, 43.29, 50.49, 90.02, 69.93, 118.38, 79.92, 29.54, 49.95, 49.95, 69.93, 90.02, 40.01, 49.95, 40.01, 49.95, // ' '-'/'
    69.93, 69.93, 69.93, 69.93, 69.93, 69.93, 69.93, 69.93, 69.93, 69.93, 49.95, 49.95, 90.02, 90.02, 90.02, 60.0, // '0'-'?'
    110.0, 75.2, 75.41, 76.81, 84.76, 69.56, 63.22, 85.29, 82.66, 46.3, 50.0, 76.22, 61.23, 92.71, 82.29, 86.58, // '@'-'O'
    66.33, 86.58, 76.48, 75.2, 67.78, 80.51, 75.2, 108.76, 75.36, 67.68, 75.36, 49.95, 49.95, 49.95, 90.02, 69.93, // 'P'-'_'
    69.93, 66.06, 68.54, 57.31, 68.54, 65.53, 38.67, 68.54, 69.61, 30.19, 37.87, 65.1, 30.19, 106.99, 69.61, 66.76, // '`'-'o'
    68.54, 68.54, 46.94, 57.31, 43.34, 69.61, 65.1, 90.02, 65.1, 65.1, 57.79, 69.82, 49.95, 69.82, 90.02, 41.36, // 'p'-127
    61.18, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, // 128-143
    110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, 110.0, // 144-159
    38.67, 43.29, 69.93, 69.93, 69.93, 69.93, 49.95, 69.93, 69.93, 110.0, 60.0, 70.9, 90.02, 0.0, 110.0, 69.93, // 160-175
    59.62, 90.02, 59.62, 59.62, 69.93, 70.58, 69.93, 40.01, 69.93, 59.62, 60.0, 70.9, 110.0, 110.0, 110.0, 60.0, // 176-191
    75.2, 75.2, 75.2, 75.2, 75.2, 75.2, 108.28, 76.81, 69.56, 69.56, 69.56, 69.56, 46.3, 46.3, 46.3, 46.3, // 192-207
    85.29, 82.29, 86.58, 86.58, 86.58, 86.58, 86.58, 90.02, 86.58, 80.51, 80.51, 80.51, 80.51, 67.68, 66.6, 68.21, // 208-223
    66.06, 66.06, 66.06, 66.06, 66.06, 66.06, 105.06, 57.31, 65.53, 65.53, 65.53, 65.53, 30.19, 30.19, 30.19, 30.19, // 224-239
    67.3, 69.61, 66.76, 66.76, 66.76, 66.76, 66.76, 90.02, 66.76, 69.61, 69.61, 69.61, 69.61, 65.1, 68.54, 65.1, // 240-255
    75.2, 66.06, 75.2, 66.06, 75.2, 66.06, 76.81, 57.31, 76.81, 57.31, 76.81, 57.31, 76.81, 57.31, 84.76, 71.22, // 256-271
    85.29, 68.54, 69.56, 65.53, 69.56, 65.53, 69.56, 65.53, 69.56, 65.53, 69.56, 65.53, 85.29, 68.54, 85.29, 68.54, // 272-287
    85.29, 68.54, 85.29, 68.54, 82.66, 69.61, 82.66, 69.61, 46.3, 30.19, 46.3, 30.19, 46.3, 30.19, 46.3, 30.19, // 288-303
    46.3, 30.19, 95.77, 67.51, 50.0, 37.87, 76.22, 65.1, 65.1, 61.23, 30.19, 61.23, 30.19, 61.23, 32.55, 61.23, // 304-319
    50.43, 61.77, 31.26, 82.29, 69.61, 82.29, 69.61, 82.29, 69.61, 80.35, 82.29, 69.61, 86.58, 66.76, 86.58, 66.76, // 320-335
    86.58, 66.76, 117.68, 107.96, 76.48, 46.94, 76.48, 46.94, 76.48, 46.94, 75.2, 57.31, 75.2, 57.31, 75.2, 57.31, // 336-351
    75.2, 57.31, 67.78, 43.34, 67.78, 43.34, 67.78, 43.34, 80.51, 69.61, 80.51, 69.61, 80.51, 69.34, 80.51, 69.61, // 352-367
    80.51, 69.61, 80.51, 69.34, 108.76, 90.02, 67.68, 65.1, 67.68, 75.36, 57.79, 75.36, 57.79, 75.36, 57.79, 33.03, // 368-383
];

/// Advance width of `ch`, or `None` when the code point is outside the table.
#[inline]
pub fn char_width(ch: char) -> Option<f64> {
    CHAR_WIDTHS.get(ch as usize).copied()
}

/// Advance width of the fallback glyph.
#[inline]
pub fn fallback_width() -> f64 {
    CHAR_WIDTHS[FALLBACK_CHAR as usize]
}
