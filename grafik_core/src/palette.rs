// Copyright 2025 the Grafik Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default categorical series palette.

use peniko::Color;
use peniko::color::palette::css;

/// The default categorical palette, as named CSS colors.
///
/// Series pick colors by position and wrap when there are more series than
/// palette entries.
pub const DEFAULT_PALETTE: [Color; 8] = [
    css::CORNFLOWER_BLUE,
    css::ORANGE,
    css::MEDIUM_SEA_GREEN,
    css::CRIMSON,
    css::GOLDENROD,
    css::SLATE_BLUE,
    css::DARK_CYAN,
    css::HOT_PINK,
];

/// Returns the default color for the series at `index`, wrapping around the
/// palette.
pub fn series_color(index: usize) -> Color {
    DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn palette_wraps_by_index() {
        assert_eq!(series_color(0), DEFAULT_PALETTE[0]);
        assert_eq!(series_color(DEFAULT_PALETTE.len()), DEFAULT_PALETTE[0]);
        assert_eq!(series_color(DEFAULT_PALETTE.len() + 3), DEFAULT_PALETTE[3]);
    }
}
