// Copyright 2025 the Grafik Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker-only legend data.
//!
//! Legends here are pure data: a label plus a swatch fill per entry, derived
//! from the series that will be drawn. Swatch layout and text belong to the
//! renderer.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::{Brush, Color};

use grafik_core::{BarSeries, PieSeries};

/// A simple legend row item.
#[derive(Clone, Debug)]
pub struct LegendItem {
    /// The label string shown next to the swatch.
    pub label: String,
    /// The swatch fill paint.
    pub fill: Brush,
}

impl LegendItem {
    /// Convenience constructor for a solid-color swatch.
    pub fn solid(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            fill: Brush::Solid(color),
        }
    }
}

/// Builds legend items for a group of bar series.
///
/// Produces one item per series that carries a legend string, in input
/// order, paired with that series' effective color (series default, else its
/// first explicit point color, else the palette entry for its position).
pub fn bar_legend(series: &[BarSeries]) -> Vec<LegendItem> {
    series
        .iter()
        .enumerate()
        .filter_map(|(i, s)| {
            s.legend
                .as_ref()
                .map(|label| LegendItem::solid(label.clone(), s.effective_color(i)))
        })
        .collect()
}

/// Builds legend items for a pie series: labelled slices in order.
pub fn pie_legend(series: &PieSeries) -> Vec<LegendItem> {
    series
        .points
        .iter()
        .filter_map(|p| {
            p.label
                .as_ref()
                .map(|label| LegendItem::solid(label.clone(), p.color))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::color::palette::css;

    use grafik_core::{BarPoint, PiePoint, series_color};

    use super::*;

    #[test]
    fn bar_legend_skips_series_without_a_legend_string() {
        let series = [
            BarSeries::new(vec![BarPoint::new(0, 1.0)])
                .with_color(css::CRIMSON)
                .with_legend("first"),
            BarSeries::new(vec![BarPoint::new(0, 2.0)]),
            BarSeries::new(vec![BarPoint::new(0, 3.0)]).with_legend("third"),
        ];

        let items = bar_legend(&series);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "first");
        assert_eq!(items[0].fill, Brush::Solid(css::CRIMSON));
        // The third series has no color of its own: palette slot 2.
        assert_eq!(items[1].fill, Brush::Solid(series_color(2)));
    }

    #[test]
    fn pie_legend_pairs_labels_with_slice_colors() {
        let series = PieSeries::new(vec![
            PiePoint::new(1.0, css::ORANGE).with_label("a"),
            PiePoint::new(2.0, css::CRIMSON),
            PiePoint::new(3.0, css::GOLDENROD).with_label("c"),
        ]);

        let items = pie_legend(&series);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "a");
        assert_eq!(items[1].fill, Brush::Solid(css::GOLDENROD));
    }
}
