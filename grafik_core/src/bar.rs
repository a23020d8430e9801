// Copyright 2025 the Grafik Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart points and series.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

use crate::palette::series_color;

/// A single bar datum at an integer category slot.
#[derive(Clone, Debug, PartialEq)]
pub struct BarPoint {
    /// Category slot index along the x axis.
    pub x: usize,
    /// Bar value in data units.
    pub y: f64,
    /// Optional per-point axis label.
    ///
    /// When any point in a series carries a label, per-point labels take
    /// precedence over the series' positional category labels.
    pub label: Option<String>,
    /// Optional per-point fill color, overriding the series color.
    pub color: Option<Color>,
}

impl BarPoint {
    /// Creates a point with no label and no explicit color.
    pub fn new(x: usize, y: f64) -> Self {
        Self {
            x,
            y,
            label: None,
            color: None,
        }
    }

    /// Sets the per-point axis label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the per-point fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// One named group of bar points sharing a color and legend entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarSeries {
    /// Points in input order.
    pub points: Vec<BarPoint>,
    /// Default fill color for points without an explicit one.
    pub color: Option<Color>,
    /// Positional category labels, used when no point carries its own.
    pub category_labels: Vec<String>,
    /// Legend entry for this series.
    pub legend: Option<String>,
    /// Chart title contributed by this series.
    pub title: Option<String>,
}

impl BarSeries {
    /// Creates a series from its points, with no color, labels, or title.
    pub fn new(points: Vec<BarPoint>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    /// Sets the series default color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the positional category labels.
    pub fn with_category_labels(mut self, labels: Vec<String>) -> Self {
        self.category_labels = labels;
        self
    }

    /// Sets the legend entry.
    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    /// Sets the chart title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Largest category slot among this series' points, `0` when empty.
    pub fn max_x(&self) -> usize {
        self.points.iter().map(|p| p.x).max().unwrap_or(0)
    }

    /// Largest y value among this series' points, `0.0` when empty.
    pub fn max_y(&self) -> f64 {
        self.points.iter().map(|p| p.y).reduce(f64::max).unwrap_or(0.0)
    }

    /// Sum of this series' y values.
    pub fn sum_y(&self) -> f64 {
        self.points.iter().map(|p| p.y).sum()
    }

    /// Explicit per-point colors, in point order.
    pub fn point_colors(&self) -> Vec<Color> {
        self.points.iter().filter_map(|p| p.color).collect()
    }

    /// The axis labels this series contributes, in positional order.
    ///
    /// Per-point labels win when any point carries one; otherwise the
    /// positional category list is used. Points without labels are skipped,
    /// so later labels shift forward to fill the gap.
    pub fn axis_labels(&self) -> Vec<&str> {
        let labels: Vec<&str> = self.points.iter().filter_map(|p| p.label.as_deref()).collect();
        if labels.is_empty() {
            self.category_labels.iter().map(String::as_str).collect()
        } else {
            labels
        }
    }

    /// The swatch color representing this series.
    ///
    /// The series default wins, then the first explicit point color, then the
    /// default palette entry for `index` (the series' position among its
    /// siblings).
    pub fn effective_color(&self, index: usize) -> Color {
        self.color
            .or_else(|| self.points.iter().find_map(|p| p.color))
            .unwrap_or_else(|| series_color(index))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn reducers_default_to_zero_on_empty_series() {
        let s = BarSeries::new(vec![]);
        assert_eq!(s.max_x(), 0);
        assert_eq!(s.max_y(), 0.0);
        assert_eq!(s.sum_y(), 0.0);
    }

    #[test]
    fn reducers_scan_all_points() {
        let s = BarSeries::new(vec![
            BarPoint::new(0, 4.0),
            BarPoint::new(3, 9.0),
            BarPoint::new(1, 2.5),
        ]);
        assert_eq!(s.max_x(), 3);
        assert_eq!(s.max_y(), 9.0);
        assert_eq!(s.sum_y(), 15.5);
    }

    #[test]
    fn point_labels_take_precedence_over_category_labels() {
        let s = BarSeries::new(vec![
            BarPoint::new(0, 1.0).with_label("jan"),
            BarPoint::new(1, 2.0),
            BarPoint::new(2, 3.0).with_label("mar"),
        ])
        .with_category_labels(vec!["a".to_string(), "b".to_string(), "c".to_string()]);

        // Unlabelled points are skipped, so "mar" lands at position 1.
        assert_eq!(s.axis_labels(), ["jan", "mar"]);
    }

    #[test]
    fn category_labels_are_the_fallback() {
        let s = BarSeries::new(vec![BarPoint::new(0, 1.0)])
            .with_category_labels(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(s.axis_labels(), ["a", "b"]);
    }

    #[test]
    fn effective_color_prefers_series_then_point_then_palette() {
        let explicit = BarSeries::new(vec![BarPoint::new(0, 1.0).with_color(css::ORANGE)])
            .with_color(css::CRIMSON);
        assert_eq!(explicit.effective_color(0), css::CRIMSON);

        let from_point = BarSeries::new(vec![
            BarPoint::new(0, 1.0),
            BarPoint::new(1, 2.0).with_color(css::ORANGE),
        ]);
        assert_eq!(from_point.effective_color(0), css::ORANGE);

        let from_palette = BarSeries::new(vec![BarPoint::new(0, 1.0)]);
        assert_eq!(from_palette.effective_color(1), series_color(1));
    }
}
