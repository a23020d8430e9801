// Copyright 2025 the Grafik Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart style parameters.
//!
//! Styles are plain read-only inputs: the geometry builders consume the
//! numeric fields, the renderer consumes the rest. Paints, fonts, and text
//! layout are renderer concerns and deliberately absent.

/// Which side of the plot a legend flows along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendOrient {
    /// Legend above the chart.
    Top,
    /// Legend below the chart.
    Bottom,
    /// Legend to the left of the chart.
    Left,
    /// Legend to the right of the chart.
    Right,
}

/// Grouped bar chart style parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarStyle {
    /// Bar width as a fraction of its share of the slot, `0.0..=1.0`.
    pub bar_width: f64,
    /// Gap between bars within one category group.
    pub bar_spacing: f64,
    /// Horizontal padding around each category group.
    pub group_padding: f64,
    /// Bar corner radius.
    pub corner_radius: f64,
    /// Number of value-axis tick intervals.
    pub tick_count: usize,
    /// Legend placement.
    pub legend_orient: LegendOrient,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            bar_width: 1.0,
            bar_spacing: 5.0,
            group_padding: 10.0,
            corner_radius: 2.0,
            tick_count: 5,
            legend_orient: LegendOrient::Top,
        }
    }
}

impl BarStyle {
    /// Creates the default bar style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bar width fraction.
    pub fn with_bar_width(mut self, fraction: f64) -> Self {
        self.bar_width = fraction;
        self
    }

    /// Sets the gap between bars within a group.
    pub fn with_bar_spacing(mut self, spacing: f64) -> Self {
        self.bar_spacing = spacing;
        self
    }

    /// Sets the padding around each category group.
    pub fn with_group_padding(mut self, padding: f64) -> Self {
        self.group_padding = padding;
        self
    }

    /// Sets the bar corner radius.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Sets the number of value-axis tick intervals.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the legend placement.
    pub fn with_legend_orient(mut self, orient: LegendOrient) -> Self {
        self.legend_orient = orient;
        self
    }
}

/// Pie/donut chart style parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieStyle {
    /// Leading-edge angle of the first slice, in degrees.
    pub start_angle: f64,
    /// Total sweep in degrees; `360` draws a closed circle.
    pub rotation: f64,
    /// Gap between slices, in degrees.
    pub padding: f64,
    /// Where the ring band begins, as a fraction of the outer radius.
    pub depth: f64,
    /// Where the inner highlight band begins, as a fraction of the outer
    /// radius. Kept below `depth` so the highlight peeks out underneath.
    pub inner_depth: f64,
    /// Legend placement.
    pub legend_orient: LegendOrient,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            start_angle: 0.0,
            rotation: 360.0,
            padding: 1.0,
            depth: 0.53,
            inner_depth: 0.48,
            legend_orient: LegendOrient::Right,
        }
    }
}

impl PieStyle {
    /// Creates the default (full circle) pie style.
    pub fn new() -> Self {
        Self::default()
    }

    /// A half-donut preset: a partial sweep with the legend across the top.
    pub fn half_donut(start_angle: f64, rotation: f64) -> Self {
        Self {
            start_angle,
            rotation,
            legend_orient: LegendOrient::Top,
            ..Self::default()
        }
    }

    /// Sets the start angle in degrees.
    pub fn with_start_angle(mut self, degrees: f64) -> Self {
        self.start_angle = degrees;
        self
    }

    /// Sets the total sweep in degrees.
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Sets the inter-slice gap in degrees.
    pub fn with_padding(mut self, degrees: f64) -> Self {
        self.padding = degrees;
        self
    }

    /// Sets the ring depth fraction.
    pub fn with_depth(mut self, fraction: f64) -> Self {
        self.depth = fraction;
        self
    }

    /// Sets the inner highlight depth fraction.
    pub fn with_inner_depth(mut self, fraction: f64) -> Self {
        self.inner_depth = fraction;
        self
    }

    /// Sets the legend placement.
    pub fn with_legend_orient(mut self, orient: LegendOrient) -> Self {
        self.legend_orient = orient;
        self
    }

    /// Radii of the main ring band for a chart of `diameter`.
    ///
    /// Returns `(inner_radius, outer_radius)`: the band spans from `depth`
    /// of the outer radius out to the outer radius itself. A `depth` of zero
    /// degenerates to a solid pie slice.
    pub fn ring(&self, diameter: f64) -> (f64, f64) {
        let outer = 0.5 * diameter;
        (outer * self.depth, outer)
    }

    /// Radii of the inner highlight band for a chart of `diameter`.
    pub fn inner_ring(&self, diameter: f64) -> (f64, f64) {
        let outer = 0.5 * diameter;
        (outer * self.inner_depth, outer)
    }
}
