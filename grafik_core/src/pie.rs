// Copyright 2025 the Grafik Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie and donut chart points and series.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

/// A weighted pie/donut slice, optionally owning nested child slices.
#[derive(Clone, Debug, PartialEq)]
pub struct PiePoint {
    /// Slice weight. Partitioning requires it to be non-negative.
    pub value: f64,
    /// Slice fill color.
    pub color: Color,
    /// Optional legend label.
    pub label: Option<String>,
    /// Child slices rendered as a nested ring scoped to this slice's span.
    ///
    /// The tree is owned all the way down; there is no sharing between
    /// points. Well-formed data keeps `value` equal to the children's sum,
    /// but the engine reads the tree without enforcing that.
    pub children: Vec<PiePoint>,
}

impl PiePoint {
    /// Creates a leaf slice with no label.
    pub fn new(value: f64, color: Color) -> Self {
        Self {
            value,
            color,
            label: None,
            children: Vec::new(),
        }
    }

    /// Sets the legend label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the child slices.
    pub fn with_children(mut self, children: Vec<PiePoint>) -> Self {
        self.children = children;
        self
    }
}

/// An ordered pie/donut dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PieSeries {
    /// Slices in display order.
    pub points: Vec<PiePoint>,
    /// Optional title shown at the chart center.
    pub title: Option<String>,
}

impl PieSeries {
    /// Creates a series from its slices, with no title.
    pub fn new(points: Vec<PiePoint>) -> Self {
        Self {
            points,
            title: None,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sum of all slice values.
    pub fn total(&self) -> f64 {
        sum_values(&self.points)
    }

    /// Labels of the labelled slices, in order.
    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().filter_map(|p| p.label.as_deref()).collect()
    }

    /// Slice colors, in order.
    pub fn colors(&self) -> Vec<Color> {
        self.points.iter().map(|p| p.color).collect()
    }
}

/// Sums slice values over any point collection.
///
/// Shared by series totals and child sums during sub-arc partitioning.
pub fn sum_values(points: &[PiePoint]) -> f64 {
    points.iter().map(|p| p.value).sum()
}
