// Copyright 2025 the Grafik Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie and donut arc partitioning.
//!
//! Slices receive contiguous angular spans proportional to their values
//! within a caller-defined sweep. Angles are degrees measured from the
//! caller's start angle; the engine is direction-agnostic, so the renderer
//! decides whether increasing angle reads clockwise on screen.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Point;

use grafik_core::{PiePoint, sum_values};

use crate::error::ChartError;
use crate::style::PieStyle;

/// Allocates proportional angular spans for pie/donut slices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcPartitioner {
    /// Angle of the first slice's leading edge, in degrees.
    pub start_angle: f64,
    /// Total sweep to distribute, in degrees; `>= 360` closes the circle.
    pub total_rotation: f64,
    /// Gap inserted between adjacent slices, in degrees.
    pub padding: f64,
}

impl Default for ArcPartitioner {
    fn default() -> Self {
        Self::new()
    }
}

impl ArcPartitioner {
    /// Creates a full-circle partitioner with no inter-slice padding.
    pub fn new() -> Self {
        Self {
            start_angle: 0.0,
            total_rotation: 360.0,
            padding: 0.0,
        }
    }

    /// Sets the start angle in degrees.
    pub fn with_start_angle(mut self, degrees: f64) -> Self {
        self.start_angle = degrees;
        self
    }

    /// Sets the total sweep in degrees.
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.total_rotation = degrees;
        self
    }

    /// Sets the inter-slice gap in degrees.
    pub fn with_padding(mut self, degrees: f64) -> Self {
        self.padding = degrees;
        self
    }

    /// Creates a partitioner from a pie style's angle parameters.
    pub fn from_style(style: &PieStyle) -> Self {
        Self {
            start_angle: style.start_angle,
            total_rotation: style.rotation,
            padding: style.padding,
        }
    }

    /// Whether the configured sweep closes into a full circle.
    pub fn is_full_circle(&self) -> bool {
        self.total_rotation >= 360.0
    }

    /// Splits `points` into contiguous spans proportional to their values.
    ///
    /// Spans are emitted in point order, each followed by the configured
    /// padding gap. A closed circle meets itself at the seam, so it budgets
    /// one gap fewer than a partial sweep of the same slice count.
    ///
    /// A value total that is not positive (all zeros, or an empty slice)
    /// yields no spans: there is nothing to draw. Padding large enough to
    /// exhaust the sweep is also valid; the spans then carry zero or
    /// negative deltas and clamping is left to the renderer.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::NegativeValue`] if any value is negative; no
    /// spans are produced in that case.
    pub fn partition<'a>(&self, points: &'a [PiePoint]) -> Result<Vec<ArcSpan<'a>>, ChartError> {
        if let Some(p) = points.iter().find(|p| p.value < 0.0) {
            return Err(ChartError::NegativeValue(p.value));
        }

        let total = sum_values(points);
        if !(total > 0.0) {
            return Ok(Vec::new());
        }

        // `total > 0` implies at least one point.
        let gap_count = if self.is_full_circle() {
            points.len() - 1
        } else {
            points.len()
        };
        let available = self.total_rotation - gap_count as f64 * self.padding;

        let mut start = self.start_angle;
        Ok(points
            .iter()
            .map(|point| {
                let delta = available * (point.value / total);
                let span = ArcSpan { start, delta, point };
                start += delta + self.padding;
                span
            })
            .collect())
    }
}

/// One slice's angular allocation within a pie or donut sweep.
#[derive(Clone, Copy, Debug)]
pub struct ArcSpan<'a> {
    /// Leading-edge angle in degrees.
    pub start: f64,
    /// Angular extent in degrees.
    pub delta: f64,
    /// The point this span was allocated for.
    pub point: &'a PiePoint,
}

impl<'a> ArcSpan<'a> {
    /// Trailing-edge angle in degrees.
    pub fn end(&self) -> f64 {
        self.start + self.delta
    }

    /// The point midway along the span at `radius`, relative to the circle
    /// center.
    ///
    /// Renderers use this to anchor a slice's value label.
    pub fn midpoint(&self, radius: f64) -> Point {
        let theta = (self.start + 0.5 * self.delta) * (core::f64::consts::PI / 180.0);
        Point::new(theta.cos() * radius, theta.sin() * radius)
    }

    /// Partitions this span's child slices across its own angular window.
    ///
    /// Children always behave as a partial sweep scoped to the parent: no
    /// padding, no seam adjustment. Sub-arcs start at the parent's leading
    /// edge and tile `[start, end]` exactly. A child total that is not
    /// positive yields no sub-arcs.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::NegativeValue`] if any child value is negative.
    pub fn sub_arcs(&self) -> Result<Vec<ArcSpan<'a>>, ChartError> {
        let children: &'a [PiePoint] = &self.point.children;
        if let Some(c) = children.iter().find(|c| c.value < 0.0) {
            return Err(ChartError::NegativeValue(c.value));
        }

        let child_sum = sum_values(children);
        if !(child_sum > 0.0) {
            return Ok(Vec::new());
        }

        let mut start = self.start;
        Ok(children
            .iter()
            .map(|child| {
                let delta = self.delta * (child.value / child_sum);
                let span = Self {
                    start,
                    delta,
                    point: child,
                };
                start += delta;
                span
            })
            .collect())
    }
}
