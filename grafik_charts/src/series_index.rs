// Copyright 2025 the Grafik Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-series bar alignment.
//!
//! Grouped bar charts render one slot per category position and, within each
//! slot, one bar per series. [`SeriesIndex`] aligns an arbitrary set of
//! series onto those shared slots, resolving duplicate and missing points so
//! downstream code sees at most one point per `(series, slot)` pair.

extern crate alloc;

use alloc::vec::Vec;
use core::ops::RangeInclusive;

use hashbrown::HashMap;

use grafik_core::{BarPoint, BarSeries};

use crate::error::ChartError;
use crate::scale::AxisScale;

/// A query surface over bar series aligned onto shared category slots.
///
/// This is a borrowed snapshot of the input: it holds no state beyond what
/// the aligned series imply and is recomputed from scratch on every data
/// change.
#[derive(Clone, Debug)]
pub struct SeriesIndex<'a> {
    x_count: usize,
    labels: Vec<&'a str>,
    points: Vec<HashMap<usize, &'a BarPoint>>,
    max_y: f64,
}

impl<'a> SeriesIndex<'a> {
    /// Aligns `series` onto shared integer category slots.
    ///
    /// Within one series, the first point at a given `x` wins and later
    /// duplicates are discarded; downstream stages rely on at most one point
    /// per `(series, x)` pair.
    ///
    /// Axis labels come from the series with the longest effective label
    /// list (per-point labels when any exist, its category list otherwise);
    /// the first such series wins ties.
    pub fn align(series: &'a [BarSeries]) -> Self {
        let x_count = series.iter().map(BarSeries::max_x).max().unwrap_or(0);
        let max_y = series
            .iter()
            .map(BarSeries::max_y)
            .reduce(f64::max)
            .unwrap_or(0.0);

        let mut labels: Vec<&str> = Vec::new();
        for s in series {
            let candidate = s.axis_labels();
            if candidate.len() > labels.len() {
                labels = candidate;
            }
        }

        let points = series
            .iter()
            .map(|s| {
                let mut by_x: HashMap<usize, &BarPoint> = HashMap::with_capacity(s.points.len());
                for p in &s.points {
                    by_x.entry(p.x).or_insert(p);
                }
                by_x
            })
            .collect();

        Self {
            x_count,
            labels,
            points,
            max_y,
        }
    }

    /// The highest populated category slot across all series, `0` when the
    /// input was empty.
    pub fn x_count(&self) -> usize {
        self.x_count
    }

    /// Every renderable slot position, `0..=x_count`.
    ///
    /// Slots a series has no point for are still rendered (as empty
    /// placeholders) so bars stay aligned across series.
    pub fn positions(&self) -> RangeInclusive<usize> {
        0..=self.x_count
    }

    /// Number of aligned series.
    pub fn series_count(&self) -> usize {
        self.points.len()
    }

    /// The category-axis label at slot `x`, if any series provided one.
    ///
    /// `None` means the renderer substitutes a neutral placeholder so the
    /// slot keeps its width.
    pub fn label_at(&self, x: usize) -> Option<&'a str> {
        self.labels.get(x).copied()
    }

    /// The point series `series_idx` contributes at slot `x`, if any.
    pub fn point_at(&self, series_idx: usize, x: usize) -> Option<&'a BarPoint> {
        self.points.get(series_idx)?.get(&x).copied()
    }

    /// The largest y value across all input points.
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Computes the value-axis scale these series draw against, from zero to
    /// the largest y value.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::ZeroTickCount`] when `tick_count` is zero.
    pub fn y_scale(&self, tick_count: usize) -> Result<AxisScale, ChartError> {
        AxisScale::compute(0.0, self.max_y, tick_count)
    }
}
