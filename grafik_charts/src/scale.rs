// Copyright 2025 the Grafik Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value-axis scale computation.
//!
//! Bar charts need an axis whose ticks land on round numbers while still
//! covering the largest data value. [`AxisScale`] derives both from a raw
//! data range by rounding the per-tick spacing to one significant digit; the
//! 1/2/5-style steps axis readers expect fall out of that rounding without
//! being special-cased.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::ChartError;

/// A "nice" value-axis scale derived from a data range.
///
/// Computed once from `(min_value, max_value, tick_count)` and immutable
/// afterwards; identical inputs produce bit-identical scales, so results are
/// safe to memoize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    /// Lower bound of the data range, as given.
    pub min_value: f64,
    /// Upper bound of the data range, as given.
    pub max_value: f64,
    /// Spacing between adjacent ticks, in data units.
    ///
    /// Zero when the data span is zero; negative when `max_value` is negative
    /// (the ladder descends).
    pub interval: f64,
    /// Number of tick intervals the scale was computed for.
    pub tick_count: usize,
    /// The covered axis range.
    ///
    /// The upper bound is `interval * tick_count` widened to `max_value`
    /// whenever rounding shrank the nominal span, so the axis always reaches
    /// the data maximum.
    pub range: (f64, f64),
}

impl AxisScale {
    /// Computes a scale over `min_value..=max_value` with `tick_count`
    /// intervals.
    ///
    /// Negative `max_value` is permitted: the interval magnitude is derived
    /// from the absolute raw spacing and the sign survives the rounding.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::ZeroTickCount`] when `tick_count` is zero.
    pub fn compute(
        min_value: f64,
        max_value: f64,
        tick_count: usize,
    ) -> Result<Self, ChartError> {
        if tick_count == 0 {
            return Err(ChartError::ZeroTickCount);
        }

        let raw = max_value / tick_count as f64;
        // A zero or non-finite raw spacing has no magnitude to round to.
        if raw == 0.0 || !raw.is_finite() {
            return Ok(Self {
                min_value,
                max_value,
                interval: 0.0,
                tick_count,
                range: (min_value, max_value),
            });
        }

        let d = {
            let d = raw.abs().log10().ceil().clamp(-300.0, 300.0);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "clamped to a small integral range"
            )]
            {
                d as i32
            }
        };
        let factor = 10.0_f64.powi(1 - d);
        let interval = (raw * factor).round() / factor;

        Ok(Self {
            min_value,
            max_value,
            interval,
            tick_count,
            range: (min_value, f64::max(interval * tick_count as f64, max_value)),
        })
    }

    /// Tick values from the range minimum, one per interval boundary.
    ///
    /// Returns `tick_count + 1` values, `min_value + interval * i` for
    /// `i in 0..=tick_count`. When rounding left `interval * tick_count`
    /// short of `max_value`, the last tick sits below the range's upper
    /// bound.
    pub fn tick_values(&self) -> Vec<f64> {
        (0..=self.tick_count)
            .map(|i| self.min_value + self.interval * i as f64)
            .collect()
    }

    /// Where `value` falls within the range, as a fraction of the span.
    ///
    /// Bar heights are this fraction of the plot height. Values outside the
    /// range map beyond `0.0..=1.0`; a zero-span range maps everything to
    /// `0.0`.
    pub fn fraction(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return 0.0;
        }
        (value - r0) / denom
    }
}
