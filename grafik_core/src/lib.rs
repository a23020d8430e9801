// Copyright 2025 the Grafik Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart data model for the grafik geometry engine.
//!
//! This crate is the shared value vocabulary between data-loading code and
//! `grafik_charts`:
//! - **Bar data**: [`BarPoint`] / [`BarSeries`], integer category slots with
//!   real values.
//! - **Pie data**: [`PiePoint`] / [`PieSeries`], weighted slices that may own
//!   nested child slices (drill-down donut rings).
//! - **Reducers**: pure aggregate accessors (sums, maxima, label and color
//!   fallbacks) over the point collections.
//!
//! Everything is a plain owned value. The geometry engine never retains these
//! across calls; results are fresh snapshots of whatever the caller passes in.

#![no_std]

extern crate alloc;

mod bar;
mod palette;
mod pie;

pub use bar::{BarPoint, BarSeries};
pub use palette::{DEFAULT_PALETTE, series_color};
pub use pie::{PiePoint, PieSeries, sum_values};
