// Copyright 2025 the Grafik Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart geometry building blocks over `grafik_core` data.
//!
//! This crate turns raw chart data into drawable geometry:
//! - **Scales** ([`AxisScale`]) pick a nice tick interval and a range that
//!   covers the data maximum.
//! - **Series alignment** ([`SeriesIndex`]) places multiple bar series onto
//!   shared integer category slots.
//! - **Arc partitioning** ([`ArcPartitioner`], [`ArcSpan`]) splits a pie or
//!   donut sweep into proportional angular spans, recursively for nested
//!   drill-down rings.
//!
//! Every computation is a pure, synchronous function of its arguments: no
//! shared state, no I/O, no suspension points, so calls are freely usable
//! from concurrent contexts. Rendering (paths, text shaping, gestures,
//! animation) stays downstream; a renderer calls in once per data change and
//! treats the returned values as immutable snapshots.

#![no_std]

extern crate alloc;

mod arc;
#[cfg(test)]
mod chart_tests;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod legend;
mod scale;
mod series_index;
mod style;

pub use arc::{ArcPartitioner, ArcSpan};
pub use error::ChartError;
pub use legend::{LegendItem, bar_legend, pie_legend};
pub use scale::AxisScale;
pub use series_index::SeriesIndex;
pub use style::{BarStyle, LegendOrient, PieStyle};
