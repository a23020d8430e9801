// Copyright 2025 the Grafik Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seedable demo data for `grafik_examples`.
//!
//! Generators take the RNG explicitly so a fixed seed reproduces the same
//! dataset run after run.

use grafik_core::{BarPoint, BarSeries, PiePoint, PieSeries, series_color, sum_values};
use rand::Rng;
use rand::rngs::SmallRng;

/// Two bar series over six category slots.
///
/// The second series skips slot 3, leaving an empty placeholder that shows
/// how alignment keeps groups in step across series.
pub(crate) fn bar_group(rng: &mut SmallRng) -> Vec<BarSeries> {
    let filled = (0..6)
        .map(|x| BarPoint::new(x, rng.gen_range(0.0..100.0)).with_label(format!("slot {x}")))
        .collect();
    let gapped = (0..6)
        .filter(|&x| x != 3)
        .map(|x| BarPoint::new(x, rng.gen_range(0.0..100.0)))
        .collect();

    vec![
        BarSeries::new(filled)
            .with_color(series_color(0))
            .with_legend("last year")
            .with_title("demo bar group"),
        BarSeries::new(gapped)
            .with_color(series_color(1))
            .with_legend("this year"),
    ]
}

/// A nested donut with `slices` top-level slices.
///
/// Each slice owns two to four children valued in `40..60`; the parent value
/// is exactly the children's sum, and the title carries the grand total.
pub(crate) fn nested_donut(rng: &mut SmallRng, slices: usize) -> PieSeries {
    let points: Vec<PiePoint> = (0..slices)
        .map(|idx| {
            let color = series_color(idx);
            let children: Vec<PiePoint> = (1..=rng.gen_range(2_usize..=4))
                .map(|child| {
                    PiePoint::new(rng.gen_range(40.0..60.0), color.with_alpha(0.2 * child as f32))
                        .with_label(format!("part {child}"))
                })
                .collect();

            PiePoint::new(sum_values(&children), color)
                .with_label(format!("slice {idx}"))
                .with_children(children)
        })
        .collect();

    let total = sum_values(&points);
    PieSeries::new(points).with_title(format!("{total:.0}"))
}
