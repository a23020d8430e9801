// Copyright 2025 the Grafik Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for the grafik geometry engine.
//!
//! Builds seeded demo data, runs it through alignment, scaling, and arc
//! partitioning, and prints the geometry a renderer would consume.

use grafik_charts::{ArcPartitioner, BarStyle, PieStyle, SeriesIndex, bar_legend, pie_legend};
use rand::SeedableRng;
use rand::rngs::SmallRng;

mod demo;

fn main() {
    let mut rng = SmallRng::seed_from_u64(7);

    bar_walkthrough(&mut rng);
    donut_walkthrough(&mut rng);
}

fn bar_walkthrough(rng: &mut SmallRng) {
    let series = demo::bar_group(rng);
    let style = BarStyle::new();

    let index = SeriesIndex::align(&series);
    let scale = index
        .y_scale(style.tick_count)
        .expect("style tick count is nonzero");

    println!(
        "bar group: {} series over slots 0..={}",
        index.series_count(),
        index.x_count()
    );
    println!(
        "  y axis: interval {} over {:?}, ticks {:?}",
        scale.interval,
        scale.range,
        scale.tick_values()
    );

    for x in index.positions() {
        let label = index.label_at(x).unwrap_or("-");
        print!("  [{label:>7}]");
        for s in 0..index.series_count() {
            match index.point_at(s, x) {
                Some(p) => print!(" {:>5.1}% ", 100.0 * scale.fraction(p.y)),
                None => print!("   --   "),
            }
        }
        println!();
    }

    for item in bar_legend(&series) {
        println!("  legend: {}", item.label);
    }
    println!();
}

fn donut_walkthrough(rng: &mut SmallRng) {
    let series = demo::nested_donut(rng, 5);
    let style = PieStyle::new();

    let spans = ArcPartitioner::from_style(&style)
        .partition(&series.points)
        .expect("demo values are non-negative");

    let (inner, outer) = style.ring(250.0);
    let label_radius = 0.5 * (inner + outer);

    println!(
        "nested donut: {} slices, total {}",
        spans.len(),
        series.title.as_deref().unwrap_or("?")
    );
    for span in &spans {
        let label = span.point.label.as_deref().unwrap_or("-");
        let anchor = span.midpoint(label_radius);
        println!(
            "  {label}: {:6.2} deg at {:6.2} deg, label anchor ({:6.1}, {:6.1})",
            span.delta, span.start, anchor.x, anchor.y
        );
        for sub in span.sub_arcs().expect("demo child values are non-negative") {
            let sub_label = sub.point.label.as_deref().unwrap_or("-");
            println!("    {sub_label}: {:6.2} deg at {:6.2} deg", sub.delta, sub.start);
        }
    }

    for item in pie_legend(&series) {
        println!("  legend: {}", item.label);
    }
}
