// Copyright 2025 the Grafik Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

use peniko::color::palette::css;

use grafik_core::{BarPoint, BarSeries, PiePoint, PieSeries};

use crate::{ArcPartitioner, BarStyle, PieStyle, SeriesIndex, bar_legend, pie_legend};

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

/// Two series with mismatched slots, driven the way a bar renderer would.
#[test]
fn grouped_bars_share_slots_and_scale() {
    let series = [
        BarSeries::new(vec![
            BarPoint::new(0, 35.0).with_label("q1"),
            BarPoint::new(1, 80.0).with_label("q2"),
            BarPoint::new(2, 52.0).with_label("q3"),
            BarPoint::new(3, 14.0).with_label("q4"),
        ])
        .with_color(css::CRIMSON)
        .with_legend("last year"),
        BarSeries::new(vec![
            BarPoint::new(0, 42.0),
            BarPoint::new(2, 87.0),
        ])
        .with_color(css::MEDIUM_SEA_GREEN)
        .with_legend("this year"),
    ];

    let style = BarStyle::new();
    let index = SeriesIndex::align(&series);
    let scale = index.y_scale(style.tick_count).unwrap();

    // 87 / 5 ticks rounds up to an interval of 20.
    assert_eq!(scale.range, (0.0, 100.0));

    // Every slot renders for every series; missing points stay empty.
    let mut heights = Vec::new();
    for x in index.positions() {
        for s in 0..index.series_count() {
            let h = index.point_at(s, x).map(|p| scale.fraction(p.y));
            heights.push(h);
        }
    }
    assert_eq!(heights.len(), 8);
    assert_eq!(heights[0], Some(0.35));
    assert_eq!(heights[1], Some(0.42));
    assert_eq!(heights[3], None); // series 1 has no q2 bar
    assert_eq!(heights[5], Some(0.87));

    // Labels come from the series that has them; the legend carries both.
    assert_eq!(index.label_at(1), Some("q2"));
    let legend = bar_legend(&series);
    assert_eq!(legend.len(), 2);
    assert_eq!(legend[1].label, "this year");
}

/// A nested donut driven end-to-end: parents carry their children's sums.
#[test]
fn nested_donut_rings_stay_consistent() {
    let ring = |values: &[f64]| -> Vec<PiePoint> {
        values.iter().map(|&v| PiePoint::new(v, css::ORANGE)).collect()
    };
    let series = PieSeries::new(vec![
        PiePoint::new(90.0, css::CORNFLOWER_BLUE)
            .with_label("alpha")
            .with_children(ring(&[40.0, 50.0])),
        PiePoint::new(60.0, css::GOLDENROD)
            .with_label("beta")
            .with_children(ring(&[20.0, 20.0, 20.0])),
        PiePoint::new(30.0, css::HOT_PINK).with_label("gamma"),
    ]);
    let total = series.total();
    assert_close(total, 180.0);
    let series = series.with_title(total.to_string());

    let style = PieStyle::new().with_padding(0.0);
    let spans = ArcPartitioner::from_style(&style)
        .partition(&series.points)
        .unwrap();

    // Proportional full-circle split: 180, 120, 60 degrees.
    assert_close(spans[0].delta, 180.0);
    assert_close(spans[1].delta, 120.0);
    assert_close(spans[2].delta, 60.0);
    assert_close(spans[2].end(), 360.0);

    // Each parent's children tile exactly its own window.
    for span in &spans {
        let subs = span.sub_arcs().unwrap();
        if span.point.children.is_empty() {
            assert!(subs.is_empty());
            continue;
        }
        assert_close(subs[0].start, span.start);
        assert_close(subs.last().unwrap().end(), span.end());
        let sub_sum: f64 = subs.iter().map(|s| s.delta).sum();
        assert_close(sub_sum, span.delta);
    }

    let legend = pie_legend(&series);
    assert_eq!(legend.len(), 3);
    assert_eq!(legend[2].label, "gamma");
    assert_eq!(series.title.as_deref(), Some("180"));
}

/// The half-donut preset: a 180 degree sweep with per-slice gaps.
#[test]
fn half_donut_accounts_for_every_degree() {
    let series = PieSeries::new(vec![
        PiePoint::new(10.0, css::ORANGE),
        PiePoint::new(20.0, css::CRIMSON),
        PiePoint::new(30.0, css::SLATE_BLUE),
    ]);

    let style = PieStyle::half_donut(180.0, 180.0).with_padding(4.0);
    let partitioner = ArcPartitioner::from_style(&style);
    assert!(!partitioner.is_full_circle());

    let spans = partitioner.partition(&series.points).unwrap();

    // Partial sweep: one gap per slice, 180 - 12 = 168 to distribute.
    let delta_sum: f64 = spans.iter().map(|s| s.delta).sum();
    assert_close(delta_sum, 168.0);
    assert_close(spans[0].start, 180.0);
    assert_close(spans[2].end() + 4.0, 360.0);

    // Ring bands derive from the style's depth fractions.
    let (inner, outer) = style.ring(250.0);
    assert_close(outer, 125.0);
    assert_close(inner, 125.0 * style.depth);
}
